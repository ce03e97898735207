use std::sync::atomic::{AtomicU32, Ordering};

/// Hands out request numbers for the lifetime of a server, starting at 1.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: AtomicU32,
}

impl RequestSequence {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u32 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }
}
