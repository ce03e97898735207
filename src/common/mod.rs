
pub mod body;
pub mod capture;

use std::path::Path;

/// Used in the console header line of every capture.
pub const CONSOLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Used in the names of saved request records.
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// ISO-8601 local time with microseconds, no offset.
pub const ISO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub const SEPARATOR_WIDTH: usize = 60;

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

pub fn print_banner(port: u16, requests_dir: Option<&Path>) {
    // We don't need this as a constant because it will be shown only once.
    let banner: &str = "\n\
\x20      ___  ___  __ _ _   _  ___  ___| |_\n\
\x20     | '__/ _ \\/ _` | | | |/ _ \\/ __| __|\n\
\x20     | | |  __/ (_| | |_| |  __/\\__ \\ |_\n\
\x20     |_|  \\___|\\__, |\\__,_|\\___||___/\\__|  capture\n\
\x20                  |_|\n\
\x20  ==================================================\n";
    println!("{}", banner);
    println!("🚀 HTTP Request Capture Server starting on port {}", port);
    println!("📡 Listening at: http://localhost:{}", port);
    println!("🔍 All incoming requests will be displayed below");
    if let Some(dir) = requests_dir {
        println!("💾 Saving requests to: {}/", dir.display());
    }
    println!("⏹️  Press Ctrl+C to stop the server\n");
}
