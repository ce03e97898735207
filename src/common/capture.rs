use std::fmt;

use actix_web::http::header::CONTENT_LENGTH;
use actix_web::web::Bytes;
use actix_web::HttpRequest;
use chrono::{DateTime, Local};

use crate::common::{self, body::BodyView};

/// One inbound request as seen by the capture handler.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub version: String,
    /// Sorted by case-insensitive name; repeated headers keep their order.
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
    pub received_at: DateTime<Local>,
}

impl CapturedRequest {

    pub fn from_request(request: &HttpRequest, payload: Bytes) -> Self {
        let mut headers: Vec<(String, String)> = request
            .headers()
            .iter()
            .map(|(name, value)| {
                let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
                (name.as_str().to_string(), value)
            })
            .collect();
        headers.sort_by_key(|(name, _)| name.to_lowercase());

        let length = declared_length(request);
        let body = if length > 0 {
            payload.slice(..length.min(payload.len()))
        } else {
            Bytes::new()
        };

        Self {
            method: request.method().to_string(),
            path: request.uri().to_string(),
            version: format!("{:?}", request.version()),
            headers,
            body,
            received_at: Local::now(),
        }
    }

    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method, self.path, self.version)
    }

    pub fn body_view(&self) -> BodyView {
        BodyView::interpret(&self.body)
    }

    pub fn iso_timestamp(&self) -> String {
        self.received_at.format(common::ISO_TIME_FORMAT).to_string()
    }

    /// Text written to a saved request record.
    pub fn record(&self) -> Record<'_> {
        Record(self)
    }
}

/// A missing or unparsable content-length means no body.
fn declared_length(request: &HttpRequest) -> usize {
    request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

impl fmt::Display for CapturedRequest {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n{}", common::separator())?;
        writeln!(f, "📨 NEW REQUEST - {}", self.received_at.format(common::CONSOLE_TIME_FORMAT))?;
        writeln!(f, "{}", common::separator())?;
        writeln!(f, "🔗 {}", self.request_line())?;
        writeln!(f, "\n📋 HEADERS:")?;
        for (name, value) in &self.headers {
            writeln!(f, "   {}: {}", name, value)?;
        }
        match self.body_view() {
            BodyView::Empty => write!(f, "\n📄 BODY: (empty)"),
            view => write!(f, "\n📄 BODY ({} bytes):\n{}", self.body.len(), view),
        }
    }
}

pub struct Record<'a>(&'a CapturedRequest);

impl fmt::Display for Record<'_> {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let request = self.0;
        writeln!(f, "Captured at: {}", request.iso_timestamp())?;
        writeln!(f, "Request: {}", request.request_line())?;
        writeln!(f, "\nHeaders:")?;
        for (name, value) in &request.headers {
            writeln!(f, "  {}: {}", name, value)?;
        }
        match request.body_view() {
            BodyView::Empty => writeln!(f, "\nBody: (empty)"),
            view => writeln!(f, "\nBody ({} bytes):\n{}", request.body.len(), view.summary()),
        }
    }
}
