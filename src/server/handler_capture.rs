use actix_web::{Error, HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::common::capture::CapturedRequest;
use crate::server::{cors, CaptureContext, CONTENT_TYPE_JSON};

pub const STATUS_RECEIVED: &str = "received";

/// The fixed reply sent back for every captured request.
#[derive(Debug, Serialize)]
pub struct Acknowledgement<'a> {
    pub status: &'static str,
    pub method: &'a str,
    pub path: &'a str,
    pub timestamp: String,
}

impl<'a> Acknowledgement<'a> {

    pub fn new(request: &'a CapturedRequest) -> Self {
        Self {
            status: STATUS_RECEIVED,
            method: &request.method,
            path: &request.path,
            timestamp: request.iso_timestamp(),
        }
    }
}

pub async fn handle(context: web::Data<CaptureContext>,
                    request: HttpRequest,
                    payload: web::Bytes) -> Result<HttpResponse, Error> {
    let captured = CapturedRequest::from_request(&request, payload);
    let sequence = context.sequence.next();
    debug!("Captured request #{}: {}", sequence, captured.request_line());

    println!("{}", captured);

    // Saving is best effort; the client always gets its acknowledgement.
    if let Some(store) = &context.store {
        match store.save(&captured, sequence) {
            Ok(path) => println!("\n💾 Saved to: {}", path.display()),
            Err(e) => error!("Failed to save request #{}: {}", sequence, e),
        }
    }

    let acknowledgement = serde_json::to_string_pretty(&Acknowledgement::new(&captured))?;
    Ok(cors(&mut HttpResponse::Ok())
        .content_type(CONTENT_TYPE_JSON)
        .body(acknowledgement))
}
