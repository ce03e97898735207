use actix_web::HttpResponse;

use crate::server::cors;

/// CORS preflight: headers only, nothing is captured.
pub async fn handle() -> HttpResponse {
    cors(&mut HttpResponse::Ok()).finish()
}
