use std::io;
use std::net::TcpListener;
use std::path::PathBuf;

use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{middleware, web, App, HttpResponseBuilder, HttpServer};

use crate::server::persistence::RequestStore;
use crate::server::sequence::RequestSequence;

pub mod error;
pub mod handler_capture;
pub mod handler_preflight;
pub mod options;
pub mod persistence;
pub mod sequence;

pub const DEFAULT_PORT: u16 = 8000;
pub const REQUESTS_DIR: &str = "requests";

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, PATCH, OPTIONS";
pub const ALLOW_HEADERS: &str = "*";

/// Request bodies are read whole regardless of size.
pub const PAYLOAD_LIMIT: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub port: u16,
    pub save: bool,
    pub requests_dir: PathBuf,
}

/// State shared by every capture: the request counter and, when saving is
/// enabled, the record store.
#[derive(Debug)]
pub struct CaptureContext {
    pub sequence: RequestSequence,
    pub store: Option<RequestStore>,
}

impl CaptureContext {

    pub fn new(settings: &ServerSettings) -> Self {
        Self {
            sequence: RequestSequence::new(),
            store: settings.save.then(|| RequestStore::new(&settings.requests_dir)),
        }
    }
}

pub fn cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header(("Access-Control-Allow-Origin", ALLOW_ORIGIN))
        .insert_header(("Access-Control-Allow-Methods", ALLOW_METHODS))
        .insert_header(("Access-Control-Allow-Headers", ALLOW_HEADERS))
}

/// Every path, every method. OPTIONS is answered as a preflight, the rest are captured.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
        .service(
            web::resource("/{tail:.*}")
                .route(web::method(Method::OPTIONS).to(handler_preflight::handle))
                .route(web::to(handler_capture::handle)),
        );
}

/// Starts serving on an already bound listener. A single worker handles
/// requests one after another.
pub fn serve(listener: TcpListener, settings: &ServerSettings) -> io::Result<Server> {
    let context = web::Data::new(CaptureContext::new(settings));
    info!("Listening on {}", listener.local_addr()?);
    if let Some(store) = &context.store {
        info!("Saving requests under {}", store.dir().display());
    }

    let server = HttpServer::new(move || {
        App::new()
            // access logs, visible with RUST_LOG=actix_web=info
            .wrap(middleware::Logger::default())
            .app_data(context.clone())
            .configure(routes)
    })
        .workers(1)
        .listen(listener)?
        .run();
    Ok(server)
}
