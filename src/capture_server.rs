#[macro_use]
extern crate log;

use std::net::TcpListener;

use request_capture::common;
use request_capture::server::{self, options};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or("request_capture=info,capture_server=info,actix_web=warn,actix_server=warn"),
    );

    let options: options::ServerOptions = options::parse_options();
    let settings = options.settings();

    // A port that is already taken ends the process here.
    let listener = TcpListener::bind((settings.bind_addr.as_str(), settings.port))?;
    let port = listener.local_addr()?.port();

    common::print_banner(port, settings.save.then(|| settings.requests_dir.as_path()));

    // Returns once Ctrl+C (or SIGTERM) has stopped the server.
    server::serve(listener, &settings)?.await?;

    println!("\n\n🛑 Server stopped by user");
    info!("Shut down cleanly");
    Ok(())
}
