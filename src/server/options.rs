use std::path::PathBuf;

use clap::Parser;

use crate::server::{ServerSettings, DEFAULT_PORT, REQUESTS_DIR};

/// Development HTTP server that prints (and optionally saves) every request it receives.
#[derive(Clone, Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(allow_negative_numbers = true)]
pub struct ServerOptions {
    /// The port number to listen on. Kept for launch scripts that pass the port positionally
    #[clap(value_name = "PORT")]
    pub positional_port: Option<String>,
    /// The port number to listen on. Takes precedence over the positional form. The default value is 8000
    #[clap(short, long)]
    pub port: Option<String>,
    /// Save every request to a timestamped file under requests/
    #[clap(short, long)]
    pub save: bool,
    /// A bind address. The default value is 0.0.0.0
    #[clap(short, long, default_value = "0.0.0.0")]
    pub bind_addr: String,
}

impl ServerOptions {

    /// Invalid values fall back to the default port with a warning.
    pub fn resolved_port(&self) -> u16 {
        match self.port.as_deref().or(self.positional_port.as_deref()) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("Invalid port number \"{}\". Using default port {}.", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        }
    }

    pub fn settings(&self) -> ServerSettings {
        ServerSettings {
            bind_addr: self.bind_addr.clone(),
            port: self.resolved_port(),
            save: self.save,
            requests_dir: PathBuf::from(REQUESTS_DIR),
        }
    }
}

pub fn parse_options() -> ServerOptions {
    Parser::parse()
}
