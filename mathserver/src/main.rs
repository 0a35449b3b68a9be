//! MathServer binary entry point

use std::net::SocketAddr;
use clap::Parser;

use mathserver::{MathServer, MathServerResult, services::RealResultStore};

#[derive(Parser, Debug)]
#[command(name = "mathserver")]
#[command(about = "Statistics web service with an in-memory result store")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> MathServerResult<()> {
    let args = Args::parse();

    shared::init_tracing(Some(&args.log_level))
        .map_err(|e| mathserver::MathServerError::config(e.to_string()))?;

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| mathserver::MathServerError::config(format!("Invalid bind address: {}", e)))?;

    let store = RealResultStore::new();
    let server = MathServer::new(bind_address, store);

    server.run().await
}
