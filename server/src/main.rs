use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use server::{bind, serve};

#[derive(Parser, Debug)]
struct Args {
    #[clap(short, long, default_value = "50051")]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("Starting gRPC server with Args={:?}", args);

    if let Err(e) = run(&args).await {
        tracing::error!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), args.port);
    let listener = bind(addr).await?;
    serve(listener).await?;

    Ok(())
}
