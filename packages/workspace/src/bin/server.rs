use anyhow::Result;
use pagecraft_workspace::{FsPageStore, WorkspaceServer};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 4201;
    let mut data_dir = PathBuf::from("pages");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().expect("Invalid port number");
                    i += 2;
                } else {
                    eprintln!("--port requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Usage: pagecraft-server [OPTIONS] [DATA_DIR]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>       HTTP port to listen on (default: 4201)");
                println!("  -h, --help              Show this help message");
                println!();
                println!("Arguments:");
                println!("  [DATA_DIR]              Directory holding page files (default: ./pages)");
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                data_dir = PathBuf::from(arg);
                i += 1;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                std::process::exit(1);
            }
        }
    }

    println!("Starting Pagecraft workspace server...");
    println!("Data directory: {:?}", data_dir);
    println!("HTTP listening on 127.0.0.1:{}", port);

    let store = Arc::new(FsPageStore::new(data_dir)?);
    let app = WorkspaceServer::new(store).router();

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
