//! CLI command implementations.

use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};

use batchsort_core::StrategyKind;
use batchsort_server::{Server, ServerConfig};

/// Start the HTTP server.
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .wrap_err_with(|| format!("invalid listen address {}:{}", host, port))?;

    let config = ServerConfig::builder().addr(addr).build();
    Server::new(config).run().await?;

    Ok(())
}

/// Sort a payload offline and print the response JSON.
pub async fn sort(strategy: StrategyKind, input: Option<PathBuf>) -> Result<()> {
    let body = match &input {
        Some(path) => std::fs::read(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        },
    };

    let json = run_sort(strategy, &body).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&json)?;
    writeln!(stdout)?;

    Ok(())
}

async fn run_sort(strategy: StrategyKind, body: &[u8]) -> Result<Vec<u8>> {
    let strategy = strategy.build();
    let response = batchsort_core::process(strategy.as_ref(), body).await?;
    Ok(response.to_json()?)
}

/// Display version information.
pub fn version() {
    println!("batchsort {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Endpoints:");
    println!("  POST /process-single      sequential strategy");
    println!("  POST /process-concurrent  concurrent strategy");
}
