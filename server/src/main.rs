use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use todo_store::TodoStore;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How long in-flight requests get to finish after an interrupt.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "todo-server", about = "In-memory todo HTTP service", version)]
struct Args {
    /// Port to serve on
    #[arg(short = 'p', long = "port", default_value_t = 9000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let addr = format!("0.0.0.0:{}", args.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    let store = TodoStore::new();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, todo_server::app(store))
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
    });

    tokio::signal::ctrl_c().await?;
    info!("shutting down, draining in-flight requests");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(served) => served??,
        Err(_) => warn!("drain exceeded {SHUTDOWN_GRACE:?}, exiting anyway"),
    }
    info!("server stopped");
    Ok(())
}
