pub mod preview;
pub mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::infrastructure::config::Config;
use crate::infrastructure::ids::{IdGenerator, UuidIds};

use router::{AppState, create_router};

pub struct Server {
    config: Config,
    ids: Arc<dyn IdGenerator>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ids: Arc::new(UuidIds),
        }
    }

    pub async fn run(self) -> Result<()> {
        let state = Arc::new(AppState {
            site_origin: self.config.site_origin.clone(),
            image_count: self.config.image_count,
            public_dir: self.config.public_dir(),
            ids: self.ids,
        });
        let router = create_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port.value()));
        let listener = TcpListener::bind(addr).await.context(format!(
            "Failed to bind to port {}. Is another service using it? Try: sudo lsof -i :{}",
            self.config.port, self.config.port
        ))?;

        info!("Preview server listening on {addr}");
        info!("Site origin for OGP URLs: {}", self.config.site_origin);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
