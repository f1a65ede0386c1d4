use anyhow::Result;
use tracing::info;

use crate::gallery::ImageGallery;
use crate::infrastructure::config::Config;
use crate::server::Server;

pub fn execute() -> Result<()> {
    run_server()
}

#[tokio::main]
async fn run_server() -> Result<()> {
    let config = Config::from_env()?;

    // Fill in the gallery before accepting traffic so every selectable
    // image exists by the time a crawler fetches it.
    let gallery = ImageGallery::new(config.gallery_dir(), config.image_count);
    let created = gallery.ensure()?;
    info!(
        created,
        total = %config.image_count,
        dir = %gallery.dir().display(),
        "placeholder gallery ready"
    );

    Server::new(config).run().await
}
