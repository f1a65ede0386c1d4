use anyhow::Result;

use crate::gallery::ImageGallery;
use crate::infrastructure::config::Config;

pub fn execute() -> Result<()> {
    let config = Config::from_env()?;
    let gallery = ImageGallery::new(config.gallery_dir(), config.image_count);

    println!(
        "Checking placeholder gallery in {}...",
        gallery.dir().display()
    );

    let created = gallery.ensure()?;

    println!(
        "Gallery ready: {} newly created / {} total",
        created,
        config.image_count
    );

    Ok(())
}
