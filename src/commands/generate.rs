//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Generate the static blog
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let repo = site.repository()?;
    tracing::info!("Loaded {} posts", repo.len());

    Generator::new(site).generate(&repo)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated into {:?} in {:.2}s",
        site.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
