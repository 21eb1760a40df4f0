use anyhow::Result;
use study_content::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first so config problems are visible.
    study_content::logger::init();

    // Load configuration from environment overrides.
    let config = Config::from_env();

    // Initialize and run the app.
    App::initialize(config).await?.run().await?;

    Ok(())
}
