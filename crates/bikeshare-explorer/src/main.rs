mod bootstrap;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_ui::app::App;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Bikeshare Explorer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    let mut app = App::new(
        std::io::stdin().lock(),
        std::io::stdout(),
        settings.data_dir,
    );
    app.run()?;

    Ok(())
}
