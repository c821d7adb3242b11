use std::path::PathBuf;

use chat_widget_tui::{App, WidgetConfig};
use chat_widget_tui::util::log;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = WidgetConfig::resolve(std::env::args().nth(1).map(PathBuf::from))?;
    let log_path = log::init(&config.log_dir)?;
    tracing::info!("Starting {} (log: {})", config.title, log_path.display());

    let app = App::new(&config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("Exited with error: {}", e);
    }
    result
}
