use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use semicell::cli::CliArgs;
use semicell::config::AppConfig;
use semicell::config_paths;
use semicell::model::AppModel;
use semicell::theme;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    semicell::tracing::init();

    let mut config = AppConfig::load();
    if config_paths::config_file().is_some_and(|path| !path.exists()) {
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {}", e);
        }
    }
    startup.apply(&mut config);

    let theme = theme::load_theme_or_default(&config.theme);
    // Sized properly once the window exists
    let model = AppModel::new(0, 0, config, theme);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, startup, event_loop.create_proxy());
    event_loop.run_app(&mut app)?;

    Ok(())
}
