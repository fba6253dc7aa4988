use anyhow::Context;
use smartcrowd::config::ConfigManager;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConfigManager::from_env();
    let settings = config.load();
    if !config.exists() {
        // Give operators a file to edit next time.
        if let Err(e) = config.save(&settings) {
            log::warn!("could not write default settings: {e:#}");
        }
    }
    log::info!(
        "starting SmartCrowd OS (settings: {}, feed limit {})",
        config.path().display(),
        settings.feed_limit
    );

    smartcrowd::run(settings)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("run dashboard window")
}
