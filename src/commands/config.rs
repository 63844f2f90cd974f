use anyhow::Result;
use gamify_core::config::GamifyConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let path = GamifyConfig::config_path()?;

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            GamifyConfig::create_default_config(&path)?;
            println!("{} {}", "Created".green(), path.display());
        }
        return Ok(());
    }

    let config = GamifyConfig::load_from(&path)?;
    let status = if path.exists() { "" } else { " (not created yet)" };

    println!("{}{}", path.display(), status.dimmed());
    println!("  initial_selection = {}", config.initial_selection);
    match &config.events_file {
        Some(file) => println!("  events_file = {}", file.display()),
        None => println!("  events_file = {}", "sample events".dimmed()),
    }

    Ok(())
}
