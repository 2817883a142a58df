use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the configuration directory and a default configuration file.
/// An existing file is left as is; `config --migrate` upgrades it instead.
pub fn handle(cli: &Cli, cfg_path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing rVenueReport…");

    if Config::init_file(cfg_path, cli.test)? {
        success(format!("Config file created: {}", cfg_path.display()));
    } else if cli.test {
        info("Test mode: configuration file not written.");
    } else {
        info(format!(
            "Config file already exists: {} (use `config --migrate` to add new keys)",
            cfg_path.display()
        ));
    }

    println!("🎉 rVenueReport initialization completed!");
    Ok(())
}
