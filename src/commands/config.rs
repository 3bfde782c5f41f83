//! Config subcommands handler

use anyhow::Result;
use chatex::platform::Platform;
use chatex::Config;
use clap::Subcommand;
use std::process::ExitCode;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved selector profiles as TOML
    Show,
    /// Print the config file path
    Path,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(action: ConfigAction) -> Result<ExitCode> {
    match action {
        ConfigAction::Show => show()?,
        ConfigAction::Path => println!("{}", Config::config_path()?.display()),
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the effective selector profile per platform, overrides applied.
#[cfg(not(tarpaulin_include))]
fn show() -> Result<()> {
    let config = Config::load()?;
    let mut resolved = toml::Table::new();
    for platform in Platform::ALL {
        let profile = config.selector_profile(platform);
        resolved.insert(platform.key().to_string(), toml::Value::try_from(profile)?);
    }
    print!("{}", toml::to_string_pretty(&resolved)?);
    Ok(())
}
