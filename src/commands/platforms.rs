//! Platforms subcommand handler

use anyhow::Result;
use chatex::platform::Platform;
use std::process::ExitCode;

/// List the supported platforms with their detection domains.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<ExitCode> {
    for platform in Platform::ALL {
        println!(
            "{:<8} {:<8} {}",
            platform.key(),
            platform.display_name(),
            platform.domains().join(", ")
        );
    }
    Ok(ExitCode::SUCCESS)
}
