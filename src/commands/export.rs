//! Export subcommand handler

use anyhow::{bail, Context, Result};
use chatex::clipboard::Copy;
use chatex::extractor;
use chatex::platform::Platform;
use chatex::Config;
use clap::Args;
use scraper::Html;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use url::Url;

/// Arguments for `chatex export`.
#[derive(Args)]
pub struct ExportArgs {
    /// Saved HTML page to export, or '-' for stdin
    pub input: PathBuf,

    /// Platform the page came from; inferred from --url when omitted
    #[arg(short, long, value_enum)]
    pub platform: Option<Platform>,

    /// Page URL, used for platform detection and resolving relative links
    #[arg(short, long)]
    pub url: Option<Url>,

    /// Write to this path instead of the generated filename
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the Markdown to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Copy the Markdown to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Emit the extraction result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: ExportArgs) -> Result<ExitCode> {
    let platform = resolve_platform(&args)?;
    let html = read_input(&args.input)?;

    let config = Config::load()?;
    let profile = config.selector_profile(platform);
    let extractor = extractor::with_profile(platform, profile, args.url.clone());

    let doc = Html::parse_document(&html);
    let result = extractor.extract(&doc);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(if result.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let (markdown, filename) = match (&result.markdown, &result.filename) {
        (Some(markdown), Some(filename)) => (markdown, filename),
        _ => bail!("{}", result.error.as_deref().unwrap_or("extraction failed")),
    };

    if args.stdout {
        print!("{markdown}");
    } else {
        let path = output_path(args.output.as_deref(), filename);
        std::fs::write(&path, markdown)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Saved {}", path.display());
    }

    if args.copy {
        let copied = Copy::new().text(markdown)?;
        println!("{}", copied.message());
    }

    Ok(ExitCode::SUCCESS)
}

/// Platform from the explicit flag, then from the URL host.
fn resolve_platform(args: &ExportArgs) -> Result<Platform> {
    if let Some(platform) = args.platform {
        return Ok(platform);
    }
    if let Some(url) = &args.url {
        return Platform::detect(url).with_context(|| {
            format!("Unsupported platform for {url} (supported: {})", supported_keys())
        });
    }
    bail!(
        "Cannot determine the platform; pass --platform or --url (supported: {})",
        supported_keys()
    )
}

fn supported_keys() -> String {
    Platform::ALL
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(not(tarpaulin_include))]
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read stdin")?;
        Ok(html)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

/// Explicit file path, explicit directory joined with the generated name,
/// or the generated name in the working directory.
fn output_path(output: Option<&Path>, filename: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(filename),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(filename),
    }
}
