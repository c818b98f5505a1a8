use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use codeprob::{Command, Config, ContentForm, SiteIndex, SiteInfo, build_site, write_page};
use std::fs;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_in_browser(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!(path = %path.display(), error = %e, "failed to open browser");
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    match config.command {
        Command::Render { file, mode } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read input file: {}", file.display()))?;
            println!("{}", mode.render(&text));
        }
        Command::Write {
            kind,
            form,
            output,
            name,
            date,
            no_open,
        } => {
            let form = ContentForm::load(&form)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let site = SiteInfo::new(name, date.year());

            let written = write_page(kind, &form, &site, date, &output)
                .with_context(|| format!("Failed to write {} page", kind))?;

            println!("Generated: {}", written.path.display());
            println!();
            println!("{}", written.registration_hint(kind));
            println!("{}", written.entry.to_json_pretty()?);

            if !no_open {
                open_in_browser(&written.path);
            }
        }
        Command::Site {
            config,
            output,
            name,
            no_open,
        } => {
            let index = SiteIndex::load(&config)?;
            let site = SiteInfo::new(name, Local::now().year());

            let summary =
                build_site(&index, &site, &output).context("Failed to build site pages")?;

            for page in &summary.pages {
                println!("Generated: {}", page.display());
            }
            println!(
                "Built {} pages listing {} entries",
                summary.pages.len(),
                summary.entries
            );
            if summary.skipped > 0 {
                println!(
                    "Skipped {} entries without a content page",
                    summary.skipped
                );
            }

            if !no_open && let Some(home) = summary.pages.first() {
                open_in_browser(home);
            }
        }
    }

    Ok(())
}
