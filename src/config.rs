//! Command line configuration.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::content::ContentKind;
use crate::markdown::FieldFormat;
use crate::site::DEFAULT_SITE_NAME;

/// Command line configuration for codeprob.
#[derive(Debug, Clone, Parser)]
#[command(name = "codeprob", version, about, long_about = None)]
pub struct Config {
    /// Log generated pages and build summaries
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a text field to an HTML fragment on stdout
    Render {
        /// Text file to render
        file: PathBuf,

        /// Renderer to use
        #[arg(long, value_enum, default_value_t = FieldFormat::Markdown)]
        mode: FieldFormat,
    },

    /// Generate a content page from a JSON form
    Write {
        /// Kind of page to generate
        #[arg(value_enum)]
        kind: ContentKind,

        /// JSON file with the form fields
        form: PathBuf,

        /// Site root directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Site name
        #[arg(long, default_value = DEFAULT_SITE_NAME)]
        name: String,

        /// Publication date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Do not open the generated page
        #[arg(long)]
        no_open: bool,
    },

    /// Build the homepage and category listings from the site configuration
    Site {
        /// Path to contributor-config.json
        config: PathBuf,

        /// Site root directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Site name
        #[arg(long, default_value = DEFAULT_SITE_NAME)]
        name: String,

        /// Do not open the generated homepage
        #[arg(long)]
        no_open: bool,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist.
    pub fn validate(&self) -> Result<()> {
        let (label, path) = self.command.input();
        if !path.exists() {
            bail!("{} does not exist: {}", label, path.display());
        }

        Ok(())
    }
}

impl Command {
    fn input(&self) -> (&'static str, &Path) {
        match self {
            Self::Render { file, .. } => ("Input file", file.as_path()),
            Self::Write { form, .. } => ("Form file", form.as_path()),
            Self::Site { config, .. } => ("Site configuration", config.as_path()),
        }
    }
}
