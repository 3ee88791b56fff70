//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use crate::progress::ProgressReporter;
use crate::source::{DocumentSource, HttpFetcher};
use anyhow::{Context, Result};
use clap::Args;
use olympos_core::{CoreError, Pipeline, PipelineTrace, RawDocument};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// URL of the plain-text document (default: the Gutenberg Iliad)
    #[arg(short, long, value_name = "URL", env = "OLYMPOS_URL")]
    pub url: Option<String>,

    /// Local input file instead of a URL ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pipeline stage to print
    #[arg(short, long, value_enum, default_value = "final")]
    pub emit: Stage,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Pipeline stages that can be printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Stage {
    /// The merged document
    Final,
    /// Text after cleaning
    Cleaned,
    /// Every fragment after splitting
    Sentences,
    /// Fragments mentioning the topic keyword
    Matched,
    /// Matched fragments after contraction rewriting
    Modernized,
}

impl Stage {
    /// Fragments recorded for this stage, in document order.
    ///
    /// The cleaned text is reported as a single fragment. `Final` has no
    /// fragments of its own: it is the joined document, see
    /// [`PipelineTrace::merge`].
    pub fn fragments<'a>(&self, trace: &'a PipelineTrace) -> Option<Vec<&'a str>> {
        let owned: &[String] = match self {
            Stage::Final => return None,
            Stage::Cleaned => return Some(vec![trace.cleaned.as_str()]),
            Stage::Sentences => &trace.sentences,
            Stage::Matched => &trace.matched,
            Stage::Modernized => &trace.modernized,
        };
        Some(owned.iter().map(String::as_str).collect())
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting topic extraction");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let source = DocumentSource::select(self.input.as_ref(), &config.source.url);
        log::info!("Source: {}", source.display_name());
        if source.is_remote() {
            config.validate_source_url()?;
        }

        let document = self.load_document(&source, &config)?;
        let pipeline = Pipeline::new();
        let format = self.format.unwrap_or(config.output.default_format);

        // Run before opening the output so a failed run leaves no empty file.
        let mut rendered = Vec::new();
        {
            let pretty_json = config.output.pretty_json;
            let mut formatter =
                output::create_formatter(format, Box::new(&mut rendered), pretty_json);

            match self.emit {
                Stage::Final => {
                    let result = pipeline.run(&document).map_err(|e| match e {
                        CoreError::EmptyInput => anyhow::Error::new(CliError::NoMatches {
                            keyword: pipeline.keyword().to_string(),
                        }),
                        other => anyhow::Error::new(other),
                    })?;
                    formatter.format_document(&result)?;
                }
                stage => {
                    let trace = pipeline.trace(&document);
                    let fragments = stage.fragments(&trace).unwrap_or_default();
                    for (index, fragment) in fragments.into_iter().enumerate() {
                        formatter.format_fragment(index, fragment)?;
                    }
                }
            }
            formatter.finish()?;
        }

        let mut writer = self.open_writer()?;
        writer.write_all(&rendered)?;
        writer.flush()?;

        log::info!("Processing complete");
        Ok(())
    }

    /// Config file values with command-line overrides applied.
    ///
    /// The source URL is left unchecked here; it only matters when no local
    /// input is given.
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_secs = timeout;
        }

        config.validate_settings()?;
        Ok(config)
    }

    fn load_document(&self, source: &DocumentSource, config: &CliConfig) -> Result<RawDocument> {
        let mut progress = ProgressReporter::new(self.quiet || !source.is_remote());
        progress.start_fetch(&config.source.url);

        let loaded = source.load(|| {
            let timeout = Duration::from_secs(config.source.timeout_secs);
            Ok(HttpFetcher::new(timeout, &config.source.user_agent)?)
        });

        match loaded {
            Ok(document) => {
                progress.fetch_completed(document.len());
                Ok(document)
            }
            Err(e) => {
                progress.fetch_failed();
                Err(e)
            }
        }
    }

    fn open_writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
