//! Startup configuration for the terminal client.
//!
//! Values resolve once, in order: command-line flag, environment variable,
//! settings file, built-in default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use ron::extensions::Extensions;
use serde::Deserialize;
use summarizer_core::{Mode, Msg};
use summarizer_engine::{ClientSettings, DEFAULT_BASE_URL};
use url::Url;

pub const BASE_URL_ENV: &str = "PDF_SUMMARIZER_BASE_URL";
const DEFAULT_SETTINGS_FILE: &str = "summarizer.ron";
const DEFAULT_LOG_FILE: &str = "summarizer.log";

/// Terminal client for a PDF summarization service.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// PDF to select on startup
    pub file: Option<PathBuf>,

    /// Base URL of the summarization service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Settings file (RON); defaults to ./summarizer.ron when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial summarization mode: tldr, keypoints or eli5
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Initial title sent with the document
    #[arg(long)]
    pub title: Option<String>,

    /// Seconds allowed to establish a connection (unbounded by default)
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Seconds allowed for a whole request (unbounded by default)
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    base_url: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
    mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub client: ClientSettings,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub mode: Mode,
    pub title: Option<String>,
    pub initial_file: Option<PathBuf>,
}

impl AppSettings {
    pub fn resolve(args: Args, env_base_url: Option<String>) -> Result<Self> {
        let file = load_settings_file(args.config.as_deref())?;

        let raw_base = args
            .base_url
            .or(env_base_url)
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&raw_base).with_context(|| format!("invalid base url {raw_base:?}"))?;

        let mode = match (args.mode, file.mode) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => raw.parse::<Mode>().context("invalid mode in settings file")?,
            (None, None) => Mode::default(),
        };

        let raw_level = args.log_level.or(file.log_level);
        let log_level = match raw_level {
            Some(raw) => client_logging::parse_level(&raw)
                .with_context(|| format!("invalid log level {raw:?}"))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            client: ClientSettings {
                base_url,
                connect_timeout: args
                    .connect_timeout
                    .or(file.connect_timeout_secs)
                    .map(Duration::from_secs),
                request_timeout: args
                    .request_timeout
                    .or(file.request_timeout_secs)
                    .map(Duration::from_secs),
            },
            log_file: args
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_level,
            mode,
            title: args.title,
            initial_file: args.file,
        })
    }

    /// Messages that put a fresh session into the configured starting state.
    pub fn startup_messages(&self) -> Vec<Msg> {
        let mut msgs = vec![Msg::ModeChanged(self.mode)];
        if let Some(title) = &self.title {
            msgs.push(Msg::TitleChanged(title.clone()));
        }
        if let Some(path) = &self.initial_file {
            msgs.push(Msg::PathInputChanged(path.display().to_string()));
            msgs.push(Msg::PathSubmitted);
        }
        msgs
    }
}

fn load_settings_file(explicit: Option<&Path>) -> Result<SettingsFile> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !default.is_file() {
                return Ok(SettingsFile::default());
            }
            default
        }
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("failed to parse settings file {}", path.display()))
}

fn parse_settings(text: &str) -> Result<SettingsFile, ron::error::SpannedError> {
    ron::Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(text)
}
