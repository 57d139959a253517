// src/config/options.rs
use std::env;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::error::{CrawlError, CrawlResult};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CrawlOptions {
    pub dept: DeptSelector,
    /// Raw category label as typed; canonicalized later by `Category::from_str`.
    pub category: Option<String>,
    pub export: ExportOptions,
    /// Replace the built-in department table with a JSON file.
    pub depts_file: Option<PathBuf>,
    pub list_depts: bool,
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DeptSelector {
    /// Ask on stdin.
    #[default]
    Prompt,
    Name(String),
    Code(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Json => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl ExportOptions {
    /// Explicit `-o` wins; otherwise `<category label>.<ext>` in the working directory.
    pub fn out_path(&self, category_label: &str) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => PathBuf::from(join!(category_label, ".", self.format.ext())),
        }
    }
}

/// An output file must carry a non-empty extension.
pub fn check_extension(path: &Path) -> CrawlResult<()> {
    match path.extension() {
        Some(ext) if !ext.is_empty() => Ok(()),
        _ => Err(CrawlError::InvalidOutputPath(path.to_string_lossy().into_owned())),
    }
}

/// ASP.NET view-state fields the search page expects on every POST.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FormTokens {
    pub view_state: String,
    pub view_state_generator: String,
    pub event_validation: String,
}

impl FormTokens {
    /// Read tokens from the environment; missing variables become empty strings.
    pub fn from_env() -> Self {
        let get = |key: &str| env::var(key).unwrap_or_default();
        let tokens = Self {
            view_state: get(ENV_VIEWSTATE),
            view_state_generator: get(ENV_VIEWSTATE_GENERATOR),
            event_validation: get(ENV_EVENT_VALIDATION),
        };
        if tokens.view_state.is_empty() {
            logd!("{ENV_VIEWSTATE} not set; posting without view-state");
        }
        tokens
    }

    pub fn to_form(&self) -> Vec<(String, String)> {
        form![
            "__VIEWSTATE" => self.view_state,
            "__VIEWSTATEGENERATOR" => self.view_state_generator,
            "__EVENTVALIDATION" => self.event_validation,
        ]
    }
}
