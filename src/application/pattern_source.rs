use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;

use crate::domain::{Pattern, presets};

/// Where the "load pattern" control takes its next pattern from:
/// a user-chosen file, re-read on every load, or the built-in presets in turn.
#[derive(Clone, Debug)]
pub enum PatternSource {
    File(PathBuf),
    Presets { patterns: Vec<Pattern>, next: usize },
}

impl PatternSource {
    /// Use `path` when given, else cycle through the presets
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => PatternSource::File(path),
            None => PatternSource::Presets {
                patterns: presets::all_patterns(),
                next: 0,
            },
        }
    }

    /// What the next load will produce, for display
    pub fn describe_next(&self) -> String {
        match self {
            PatternSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            PatternSource::Presets { patterns, next } => patterns
                .get(*next)
                .map(|p| p.name().to_owned())
                .unwrap_or_default(),
        }
    }

    /// Produce the next pattern to stamp
    pub fn next_pattern(&mut self) -> Result<Pattern> {
        match self {
            PatternSource::File(path) => {
                let text = fs::read_to_string(&*path)
                    .with_context(|| format!("reading pattern file {}", path.display()))?;
                info!("read pattern file {}", path.display());
                Ok(Pattern::parse(&text))
            }
            PatternSource::Presets { patterns, next } => {
                if patterns.is_empty() {
                    bail!("no preset patterns available");
                }
                let pattern = patterns[*next].clone();
                *next = (*next + 1) % patterns.len();
                Ok(pattern)
            }
        }
    }
}
