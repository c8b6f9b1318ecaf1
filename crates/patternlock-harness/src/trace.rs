#![forbid(unsafe_code)]

//! JSON trace format.
//!
//! ```json
//! {
//!   "preset": "indicator",
//!   "width": 300,
//!   "height": 300,
//!   "pattern": [1, 2, 3],
//!   "settle_ms": 500,
//!   "events": [
//!     { "t_ms": 0,  "kind": "down", "x": 50,  "y": 50 },
//!     { "t_ms": 40, "kind": "move", "x": 150, "y": 50 },
//!     { "t_ms": 90, "kind": "up",   "x": 150, "y": 50 }
//!   ]
//! }
//! ```
//!
//! `config` and `style` objects, when present, replace the preset's values;
//! missing fields inside them fall back to the defaults.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use patternlock_core::event::PointerEvent;
use patternlock_widgets::{PatternLockConfig, PatternStyle};
use serde::{Deserialize, Serialize};

use crate::error::ReplayError;
use crate::presets::Preset;

const DEFAULT_SIZE: i32 = 300;

const fn default_size() -> i32 {
    DEFAULT_SIZE
}

/// A pointer event at a time offset from the start of the trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub t_ms: u64,
    #[serde(flatten)]
    pub event: PointerEvent,
}

/// A recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Preset name; `default` when absent.
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub config: Option<PatternLockConfig>,
    #[serde(default)]
    pub style: Option<PatternStyle>,
    #[serde(default = "default_size")]
    pub width: i32,
    #[serde(default = "default_size")]
    pub height: i32,
    /// Expected 1-based ids. Without one every attempt is rejected.
    #[serde(default)]
    pub pattern: Option<Vec<usize>>,
    /// Extra time to advance after the last event, letting auto-reset fire.
    #[serde(default)]
    pub settle_ms: Option<u64>,
    pub events: Vec<TimedEvent>,
}

impl Trace {
    /// Parse a trace from JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, ReplayError> {
        let trace: Self = serde_json::from_reader(reader)?;
        trace.check()?;
        Ok(trace)
    }

    /// Load a trace file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The preset named by the trace.
    pub fn preset(&self) -> Result<Preset, ReplayError> {
        self.preset
            .as_deref()
            .map_or(Ok(Preset::Default), str::parse)
    }

    /// Effective configuration: explicit config, else the preset's.
    pub fn effective_config(&self) -> Result<PatternLockConfig, ReplayError> {
        match &self.config {
            Some(config) => Ok(config.clone()),
            None => Ok(self.preset()?.config()),
        }
    }

    /// Effective style: explicit style, else the preset's.
    pub fn effective_style(&self) -> Result<PatternStyle, ReplayError> {
        match &self.style {
            Some(style) => Ok(style.clone()),
            None => Ok(self.preset()?.style()),
        }
    }

    fn check(&self) -> Result<(), ReplayError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ReplayError::Usage(format!(
                "container must be non-empty (got {}x{})",
                self.width, self.height
            )));
        }
        if self.events.windows(2).any(|pair| pair[1].t_ms < pair[0].t_ms) {
            return Err(ReplayError::Usage(
                "event timestamps must not decrease".to_string(),
            ));
        }
        if self.pattern.as_ref().is_some_and(|ids| ids.contains(&0)) {
            return Err(ReplayError::Usage("pattern ids are 1-based".to_string()));
        }
        Ok(())
    }
}
