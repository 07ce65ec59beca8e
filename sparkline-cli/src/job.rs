//! Render job files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use sparkline::{Color, Style};

#[derive(Debug, Deserialize)]
pub struct RenderJob {
    /// Registered type name, e.g. `Sparkline` or `CellRendererSparkline`.
    pub widget: String,
    /// Surface size; falls back to the widget's preferred size.
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub style: Style,
    /// Property writes applied in order after construction.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

fn default_background() -> Color {
    sparkline::theme::WHITE
}

impl RenderJob {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading job file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing job file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
