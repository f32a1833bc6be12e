pub mod json;
pub mod text;

use crate::error::ScorerError;
use crate::types::profile::{Profile, ScoredProfile};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn render(scored: &ScoredProfile<'_>, format: OutputFormat) -> Result<String, ScorerError> {
    match format {
        OutputFormat::Json => json::to_json(scored).map_err(ScorerError::Json),
        OutputFormat::Text => Ok(text::to_text(scored)),
    }
}

pub fn render_listing(profiles: &[Profile], format: OutputFormat) -> Result<String, ScorerError> {
    match format {
        OutputFormat::Json => json::listing_to_json(profiles).map_err(ScorerError::Json),
        OutputFormat::Text => Ok(text::listing_to_text(profiles)),
    }
}

pub fn write_report<W: Write>(out: &mut W, rendered: &str) -> Result<(), ScorerError> {
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}
