//! Citewise Preview Tool
//!
//! Developer binary that exercises the transcript pipeline end to end:
//! reads a JSON fixture of citation records plus measured pill widths,
//! groups and lays out the citation row, and logs the collapsed plan and
//! the expanded listing.
//!
//! Usage: `preview [fixture-path]` (default: fixtures/citations.json)

use std::collections::HashMap;
use std::fs;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use citewise_common::{Result, UiConfig};
use citewise_transcript::citation::{CitationRecord, CitationRow, LayoutConfig};

/// Fixture format: raw records plus the measurements the rendering layer
/// would supply at runtime
#[derive(Debug, Deserialize)]
struct Fixture {
    /// Width of the enclosing container element
    container_width: f64,

    /// Raw citation records, as attached to one chat answer
    records: Vec<CitationRecord>,

    /// Measured pill width per document id
    widths: HashMap<String, f64>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Citewise preview v{}", citewise_common::VERSION);

    let config = UiConfig::load()?;
    let layout = LayoutConfig::from(&config.layout);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/citations.json".to_string());
    let raw = fs::read_to_string(&path)?;
    let fixture: Fixture = serde_json::from_str(&raw)?;

    info!(
        records = fixture.records.len(),
        container_width = fixture.container_width,
        "loaded fixture {path}"
    );

    let mut row = CitationRow::from_records(fixture.records);
    row.layout(&fixture.widths, fixture.container_width, &layout);

    info!(
        resources = row.resources().len(),
        limit = row.state().limit,
        "collapsed plan"
    );
    for resource in row.visible() {
        info!(
            "  [{}] {} ({} sources, {} words)",
            resource.data_source_type.as_deref().unwrap_or("unknown"),
            resource.document_name,
            resource.source_count(),
            resource.total_word_count(),
        );
    }
    if row.toggle_shown() {
        info!("  [+{} more]", row.hidden_count());
    } else {
        info!("  (no overflow toggle)");
    }

    if row.toggle_shown() {
        row.toggle();
        info!("expanded listing");
        for resource in row.visible() {
            info!(
                "  {} ({} sources)",
                resource.document_name,
                resource.source_count()
            );
        }
    }

    Ok(())
}
