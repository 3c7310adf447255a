//! Citewise Transcript View-State
//!
//! Pure state derivations for rendering chat transcripts:
//! - Citation record grouping into per-document resources
//! - Single-line packing of resource pills with an overflow toggle
//! - Collapsed/expanded citation row state

pub mod citation;

// Re-export commonly used types
pub use citation::{
    compute_limit, group_by_document, CitationRecord, CitationRow, LayoutConfig, LayoutState,
    MeasureWidth, Resource,
};
