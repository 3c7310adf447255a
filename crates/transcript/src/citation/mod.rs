//! Citation grouping and row layout
//!
//! Provides:
//! - Grouping of retrieved-passage citation records by source document
//! - Single-line packing of resource pills (see [`layout`])
//! - Collapsed/expanded row state (see [`row`])

mod layout;
mod row;

pub use layout::{compute_limit, LayoutConfig};
pub use row::{CitationRow, LayoutState, MeasureWidth};

use serde::{Deserialize, Serialize};

/// One retrieved passage attached to a chat answer
///
/// Fields other than `document_id` and `document_name` are carried through
/// untouched; the grouping and layout algorithms never inspect them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationRecord {
    /// Source document identifier; the grouping key
    pub document_id: String,

    /// Source document display name
    pub document_name: String,

    /// Provenance of the document (upload_file, notion_import, ...)
    pub data_source_type: Option<String>,

    /// Dataset the document belongs to
    pub dataset_id: Option<String>,

    /// Dataset display name
    pub dataset_name: Option<String>,

    /// Retrieved segment identifier
    pub segment_id: Option<String>,

    /// Position of the segment within the document
    pub segment_position: Option<u32>,

    /// Passage text
    pub content: Option<String>,

    /// Retrieval relevance score
    pub score: Option<f32>,

    /// Word count of the passage
    pub word_count: Option<u32>,

    /// Times this segment was retrieved
    pub hit_count: Option<u32>,

    /// Index node hash of the segment
    pub index_node_hash: Option<String>,
}

/// A group of citation records sharing the same source document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Source document identifier
    pub document_id: String,

    /// Source document display name
    pub document_name: String,

    /// Provenance of the document, from the first record seen
    pub data_source_type: Option<String>,

    /// All records for this document, in first-seen input order; never empty
    pub sources: Vec<CitationRecord>,
}

impl Resource {
    fn new(first: CitationRecord) -> Self {
        Self {
            document_id: first.document_id.clone(),
            document_name: first.document_name.clone(),
            data_source_type: first.data_source_type.clone(),
            sources: vec![first],
        }
    }

    /// Number of retrieved passages for this document
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Total word count across all passages for this document
    pub fn total_word_count(&self) -> u64 {
        self.sources
            .iter()
            .map(|s| s.word_count.unwrap_or(0) as u64)
            .sum()
    }
}

/// Group citation records into per-document resources
///
/// One resource per distinct `document_id`, ordered by first appearance in
/// the input. Records with the same `document_id` are appended to that
/// resource's `sources` in input order. Empty input yields empty output.
pub fn group_by_document(records: Vec<CitationRecord>) -> Vec<Resource> {
    let record_count = records.len();
    let mut resources: Vec<Resource> = Vec::new();

    for record in records {
        // Linear scan is fine at UI scale (tens of records per answer)
        match resources
            .iter_mut()
            .find(|r| r.document_id == record.document_id)
        {
            Some(resource) => resource.sources.push(record),
            None => resources.push(Resource::new(record)),
        }
    }

    tracing::trace!(
        records = record_count,
        resources = resources.len(),
        "grouped citation records"
    );

    resources
}
