//! Document list query state and in-memory application
//!
//! Provides:
//! - List query state (status filter, keyword search, sort, pagination)
//! - Debounce window tracking for keyword edits
//! - Filter/sort/paginate over document summaries
//!
//! URL synchronisation and data fetching stay with the presentation layer;
//! this module only derives what a fetched page should contain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;
use validator::Validate;

use citewise_common::Result;

use crate::status::DocumentDisplayStatus;

/// One row of the knowledge-base document table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document identifier
    pub id: Uuid,

    /// Document display name
    pub name: String,

    /// Provenance of the document (upload_file, notion_import, ...)
    pub data_source_type: Option<String>,

    /// Word count of the document
    pub word_count: u64,

    /// Times the document was hit during retrieval
    pub hit_count: u64,

    /// Upload time; the sort key
    pub created_at: DateTime<Utc>,

    /// Current display status
    pub display_status: DocumentDisplayStatus,

    /// Whether the document is enabled for retrieval
    pub enabled: bool,

    /// Whether the document is archived
    pub archived: bool,
}

/// Sort order for the document table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest first
    #[default]
    CreatedAtDesc,
    /// Oldest first
    CreatedAtAsc,
}

impl SortOrder {
    /// The opposite order, for the sort-toggle control
    pub fn toggled(&self) -> Self {
        match self {
            Self::CreatedAtDesc => Self::CreatedAtAsc,
            Self::CreatedAtAsc => Self::CreatedAtDesc,
        }
    }
}

/// Document list query parameters
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,

    /// Page size
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,

    /// Keyword filter over document names
    #[serde(default)]
    pub keyword: Option<String>,

    /// Status filter
    #[serde(default)]
    pub status: Option<DocumentDisplayStatus>,

    /// Sort order
    #[serde(default)]
    pub sort: SortOrder,
}

fn default_page() -> u32 { 1 }
fn default_limit() -> u32 { 25 }

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            keyword: None,
            status: None,
            sort: SortOrder::default(),
        }
    }
}

/// One page of filtered, sorted documents
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Documents on this page
    pub items: Vec<DocumentSummary>,

    /// Filtered document count before pagination
    pub total: usize,

    /// 1-based page number this page was cut for
    pub page: u32,

    /// Page size
    pub limit: u32,
}

impl Page {
    /// Whether pages follow this one
    pub fn has_more(&self) -> bool {
        (self.page as usize) * (self.limit as usize) < self.total
    }

    /// Total number of pages for the filtered set
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit as usize)
    }
}

/// Mutable list view state
///
/// Owns the current query plus the keyword debounce bookkeeping. All
/// transitions are synchronous; the caller injects clock instants so the
/// debounce stays deterministic and testable.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    query: ListQuery,
    keyword_edited_at: Option<DateTime<Utc>>,
}

impl ListState {
    /// Create from an already-built query, validating its bounds
    pub fn new(query: ListQuery) -> Result<Self> {
        query.validate()?;
        Ok(Self {
            query,
            keyword_edited_at: None,
        })
    }

    /// Current query parameters
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Record a keyword edit; filtering restarts from the first page
    ///
    /// An empty or whitespace-only keyword clears the filter.
    pub fn set_keyword(&mut self, keyword: &str, at: DateTime<Utc>) {
        let trimmed = keyword.trim();
        self.query.keyword = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.query.page = 1;
        self.keyword_edited_at = Some(at);
    }

    /// Whether the debounce window has elapsed since the last keyword edit
    ///
    /// Callers only issue a fetch once the keyword has settled. With no edit
    /// recorded the keyword counts as settled.
    pub fn keyword_settled(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.keyword_edited_at {
            None => true,
            Some(edited_at) => {
                now.signed_duration_since(edited_at).num_milliseconds()
                    >= window.as_millis() as i64
            }
        }
    }

    /// Change the status filter; filtering restarts from the first page
    pub fn set_status(&mut self, status: Option<DocumentDisplayStatus>) {
        self.query.status = status;
        self.query.page = 1;
    }

    /// Flip the sort order
    pub fn toggle_sort(&mut self) {
        self.query.sort = self.query.sort.toggled();
    }

    /// Jump to a page; page numbers are 1-based
    pub fn set_page(&mut self, page: u32) {
        self.query.page = page.max(1);
    }

    /// Filter, sort, and paginate document summaries
    ///
    /// `total` counts the filtered set before pagination. An out-of-range
    /// page yields an empty `items` rather than an error.
    pub fn apply(&self, documents: &[DocumentSummary]) -> Page {
        let keyword = self.query.keyword.as_ref().map(|k| k.to_lowercase());

        let mut filtered: Vec<&DocumentSummary> = documents
            .iter()
            .filter(|doc| match self.query.status {
                Some(status) => doc.display_status == status,
                None => true,
            })
            .filter(|doc| match &keyword {
                Some(kw) => doc.name.to_lowercase().contains(kw),
                None => true,
            })
            .collect();

        filtered.sort_by(|a, b| match self.query.sort {
            SortOrder::CreatedAtAsc => a.created_at.cmp(&b.created_at),
            SortOrder::CreatedAtDesc => b.created_at.cmp(&a.created_at),
        });

        let total = filtered.len();
        let offset = (self.query.page as usize - 1) * self.query.limit as usize;
        let items: Vec<DocumentSummary> = filtered
            .into_iter()
            .skip(offset)
            .take(self.query.limit as usize)
            .cloned()
            .collect();

        tracing::debug!(
            total,
            page = self.query.page,
            returned = items.len(),
            "applied document list query"
        );

        Page {
            items,
            total,
            page: self.query.page,
            limit: self.query.limit,
        }
    }
}
