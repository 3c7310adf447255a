//! Citewise Document List View-State
//!
//! Pure state derivations for the knowledge-base document table:
//! - Document display status taxonomy
//! - List query state (status filter, keyword search, sort, pagination)
//! - In-memory filter/sort/paginate over document summaries

pub mod listing;
pub mod status;

// Re-export commonly used types
pub use listing::{DocumentSummary, ListQuery, ListState, Page, SortOrder};
pub use status::DocumentDisplayStatus;
