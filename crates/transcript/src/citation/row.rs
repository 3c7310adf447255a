//! Citation row state
//!
//! Owns the grouped resources of one answer's citation row together with its
//! layout state: how many pills are shown collapsed, and whether the row is
//! currently expanded. Recomputation is caller-triggered; the row holds no
//! subscription to data or container changes.

use std::collections::HashMap;

use tracing::debug;

use super::layout::{compute_limit, LayoutConfig};
use super::{group_by_document, CitationRecord, Resource};

/// Injected measurement capability
///
/// The rendering layer measures an off-screen copy of each resource pill in
/// its actual display font and padding; tests supply widths from a map.
pub trait MeasureWidth {
    /// Rendered width of this resource's pill, in the same units as the
    /// container width
    fn width_of(&self, resource: &Resource) -> f64;
}

/// Map-backed measurement, keyed by document id
///
/// Resources without an entry measure as zero width.
impl MeasureWidth for HashMap<String, f64> {
    fn width_of(&self, resource: &Resource) -> f64 {
        self.get(&resource.document_id).copied().unwrap_or(0.0)
    }
}

/// Layout state of one citation row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    /// Number of resources shown when collapsed, counted from the start
    pub limit: usize,

    /// Whether all resources are currently shown
    pub expanded: bool,
}

impl LayoutState {
    /// Recompute the collapsed limit for new widths or a new container
    ///
    /// A fresh computation always starts collapsed.
    pub fn recompute(&mut self, widths: &[f64], container_width: f64, config: &LayoutConfig) {
        self.limit = compute_limit(widths, container_width, config);
        self.expanded = false;
    }

    /// Flip between collapsed and expanded
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Number of resources to show out of `total`
    pub fn visible_count(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            self.limit.min(total)
        }
    }

    /// Whether the overflow toggle should be rendered at all
    pub fn toggle_shown(&self, total: usize) -> bool {
        self.limit < total
    }
}

/// One answer's citation row: grouped resources plus layout state
#[derive(Debug, Clone, Default)]
pub struct CitationRow {
    resources: Vec<Resource>,
    state: LayoutState,
}

impl CitationRow {
    /// Build a row from raw citation records
    pub fn from_records(records: Vec<CitationRecord>) -> Self {
        Self {
            resources: group_by_document(records),
            state: LayoutState::default(),
        }
    }

    /// All grouped resources, in first-seen order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Current layout state
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Measure every resource and recompute the collapsed limit
    ///
    /// Call whenever the resource set or the container width changes.
    pub fn layout(
        &mut self,
        measure: &impl MeasureWidth,
        container_width: f64,
        config: &LayoutConfig,
    ) {
        let widths: Vec<f64> = self.resources.iter().map(|r| measure.width_of(r)).collect();
        self.state.recompute(&widths, container_width, config);

        debug!(
            resources = self.resources.len(),
            limit = self.state.limit,
            container_width,
            "laid out citation row"
        );
    }

    /// Flip between collapsed and expanded
    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    /// Resources to render in the current state
    pub fn visible(&self) -> &[Resource] {
        &self.resources[..self.state.visible_count(self.resources.len())]
    }

    /// Number of resources hidden in the current state
    pub fn hidden_count(&self) -> usize {
        self.resources.len() - self.visible().len()
    }

    /// Whether the overflow toggle should be rendered
    pub fn toggle_shown(&self) -> bool {
        self.state.toggle_shown(self.resources.len())
    }

    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(document_id: &str) -> CitationRecord {
        CitationRecord {
            document_id: document_id.to_string(),
            document_name: format!("{document_id}.pdf"),
            data_source_type: Some("upload_file".to_string()),
            dataset_id: None,
            dataset_name: None,
            segment_id: None,
            segment_position: None,
            content: Some("Retrieved passage.".to_string()),
            score: Some(0.9),
            word_count: Some(80),
            hit_count: Some(1),
            index_node_hash: None,
        }
    }

    fn make_widths(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs
            .iter()
            .map(|(id, w)| (id.to_string(), *w))
            .collect()
    }

    #[test]
    fn test_toggle_hidden_when_everything_fits() {
        let mut row = CitationRow::from_records(vec![make_record("doc-a"), make_record("doc-b")]);
        let widths = make_widths(&[("doc-a", 50.0), ("doc-b", 50.0)]);

        row.layout(&widths, 840.0, &LayoutConfig::default());

        assert_eq!(row.state().limit, 2);
        assert!(!row.toggle_shown());
        assert_eq!(row.visible().len(), 2);
        assert_eq!(row.hidden_count(), 0);
    }

    #[test]
    fn test_toggle_shown_on_overflow() {
        let mut row = CitationRow::from_records(vec![
            make_record("doc-a"),
            make_record("doc-b"),
            make_record("doc-c"),
        ]);
        let widths = make_widths(&[("doc-a", 80.0), ("doc-b", 80.0), ("doc-c", 80.0)]);

        row.layout(&widths, 240.0, &LayoutConfig::default());

        assert_eq!(row.state().limit, 2);
        assert!(row.toggle_shown());
        assert_eq!(row.visible().len(), 2);
        assert_eq!(row.hidden_count(), 1);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut row = CitationRow::from_records(vec![
            make_record("doc-a"),
            make_record("doc-b"),
            make_record("doc-c"),
        ]);
        let widths = make_widths(&[("doc-a", 80.0), ("doc-b", 80.0), ("doc-c", 80.0)]);
        row.layout(&widths, 240.0, &LayoutConfig::default());

        // starts collapsed
        assert!(!row.is_expanded());
        assert_eq!(row.visible().len(), 2);

        row.toggle();
        assert!(row.is_expanded());
        assert_eq!(row.visible().len(), 3);
        assert_eq!(row.hidden_count(), 0);

        row.toggle();
        assert!(!row.is_expanded());
        assert_eq!(row.visible().len(), 2);
    }

    #[test]
    fn test_relayout_collapses_again() {
        let mut row = CitationRow::from_records(vec![
            make_record("doc-a"),
            make_record("doc-b"),
            make_record("doc-c"),
        ]);
        let widths = make_widths(&[("doc-a", 80.0), ("doc-b", 80.0), ("doc-c", 80.0)]);

        row.layout(&widths, 240.0, &LayoutConfig::default());
        row.toggle();
        assert!(row.is_expanded());

        // a fresh layout pass resets to collapsed
        row.layout(&widths, 240.0, &LayoutConfig::default());
        assert!(!row.is_expanded());
    }

    #[test]
    fn test_narrow_container_shows_toggle_alone() {
        let mut row = CitationRow::from_records(vec![make_record("doc-a"), make_record("doc-b")]);
        let widths = make_widths(&[("doc-a", 80.0), ("doc-b", 80.0)]);

        row.layout(&widths, 140.0, &LayoutConfig::default());

        assert_eq!(row.state().limit, 0);
        assert!(row.visible().is_empty());
        // toggle is still offered so the user can expand
        assert!(row.toggle_shown());
    }

    #[test]
    fn test_end_to_end_scenario() {
        // three records over two documents; both pills fit, no toggle
        let mut row = CitationRow::from_records(vec![
            make_record("doc-x"),
            make_record("doc-y"),
            make_record("doc-x"),
        ]);
        assert_eq!(row.resources().len(), 2);
        assert_eq!(row.resources()[0].document_id, "doc-x");
        assert_eq!(row.resources()[0].source_count(), 2);
        assert_eq!(row.resources()[1].source_count(), 1);

        let widths = make_widths(&[("doc-x", 60.0), ("doc-y", 60.0)]);
        row.layout(&widths, 500.0, &LayoutConfig::default());

        assert_eq!(row.state().limit, 2);
        assert!(!row.toggle_shown());
        assert_eq!(row.visible().len(), 2);
    }

    #[test]
    fn test_empty_row() {
        let mut row = CitationRow::from_records(Vec::new());
        row.layout(&HashMap::new(), 500.0, &LayoutConfig::default());

        assert!(row.is_empty());
        assert_eq!(row.state().limit, 0);
        assert!(!row.toggle_shown());
        assert!(row.visible().is_empty());
    }
}
