//! Single-line packing of citation resource pills
//!
//! Determines how many leading resource pills fit on the first display line
//! of a citation row, reserving space for the "+N" overflow toggle when not
//! everything fits. The rendering layer supplies measured pill widths and
//! the container width; this module performs no measurement itself.

use citewise_common::config::LayoutSection;

/// Layout constants for the citation row
///
/// All widths are in the same units as the measured pill widths supplied by
/// the caller (pixels in practice).
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Horizontal space between adjacent resource pills
    pub inter_item_gap: f64,

    /// Space reserved up front for the row title preceding the pills
    pub reserved_margin: f64,

    /// Width of the "+N" / collapse toggle control; reserved only when not
    /// all resources fit
    pub toggle_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inter_item_gap: 4.0,
            reserved_margin: 40.0,
            toggle_width: 34.0,
        }
    }
}

impl From<&LayoutSection> for LayoutConfig {
    fn from(section: &LayoutSection) -> Self {
        Self {
            inter_item_gap: section.inter_item_gap,
            reserved_margin: section.reserved_margin,
            toggle_width: section.toggle_width,
        }
    }
}

/// Compute how many leading resources fit on one display line
///
/// Greedy prefix accumulation with a one-step back-off: pills are added in
/// order until the running width (plus accumulated inter-item gaps) exceeds
/// the effective container width. The overflowing pill is backed out; if the
/// toggle control does not fit next to the remaining prefix either, one more
/// pill is dropped to make room for it.
///
/// The returned limit is always within `0..=widths.len()`. The back-off can
/// nominally ask for one pill fewer than zero (a very narrow container where
/// not even the first pill plus the toggle fits); that is clamped to zero,
/// meaning no pills are shown and the toggle stands alone.
pub fn compute_limit(widths: &[f64], container_width: f64, config: &LayoutConfig) -> usize {
    let effective_width = container_width - config.reserved_margin;

    let mut limit: usize = 0;
    let mut total = 0.0;

    for (i, width) in widths.iter().enumerate() {
        total += width;

        if total + i as f64 * config.inter_item_gap > effective_width {
            // This pill overflows; back it out
            total -= width;

            if total + config.toggle_width > effective_width {
                limit = i.saturating_sub(1);
            } else {
                limit = i;
            }
            break;
        }

        // This pill fits; more may follow
        limit = i + 1;
    }

    limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_all_fit_no_toggle_needed() {
        // effective width 800; running sums 50, 104, 158 all fit
        let limit = compute_limit(&[50.0, 50.0, 50.0], 840.0, &LayoutConfig::default());
        assert_eq!(limit, 3);
    }

    #[test]
    fn test_back_off_drops_pill_for_toggle() {
        // effective width 100; second pill overflows (164 > 100) and the
        // toggle does not fit next to the first (80 + 34 > 100)
        let limit = compute_limit(&[80.0, 80.0], 140.0, &LayoutConfig::default());
        assert_eq!(limit, 0);
    }

    #[test]
    fn test_overflow_with_toggle_fitting() {
        // effective width 200; third pill overflows (248 > 200) but the
        // toggle fits next to the first two (160 + 34 <= 200)
        let limit = compute_limit(&[80.0, 80.0, 80.0], 240.0, &LayoutConfig::default());
        assert_eq!(limit, 2);
    }

    #[test]
    fn test_empty_widths() {
        assert_eq!(compute_limit(&[], 500.0, &LayoutConfig::default()), 0);
    }

    #[test]
    fn test_first_pill_alone_too_wide() {
        // the very first pill overflows; nominal back-off would be -1,
        // clamped to 0
        let limit = compute_limit(&[300.0, 40.0], 100.0, &LayoutConfig::default());
        assert_eq!(limit, 0);
    }

    #[test]
    fn test_exact_fit_boundary_is_inclusive() {
        // 60 + 60 + gap 4 == 124 == effective width; not an overflow
        let limit = compute_limit(&[60.0, 60.0], 164.0, &LayoutConfig::default());
        assert_eq!(limit, 2);
    }

    #[test]
    fn test_custom_config() {
        let config = LayoutConfig {
            inter_item_gap: 0.0,
            reserved_margin: 0.0,
            toggle_width: 0.0,
        };
        // effective width 100; 40 + 40 fits, third pill backed out, zero-width
        // toggle always fits
        assert_eq!(compute_limit(&[40.0, 40.0, 40.0], 100.0, &config), 2);
    }

    #[test]
    fn test_limit_always_in_bounds() {
        let mut rng = rand::thread_rng();
        let config = LayoutConfig::default();

        for _ in 0..500 {
            let n = rng.gen_range(0..12);
            let widths: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..300.0)).collect();
            let container_width = rng.gen_range(0.0..1200.0);

            let limit = compute_limit(&widths, container_width, &config);
            assert!(limit <= widths.len());
        }
    }
}
