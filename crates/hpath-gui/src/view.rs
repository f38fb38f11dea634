//! Selection state and cached path for the curve canvas.

use hilbertpath::CurvePath;

/// Smallest order selectable in the GUI.
pub const MIN_ORDER: u32 = 1;

/// Largest order selectable in the GUI.
///
/// Order 10 is a 1024×1024 grid with ~1M points, which still regenerates
/// within a frame; the library itself accepts higher orders for offline use.
pub const MAX_ORDER: u32 = 10;

/// Selection and cache state for the curve canvas.
///
/// The cached path is the single source the canvas draws from. It is only
/// ever replaced wholesale: a new path is fully generated before the old one
/// is dropped, so no frame can observe a partially regenerated sequence.
pub struct CurveView {
    /// The selected curve order.
    pub order: u32,
    /// Cache key: last order used to generate `cached_path`.
    cached_order: u32,
    /// Cached path for `cached_order`.
    cached_path: Option<CurvePath>,
}

impl Default for CurveView {
    fn default() -> Self {
        // Order 2 shows the recursive structure at a glance.
        Self::with_order(2)
    }
}

impl CurveView {
    /// Build a view with a specific initial order, clamped to the GUI range.
    pub fn with_order(order: u32) -> Self {
        Self {
            order: order.clamp(MIN_ORDER, MAX_ORDER),
            cached_order: 0,
            cached_path: None,
        }
    }

    /// Ensure the cached path matches the current selection and return it.
    ///
    /// Regenerates synchronously when the order changed since the last call.
    pub fn ensure_path(&mut self) -> Option<&CurvePath> {
        self.order = self.order.clamp(MIN_ORDER, MAX_ORDER);
        if self.cached_order != self.order || self.cached_path.is_none() {
            match CurvePath::generate(self.order) {
                Ok(path) => {
                    self.cached_path = Some(path);
                    self.cached_order = self.order;
                }
                Err(_) => return None,
            }
        }
        self.cached_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_initial_order() {
        assert_eq!(CurveView::with_order(0).order, MIN_ORDER);
        assert_eq!(CurveView::with_order(99).order, MAX_ORDER);
        assert_eq!(CurveView::with_order(4).order, 4);
    }

    #[test]
    fn caches_until_order_changes() {
        let mut view = CurveView::with_order(2);
        assert_eq!(view.ensure_path().map(|p| p.len()), Some(16));

        // Same order: the cache stays.
        assert_eq!(view.ensure_path().map(|p| p.order()), Some(2));

        // Changing the order swaps in a freshly generated path.
        view.order = 3;
        assert_eq!(view.ensure_path().map(|p| p.len()), Some(64));
    }

    #[test]
    fn out_of_range_selection_is_clamped_before_generation() {
        let mut view = CurveView::with_order(2);
        view.order = 42;
        assert_eq!(view.ensure_path().map(|p| p.order()), Some(MAX_ORDER));
    }
}
