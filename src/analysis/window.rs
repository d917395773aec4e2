//! Zoom state over the plotted series.
//!
//! The window is a contiguous index range `[start, end)` into the processed
//! series. Zooming in narrows it by two slots around its midpoint until
//! [`MIN_WIDTH`] is reached, zooming out widens it by one slot on each side.

use std::ops::Range;

/// Narrowest window zoom-in is allowed to produce.
pub const MIN_WIDTH: usize = 4;

/// Visible index range over the plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewWindow {
    pub start: usize,
    pub end: usize,
}

impl ViewWindow {
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Range actually read from a series of `len` points.
    ///
    /// The window is clamped again against `len`, and a non-empty series
    /// always yields at least one index.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        if len == 0 {
            return 0..0;
        }
        let start = self.start.min(len - 1);
        let end = self.end.min(len).max(start + 1);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }
}

/// Owns the [`ViewWindow`] together with the series length it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoomController {
    window: ViewWindow,
    len: usize,
}

impl ZoomController {
    pub fn new(len: usize) -> Self {
        Self {
            window: ViewWindow::full(len),
            len,
        }
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Follow a change of series length. Returns true when the window was reset.
    pub fn set_len(&mut self, len: usize) -> bool {
        if len == self.len {
            return false;
        }
        self.len = len;
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.window = ViewWindow::full(self.len);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.window.width() > MIN_WIDTH
    }

    pub fn can_zoom_out(&self) -> bool {
        self.window.start > 0 || self.window.end < self.len
    }

    pub fn zoom_in(&mut self) {
        if self.len == 0 || !self.can_zoom_in() {
            return;
        }

        let width = self.window.width();
        let new_width = MIN_WIDTH.max(width - 2);
        let center = self.window.start as f64 + width as f64 / 2.0;
        let half = new_width as f64 / 2.0;

        let mut start = round_half_up(center - half);
        let mut end = round_half_up(center + half);
        if start < 0 {
            start = 0;
            end = new_width as i64;
        }
        if end > self.len as i64 {
            end = self.len as i64;
            start = end - new_width as i64;
        }

        self.window = ViewWindow {
            start: start.max(0) as usize,
            end: end.max(0) as usize,
        };
    }

    pub fn zoom_out(&mut self) {
        if self.len == 0 || !self.can_zoom_out() {
            return;
        }
        self.window = ViewWindow {
            start: self.window.start.saturating_sub(1),
            end: (self.window.end + 1).min(self.len),
        };
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.window.visible_range(self.len)
    }
}

// Ties go towards positive infinity, so 2.5 -> 3 and -0.5 -> 0.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    fn window(start: usize, end: usize) -> ViewWindow {
        ViewWindow { start, end }
    }

    #[test]
    fn test_new_spans_everything() {
        let zoom = ZoomController::new(10);
        assert_eq!(zoom.window(), window(0, 10));
        assert!(zoom.can_zoom_in());
        assert!(!zoom.can_zoom_out());
    }

    #[test]
    fn test_zoom_in_recenters() {
        let mut zoom = ZoomController::new(10);
        zoom.zoom_in();
        assert_eq!(zoom.window(), window(1, 9));
        zoom.zoom_in();
        assert_eq!(zoom.window(), window(2, 8));
        zoom.zoom_in();
        assert_eq!(zoom.window(), window(3, 7));
        assert!(!zoom.can_zoom_in());
        assert!(zoom.can_zoom_out());
    }

    #[test]
    fn test_zoom_in_odd_width_rounds_half_up() {
        let mut zoom = ZoomController::new(5);
        zoom.zoom_in();
        // center 2.5, width 4 -> round(0.5)=1, round(4.5)=5
        assert_eq!(zoom.window(), window(1, 5));
    }

    #[test]
    fn test_zoom_in_at_minimum_is_identity() {
        let mut zoom = ZoomController::new(4);
        zoom.zoom_in();
        assert_eq!(zoom.window(), window(0, 4));

        let mut zoom = ZoomController::new(3);
        zoom.zoom_in();
        assert_eq!(zoom.window(), window(0, 3));
    }

    #[test]
    fn test_zoom_out_at_full_is_identity() {
        let mut zoom = ZoomController::new(12);
        zoom.zoom_out();
        assert_eq!(zoom.window(), window(0, 12));
    }

    #[test]
    fn test_zoom_out_expands_and_clamps() {
        let mut zoom = ZoomController::new(10);
        zoom.zoom_in();
        zoom.zoom_in();
        assert_eq!(zoom.window(), window(2, 8));
        zoom.zoom_out();
        assert_eq!(zoom.window(), window(1, 9));
        zoom.zoom_out();
        assert_eq!(zoom.window(), window(0, 10));
        assert!(!zoom.can_zoom_out());
    }

    #[test]
    fn test_zoom_out_clamps_one_side() {
        let mut zoom = ZoomController::new(10);
        zoom.window = window(0, 5);
        zoom.zoom_out();
        assert_eq!(zoom.window(), window(0, 6));
    }

    #[test]
    fn test_zoom_in_odd_window_keeps_target_width() {
        let mut zoom = ZoomController::new(10);
        zoom.window = window(0, 7);
        zoom.zoom_in();
        // center 3.5, width 5 -> [1, 6]
        assert_eq!(zoom.window(), window(1, 6));
    }

    #[test]
    fn test_empty_series_is_inert() {
        let mut zoom = ZoomController::new(0);
        zoom.zoom_in();
        zoom.zoom_out();
        assert_eq!(zoom.window(), window(0, 0));
        assert!(!zoom.can_zoom_in());
        assert!(!zoom.can_zoom_out());
        assert_eq!(zoom.visible_range(), 0..0);
    }

    #[test]
    fn test_set_len_resets_only_on_change() {
        let mut zoom = ZoomController::new(30);
        zoom.zoom_in();
        assert!(!zoom.set_len(30));
        assert_eq!(zoom.window(), window(1, 29));

        assert!(zoom.set_len(5));
        assert_eq!(zoom.window(), window(0, 5));
    }

    #[test]
    fn test_visible_range_reclamps_stale_window() {
        let stale = window(8, 12);
        assert_eq!(stale.visible_range(5), 4..5);
        assert_eq!(stale.visible_range(10), 8..10);
        assert_eq!(window(3, 3).visible_range(10), 3..4);
        assert_eq!(stale.visible_range(0), 0..0);

        let items = [1, 2, 3, 4, 5];
        assert_eq!(window(1, 3).slice(&items), &[2, 3]);
    }

    #[quickcheck]
    fn repeated_zoom_stays_in_bounds(len: u8, steps: Vec<bool>) -> bool {
        let len = usize::from(len);
        let mut zoom = ZoomController::new(len);
        for zoom_in in steps {
            let before = zoom.window();
            if zoom_in {
                zoom.zoom_in();
                let after = zoom.window();
                if before.width() > MIN_WIDTH && after.width() < MIN_WIDTH {
                    return false;
                }
            } else {
                zoom.zoom_out();
            }
            let w = zoom.window();
            if w.end > len || w.start > w.end {
                return false;
            }
            if len > 0 && w.start >= w.end {
                return false;
            }
        }
        true
    }
}
