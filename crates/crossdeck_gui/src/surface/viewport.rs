//! Zoom and pan state for the puzzle surface.

use crossdeck_core::CellPos;
use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const MIN_ZOOM: f32 = 0.6;
pub const MAX_ZOOM: f32 = 2.5;
/// Cells never render smaller than this, whatever the zoom.
pub const MIN_CELL_SIZE: f32 = 18.0;
/// Cells never render larger than this at zoom 1.
pub const MAX_BASE_CELL_SIZE: f32 = 56.0;
/// Portion of the grid kept on screen along each axis while panning.
pub const MIN_VISIBLE_EXTENT: f32 = 48.0;
/// Padding kept between the selected cell and the visible edge.
pub const CELL_VISIBILITY_MARGIN: f32 = 8.0;

/// Container and grid dimensions the viewport is computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub container: Rect,
    pub rows: usize,
    pub cols: usize,
    /// Height hidden at the bottom by an on-screen keyboard.
    pub keyboard_inset: f32,
}

impl ViewFrame {
    pub fn new(container: Rect, rows: usize, cols: usize) -> Self {
        Self {
            container,
            rows,
            cols,
            keyboard_inset: 0.0,
        }
    }

    pub fn with_keyboard_inset(mut self, inset: f32) -> Self {
        self.keyboard_inset = inset.max(0.0);
        self
    }

    /// Part of the container not covered by the keyboard.
    pub fn visible_rect(&self) -> Rect {
        let mut visible = self.container;
        let max_inset = (self.container.height() - MIN_VISIBLE_EXTENT).max(0.0);
        visible.max.y -= self.keyboard_inset.min(max_inset);
        visible
    }

    /// Cell size at zoom 1: the grid fits the container.
    fn base_cell_size(&self) -> f32 {
        let cols = self.cols.max(1) as f32;
        let rows = self.rows.max(1) as f32;
        (self.container.width() / cols)
            .min(self.container.height() / rows)
            .min(MAX_BASE_CELL_SIZE)
    }
}

/// Screen placement of the grid for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin: Pos2,
    pub cell: f32,
    pub rows: usize,
    pub cols: usize,
}

impl GridGeometry {
    pub fn size(&self) -> Vec2 {
        vec2(self.cols as f32 * self.cell, self.rows as f32 * self.cell)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::from_min_size(
            pos2(
                self.origin.x + col as f32 * self.cell,
                self.origin.y + row as f32 * self.cell,
            ),
            Vec2::splat(self.cell),
        )
    }

    /// Rect covering `span` cells starting at `(row, col)` along a row or column.
    pub fn run_rect(&self, row: usize, col: usize, span: usize, across: bool) -> Rect {
        let first = self.cell_rect(row, col);
        let span = span.max(1) as f32;
        let size = if across {
            vec2(self.cell * span, self.cell)
        } else {
            vec2(self.cell, self.cell * span)
        };
        Rect::from_min_size(first.min, size)
    }

    /// Grid cell under a screen position.
    pub fn cell_at(&self, pos: Pos2) -> Option<CellPos> {
        if self.cell <= 0.0 || !self.rect().contains(pos) {
            return None;
        }
        let col = ((pos.x - self.origin.x) / self.cell).floor() as usize;
        let row = ((pos.y - self.origin.y) / self.cell).floor() as usize;
        (row < self.rows && col < self.cols).then(|| CellPos::new(row, col))
    }
}

/// Zoom factor and pan offset of the puzzle surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    zoom: f32,
    pan: Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewportState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Grid placement for the current zoom and pan.
    pub fn geometry(&self, frame: &ViewFrame) -> GridGeometry {
        let cell = (frame.base_cell_size() * self.zoom).max(MIN_CELL_SIZE);
        let size = vec2(frame.cols as f32 * cell, frame.rows as f32 * cell);
        GridGeometry {
            origin: frame.container.center() - size / 2.0 + self.pan,
            cell,
            rows: frame.rows,
            cols: frame.cols,
        }
    }

    /// Move the grid by a pointer delta.
    pub fn pan_by(&mut self, delta: Vec2, frame: &ViewFrame) {
        self.pan += delta;
        self.clamp(frame);
    }

    /// Multiply the zoom by `factor`, keeping the grid point under `focus` fixed.
    pub fn zoom_at(&mut self, factor: f32, focus: Pos2, frame: &ViewFrame) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let before = self.geometry(frame);
        let world = (focus - before.origin) / before.cell;

        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = Vec2::ZERO;
        let centered = self.geometry(frame);
        self.pan = (focus - world * centered.cell) - centered.origin;
        self.clamp(frame);
    }

    /// Keep at least a sliver of the grid inside the visible rect.
    pub fn clamp(&mut self, frame: &ViewFrame) {
        let visible = frame.visible_rect();
        let pan = self.pan;
        self.pan = Vec2::ZERO;
        let centered = self.geometry(frame);
        let size = centered.size();

        let axis = |pan: f32, origin: f32, extent: f32, min: f32, max: f32| -> f32 {
            let keep = MIN_VISIBLE_EXTENT.min(extent).min(max - min).max(0.0);
            let lowest = min + keep - extent - origin;
            let highest = max - keep - origin;
            if lowest > highest {
                return pan;
            }
            pan.clamp(lowest, highest)
        };
        self.pan = vec2(
            axis(pan.x, centered.origin.x, size.x, visible.min.x, visible.max.x),
            axis(pan.y, centered.origin.y, size.y, visible.min.y, visible.max.y),
        );
    }

    /// Nudge the pan so `(row, col)` is not hidden by the viewport edges or keyboard.
    pub fn ensure_cell_visible(&mut self, row: usize, col: usize, frame: &ViewFrame) {
        let geometry = self.geometry(frame);
        let cell = geometry.cell_rect(row, col);
        let visible = frame.visible_rect().shrink(CELL_VISIBILITY_MARGIN);
        if !visible.is_positive() {
            return;
        }

        let nudge = |min: f32, max: f32, lo: f32, hi: f32| -> f32 {
            if max - min > hi - lo || min < lo {
                lo - min
            } else if max > hi {
                hi - max
            } else {
                0.0
            }
        };
        let delta = vec2(
            nudge(cell.min.x, cell.max.x, visible.min.x, visible.max.x),
            nudge(cell.min.y, cell.max.y, visible.min.y, visible.max.y),
        );
        if delta != Vec2::ZERO {
            self.pan += delta;
            self.clamp(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn frame(rows: usize, cols: usize) -> ViewFrame {
        ViewFrame::new(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0)),
            rows,
            cols,
        )
    }

    #[test]
    fn geometry_centers_grid_at_rest() {
        let frame = frame(10, 10);
        let geometry = ViewportState::default().geometry(&frame);
        assert_eq!(geometry.cell, 30.0);
        assert_eq!(geometry.rect().center(), frame.container.center());
        assert_eq!(geometry.cell_at(pos2(200.0, 150.0)), Some(CellPos::new(5, 5)));
        assert_eq!(geometry.cell_at(pos2(10.0, 10.0)), None);
    }

    #[test]
    fn cell_size_has_a_floor() {
        let frame = frame(100, 100);
        let mut viewport = ViewportState::default();
        viewport.zoom_at(0.1, frame.container.center(), &frame);
        assert_eq!(viewport.zoom(), MIN_ZOOM);
        assert_eq!(viewport.geometry(&frame).cell, MIN_CELL_SIZE);
    }

    #[test]
    fn zoom_keeps_focus_point_fixed() {
        let frame = frame(10, 10);
        let mut viewport = ViewportState::default();
        let focus = pos2(230.0, 170.0);
        let before = viewport.geometry(&frame);
        let world = (focus - before.origin) / before.cell;

        viewport.zoom_at(2.0, focus, &frame);
        let after = viewport.geometry(&frame);
        let mapped = after.origin + world * after.cell;
        assert!((mapped - focus).length() < 0.01, "{:?} vs {:?}", mapped, focus);
        assert_eq!(viewport.zoom(), 2.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let frame = frame(10, 10);
        let mut viewport = ViewportState::default();
        viewport.zoom_at(10.0, frame.container.center(), &frame);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        viewport.zoom_at(f32::NAN, frame.container.center(), &frame);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
    }

    #[test]
    fn pan_cannot_push_grid_out_of_view() {
        let frame = frame(10, 10);
        let mut viewport = ViewportState::default();
        viewport.pan_by(vec2(5000.0, -5000.0), &frame);
        let rect = viewport.geometry(&frame).rect();
        let visible = frame.visible_rect();
        assert!(visible.max.x - rect.min.x >= MIN_VISIBLE_EXTENT - 0.01);
        assert!(rect.max.y - visible.min.y >= MIN_VISIBLE_EXTENT - 0.01);
    }

    #[test]
    fn random_pan_zoom_sequences_stay_in_view() {
        let mut rng = StdRng::seed_from_u64(42);
        for (rows, cols) in [(5, 30), (30, 5), (12, 12), (60, 60)] {
            let frame = frame(rows, cols).with_keyboard_inset(rng.gen_range(0.0..200.0));
            let mut viewport = ViewportState::default();
            for _ in 0..200 {
                if rng.gen_bool(0.5) {
                    let delta = vec2(rng.gen_range(-600.0..600.0), rng.gen_range(-600.0..600.0));
                    viewport.pan_by(delta, &frame);
                } else {
                    let focus = pos2(rng.gen_range(-50.0..450.0), rng.gen_range(-50.0..350.0));
                    viewport.zoom_at(rng.gen_range(0.5..2.0), focus, &frame);
                }
                let rect = viewport.geometry(&frame).rect();
                assert!(
                    rect.intersects(frame.visible_rect()),
                    "grid {:?} left view {:?}",
                    rect,
                    frame.visible_rect()
                );
            }
        }
    }

    #[test]
    fn keyboard_inset_shrinks_visible_rect() {
        let frame = frame(10, 10).with_keyboard_inset(100.0);
        assert_eq!(frame.visible_rect().max.y, 200.0);
        let huge = frame.with_keyboard_inset(10_000.0);
        assert_eq!(huge.visible_rect().height(), MIN_VISIBLE_EXTENT);
    }

    #[test]
    fn ensure_cell_visible_scrolls_hidden_cells_into_view() {
        let frame = frame(10, 10).with_keyboard_inset(120.0);
        let mut viewport = ViewportState::default();
        viewport.zoom_at(2.5, frame.container.center(), &frame);

        viewport.ensure_cell_visible(9, 9, &frame);
        let cell = viewport.geometry(&frame).cell_rect(9, 9);
        let visible = frame.visible_rect();
        assert!(visible.contains_rect(cell), "{:?} not in {:?}", cell, visible);

        viewport.ensure_cell_visible(0, 0, &frame);
        let cell = viewport.geometry(&frame).cell_rect(0, 0);
        assert!(visible.contains_rect(cell));
    }
}
