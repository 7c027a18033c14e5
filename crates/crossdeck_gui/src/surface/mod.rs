//! Interactive puzzle surface: viewport, gestures, and rendering.
//!
//! [`PuzzleSurface`] owns everything that is view-only (zoom, pan, pointer
//! state, the selection animation). It reads the [`GameSession`] and reports
//! what the user asked for as [`SurfaceAction`]s; the app applies them.

/// Selection outline animation handle.
pub mod animation;
/// Pointer gesture classification.
pub mod gesture;
/// On-screen keyboard inset heuristic.
pub mod keyboard;
/// Paint routines and layout helpers.
pub mod render;
/// Palettes and decoration artwork.
pub mod theme;
/// Zoom/pan state and grid geometry.
pub mod viewport;

use animation::SelectionAnimation;
use crossdeck_core::{CellPos, Direction, GameSession};
use eframe::egui::{self, Sense, TextureHandle, TextureOptions};
use gesture::{Gesture, GestureTracker, PointerSample};
use keyboard::KeyboardInsetTracker;
use render::SurfaceScene;
use std::collections::HashSet;
use std::time::Duration;
use theme::{Palette, ThemeMode};
use viewport::{GridGeometry, ViewFrame, ViewportState};

/// Requests produced by pointer input on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    Select { row: usize, col: usize },
    Reveal { row: usize, col: usize },
}

const LONG_PRESS_POLL: Duration = Duration::from_millis(50);
/// Zoom factor per point of wheel scroll, applied as `exp(rate * delta)`.
const WHEEL_ZOOM_RATE: f32 = 0.0015;

/// View state for one puzzle session.
#[derive(Default)]
pub struct PuzzleSurface {
    viewport: ViewportState,
    gestures: GestureTracker,
    keyboard: KeyboardInsetTracker,
    animation: SelectionAnimation,
    decoration: Option<(ThemeMode, TextureHandle)>,
    theme: ThemeMode,
    last_selected: Option<CellPos>,
    last_inset: f32,
    last_frame: Option<ViewFrame>,
    last_geometry: Option<GridGeometry>,
}

impl PuzzleSurface {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Geometry used by the most recent frame.
    pub fn last_geometry(&self) -> Option<GridGeometry> {
        self.last_geometry
    }

    /// Container, grid size, and keyboard inset used by the most recent frame.
    pub fn last_view_frame(&self) -> Option<ViewFrame> {
        self.last_frame
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Forget zoom, pan, and selection tracking for a new puzzle.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.gestures = GestureTracker::default();
        self.animation.stop();
        self.last_selected = None;
    }

    /// Stop per-frame work when the session ends.
    pub fn shutdown(&mut self) {
        self.animation.stop();
        self.last_selected = None;
        self.last_geometry = None;
        self.last_frame = None;
    }

    fn decoration_texture(&mut self, ctx: &egui::Context) -> TextureHandle {
        if let Some((mode, texture)) = &self.decoration {
            if *mode == self.theme {
                return texture.clone();
            }
        }
        let texture = ctx.load_texture(
            "crossdeck-decoration",
            theme::decoration_image(self.theme),
            TextureOptions::LINEAR,
        );
        self.decoration = Some((self.theme, texture.clone()));
        texture
    }

    fn sample_pointer(ui: &egui::Ui, container: egui::Rect) -> PointerSample {
        ui.input(|input| {
            let inside = |pos: &egui::Pos2| container.contains(*pos);
            let pointer = &input.pointer;
            let pressed_at = if pointer.primary_pressed() {
                pointer.press_origin().filter(inside)
            } else {
                None
            };
            let secondary_click = if pointer.button_clicked(egui::PointerButton::Secondary) {
                pointer.interact_pos().filter(inside)
            } else {
                None
            };
            let pinch = input
                .multi_touch()
                .map(|touch| (touch.zoom_delta, touch.center_pos))
                .filter(|(_, center)| inside(center));
            let scroll = input.smooth_scroll_delta.y;
            let zoom = if input.zoom_delta() != 1.0 {
                input.zoom_delta()
            } else {
                (scroll * WHEEL_ZOOM_RATE).exp()
            };
            let wheel_zoom = pointer
                .hover_pos()
                .filter(inside)
                .filter(|_| pinch.is_none() && zoom != 1.0)
                .map(|pos| (zoom, pos));
            PointerSample {
                time: input.time,
                pressed_at,
                position: pointer.interact_pos(),
                primary_down: pointer.primary_down(),
                released: pointer.primary_released(),
                secondary_click,
                pinch,
                wheel_zoom,
            }
        })
    }

    /// Handle input and paint the puzzle into the remaining space of `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> Vec<SurfaceAction> {
        let puzzle = session.puzzle();
        let size = puzzle.size();
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let container = response.rect;

        let window = ui.ctx().input(|input| input.screen_rect().size());
        let inset = self.keyboard.observe(window, container.size());
        let frame = ViewFrame::new(container, size.rows, size.cols).with_keyboard_inset(inset);
        let sample = Self::sample_pointer(ui, container);
        let now = sample.time;

        let mut actions = Vec::new();
        for gesture in self.gestures.update(&sample) {
            match gesture {
                Gesture::Pan(delta) => self.viewport.pan_by(delta, &frame),
                Gesture::Zoom { factor, focus } => self.viewport.zoom_at(factor, focus, &frame),
                Gesture::Tap(pos) => {
                    if let Some(cell) = self.viewport.geometry(&frame).cell_at(pos) {
                        actions.push(SurfaceAction::Select {
                            row: cell.row,
                            col: cell.col,
                        });
                    }
                }
                Gesture::Reveal(pos) => {
                    if let Some(cell) = self.viewport.geometry(&frame).cell_at(pos) {
                        actions.push(SurfaceAction::Reveal {
                            row: cell.row,
                            col: cell.col,
                        });
                    }
                }
            }
        }

        let selected = session.selection().selected;
        if selected != self.last_selected || (inset - self.last_inset).abs() > f32::EPSILON {
            match selected {
                Some(pos) => {
                    self.animation.start(now);
                    self.viewport.ensure_cell_visible(pos.row, pos.col, &frame);
                }
                None => self.animation.stop(),
            }
            self.last_selected = selected;
            self.last_inset = inset;
        }
        self.viewport.clamp(&frame);

        let geometry = self.viewport.geometry(&frame);
        self.last_geometry = Some(geometry);
        self.last_frame = Some(frame);
        let palette = Palette::for_mode(self.theme);
        let active_cells: HashSet<CellPos> = session.active_group_cells().into_iter().collect();
        let clue = session.active_word().map(|word| {
            let heading = match word.direction {
                Direction::Across => "Across",
                Direction::Down => "Down",
            };
            match word.number {
                Some(number) => format!("{} {}: {}", number, heading, word.clue),
                None => format!("{}: {}", heading, word.clue),
            }
        });
        let dash_phase = self.animation.tick(ui.ctx(), now);
        let decoration = puzzle
            .placeholder_bounds()
            .is_some()
            .then(|| self.decoration_texture(ui.ctx()));

        let scene = SurfaceScene {
            puzzle,
            selection: session.selection(),
            active_cells: &active_cells,
            clue: clue.as_deref(),
            palette: &palette,
            geometry,
            visible: frame.visible_rect(),
            dash_phase,
            decoration: decoration.as_ref(),
        };
        render::paint(&painter, &scene);

        if self.gestures.is_pending() {
            ui.ctx().request_repaint_after(LONG_PRESS_POLL);
        }
        actions
    }
}
