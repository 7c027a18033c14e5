//! Surface renderer: paints the puzzle grid, overlays, and the clue tooltip.

use super::theme::Palette;
use super::viewport::GridGeometry;
use crossdeck_core::{CellKind, CellPos, Direction, GridCell, Puzzle, SelectionState};
use eframe::egui::{
    pos2, vec2, Align2, Color32, FontId, Galley, Painter, Pos2, Rect, Shape, Stroke, StrokeKind,
    TextureHandle, Vec2,
};
use std::collections::HashSet;
use std::sync::Arc;

pub const TOOLTIP_GAP: f32 = 8.0;
pub const TOOLTIP_MAX_WIDTH: f32 = 260.0;
const TOOLTIP_PADDING: Vec2 = vec2(8.0, 6.0);
const TOOLTIP_POINTER: f32 = 6.0;
pub const MIN_WRAPPER_FONT: f32 = 7.0;
const DASH: f32 = 4.0;

/// Everything one paint pass needs.
pub struct SurfaceScene<'a> {
    pub puzzle: &'a Puzzle,
    pub selection: &'a SelectionState,
    /// Cells of the active sentence.
    pub active_cells: &'a HashSet<CellPos>,
    /// Tooltip text for the selected cell.
    pub clue: Option<&'a str>,
    pub palette: &'a Palette,
    pub geometry: GridGeometry,
    /// Viewport area not covered by the keyboard.
    pub visible: Rect,
    /// Dash offset of the selection outline; `None` draws it solid.
    pub dash_phase: Option<f32>,
    pub decoration: Option<&'a TextureHandle>,
}

/// Border styles in ascending paint priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BorderStyle {
    Empty,
    Default,
    Active,
    Correct,
    Incorrect,
}

pub fn border_style(cell: &GridCell, active: bool) -> BorderStyle {
    match cell.kind {
        CellKind::Empty | CellKind::Placeholder => BorderStyle::Empty,
        _ if cell.is_incorrect() => BorderStyle::Incorrect,
        _ if cell.kind.is_letter() && cell.is_correct() => BorderStyle::Correct,
        _ if active => BorderStyle::Active,
        _ => BorderStyle::Default,
    }
}

fn border_stroke(style: BorderStyle, palette: &Palette) -> Stroke {
    match style {
        BorderStyle::Empty => Stroke::new(0.5, palette.border_empty),
        BorderStyle::Default => Stroke::new(1.0, palette.border_default),
        BorderStyle::Active => Stroke::new(1.5, palette.border_active),
        BorderStyle::Correct => Stroke::new(1.5, palette.border_correct),
        BorderStyle::Incorrect => Stroke::new(1.5, palette.border_incorrect),
    }
}

/// Base fill of a cell; `None` leaves the background showing.
pub fn cell_fill(cell: &GridCell, selected: bool, palette: &Palette) -> Option<Color32> {
    let fill = match cell.kind {
        CellKind::Empty => return None,
        CellKind::Placeholder => palette.placeholder,
        CellKind::Space => palette.cell_space,
        CellKind::Wrapper => palette.cell_wrapper,
        CellKind::Filled | CellKind::Start => {
            if selected {
                palette.cell_selected
            } else if cell.is_incorrect() {
                palette.cell_incorrect
            } else if cell.is_correct() {
                palette.cell_correct
            } else {
                palette.cell_default
            }
        }
    };
    Some(fill)
}

/// UV sub-rect that scales an image to cover `target` and crops the overflow.
pub fn cover_uv(image: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let width = target_aspect / image_aspect;
        let left = (1.0 - width) / 2.0;
        Rect::from_min_max(pos2(left, 0.0), pos2(left + width, 1.0))
    } else {
        let height = image_aspect / target_aspect;
        let top = (1.0 - height) / 2.0;
        Rect::from_min_max(pos2(0.0, top), pos2(1.0, top + height))
    }
}

/// Side of the anchor cell the tooltip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipSide {
    Above,
    Below,
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub rect: Rect,
    pub side: TooltipSide,
}

fn clamp_start(start: f32, len: f32, lo: f32, hi: f32) -> f32 {
    if len >= hi - lo {
        lo
    } else {
        start.clamp(lo, hi - len)
    }
}

/// Place a tooltip of `size` next to `anchor`, preferring above, then below,
/// right, and finally left, and keep it inside `visible`.
pub fn place_tooltip(anchor: Rect, size: Vec2, visible: Rect) -> TooltipPlacement {
    let side = if anchor.min.y - TOOLTIP_GAP - size.y >= visible.min.y {
        TooltipSide::Above
    } else if anchor.max.y + TOOLTIP_GAP + size.y <= visible.max.y {
        TooltipSide::Below
    } else if anchor.max.x + TOOLTIP_GAP + size.x <= visible.max.x {
        TooltipSide::Right
    } else {
        TooltipSide::Left
    };

    let center = anchor.center();
    let min = match side {
        TooltipSide::Above => pos2(center.x - size.x / 2.0, anchor.min.y - TOOLTIP_GAP - size.y),
        TooltipSide::Below => pos2(center.x - size.x / 2.0, anchor.max.y + TOOLTIP_GAP),
        TooltipSide::Right => pos2(anchor.max.x + TOOLTIP_GAP, center.y - size.y / 2.0),
        TooltipSide::Left => pos2(anchor.min.x - TOOLTIP_GAP - size.x, center.y - size.y / 2.0),
    };
    let min = pos2(
        clamp_start(min.x, size.x, visible.min.x, visible.max.x),
        clamp_start(min.y, size.y, visible.min.y, visible.max.y),
    );
    TooltipPlacement {
        rect: Rect::from_min_size(min, size),
        side,
    }
}

/// Triangle from the tooltip edge to the anchor cell.
pub fn tooltip_pointer(placement: &TooltipPlacement, anchor: Rect) -> [Pos2; 3] {
    let rect = placement.rect;
    let half = TOOLTIP_POINTER;
    let along_x = anchor
        .center()
        .x
        .clamp(rect.min.x + half, (rect.max.x - half).max(rect.min.x + half));
    let along_y = anchor
        .center()
        .y
        .clamp(rect.min.y + half, (rect.max.y - half).max(rect.min.y + half));
    match placement.side {
        TooltipSide::Above => [
            pos2(along_x - half, rect.max.y),
            pos2(along_x + half, rect.max.y),
            pos2(along_x, anchor.min.y),
        ],
        TooltipSide::Below => [
            pos2(along_x + half, rect.min.y),
            pos2(along_x - half, rect.min.y),
            pos2(along_x, anchor.max.y),
        ],
        TooltipSide::Right => [
            pos2(rect.min.x, along_y - half),
            pos2(rect.min.x, along_y + half),
            pos2(anchor.max.x, along_y),
        ],
        TooltipSide::Left => [
            pos2(rect.max.x, along_y + half),
            pos2(rect.max.x, along_y - half),
            pos2(anchor.min.x, along_y),
        ],
    }
}

/// Small triangle pointing along `direction`, with its top-left at `anchor`.
pub fn arrow_glyph(anchor: Pos2, size: f32, direction: Direction) -> [Pos2; 3] {
    match direction {
        Direction::Across => [
            anchor,
            anchor + vec2(0.0, size),
            anchor + vec2(size * 0.8, size / 2.0),
        ],
        Direction::Down => [
            anchor,
            anchor + vec2(size / 2.0, size * 0.8),
            anchor + vec2(size, 0.0),
        ],
    }
}

/// Lays out wrapper text, shrinking the font until it fits `rect`.
fn fit_wrapper_galley(
    painter: &Painter,
    text: &str,
    rect: Rect,
    base_size: f32,
    color: Color32,
) -> Arc<Galley> {
    let inner = rect.shrink(2.0);
    let mut size = base_size.max(MIN_WRAPPER_FONT);
    loop {
        let galley = painter.layout(
            text.to_owned(),
            FontId::proportional(size),
            color,
            inner.width().max(1.0),
        );
        let fits = galley.size().x <= inner.width() + 0.5 && galley.size().y <= inner.height();
        if fits || size <= MIN_WRAPPER_FONT {
            return galley;
        }
        size = (size * 0.85).max(MIN_WRAPPER_FONT);
    }
}

fn paint_decoration(painter: &Painter, scene: &SurfaceScene<'_>) -> bool {
    let (Some(texture), Some((min, max))) = (scene.decoration, scene.puzzle.placeholder_bounds())
    else {
        return false;
    };
    let geometry = scene.geometry;
    let target = geometry
        .cell_rect(min.row, min.col)
        .union(geometry.cell_rect(max.row, max.col));
    let uv = cover_uv(texture.size_vec2(), target.size());
    painter
        .with_clip_rect(target.intersect(painter.clip_rect()))
        .image(texture.id(), target, uv, Color32::WHITE);
    true
}

fn selection_outline(painter: &Painter, rect: Rect, color: Color32, phase: Option<f32>) {
    let rect = rect.shrink(1.5);
    let stroke = Stroke::new(2.0, color);
    match phase {
        Some(offset) => {
            let path = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            painter.extend(Shape::dashed_line_with_offset(
                &path,
                stroke,
                &[DASH],
                &[DASH],
                offset,
            ));
        }
        None => {
            painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
        }
    }
}

fn paint_tooltip(painter: &Painter, scene: &SurfaceScene<'_>, anchor: Rect, clue: &str) {
    let palette = scene.palette;
    let galley = painter.layout(
        clue.to_owned(),
        FontId::proportional(14.0),
        palette.tooltip_text,
        TOOLTIP_MAX_WIDTH,
    );
    let size = galley.size() + TOOLTIP_PADDING * 2.0;
    let placement = place_tooltip(anchor, size, scene.visible);
    painter.add(Shape::convex_polygon(
        tooltip_pointer(&placement, anchor).to_vec(),
        palette.tooltip_fill,
        Stroke::new(1.0, palette.tooltip_border),
    ));
    painter.rect_filled(placement.rect, 6.0, palette.tooltip_fill);
    painter.rect_stroke(
        placement.rect,
        6.0,
        Stroke::new(1.0, palette.tooltip_border),
        StrokeKind::Inside,
    );
    painter.galley(
        placement.rect.min + TOOLTIP_PADDING,
        galley,
        palette.tooltip_text,
    );
}

/// Paint one frame of the puzzle.
pub fn paint(painter: &Painter, scene: &SurfaceScene<'_>) {
    let palette = scene.palette;
    let geometry = scene.geometry;
    let grid = scene.puzzle.grid();
    let clip = painter.clip_rect();
    let selected = scene.selection.selected;
    let in_view = |cell: &&GridCell| clip.intersects(geometry.cell_rect(cell.row, cell.col));

    painter.rect_filled(clip, 0.0, palette.background);
    let decorated = paint_decoration(painter, scene);
    let skip_placeholder = |cell: &&GridCell| !(decorated && cell.kind == CellKind::Placeholder);

    for cell in grid.iter().filter(in_view).filter(skip_placeholder) {
        let rect = geometry.cell_rect(cell.row, cell.col);
        if let Some(fill) = cell_fill(cell, selected == Some(cell.pos()), palette) {
            painter.rect_filled(rect, 0.0, fill);
        }
        if cell.kind != CellKind::Empty && scene.active_cells.contains(&cell.pos()) {
            painter.rect_filled(rect, 0.0, palette.active_tint);
        }
    }

    for cell in grid.iter() {
        let (Some(text), Some(span)) = (cell.wrapper_text.as_deref(), cell.cell_span) else {
            continue;
        };
        let across = cell.direction != Some(Direction::Down);
        let rect = geometry.run_rect(cell.row, cell.col, span, across);
        if !clip.intersects(rect) {
            continue;
        }
        let galley = fit_wrapper_galley(
            painter,
            text,
            rect,
            geometry.cell * 0.4,
            palette.wrapper_text,
        );
        painter.galley(rect.center() - galley.size() / 2.0, galley, palette.wrapper_text);
    }

    let mut borders: Vec<(BorderStyle, Rect)> = grid
        .iter()
        .filter(in_view)
        .filter(skip_placeholder)
        .map(|cell| {
            let active = scene.active_cells.contains(&cell.pos());
            (
                border_style(cell, active),
                geometry.cell_rect(cell.row, cell.col),
            )
        })
        .collect();
    borders.sort_by_key(|(style, _)| *style);
    for (style, rect) in borders {
        painter.rect_stroke(rect, 0.0, border_stroke(style, palette), StrokeKind::Middle);
    }

    let number_font = FontId::proportional((geometry.cell * 0.28).max(7.0));
    let letter_font = FontId::proportional(geometry.cell * 0.55);
    for cell in grid.iter().filter(in_view) {
        let rect = geometry.cell_rect(cell.row, cell.col);
        if let Some(number) = cell.number {
            let label = painter.text(
                rect.min + vec2(2.0, 1.0),
                Align2::LEFT_TOP,
                number,
                number_font.clone(),
                palette.number,
            );
            if let Some(direction) = cell.number_direction {
                let glyph = arrow_glyph(
                    pos2(label.max.x + 1.0, label.min.y + 2.0),
                    (geometry.cell * 0.14).max(3.0),
                    direction,
                );
                painter.add(Shape::convex_polygon(
                    glyph.to_vec(),
                    palette.number,
                    Stroke::NONE,
                ));
            }
        }
        if let (true, Some(value)) = (cell.kind.is_letter(), cell.value) {
            painter.text(
                rect.center() + vec2(0.0, geometry.cell * 0.06),
                Align2::CENTER_CENTER,
                value,
                letter_font.clone(),
                palette.letter,
            );
        }
        if cell.is_incorrect() {
            painter.rect_stroke(
                rect.shrink(2.0),
                0.0,
                Stroke::new(2.0, palette.border_incorrect),
                StrokeKind::Inside,
            );
        }
    }

    let Some(pos) = selected else {
        return;
    };
    let anchor = geometry.cell_rect(pos.row, pos.col);
    selection_outline(painter, anchor, palette.selection_outline, scene.dash_phase);
    if let Some(clue) = scene.clue {
        paint_tooltip(painter, scene, anchor, clue);
    }
}
