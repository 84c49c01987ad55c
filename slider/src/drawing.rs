//! Drawing module - artboard layout, chart reveal, and the time indicator
//!
//! Renders the fixed 500x500 artboard with its centered 200x200 line graph
//! and the draggable vertical indicator with its time pill.

use nannou::prelude::*;
use shared::{GraphGeometry, ARTBOARD_SIZE, GRAPH_SIZE, INDICATOR_HEIGHT};

use crate::chart;

/// How far from the 1px indicator line a press still grabs the handle.
pub const HANDLE_GRAB_TOLERANCE: f32 = 6.0;

/// Vertical room above the line that belongs to the handle (the time pill).
pub const PILL_CLEARANCE: f32 = 22.0;

/// Color palette for the graph slider - dark artboard, muted blue trace
pub mod colors {
    use nannou::prelude::*;

    /// Window and artboard background
    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 25,
        green: 25,
        blue: 25,
        standard: std::marker::PhantomData,
    };

    /// Chart trace (muted steel blue)
    pub const TRACE: Srgb<u8> = Srgb {
        red: 43,
        green: 100,
        blue: 145,
        standard: std::marker::PhantomData,
    };

    /// Indicator line and pill background
    pub const INDICATOR: Srgb<u8> = Srgb {
        red: 40,
        green: 40,
        blue: 40,
        standard: std::marker::PhantomData,
    };

    /// Artboard border
    pub const BORDER: Srgb<u8> = Srgb {
        red: 45,
        green: 45,
        blue: 45,
        standard: std::marker::PhantomData,
    };

    /// Text primary
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };

    /// Text secondary
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 140,
        green: 135,
        blue: 130,
        standard: std::marker::PhantomData,
    };
}

/// Layout of the fixed-size artboard within the window
#[derive(Debug, Clone)]
pub struct ArtboardLayout {
    /// Left edge of the artboard (x coordinate)
    pub left: f32,
    /// Right edge of the artboard (x coordinate)
    pub right: f32,
    /// Top edge of the artboard (y coordinate)
    pub top: f32,
    /// Bottom edge of the artboard (y coordinate)
    pub bottom: f32,
}

impl ArtboardLayout {
    /// Center the artboard in the window region left of the settings panel.
    pub fn calculate(window_rect: Rect, side_panel_width: f32) -> Self {
        let usable_left = window_rect.left();
        let usable_right = window_rect.right() - side_panel_width;
        let center_x = (usable_left + usable_right) / 2.0;
        let center_y = window_rect.y();
        let half = ARTBOARD_SIZE / 2.0;

        Self {
            left: center_x - half,
            right: center_x + half,
            top: center_y + half,
            bottom: center_y - half,
        }
    }

    /// Pixel geometry of the centered graph, queried fresh per event.
    pub fn graph_geometry(&self) -> GraphGeometry {
        GraphGeometry::from_artboard_left(self.left)
    }

    /// Top edge of the drawable graph.
    pub fn graph_top(&self) -> f32 {
        self.top - shared::graph_offset()
    }

    /// Bottom edge of the drawable graph.
    pub fn graph_bottom(&self) -> f32 {
        self.graph_top() - GRAPH_SIZE
    }

    /// X coordinate of the indicator line for a normalized position.
    pub fn indicator_x(&self, position: f32) -> f32 {
        self.graph_geometry().position_to_x(position)
    }

    /// Whether a point lands on the indicator handle (the 1px line plus the
    /// pill above it, widened by a grab tolerance).
    pub fn handle_contains(&self, position: f32, x: f32, y: f32) -> bool {
        let ix = self.indicator_x(position);
        let line_bottom = self.graph_bottom();
        let line_top = line_bottom + INDICATOR_HEIGHT;

        (x - ix).abs() <= HANDLE_GRAB_TOLERANCE
            && y >= line_bottom
            && y <= line_top + PILL_CLEARANCE
    }
}

/// A palette color with an explicit alpha.
pub fn with_alpha(color: Srgb<u8>, alpha: u8) -> Srgba<u8> {
    srgba(color.red, color.green, color.blue, alpha)
}

/// Whether the pointer is resting on the indicator handle outside a drag.
pub fn is_handle_hovered(
    layout: &ArtboardLayout,
    position: f32,
    mouse_position: Option<Point2>,
    is_dragging: bool,
) -> bool {
    if is_dragging {
        return false;
    }
    mouse_position
        .map(|pos| layout.handle_contains(position, pos.x, pos.y))
        .unwrap_or(false)
}

/// Ease-out cubic, used for the draw-in reveal.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Draw the artboard background and its subtle border.
pub fn draw_artboard(draw: &Draw, layout: &ArtboardLayout) {
    let center_x = (layout.left + layout.right) / 2.0;
    let center_y = (layout.top + layout.bottom) / 2.0;

    draw.rect()
        .x_y(center_x, center_y)
        .w_h(ARTBOARD_SIZE, ARTBOARD_SIZE)
        .color(colors::BACKGROUND);

    draw.rect()
        .x_y(center_x, center_y)
        .w_h(ARTBOARD_SIZE, ARTBOARD_SIZE)
        .no_fill()
        .stroke(colors::BORDER)
        .stroke_weight(1.0);
}

/// Draw the chart trace, revealed up to `reveal_fraction` of its arc length.
pub fn draw_chart(draw: &Draw, layout: &ArtboardLayout, reveal_fraction: f32, opacity: f32) {
    let geometry = layout.graph_geometry();
    let points = chart::graph_points(geometry.left, layout.graph_top(), GRAPH_SIZE);
    let visible = chart::trim_to_fraction(&points, reveal_fraction);

    if visible.len() < 2 {
        return;
    }

    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    for pair in visible.windows(2) {
        draw.line()
            .start(pair[0])
            .end(pair[1])
            .color(with_alpha(colors::TRACE, alpha))
            .weight(1.5);
    }
}

/// Draw the grab hint behind the indicator while the pointer rests on the
/// handle: a soft halo telling the user the line can be dragged.
pub fn draw_handle_hint(draw: &Draw, layout: &ArtboardLayout, position: f32) {
    let x = layout.indicator_x(position);
    let line_bottom = layout.graph_bottom();
    let line_top = line_bottom + INDICATOR_HEIGHT;

    draw.line()
        .start(pt2(x, line_bottom))
        .end(pt2(x, line_top))
        .color(with_alpha(colors::TEXT_SECONDARY, 50))
        .weight(5.0);
}

/// Draw the vertical time indicator and the pill showing its label.
pub fn draw_indicator(draw: &Draw, layout: &ArtboardLayout, position: f32, label: &str) {
    let x = layout.indicator_x(position);
    let line_bottom = layout.graph_bottom();
    let line_top = line_bottom + INDICATOR_HEIGHT;

    draw.line()
        .start(pt2(x, line_bottom))
        .end(pt2(x, line_top))
        .color(colors::INDICATOR)
        .weight(1.0);

    // Time pill above the line
    let pill_w = 42.0;
    let pill_h = 16.0;
    let pill_y = line_top + 8.0 + pill_h / 2.0;

    draw.rect()
        .x_y(x, pill_y)
        .w_h(pill_w, pill_h)
        .color(colors::INDICATOR);

    draw.text(label)
        .x_y(x, pill_y)
        .color(colors::TEXT_PRIMARY)
        .font_size(10)
        .w(pill_w);
}

/// Draw the title above the artboard.
pub fn draw_title(draw: &Draw, window_rect: Rect) {
    let title_y = window_rect.top() - 30.0;

    draw.text("Graph Slider")
        .x_y(window_rect.left() + 100.0, title_y)
        .color(colors::TEXT_PRIMARY)
        .font_size(18)
        .w(200.0);
}

/// Draw keyboard help hints at the bottom
pub fn draw_help_hints(draw: &Draw, layout: &ArtboardLayout, window_rect: Rect) {
    let help_y = window_rect.bottom() + 15.0;
    let center_x = (layout.left + layout.right) / 2.0;

    draw.text("Drag the line to scrub the day  -  Space replay  -  R reduced motion")
        .x_y(center_x, help_y)
        .color(with_alpha(colors::TEXT_SECONDARY, 150))
        .font_size(10)
        .w(ARTBOARD_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ArtboardLayout {
        ArtboardLayout::calculate(Rect::from_x_y_w_h(0.0, 0.0, 900.0, 620.0), 260.0)
    }

    #[test]
    fn test_artboard_is_fixed_size() {
        let l = layout();
        assert_eq!(l.right - l.left, ARTBOARD_SIZE);
        assert_eq!(l.top - l.bottom, ARTBOARD_SIZE);
    }

    #[test]
    fn test_graph_is_centered() {
        let l = layout();
        let g = l.graph_geometry();
        assert_eq!(g.left - l.left, shared::graph_offset());
        assert_eq!(l.right - g.right(), shared::graph_offset());
        assert_eq!(l.top - l.graph_top(), shared::graph_offset());
        assert_eq!(l.graph_bottom() - l.bottom, shared::graph_offset());
    }

    #[test]
    fn test_indicator_x_matches_output_contract() {
        let l = layout();
        let g = l.graph_geometry();
        assert_eq!(l.indicator_x(0.0), g.left);
        assert_eq!(l.indicator_x(1.0), g.right());
        assert_eq!(l.indicator_x(0.5), g.left + g.width / 2.0);
    }

    #[test]
    fn test_handle_hit_test() {
        let l = layout();
        let x = l.indicator_x(0.5);
        let mid_y = l.graph_bottom() + INDICATOR_HEIGHT / 2.0;

        assert!(l.handle_contains(0.5, x, mid_y));
        assert!(l.handle_contains(0.5, x + HANDLE_GRAB_TOLERANCE, mid_y));
        assert!(!l.handle_contains(0.5, x + HANDLE_GRAB_TOLERANCE + 1.0, mid_y));
        assert!(!l.handle_contains(0.5, x, l.graph_bottom() - 1.0));
        assert!(!l.handle_contains(0.5, x, l.graph_bottom() + INDICATOR_HEIGHT + PILL_CLEARANCE + 1.0));
    }

    #[test]
    fn test_handle_hover_detection() {
        let l = layout();
        let x = l.indicator_x(0.5);
        let mid_y = l.graph_bottom() + INDICATOR_HEIGHT / 2.0;

        assert!(is_handle_hovered(&l, 0.5, Some(pt2(x, mid_y)), false));
        // No hint while dragging, off the handle, or before the pointer has
        // entered the window.
        assert!(!is_handle_hovered(&l, 0.5, Some(pt2(x, mid_y)), true));
        assert!(!is_handle_hovered(&l, 0.5, Some(pt2(x + 50.0, mid_y)), false));
        assert!(!is_handle_hovered(&l, 0.5, None, false));
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = with_alpha(colors::TRACE, 120);
        assert_eq!((c.red, c.green, c.blue, c.alpha), (43, 100, 145, 120));
    }

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mid = ease_out_cubic(0.5);
        assert!(mid > 0.5 && mid < 1.0);
    }
}
