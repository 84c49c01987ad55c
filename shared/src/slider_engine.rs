//! Slider Engine - the non-cosmetic core of the graph slider widget
//!
//! Owns the normalized indicator position, the pointer-to-position mapping,
//! and the derived time-of-day label.

/// Overall artboard (surface) size in pixels. The artboard is square.
pub const ARTBOARD_SIZE: f32 = 500.0;

/// Drawable graph size in pixels. The graph is square and centered in the artboard.
pub const GRAPH_SIZE: f32 = 200.0;

/// Height of the vertical time-indicator line in pixels. Its bottom sits on
/// the graph bottom, so it extends above the graph's top edge.
pub const INDICATOR_HEIGHT: f32 = 224.0;

/// Pixel offset of the graph's edge from the matching artboard edge.
pub const fn graph_offset() -> f32 {
    (ARTBOARD_SIZE - GRAPH_SIZE) / 2.0
}

/// Pixel geometry of the drawable graph within the containing surface.
///
/// Queried from the live surface on demand, one value per pointer event, so a
/// surface that moves or resizes mid-drag maps subsequent events against its
/// new geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphGeometry {
    /// X coordinate of the graph's left edge.
    pub left: f32,
    /// Width of the graph in pixels.
    pub width: f32,
}

impl GraphGeometry {
    /// Geometry of the centered graph given the artboard's left edge.
    pub fn from_artboard_left(artboard_left: f32) -> Self {
        Self {
            left: artboard_left + graph_offset(),
            width: GRAPH_SIZE,
        }
    }

    /// X coordinate of the graph's right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Convert a normalized position [0..1] to an x coordinate.
    pub fn position_to_x(&self, p: f32) -> f32 {
        self.left + p * self.width
    }

    /// Convert an x coordinate to a normalized position [0..1].
    ///
    /// The coordinate is clamped to the graph's pixel bounds *before* the
    /// division so the edges are pixel-exact; the result is clamped to [0..1]
    /// again as a backstop.
    pub fn x_to_position(&self, x: f32) -> f32 {
        let clamped_x = x.max(self.left).min(self.right());
        ((clamped_x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// Drag session state. A session exists only between a pointer-down on the
/// indicator handle and the matching pointer-up, which may land anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSession {
    Idle,
    Dragging,
}

/// Owns the single normalized value [0..1] describing where the time
/// indicator sits along the graph's horizontal extent.
///
/// All pointer input is coerced or dropped rather than rejected: coordinates
/// outside the graph clamp to the nearest edge, non-finite coordinates and
/// events arriving before the surface geometry is known are ignored.
#[derive(Debug, Clone)]
pub struct PositionController {
    position: f32,
    session: DragSession,
}

impl Default for PositionController {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionController {
    /// New controller with the indicator at the midpoint of the graph.
    pub fn new() -> Self {
        Self {
            position: 0.5,
            session: DragSession::Idle,
        }
    }

    /// Current normalized position, guaranteed in [0..1].
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.session == DragSession::Dragging
    }

    /// Start a drag session and immediately move the indicator toward the
    /// pointer. There is no dead zone: press-and-hold on the handle jumps the
    /// position first, then follows subsequent moves.
    pub fn begin_drag(&mut self, geometry: Option<GraphGeometry>, pointer_x: f32) {
        self.session = DragSession::Dragging;
        self.update_from_pointer(geometry, pointer_x);
    }

    /// Update the position from a pointer x coordinate.
    ///
    /// No-op unless a drag session is active. Events delivered before the
    /// surface has been laid out (`geometry` is `None`) are dropped silently.
    pub fn update_from_pointer(&mut self, geometry: Option<GraphGeometry>, pointer_x: f32) {
        if self.session != DragSession::Dragging {
            return;
        }
        let Some(geometry) = geometry else {
            return;
        };
        if !pointer_x.is_finite() {
            return;
        }
        self.position = geometry.x_to_position(pointer_x);
    }

    /// End the drag session. The position retains its last value.
    pub fn end_drag(&mut self) {
        self.session = DragSession::Idle;
    }
}

/// Format a normalized position as a "HH:MM" time-of-day label.
///
/// Pure function of the position; the label is never stored. Position 1.0
/// formats as "24:00" rather than wrapping to "00:00" - the right edge of the
/// graph means the end of the day, not the start of the next one.
pub fn time_label(position: f32) -> String {
    let scaled = position * 24.0;
    let hours = scaled.floor();
    let minutes = ((scaled - hours) * 60.0).floor();
    format!("{:02}:{:02}", hours as u32, minutes as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GraphGeometry {
        // Artboard left edge at 100 puts the graph at [250, 450].
        GraphGeometry::from_artboard_left(100.0)
    }

    #[test]
    fn test_graph_is_centered_in_artboard() {
        let g = geometry();
        assert_eq!(g.left, 100.0 + graph_offset());
        assert_eq!(g.width, GRAPH_SIZE);
        assert_eq!(graph_offset(), 150.0);
    }

    #[test]
    fn test_position_starts_at_midpoint() {
        let controller = PositionController::new();
        assert_eq!(controller.position(), 0.5);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_edges_are_pixel_exact() {
        let g = geometry();
        let mut controller = PositionController::new();
        controller.begin_drag(Some(g), g.left);
        assert_eq!(controller.position(), 0.0);
        controller.update_from_pointer(Some(g), g.right());
        assert_eq!(controller.position(), 1.0);
    }

    #[test]
    fn test_position_clamps_far_outside_graph() {
        let g = geometry();
        let mut controller = PositionController::new();
        controller.begin_drag(Some(g), -10_000.0);
        assert_eq!(controller.position(), 0.0);
        controller.update_from_pointer(Some(g), 10_000.0);
        assert_eq!(controller.position(), 1.0);
    }

    #[test]
    fn test_position_always_in_range() {
        let g = geometry();
        let mut controller = PositionController::new();
        controller.begin_drag(Some(g), g.left - 3.0);
        for i in 0..200 {
            let x = g.left - 100.0 + i as f32 * 2.5;
            controller.update_from_pointer(Some(g), x);
            let p = controller.position();
            assert!((0.0..=1.0).contains(&p), "position {} out of range at x={}", p, x);
        }
    }

    #[test]
    fn test_non_finite_pointer_is_dropped() {
        let g = geometry();
        let mut controller = PositionController::new();
        controller.begin_drag(Some(g), g.left + 50.0);
        let before = controller.position();
        controller.update_from_pointer(Some(g), f32::NAN);
        assert_eq!(controller.position(), before);
        controller.update_from_pointer(Some(g), f32::INFINITY);
        assert_eq!(controller.position(), before);
    }

    #[test]
    fn test_missing_geometry_is_dropped() {
        let mut controller = PositionController::new();
        controller.begin_drag(None, 300.0);
        assert_eq!(controller.position(), 0.5);
        assert!(controller.is_dragging());
        controller.update_from_pointer(None, 300.0);
        assert_eq!(controller.position(), 0.5);
    }

    #[test]
    fn test_drag_sequence() {
        let g = geometry();
        let mut controller = PositionController::new();

        controller.begin_drag(Some(g), g.left + 50.0);
        assert!(controller.is_dragging());
        assert_eq!(controller.position(), 0.25);

        controller.update_from_pointer(Some(g), g.left + 150.0);
        assert_eq!(controller.position(), 0.75);

        controller.end_drag();
        assert!(!controller.is_dragging());
        let retained = controller.position();

        // Session is inactive - moves must not change the position.
        controller.update_from_pointer(Some(g), g.left);
        assert_eq!(controller.position(), retained);
    }

    #[test]
    fn test_update_is_idempotent() {
        let g = geometry();
        let mut controller = PositionController::new();
        controller.begin_drag(Some(g), g.left + 37.0);
        let first = controller.position();
        controller.update_from_pointer(Some(g), g.left + 37.0);
        assert_eq!(controller.position(), first);
    }

    #[test]
    fn test_time_label_midnight() {
        assert_eq!(time_label(0.0), "00:00");
    }

    #[test]
    fn test_time_label_noon() {
        assert_eq!(time_label(0.5), "12:00");
    }

    #[test]
    fn test_time_label_just_under_top_edge() {
        assert_eq!(time_label(0.9999), "23:59");
    }

    #[test]
    fn test_time_label_top_edge_is_24_00() {
        // The right edge reads "24:00", not "00:00". Kept on purpose.
        assert_eq!(time_label(1.0), "24:00");
    }

    #[test]
    fn test_time_label_quarter_day() {
        assert_eq!(time_label(0.25), "06:00");
    }
}
