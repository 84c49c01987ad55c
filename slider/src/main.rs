//! Graph Slider
//!
//! A fixed-size artboard showing a line graph that draws itself in on
//! launch, overlaid with a vertical time indicator. Dragging the indicator
//! scrubs a normalized position across the graph; the pill above it shows
//! the mapped time of day.

mod chart;
mod drawing;
mod ui;

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{time_label, PositionController};

use crate::drawing::{
    colors, draw_artboard, draw_chart, draw_handle_hint, draw_help_hints, draw_indicator,
    draw_title, ease_out_cubic, is_handle_hovered, ArtboardLayout,
};
use crate::ui::{draw_settings_panel, PanelResult};

const SIDE_PANEL_WIDTH: f32 = 260.0;
/// Duration of the chart draw-in reveal, seconds.
const REVEAL_DURATION: f32 = 1.2;
/// Duration of the chart opacity fade, seconds.
const FADE_DURATION: f32 = 0.6;

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
        }
    }
}

/// Application state
struct Model {
    /// Indicator position and drag session
    controller: PositionController,
    /// App time at which the current draw-in reveal started
    reveal_started_at: f32,
    /// Reduced motion preference
    reduced_motion: bool,
    /// Mouse position for the handle hover hint
    mouse_position: Option<Point2>,
    /// egui integration
    egui: Egui,
}

fn save_config(model: &Model) {
    let config = Config {
        reduced_motion: model.reduced_motion,
    };
    if let Err(e) = shared::save_config(&config) {
        eprintln!("Failed to save config: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Create window
    let window_id = app
        .new_window()
        .title("Graph Slider")
        .size(900, 620)
        .min_size(780, 560)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    // Load configuration
    let config: Config = shared::load_config().ok().flatten().unwrap_or_default();

    Model {
        controller: PositionController::new(),
        reveal_started_at: app.time,
        reduced_motion: config.reduced_motion,
        mouse_position: None,
        egui,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    // Collect readouts before borrowing egui
    let label = time_label(model.controller.position());
    let position = model.controller.position();
    let is_dragging = model.controller.is_dragging();
    let mut reduced_motion = model.reduced_motion;

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let panel_result: PanelResult =
        draw_settings_panel(&ctx, &label, position, is_dragging, &mut reduced_motion);

    drop(ctx);

    // Apply results after the egui frame is done
    if panel_result.replay {
        model.reveal_started_at = app.time;
    }
    if panel_result.reduced_motion_changed {
        model.reduced_motion = reduced_motion;
        save_config(model);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Clear background
    draw.background().color(colors::BACKGROUND);

    // Calculate layout
    let layout = ArtboardLayout::calculate(window_rect, SIDE_PANEL_WIDTH);

    draw_artboard(&draw, &layout);

    // Reveal progress: arc-length fraction over 1.2s, opacity over 0.6s
    let (reveal_fraction, opacity) = if model.reduced_motion {
        (1.0, 1.0)
    } else {
        let elapsed = app.time - model.reveal_started_at;
        (
            ease_out_cubic(elapsed / REVEAL_DURATION),
            ease_out_cubic(elapsed / FADE_DURATION),
        )
    };

    draw_chart(&draw, &layout, reveal_fraction, opacity);

    // Grab hint when the pointer rests on the handle
    let position = model.controller.position();
    if is_handle_hovered(
        &layout,
        position,
        model.mouse_position,
        model.controller.is_dragging(),
    ) {
        draw_handle_hint(&draw, &layout, position);
    }

    // The indicator renders at graph_left + position * graph_width
    let label = time_label(model.controller.position());
    draw_indicator(&draw, &layout, model.controller.position(), &label);

    draw_title(&draw, window_rect);
    draw_help_hints(&draw, &layout, window_rect);

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Space - replay the draw-in animation
        Key::Space => {
            model.reveal_started_at = app.time;
        }

        // R - toggle reduced motion
        Key::R => {
            model.reduced_motion = !model.reduced_motion;
            save_config(model);
        }

        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let mouse_pos = app.mouse.position();
        let layout = ArtboardLayout::calculate(app.window_rect(), SIDE_PANEL_WIDTH);

        // Only a press on the indicator handle starts a drag; it jumps the
        // indicator toward the press point immediately.
        if layout.handle_contains(model.controller.position(), mouse_pos.x, mouse_pos.y) {
            model
                .controller
                .begin_drag(Some(layout.graph_geometry()), mouse_pos.x);
        }
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = Some(pos);

    // Moves keep updating even when the pointer leaves the handle's box.
    // Geometry is re-queried per event so a mid-drag resize stays coherent.
    if model.controller.is_dragging() {
        let layout = ArtboardLayout::calculate(app.window_rect(), SIDE_PANEL_WIDTH);
        model
            .controller
            .update_from_pointer(Some(layout.graph_geometry()), pos.x);
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    // A release anywhere ends the session - every exit path clears the flag.
    if button == MouseButton::Left {
        model.controller.end_drag();
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
