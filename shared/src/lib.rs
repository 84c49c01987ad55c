//! Shared library for the graph slider widget
//!
//! Holds the pure slider engine (position mapping, drag state, time label)
//! and the preference persistence layer.

pub mod config;
pub mod slider_engine;

pub use config::{config_dir, config_path, load_config, save_config, ConfigError};
pub use slider_engine::{
    graph_offset, time_label, DragSession, GraphGeometry, PositionController, ARTBOARD_SIZE,
    GRAPH_SIZE, INDICATOR_HEIGHT,
};
