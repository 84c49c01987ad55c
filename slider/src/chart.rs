//! Chart module - the displayed line-graph curve and polyline math
//!
//! The curve is a fixed set of sample points scaled uniformly into the
//! drawable graph. The polyline helpers support the draw-in animation by
//! trimming the curve to a fraction of its total arc length.

use nannou::prelude::*;

/// Source-space extent of the embedded curve.
pub const SOURCE_WIDTH: f32 = 201.0;
pub const SOURCE_HEIGHT: f32 = 200.0;

/// Sample points of the displayed curve in source space (y grows downward).
pub const CURVE_POINTS: [(f32, f32); 28] = [
    (0.0, 134.969),
    (7.2956, 134.969),
    (12.327, 129.183),
    (21.8868, 138.491),
    (31.9497, 138.491),
    (36.478, 134.969),
    (42.5157, 141.007),
    (57.3585, 128.428),
    (63.6478, 134.214),
    (70.4403, 125.661),
    (80.5031, 123.145),
    (84.5283, 110.566),
    (92.0755, 107.548),
    (95.8491, 101.51),
    (103.899, 114.34),
    (115.22, 110.566),
    (122.516, 85.6608),
    (130.063, 86.9187),
    (135.597, 76.8558),
    (140.881, 79.3715),
    (143.145, 76.8558),
    (150.943, 85.6608),
    (158.994, 63.0193),
    (168.302, 67.0445),
    (177.107, 58.9941),
    (188.176, 58.9941),
    (192.956, 72.8306),
    (200.0, 64.0256),
];

/// Uniform scale factor that fits the source extent into a square graph of
/// the given size while preserving the curve's aspect ratio.
pub fn uniform_scale(graph_size: f32) -> f32 {
    (graph_size / SOURCE_WIDTH).min(graph_size / SOURCE_HEIGHT)
}

/// Map the curve into window coordinates given the graph's top-left corner
/// (y up, as nannou draws).
pub fn graph_points(graph_left: f32, graph_top: f32, graph_size: f32) -> Vec<Point2> {
    let scale = uniform_scale(graph_size);
    CURVE_POINTS
        .iter()
        .map(|&(x, y)| pt2(graph_left + x * scale, graph_top - y * scale))
        .collect()
}

/// Total arc length of a polyline.
pub fn total_length(points: &[Point2]) -> f32 {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).length())
        .sum()
}

/// Return the prefix of a polyline covering `fraction` of its total arc
/// length, interpolating the final point inside the segment it lands on.
/// `fraction <= 0` yields nothing, `fraction >= 1` the whole polyline.
pub fn trim_to_fraction(points: &[Point2], fraction: f32) -> Vec<Point2> {
    let fraction = fraction.clamp(0.0, 1.0);
    if points.len() < 2 || fraction <= 0.0 {
        return Vec::new();
    }
    if fraction >= 1.0 {
        return points.to_vec();
    }

    let target = total_length(points) * fraction;
    let mut out = vec![points[0]];
    let mut travelled = 0.0;

    for pair in points.windows(2) {
        let segment = pair[1] - pair[0];
        let segment_length = segment.length();

        if travelled + segment_length >= target {
            let t = if segment_length > 0.0 {
                (target - travelled) / segment_length
            } else {
                0.0
            };
            out.push(pair[0] + segment * t);
            return out;
        }

        travelled += segment_length;
        out.push(pair[1]);
    }

    out
}
