//! Screen-space layout of the wheel. The host draws what this module
//! computes; nothing here touches a canvas.
//!
//! Angles are canvas angles: y axis pointing down, positive clockwise.
//! Disc angle `θ` is drawn at `θ + rotation + 180°`, which places the disc
//! angle read by [`crate::resolver::pointer_angle`] at the 12 o'clock pointer.

use std::f64::consts::PI;

use crate::entrants::{segment_range, Roster};
use crate::palette::segment_color;

pub const DISC_TO_CANVAS_DEG: f64 = 180.0;
/// 12 o'clock, i.e. -90° from the positive x axis.
pub const POINTER_CANVAS_DEG: f64 = 270.0;

const LABEL_RADIUS_AT_REST: f64 = 0.62;
const LABEL_RADIUS_SPINNING: f64 = 0.18;
const LABEL_ALPHA_SPINNING: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentArc {
    pub index: usize,
    pub label: String,
    pub color: &'static str,
    /// Canvas radians.
    pub start: f64,
    pub end: f64,
    pub mid: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub radius_factor: f64,
    pub alpha: f64,
}

fn canvas_degrees(disc_deg: f64, rotation: f64) -> f64 {
    disc_deg + rotation + DISC_TO_CANVAS_DEG
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// One arc per entrant, in roster order.
pub fn layout(roster: &Roster, rotation: f64) -> Vec<SegmentArc> {
    let count = roster.len();
    roster
        .names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let (start, end) = segment_range(index, count);
            let start = canvas_degrees(start, rotation);
            let end = canvas_degrees(end, rotation);
            SegmentArc {
                index,
                label: name.clone(),
                color: segment_color(index),
                start: to_radians(start),
                end: to_radians(end),
                mid: to_radians((start + end) / 2.0),
            }
        })
        .collect()
}

/// Labels gather near the hub and fade while the wheel is moving.
pub fn label_style(is_spinning: bool) -> LabelStyle {
    if is_spinning {
        LabelStyle { radius_factor: LABEL_RADIUS_SPINNING, alpha: LABEL_ALPHA_SPINNING }
    } else {
        LabelStyle { radius_factor: LABEL_RADIUS_AT_REST, alpha: 1.0 }
    }
}

pub fn polar_point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
}
