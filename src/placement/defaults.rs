//! Canvas geometry and built-in tables (all in canvas units / degrees)
//!
//! Tables are indexed by compass order: N, NE, E, SE, S, SW, W, NW.

use crate::types::{Point, Size};

pub const CANVAS_SIZE: f64 = 950.0;
pub const CANVAS_CENTER: Point = Point::new(475.0, 475.0);

/// Diamond grid: hand points on the cardinals, layer-2 points on the
/// diagonals, both 143.1 units out from center along each axis.
#[rustfmt::skip]
pub const DIAMOND_POINTS: [Point; 8] = [
    Point::new(475.0, 331.9),
    Point::new(618.1, 331.9),
    Point::new(618.1, 475.0),
    Point::new(618.1, 618.1),
    Point::new(475.0, 618.1),
    Point::new(331.9, 618.1),
    Point::new(331.9, 475.0),
    Point::new(331.9, 331.9),
];

/// Box grid: the diamond grid turned 45°, so hand points sit on the
/// diagonals and layer-2 points on the cardinals.
#[rustfmt::skip]
pub const BOX_POINTS: [Point; 8] = [
    Point::new(475.0, 272.6),
    Point::new(576.2, 373.8),
    Point::new(677.4, 475.0),
    Point::new(576.2, 576.2),
    Point::new(475.0, 677.4),
    Point::new(373.8, 576.2),
    Point::new(272.6, 475.0),
    Point::new(373.8, 373.8),
];

/// Clockwise pro angles: the glyph points along the location's bearing.
#[rustfmt::skip]
pub const PRO_ANGLES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Clockwise anti angles: a quarter turn behind pro.
#[rustfmt::skip]
pub const ANTI_ANGLES: [f64; 8] = [270.0, 315.0, 0.0, 45.0, 90.0, 135.0, 180.0, 225.0];

/// Dash and float angles: the glyph lies across the location's radius.
#[rustfmt::skip]
pub const DASH_ANGLES: [f64; 8] = [90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 0.0, 45.0];

/// Glyph bounding boxes for 0, 0.5, ... 3 turns
#[rustfmt::skip]
pub const PRO_GLYPHS: [Size; 7] = [
    Size::new(118.6, 84.5),
    Size::new(139.9, 95.6),
    Size::new(151.4, 104.0),
    Size::new(164.3, 115.7),
    Size::new(176.5, 131.2),
    Size::new(189.2, 140.8),
    Size::new(201.6, 152.7),
];

#[rustfmt::skip]
pub const ANTI_GLYPHS: [Size; 7] = [
    Size::new(121.3, 88.1),
    Size::new(144.0, 97.9),
    Size::new(155.7, 108.4),
    Size::new(168.2, 118.0),
    Size::new(180.9, 134.6),
    Size::new(193.3, 143.5),
    Size::new(205.8, 156.2),
];

#[rustfmt::skip]
pub const STATIC_GLYPHS: [Size; 7] = [
    Size::new(42.0, 111.6),
    Size::new(98.4, 112.2),
    Size::new(121.7, 118.3),
    Size::new(133.6, 123.9),
    Size::new(146.2, 135.8),
    Size::new(158.5, 141.1),
    Size::new(170.9, 152.4),
];

#[rustfmt::skip]
pub const DASH_GLYPHS: [Size; 7] = [
    Size::new(40.8, 151.2),
    Size::new(99.0, 151.2),
    Size::new(123.5, 151.2),
    Size::new(135.9, 152.0),
    Size::new(148.4, 154.8),
    Size::new(160.8, 158.9),
    Size::new(173.2, 163.0),
];

pub const FLOAT_GLYPH: Size = Size::new(110.5, 96.0);

/// Bundled special-placement dataset
pub const SPECIAL_PLACEMENTS_JSON: &str = include_str!("../../data/special_placements.json");
