//! Domain values consumed by the placement engine
//!
//! Motions are read-only input owned by the editing layer. Arrow glyphs are
//! derived from them and replaced wholesale whenever a motion changes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::placement::ArrowPlacement;
use crate::types::{Degrees, Point, Turns};

/// How a hand moves between two grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    Static,
    Dash,
    Float,
}

impl MotionType {
    pub const ALL: [MotionType; 5] = [
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Static,
        MotionType::Dash,
        MotionType::Float,
    ];

    /// Pro, anti and float motions travel a quarter turn around the grid
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Static => "static",
            MotionType::Dash => "dash",
            MotionType::Float => "float",
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction the prop spins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[default]
    #[serde(rename = "none", alias = "no_rot")]
    None,
}

impl RotationDirection {
    pub const ALL: [RotationDirection; 3] = [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
        RotationDirection::None,
    ];

    /// The opposite spin; `None` stays `None`
    pub fn flipped(self) -> RotationDirection {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
            RotationDirection::None => RotationDirection::None,
        }
    }
}

/// The 8 named grid locations, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    /// Compass index: N = 0, NE = 1, ... NW = 7
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Location {
        Location::ALL[index % 8]
    }

    pub fn opposite(self) -> Location {
        Location::from_index(self.index() + 4)
    }

    /// Clockwise compass steps (0..8) from `self` to `other`
    pub fn steps_to(self, other: Location) -> usize {
        (other.index() + 8 - self.index()) % 8
    }

    /// Screen bearing, clockwise from north
    pub fn bearing(self) -> Degrees {
        Degrees::new(45.0 * self.index() as f64)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas tiling convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    Diamond,
    Box,
}

impl GridMode {
    pub const ALL: [GridMode; 2] = [GridMode::Diamond, GridMode::Box];

    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the prop faces relative to the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    In,
    Out,
    Clock,
    Counter,
}

/// Which hand a motion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Blue => "blue",
            Color::Red => "red",
        })
    }
}

/// One hand's motion within a figure
///
/// A float motion always carries the float turns marker; numeric turns on
/// a float are replaced when the motion is built or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "MotionRepr")]
pub struct Motion {
    pub motion_type: MotionType,
    pub start_loc: Location,
    pub end_loc: Location,
    pub prop_rot_dir: RotationDirection,
    pub turns: Turns,
    pub start_ori: Orientation,
    pub end_ori: Orientation,
}

#[derive(Deserialize)]
struct MotionRepr {
    motion_type: MotionType,
    start_loc: Location,
    end_loc: Location,
    #[serde(default)]
    prop_rot_dir: RotationDirection,
    #[serde(default)]
    turns: Turns,
    #[serde(default)]
    start_ori: Orientation,
    #[serde(default)]
    end_ori: Orientation,
}

impl From<MotionRepr> for Motion {
    fn from(repr: MotionRepr) -> Self {
        Motion::new(
            repr.motion_type,
            repr.start_loc,
            repr.end_loc,
            repr.prop_rot_dir,
            repr.turns,
        )
        .with_orientations(repr.start_ori, repr.end_ori)
    }
}

impl Motion {
    pub fn new(
        motion_type: MotionType,
        start_loc: Location,
        end_loc: Location,
        prop_rot_dir: RotationDirection,
        turns: Turns,
    ) -> Self {
        Self {
            motion_type,
            start_loc,
            end_loc,
            prop_rot_dir,
            turns: if motion_type == MotionType::Float {
                Turns::FLOAT
            } else {
                turns
            },
            start_ori: Orientation::In,
            end_ori: Orientation::In,
        }
    }

    pub fn with_orientations(self, start_ori: Orientation, end_ori: Orientation) -> Self {
        Self {
            start_ori,
            end_ori,
            ..self
        }
    }

    pub fn with_prop_rot_dir(self, prop_rot_dir: RotationDirection) -> Self {
        Self {
            prop_rot_dir,
            ..self
        }
    }

    /// The glyph drawn for this motion: anything with the float sentinel
    /// for turns is drawn as a float arrow.
    pub fn glyph_kind(&self) -> MotionType {
        if self.turns.is_float() {
            MotionType::Float
        } else {
            self.motion_type
        }
    }

    /// Glyph kind and turns as used to key glyph tables and special
    /// placements. Every float glyph is keyed by the float marker.
    pub fn glyph_key(&self) -> (MotionType, Turns) {
        match self.glyph_kind() {
            MotionType::Float => (MotionType::Float, Turns::FLOAT),
            kind => (kind, self.turns),
        }
    }
}

/// Derived drawing state for one motion
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGlyph {
    pub color: Color,
    pub position: Point,
    pub rotation_angle: Degrees,
    pub turns: Turns,
    pub is_mirrored: bool,
    pub is_visible: bool,
}

impl ArrowGlyph {
    /// A visible, unplaced glyph for `motion`
    pub fn for_motion(color: Color, motion: &Motion) -> Self {
        Self {
            color,
            position: Point::ORIGIN,
            rotation_angle: Degrees::ZERO,
            turns: motion.turns,
            is_mirrored: false,
            is_visible: true,
        }
    }

    /// A copy of this glyph moved to `placement`
    pub fn with_placement(&self, placement: &ArrowPlacement) -> Self {
        Self {
            position: placement.position(),
            rotation_angle: placement.rotation,
            is_mirrored: placement.is_mirrored,
            ..self.clone()
        }
    }
}

/// A pictograph: two synchronized motions identified by a letter
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub letter: String,
    pub grid_mode: GridMode,
    motions: BTreeMap<Color, Motion>,
    arrows: BTreeMap<Color, ArrowGlyph>,
}

impl Figure {
    pub fn new(letter: impl Into<String>, grid_mode: GridMode) -> Self {
        Self {
            letter: letter.into(),
            grid_mode,
            motions: BTreeMap::new(),
            arrows: BTreeMap::new(),
        }
    }

    /// Set `color`'s motion. The glyph for that color is replaced by a fresh
    /// one, since its placement no longer matches.
    pub fn with_motion(mut self, color: Color, motion: Motion) -> Self {
        self.motions.insert(color, motion);
        let glyph = ArrowGlyph::for_motion(color, &motion);
        self.arrows.insert(color, glyph);
        self
    }

    pub fn without_motion(mut self, color: Color) -> Self {
        self.motions.remove(&color);
        self.arrows.remove(&color);
        self
    }

    /// Replace the glyph of a color that has a motion; glyphs without a
    /// motion are ignored.
    pub(crate) fn with_arrow(mut self, arrow: ArrowGlyph) -> Self {
        if self.motions.contains_key(&arrow.color) {
            self.arrows.insert(arrow.color, arrow);
        }
        self
    }

    pub fn motion(&self, color: Color) -> Option<&Motion> {
        self.motions.get(&color)
    }

    pub fn arrow(&self, color: Color) -> Option<&ArrowGlyph> {
        self.arrows.get(&color)
    }

    pub fn motions(&self) -> impl Iterator<Item = (Color, &Motion)> {
        self.motions.iter().map(|(c, m)| (*c, m))
    }

    pub fn arrows(&self) -> impl Iterator<Item = &ArrowGlyph> {
        self.arrows.values()
    }
}
