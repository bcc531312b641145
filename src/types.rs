//! Strongly-typed numeric primitives for canvas geometry.
//!
//! All positions are in canvas units (the square figure canvas, origin at
//! the top-left corner, y growing downward). Angles are degrees, clockwise
//! on screen.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::errors::TurnsError;

/// A position on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Check that both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

/// A displacement vector (not an absolute position).
/// Point + Offset = Point, Point - Point = Offset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }

    /// Flip the horizontal axis
    pub fn mirror_x(self) -> Offset {
        Offset {
            dx: -self.dx,
            dy: self.dy,
        }
    }

    /// Rotate by `quarter_turns` steps of 90°, clockwise on screen.
    ///
    /// Screen y points down, so glam's `perp` (counter-clockwise with y up)
    /// is a clockwise quarter turn here. Quarter turns are exact: no
    /// trigonometry is involved.
    pub fn rotate_quarter_turns(self, quarter_turns: u8) -> Offset {
        let mut v = DVec2::new(self.dx, self.dy);
        for _ in 0..(quarter_turns % 4) {
            v = v.perp();
        }
        Offset { dx: v.x, dy: v.y }
    }
}

impl From<[f64; 2]> for Offset {
    fn from([dx, dy]: [f64; 2]) -> Self {
        Offset { dx, dy }
    }
}

impl Neg for Offset {
    type Output = Offset;
    fn neg(self) -> Offset {
        Offset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl Add<Offset> for Point {
    type Output = Point;
    fn add(self, rhs: Offset) -> Point {
        Point {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Sub<Offset> for Point {
    type Output = Point;
    fn sub(self, rhs: Offset) -> Point {
        Point {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Offset;
    fn sub(self, rhs: Point) -> Offset {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

/// Width and height of a glyph's bounding box
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// Center of a box of this size whose top-left corner is the origin
    pub fn center(self) -> Point {
        Point {
            x: self.w / 2.0,
            y: self.h / 2.0,
        }
    }
}

impl From<[f64; 2]> for Size {
    fn from([w, h]: [f64; 2]) -> Self {
        Size { w, h }
    }
}

/// Angle in degrees, always normalized to [0, 360)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Degrees(f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    /// Create a normalized angle
    pub fn new(deg: f64) -> Self {
        let d = deg.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        Degrees(if d >= 360.0 { 0.0 } else { d })
    }

    /// The horizontally mirrored angle: `(360 - a) mod 360`
    pub fn mirrored(self) -> Degrees {
        Degrees::new(360.0 - self.0)
    }

    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Number of turns a motion makes, stored as half turns.
///
/// Valid values are 0.0 through 3.0 in steps of 0.5, plus the float
/// sentinel (-0.5), written `"fl"` in data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TurnsRepr", into = "TurnsRepr")]
pub struct Turns(i8);

const MAX_HALF_TURNS: i8 = 6;

impl Turns {
    pub const ZERO: Turns = Turns(0);
    pub const FLOAT: Turns = Turns(-1);

    /// Create from a turn count with validation
    pub fn try_new(turns: f64) -> Result<Turns, TurnsError> {
        if turns.is_nan() {
            return Err(TurnsError::NaN);
        }
        if turns.is_infinite() {
            return Err(TurnsError::Infinite);
        }
        let half = turns * 2.0;
        if half.fract() != 0.0 {
            return Err(TurnsError::NotHalfStep { value: turns });
        }
        if half < -1.0 || half > f64::from(MAX_HALF_TURNS) {
            return Err(TurnsError::OutOfRange { value: turns });
        }
        Ok(Turns(half as i8))
    }

    /// Create from a half-turn count (-1 is the float sentinel)
    pub fn from_half_turns(half_turns: i8) -> Result<Turns, TurnsError> {
        if (-1..=MAX_HALF_TURNS).contains(&half_turns) {
            Ok(Turns(half_turns))
        } else {
            Err(TurnsError::OutOfRange {
                value: f64::from(half_turns) / 2.0,
            })
        }
    }

    /// Every valid numeric turn count, 0.0 through 3.0
    pub fn all_numeric() -> impl Iterator<Item = Turns> {
        (0..=MAX_HALF_TURNS).map(Turns)
    }

    pub fn is_float(self) -> bool {
        self == Turns::FLOAT
    }

    pub fn half_turns(self) -> i8 {
        self.0
    }

    /// Turn count as a number (-0.5 for the float sentinel)
    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Default for Turns {
    fn default() -> Self {
        Turns::ZERO
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_float() {
            f.write_str("fl")
        } else {
            write!(f, "{}", self.value())
        }
    }
}

impl FromStr for Turns {
    type Err = TurnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "fl" {
            return Ok(Turns::FLOAT);
        }
        s.parse::<f64>()
            .map_err(|_| TurnsError::Unparseable { text: s.into() })
            .and_then(Turns::try_new)
    }
}

/// Wire form of `Turns`: a number or the `"fl"` marker
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TurnsRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<TurnsRepr> for Turns {
    type Error = TurnsError;

    fn try_from(repr: TurnsRepr) -> Result<Self, Self::Error> {
        match repr {
            TurnsRepr::Number(n) => Turns::try_new(n),
            TurnsRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Turns> for TurnsRepr {
    fn from(t: Turns) -> Self {
        if t.is_float() {
            TurnsRepr::Text("fl".to_string())
        } else {
            TurnsRepr::Number(t.value())
        }
    }
}
