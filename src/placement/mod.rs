//! Arrow placement engine
//!
//! This module is organized into submodules:
//! - `defaults`: Canvas constants and built-in tables
//! - `location`: Motion to grid location
//! - `coords`: Grid location to canvas point
//! - `rotation`: Base glyph angle
//! - `glyph`: Glyph bounding boxes
//! - `special`: Hand-tuned per-letter offsets
//!
//! The engine itself composes them: resolve location, look up the base
//! point and rotation, apply the special-placement adjustment, and decide
//! mirroring. Every table is loaded and validated at construction; each
//! call afterwards is a pure function of its arguments.

pub mod coords;
pub mod defaults;
pub mod glyph;
pub mod location;
pub mod rotation;
pub mod special;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{ConfigurationError, DatasetError, PlacementError};
use crate::model::{ArrowGlyph, Figure, Location, Motion, MotionType, RotationDirection};
use crate::types::{Degrees, Point, Size};

pub use coords::{CoordinateSystem, LocationTable};
pub use glyph::GlyphMetrics;
pub use location::LocationResolver;
pub use rotation::RotationCalculator;
pub use special::{
    Adjustment, AdjustmentSource, PlacementEntry, SpecialPlacementAdjuster, SpecialPlacements,
};

/// Whether the glyph for `motion` is drawn horizontally flipped.
///
/// Anti glyphs are drawn for counter-clockwise spin, so they flip when
/// spinning clockwise; every other glyph, float included, flips for
/// counter-clockwise spin.
pub fn requires_mirror(motion: &Motion) -> bool {
    match (motion.glyph_kind(), motion.prop_rot_dir) {
        (_, RotationDirection::None) => false,
        (MotionType::Anti, dir) => dir == RotationDirection::Clockwise,
        (_, dir) => dir == RotationDirection::CounterClockwise,
    }
}

// ============================================================================
// Placement result
// ============================================================================

/// Where and how to draw one arrow glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub x: f64,
    pub y: f64,
    pub rotation: Degrees,
    pub is_mirrored: bool,
    /// Resolved grid location; `None` for fallbacks
    pub location: Option<Location>,
    /// Set when the location could not be resolved and the glyph was parked
    pub is_fallback: bool,
}

impl ArrowPlacement {
    /// A visible stand-in for a glyph that could not be placed
    pub fn fallback(at: Point) -> Self {
        Self {
            x: at.x,
            y: at.y,
            rotation: Degrees::ZERO,
            is_mirrored: false,
            location: None,
            is_fallback: true,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.position().is_finite() && self.rotation.raw().is_finite()
    }
}

impl fmt::Display for ArrowPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rot = self.rotation.raw();
        write!(f, "x={:.1}, y={:.1}, rot={rot:.1}°", self.x, self.y)?;
        if self.is_mirrored {
            f.write_str(", mirrored")?;
        }
        if self.is_fallback {
            f.write_str(", fallback")?;
        }
        Ok(())
    }
}

// ============================================================================
// Engine data
// ============================================================================

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawCoordinates {
    #[serde(default)]
    diamond: Option<HashMap<Location, [f64; 2]>>,
    #[serde(default, rename = "box")]
    box_grid: Option<HashMap<Location, [f64; 2]>>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawRotations {
    #[serde(default)]
    pro: Option<HashMap<Location, f64>>,
    #[serde(default)]
    anti: Option<HashMap<Location, f64>>,
    #[serde(default)]
    dash: Option<HashMap<Location, f64>>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawEngineData {
    #[serde(default)]
    coordinates: RawCoordinates,
    #[serde(default)]
    rotations: RawRotations,
    #[serde(default)]
    glyphs: HashMap<MotionType, HashMap<String, [f64; 2]>>,
    #[serde(default)]
    special_placements: special::RawPlacements,
}

/// Everything the engine is built from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineData {
    pub coordinates: CoordinateSystem,
    pub rotations: RotationCalculator,
    pub glyphs: GlyphMetrics,
    pub special_placements: SpecialPlacements,
}

fn point_table(
    table: &str,
    raw: Option<HashMap<Location, [f64; 2]>>,
    builtin: LocationTable<Point>,
) -> Result<LocationTable<Point>, ConfigurationError> {
    match raw {
        None => Ok(builtin),
        Some(map) => {
            let map: HashMap<Location, Point> = map
                .into_iter()
                .map(|(loc, xy)| (loc, Point::from(xy)))
                .collect();
            LocationTable::try_from_map(table, &map)
        }
    }
}

fn angle_table(
    table: &str,
    raw: Option<HashMap<Location, f64>>,
    builtin: [f64; 8],
) -> Result<LocationTable<f64>, ConfigurationError> {
    match raw {
        None => Ok(LocationTable::new(builtin)),
        Some(map) => LocationTable::try_from_map(table, &map),
    }
}

impl EngineData {
    /// Built-in tables plus the bundled special-placement dataset
    pub fn builtin() -> Result<Self, DatasetError> {
        let json = defaults::SPECIAL_PLACEMENTS_JSON;
        Ok(Self {
            special_placements: SpecialPlacements::from_json_str(json)?,
            ..Self::default()
        })
    }

    /// Parse an engine data document. Absent sections keep their built-in
    /// values; a coordinate or rotation table that is present must be
    /// complete.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: RawEngineData = serde_json::from_str(json)?;

        let coordinates = CoordinateSystem::new(
            point_table(
                "coordinates.diamond",
                raw.coordinates.diamond,
                LocationTable::new(defaults::DIAMOND_POINTS),
            )?,
            point_table(
                "coordinates.box",
                raw.coordinates.box_grid,
                LocationTable::new(defaults::BOX_POINTS),
            )?,
        );

        let rotations = RotationCalculator::new(
            angle_table("rotations.pro", raw.rotations.pro, defaults::PRO_ANGLES)?,
            angle_table("rotations.anti", raw.rotations.anti, defaults::ANTI_ANGLES)?,
            angle_table("rotations.dash", raw.rotations.dash, defaults::DASH_ANGLES)?,
        );

        let mut glyphs = GlyphMetrics::default();
        for (kind, by_turns) in raw.glyphs {
            for (key, wh) in by_turns {
                let turns = special::parse_turns_key(&key)?;
                if !glyphs.set(kind, turns, Size::from(wh)) {
                    let table = format!("glyphs.{kind}");
                    return Err(ConfigurationError::new(table, key).into());
                }
            }
        }

        let special_placements = SpecialPlacements::from_raw(raw.special_placements)?;

        Ok(Self {
            coordinates,
            rotations,
            glyphs,
            special_placements,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Computes arrow glyph positions for figures
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowPlacementEngine {
    resolver: LocationResolver,
    coordinates: CoordinateSystem,
    rotations: RotationCalculator,
    adjuster: SpecialPlacementAdjuster,
}

impl ArrowPlacementEngine {
    pub fn new(data: EngineData) -> Self {
        crate::log::debug!(
            special_placements = data.special_placements.len(),
            "arrow placement engine ready"
        );
        Self {
            resolver: LocationResolver::new(),
            coordinates: data.coordinates,
            rotations: data.rotations,
            adjuster: SpecialPlacementAdjuster::new(data.special_placements, data.glyphs),
        }
    }

    /// Engine over the built-in tables and bundled dataset
    pub fn builtin() -> Result<Self, DatasetError> {
        Ok(Self::new(EngineData::builtin()?))
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(Self::new(EngineData::from_json_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Ok(Self::new(EngineData::from_path(path)?))
    }

    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    pub fn coordinates(&self) -> &CoordinateSystem {
        &self.coordinates
    }

    pub fn rotations(&self) -> &RotationCalculator {
        &self.rotations
    }

    pub fn adjuster(&self) -> &SpecialPlacementAdjuster {
        &self.adjuster
    }

    /// Position and rotation for `glyph`, drawn for `motion` inside `figure`.
    ///
    /// The returned point is the glyph's draw origin: the base point plus
    /// the special offset, minus the glyph's bounding-box center.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn calculate_arrow_position(
        &self,
        glyph: &ArrowGlyph,
        figure: &Figure,
        motion: &Motion,
    ) -> Result<ArrowPlacement, PlacementError> {
        let loc = self.resolver.resolve(motion)?;
        let mode = figure.grid_mode;
        let base = self.coordinates.initial_position(motion, loc, mode);
        let rotation = self.rotations.rotation(motion, loc);
        let adjustment = self.adjuster.adjustment(&figure.letter, motion, loc);
        let is_mirrored = requires_mirror(motion);

        let origin = base + adjustment.offset - (adjustment.bbox_center - Point::ORIGIN);

        crate::log::debug!(
            color = %glyph.color,
            letter = %figure.letter,
            location = %loc,
            base_x = base.x,
            base_y = base.y,
            dx = adjustment.offset.dx,
            dy = adjustment.offset.dy,
            rotation = rotation.raw(),
            is_mirrored,
            "placed arrow"
        );

        Ok(ArrowPlacement {
            x: origin.x,
            y: origin.y,
            rotation,
            is_mirrored,
            location: Some(loc),
            is_fallback: false,
        })
    }

    /// Like `calculate_arrow_position`, but parks unplaceable glyphs at the
    /// canvas center with `is_fallback` set.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn place_or_fallback(
        &self,
        glyph: &ArrowGlyph,
        figure: &Figure,
        motion: &Motion,
    ) -> ArrowPlacement {
        match self.calculate_arrow_position(glyph, figure, motion) {
            Ok(placement) => placement,
            Err(err) => {
                crate::log::error!(
                    color = %glyph.color,
                    letter = %figure.letter,
                    error = %err,
                    "arrow placement failed"
                );
                ArrowPlacement::fallback(CoordinateSystem::canvas_center())
            }
        }
    }

    /// A copy of `figure` with every glyph recomputed from its motion
    pub fn place_figure(&self, figure: &Figure) -> Figure {
        let placed: Vec<ArrowGlyph> = figure
            .motions()
            .map(|(color, motion)| {
                let glyph = figure
                    .arrow(color)
                    .cloned()
                    .unwrap_or_else(|| ArrowGlyph::for_motion(color, motion));
                let placement = self.place_or_fallback(&glyph, figure, motion);
                glyph.with_placement(&placement)
            })
            .collect();

        placed
            .into_iter()
            .fold(figure.clone(), |fig, glyph| fig.with_arrow(glyph))
    }
}
