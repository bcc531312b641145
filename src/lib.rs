//! Arrow glyph placement for pictograph figures.
//!
//! Given a motion (type, start and end cell, turns, spin direction), the
//! figure's grid mode and its letter, the engine computes where each arrow
//! glyph is drawn and how it is rotated:
//!
//! ```
//! use arrow_placement::{
//!     ArrowGlyph, ArrowPlacementEngine, Color, Figure, GridMode, Location, Motion, MotionType,
//!     RotationDirection, Turns,
//! };
//!
//! let engine = ArrowPlacementEngine::builtin()?;
//! let motion = Motion::new(
//!     MotionType::Pro,
//!     Location::N,
//!     Location::E,
//!     RotationDirection::Clockwise,
//!     Turns::try_new(1.0)?,
//! );
//! let figure = Figure::new("G", GridMode::Diamond).with_motion(Color::Blue, motion);
//! let glyph = ArrowGlyph::for_motion(Color::Blue, &motion);
//!
//! let placement = engine.calculate_arrow_position(&glyph, &figure, &motion)?;
//! assert_eq!(placement.rotation.raw(), 45.0);
//! assert!(!placement.is_mirrored);
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! Enable the `tracing` feature to log each placement step.

pub mod errors;
pub mod log;
pub mod model;
pub mod placement;
pub mod types;

pub use errors::{
    AdjustmentLookupMiss, ConfigurationError, DatasetError, PlacementError, TurnsError,
};
pub use model::{
    ArrowGlyph, Color, Figure, GridMode, Location, Motion, MotionType, Orientation,
    RotationDirection,
};
pub use placement::{
    Adjustment, AdjustmentSource, ArrowPlacement, ArrowPlacementEngine, CoordinateSystem,
    EngineData, GlyphMetrics, LocationResolver, RotationCalculator, SpecialPlacementAdjuster,
    SpecialPlacements, requires_mirror,
};
pub use types::{Degrees, Offset, Point, Size, Turns};
