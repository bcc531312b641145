//! Error types with diagnostics using miette
//!
//! Per-glyph failures are returned to the caller; configuration defects are
//! raised while the engine is being built and never at call time.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::model::{Location, MotionType};
use crate::types::Turns;

// ============================================================================
// Placement Errors
// ============================================================================

/// Errors that abort placement of a single glyph
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("no grid location for {motion_type} from {start_loc} to {end_loc}: {reason}")]
    #[diagnostic(
        code(arrow_placement::unresolved_location),
        help("substitute a visible fallback for this glyph and check the motion data")
    )]
    UnresolvedLocation {
        motion_type: MotionType,
        start_loc: Location,
        end_loc: Location,
        reason: &'static str,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// An injected table has no entry for a value of a closed enum
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("{table} table has no entry for {key}")]
#[diagnostic(
    code(arrow_placement::configuration),
    help("coordinate and rotation tables must name all 8 locations")
)]
pub struct ConfigurationError {
    pub table: String,
    pub key: String,
}

impl ConfigurationError {
    pub fn new(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key: key.into(),
        }
    }
}

// ============================================================================
// Dataset Errors
// ============================================================================

/// Errors that occur while loading engine data
#[derive(Error, Diagnostic, Debug)]
pub enum DatasetError {
    #[error("failed to read engine data from {}", path.display())]
    #[diagnostic(code(arrow_placement::dataset::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed engine data")]
    #[diagnostic(code(arrow_placement::dataset::json))]
    Json(#[from] serde_json::Error),

    #[error("invalid turns key {key:?}")]
    #[diagnostic(
        code(arrow_placement::dataset::invalid_turns),
        help("turns keys are 0 through 3 in steps of 0.5, or \"fl\"")
    )]
    InvalidTurns {
        key: String,
        #[source]
        source: TurnsError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),
}

// ============================================================================
// Lookup Misses
// ============================================================================

/// No special placement exists for this combination.
///
/// Most combinations legitimately have none, so this is data, not failure:
/// the adjuster resolves it locally with a zero offset.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("no special placement for letter {letter:?}, {motion_type} motion, {turns} turns")]
#[diagnostic(code(arrow_placement::adjustment_miss), severity(Warning))]
pub struct AdjustmentLookupMiss {
    pub letter: String,
    pub motion_type: MotionType,
    pub turns: Turns,
}

// ============================================================================
// Numeric Errors
// ============================================================================

/// Invalid turn counts
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TurnsError {
    #[error("turns value is NaN")]
    #[diagnostic(code(arrow_placement::turns::nan))]
    NaN,

    #[error("turns value is infinite")]
    #[diagnostic(code(arrow_placement::turns::infinite))]
    Infinite,

    #[error("turns value {value} is not a multiple of 0.5")]
    #[diagnostic(code(arrow_placement::turns::not_half_step))]
    NotHalfStep { value: f64 },

    #[error("turns value {value} is outside 0..=3")]
    #[diagnostic(code(arrow_placement::turns::out_of_range))]
    OutOfRange { value: f64 },

    #[error("cannot parse {text:?} as turns")]
    #[diagnostic(code(arrow_placement::turns::unparseable))]
    Unparseable { text: String },
}
