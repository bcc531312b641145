//! Location resolution: which grid cell an arrow glyph occupies
//!
//! Each motion family has its own strategy; the resolver picks one per call.

use enum_dispatch::enum_dispatch;

use crate::errors::PlacementError;
use crate::model::{Location, Motion, MotionType};

/// Maps a motion onto the single grid location its glyph is drawn at
#[enum_dispatch]
pub trait LocationStrategy {
    fn locate(&self, motion: &Motion) -> Result<Location, PlacementError>;
}

/// Static motions stay where they start
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocation;

/// Pro, anti and float motions sit between start and end
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftLocation;

/// Dash motions sit across the grid from where they start
#[derive(Debug, Clone, Copy, Default)]
pub struct DashLocation;

#[enum_dispatch(LocationStrategy)]
#[derive(Debug, Clone, Copy)]
pub enum LocationCalculator {
    StaticLocation,
    ShiftLocation,
    DashLocation,
}

impl LocationCalculator {
    pub fn for_motion_type(motion_type: MotionType) -> Self {
        match motion_type {
            MotionType::Static => StaticLocation.into(),
            MotionType::Pro | MotionType::Anti | MotionType::Float => ShiftLocation.into(),
            MotionType::Dash => DashLocation.into(),
        }
    }
}

fn unresolved(motion: &Motion, reason: &'static str) -> PlacementError {
    PlacementError::UnresolvedLocation {
        motion_type: motion.motion_type,
        start_loc: motion.start_loc,
        end_loc: motion.end_loc,
        reason,
    }
}

impl LocationStrategy for StaticLocation {
    fn locate(&self, motion: &Motion) -> Result<Location, PlacementError> {
        if motion.start_loc != motion.end_loc {
            return Err(unresolved(motion, "static must end where it starts"));
        }
        Ok(motion.start_loc)
    }
}

impl LocationStrategy for ShiftLocation {
    fn locate(&self, motion: &Motion) -> Result<Location, PlacementError> {
        let (start, end) = (motion.start_loc, motion.end_loc);
        // The midpoint of a quarter turn is one compass step past whichever
        // end comes first going clockwise.
        match start.steps_to(end) {
            2 => Ok(Location::from_index(start.index() + 1)),
            6 => Ok(Location::from_index(end.index() + 1)),
            _ => Err(unresolved(motion, "shift must travel a quarter turn")),
        }
    }
}

impl LocationStrategy for DashLocation {
    fn locate(&self, motion: &Motion) -> Result<Location, PlacementError> {
        let opposite = motion.start_loc.opposite();
        if motion.end_loc != opposite {
            return Err(unresolved(motion, "dash must end opposite its start"));
        }
        Ok(opposite)
    }
}

/// Resolves the grid location for any motion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationResolver;

impl LocationResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, motion: &Motion) -> Result<Location, PlacementError> {
        let calculator = LocationCalculator::for_motion_type(motion.motion_type);
        calculator.locate(motion)
    }
}
