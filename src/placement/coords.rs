//! Coordinate system: grid location to canvas point

use std::collections::HashMap;

use crate::errors::ConfigurationError;
use crate::model::{GridMode, Location, Motion};
use crate::types::Point;

use super::defaults;

/// An 8-entry location table, complete by construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationTable<T>([T; 8]);

impl<T: Copy> LocationTable<T> {
    pub const fn new(entries: [T; 8]) -> Self {
        LocationTable(entries)
    }

    /// Build from a keyed map, failing on the first missing location
    pub fn try_from_map(
        table: &str,
        map: &HashMap<Location, T>,
    ) -> Result<Self, ConfigurationError> {
        let mut entries = Vec::with_capacity(8);
        for loc in Location::ALL {
            let value = map
                .get(&loc)
                .copied()
                .ok_or_else(|| ConfigurationError::new(table, loc.as_str()))?;
            entries.push(value);
        }
        let entries: [T; 8] = entries
            .try_into()
            .map_err(|_| ConfigurationError::new(table, "all locations"))?;
        Ok(LocationTable(entries))
    }

    pub fn get(&self, loc: Location) -> T {
        self.0[loc.index()]
    }
}

/// Maps (grid mode, location) to a base point on the square canvas
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    diamond: LocationTable<Point>,
    box_grid: LocationTable<Point>,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self {
            diamond: LocationTable::new(defaults::DIAMOND_POINTS),
            box_grid: LocationTable::new(defaults::BOX_POINTS),
        }
    }
}

impl CoordinateSystem {
    pub fn new(diamond: LocationTable<Point>, box_grid: LocationTable<Point>) -> Self {
        Self { diamond, box_grid }
    }

    pub fn canvas_size() -> f64 {
        defaults::CANVAS_SIZE
    }

    pub fn canvas_center() -> Point {
        defaults::CANVAS_CENTER
    }

    pub fn table(&self, grid_mode: GridMode) -> &LocationTable<Point> {
        match grid_mode {
            GridMode::Diamond => &self.diamond,
            GridMode::Box => &self.box_grid,
        }
    }

    /// Base point for a glyph at `location`
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn initial_position(
        &self,
        motion: &Motion,
        location: Location,
        grid_mode: GridMode,
    ) -> Point {
        let point = self.table(grid_mode).get(location);
        crate::log::debug!(
            motion_type = %motion.motion_type,
            %location,
            %grid_mode,
            x = point.x,
            y = point.y,
            "initial position"
        );
        point
    }
}
