//! Rotation calculator: base glyph angle from motion and location

use crate::model::{Location, Motion, MotionType, RotationDirection};
use crate::types::Degrees;

use super::coords::LocationTable;
use super::defaults;

/// Clockwise angle tables; counter-clockwise angles are their mirror image
#[derive(Debug, Clone, PartialEq)]
pub struct RotationCalculator {
    pro: LocationTable<f64>,
    anti: LocationTable<f64>,
    dash: LocationTable<f64>,
}

impl Default for RotationCalculator {
    fn default() -> Self {
        Self {
            pro: LocationTable::new(defaults::PRO_ANGLES),
            anti: LocationTable::new(defaults::ANTI_ANGLES),
            dash: LocationTable::new(defaults::DASH_ANGLES),
        }
    }
}

impl RotationCalculator {
    /// `dash` is shared by dash and float glyphs
    pub fn new(
        pro: LocationTable<f64>,
        anti: LocationTable<f64>,
        dash: LocationTable<f64>,
    ) -> Self {
        Self { pro, anti, dash }
    }

    /// Angle of the glyph drawn for `motion`; float glyphs share the dash table
    pub fn rotation(&self, motion: &Motion, location: Location) -> Degrees {
        let clockwise = match motion.glyph_kind() {
            MotionType::Static => return Degrees::ZERO,
            MotionType::Pro => self.pro.get(location),
            MotionType::Anti => self.anti.get(location),
            MotionType::Dash | MotionType::Float => self.dash.get(location),
        };
        let angle = Degrees::new(clockwise);
        match motion.prop_rot_dir {
            RotationDirection::CounterClockwise => angle.mirrored(),
            RotationDirection::Clockwise | RotationDirection::None => angle,
        }
    }
}
