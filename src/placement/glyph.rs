//! Glyph metrics: bounding-box sizes of the arrow artwork

use crate::model::{Motion, MotionType};
use crate::types::{Point, Size, Turns};

use super::defaults;

/// Bounding boxes per glyph kind and turn count
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMetrics {
    pro: [Size; 7],
    anti: [Size; 7],
    static_: [Size; 7],
    dash: [Size; 7],
    float: Size,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            pro: defaults::PRO_GLYPHS,
            anti: defaults::ANTI_GLYPHS,
            static_: defaults::STATIC_GLYPHS,
            dash: defaults::DASH_GLYPHS,
            float: defaults::FLOAT_GLYPH,
        }
    }
}

impl GlyphMetrics {
    fn slot(&mut self, kind: MotionType, turns: Turns) -> Option<&mut Size> {
        let row = match kind {
            MotionType::Float => return Some(&mut self.float),
            MotionType::Pro => &mut self.pro,
            MotionType::Anti => &mut self.anti,
            MotionType::Static => &mut self.static_,
            MotionType::Dash => &mut self.dash,
        };
        let index = usize::try_from(turns.half_turns()).ok()?;
        row.get_mut(index)
    }

    /// Replace one entry. Returns false when no such glyph exists
    /// (the float sentinel on a non-float kind).
    pub fn set(&mut self, kind: MotionType, turns: Turns, size: Size) -> bool {
        match self.slot(kind, turns) {
            Some(slot) => {
                *slot = size;
                true
            }
            None => false,
        }
    }

    /// Size of the glyph drawn for `motion`
    pub fn size(&self, motion: &Motion) -> Size {
        let row = match motion.glyph_kind() {
            MotionType::Float => return self.float,
            MotionType::Pro => &self.pro,
            MotionType::Anti => &self.anti,
            MotionType::Static => &self.static_,
            MotionType::Dash => &self.dash,
        };
        // glyph_kind() is Float whenever turns is the float sentinel, so the
        // index is never negative here.
        let index = usize::try_from(motion.turns.half_turns()).unwrap_or(0);
        row[index.min(row.len() - 1)]
    }

    /// Where the glyph's visual center sits relative to its draw origin.
    /// Mirroring flips the glyph about this center, so it is unchanged.
    pub fn bbox_center(&self, motion: &Motion) -> Point {
        self.size(motion).center()
    }
}
