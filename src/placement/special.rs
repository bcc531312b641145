//! Special placements: hand-tuned offsets per (letter, motion type, turns)
//!
//! Offsets are authored in the glyph's local frame for the north quadrant
//! and turned into the resolved location's quadrant at lookup time.

use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::{AdjustmentLookupMiss, DatasetError};
use crate::model::{Location, Motion, MotionType};
use crate::types::{Offset, Point, Turns};

use super::glyph::GlyphMetrics;
use super::requires_mirror;

/// One special-placement entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementEntry {
    pub offset: Offset,
    /// Offset to use for the mirrored glyph, when it is not simply the
    /// horizontal reflection of `offset`
    pub mirrored: Option<Offset>,
}

impl PlacementEntry {
    /// Offset in the glyph's local frame, after any mirroring
    pub fn local_offset(&self, mirrored: bool) -> Offset {
        match (mirrored, self.mirrored) {
            (false, _) => self.offset,
            (true, Some(explicit)) => explicit,
            (true, None) => self.offset.mirror_x(),
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct RawEntry {
    offset: [f64; 2],
    #[serde(default)]
    mirrored: Option<[f64; 2]>,
}

/// Wire form: letter -> motion type -> turns key -> entry
pub(crate) type RawPlacements = HashMap<String, HashMap<MotionType, HashMap<String, RawEntry>>>;

/// Parse a turns key from a data file: `"0"` through `"3"` or `"fl"`
pub(crate) fn parse_turns_key(key: &str) -> Result<Turns, DatasetError> {
    match key.parse() {
        Ok(turns) => Ok(turns),
        Err(source) => Err(DatasetError::InvalidTurns {
            key: key.to_string(),
            source,
        }),
    }
}

/// The special-placement dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialPlacements {
    letters: HashMap<String, HashMap<(MotionType, Turns), PlacementEntry>>,
}

impl SpecialPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a standalone `{ letter: { motion_type: { turns: entry } } }` document
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: RawPlacements = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub(crate) fn from_raw(raw: RawPlacements) -> Result<Self, DatasetError> {
        let mut placements = Self::new();
        for (letter, by_type) in raw {
            for (motion_type, by_turns) in by_type {
                for (key, entry) in by_turns {
                    let turns = parse_turns_key(&key)?;
                    placements.insert(
                        letter.clone(),
                        motion_type,
                        turns,
                        PlacementEntry {
                            offset: entry.offset.into(),
                            mirrored: entry.mirrored.map(Offset::from),
                        },
                    );
                }
            }
        }
        Ok(placements)
    }

    pub fn insert(
        &mut self,
        letter: impl Into<String>,
        motion_type: MotionType,
        turns: Turns,
        entry: PlacementEntry,
    ) {
        self.letters
            .entry(letter.into())
            .or_default()
            .insert((motion_type, turns), entry);
    }

    pub fn lookup(
        &self,
        letter: &str,
        motion_type: MotionType,
        turns: Turns,
    ) -> Result<&PlacementEntry, AdjustmentLookupMiss> {
        self.letters
            .get(letter)
            .and_then(|entries| entries.get(&(motion_type, turns)))
            .ok_or_else(|| AdjustmentLookupMiss {
                letter: letter.to_string(),
                motion_type,
                turns,
            })
    }

    pub fn len(&self) -> usize {
        self.letters.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where an adjustment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentSource {
    Special,
    Fallback,
}

/// Translation to apply on top of the base point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub offset: Offset,
    pub bbox_center: Point,
    pub source: AdjustmentSource,
}

/// Looks up special placements and glyph centers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialPlacementAdjuster {
    placements: SpecialPlacements,
    glyphs: GlyphMetrics,
}

/// Quarter turns from the north quadrant to `location`'s quadrant
fn quadrant_turns(location: Location) -> u8 {
    (location.index() / 2) as u8
}

impl SpecialPlacementAdjuster {
    pub fn new(placements: SpecialPlacements, glyphs: GlyphMetrics) -> Self {
        Self { placements, glyphs }
    }

    pub fn placements(&self) -> &SpecialPlacements {
        &self.placements
    }

    pub fn glyphs(&self) -> &GlyphMetrics {
        &self.glyphs
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn adjustment(&self, letter: &str, motion: &Motion, location: Location) -> Adjustment {
        let bbox_center = self.glyphs.bbox_center(motion);
        let (kind, turns) = motion.glyph_key();
        match self.placements.lookup(letter, kind, turns) {
            Ok(entry) => {
                let local = entry.local_offset(requires_mirror(motion));
                Adjustment {
                    offset: local.rotate_quarter_turns(quadrant_turns(location)),
                    bbox_center,
                    source: AdjustmentSource::Special,
                }
            }
            Err(miss) => {
                crate::log::warn!(
                    letter = %miss.letter,
                    motion_type = %miss.motion_type,
                    turns = %miss.turns,
                    "no special placement, using zero offset"
                );
                Adjustment {
                    offset: Offset::ZERO,
                    bbox_center,
                    source: AdjustmentSource::Fallback,
                }
            }
        }
    }
}
