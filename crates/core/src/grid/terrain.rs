use fnv::FnvBuildHasher;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use validator::ValidationError;

/// Classification of the ground on a tile. Terrain drives both whether a tile
/// can be entered at all and how expensive it is to enter.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    // if you add a variant here, make sure it gets a cost in TerrainCosts
    // (or is blocked), otherwise it falls back to the sentinel cost
    Invalid,
    Grass,
    Water,
    Dirt,
    Blocked,
}

impl TerrainKind {
    /// Can this terrain never be entered? Blocked tiles are skipped entirely
    /// by searches, unlike expensive tiles which are just avoided.
    pub fn is_blocked(self) -> bool {
        match self {
            Self::Invalid | Self::Blocked => true,
            Self::Grass | Self::Water | Self::Dirt => false,
        }
    }

    /// The next terrain kind in declaration order, wrapping around at the end.
    /// Handy for editors that cycle a tile's terrain on click.
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|kind| *kind == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

/// Cost charged for entering a tile whose terrain has no entry in the cost
/// table. This is high enough that any route around such a tile is preferred,
/// while still letting a search complete if there's no other way.
pub const UNKNOWN_TERRAIN_COST: f64 = 1000.0;

/// Movement cost of each terrain type. A path search charges the cost of the
/// tile being entered for each step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerrainCosts(HashMap<TerrainKind, f64, FnvBuildHasher>);

impl TerrainCosts {
    /// Create an empty cost table. Every lookup on it will return
    /// [UNKNOWN_TERRAIN_COST].
    pub fn empty() -> Self {
        Self(HashMap::default())
    }

    /// Set the cost of a terrain type, replacing any previous value. Returns
    /// `self` so calls can be chained.
    pub fn with(mut self, terrain: TerrainKind, cost: f64) -> Self {
        self.0.insert(terrain, cost);
        self
    }

    /// Get the mapped cost for a terrain type, or [UNKNOWN_TERRAIN_COST] if
    /// it isn't in the table. This never fails, so a search over a grid with
    /// unexpected terrain degrades instead of aborting.
    pub fn cost(&self, terrain: TerrainKind) -> f64 {
        match self.0.get(&terrain) {
            Some(cost) => *cost,
            None => {
                trace!("No cost for terrain {}, using sentinel", terrain);
                UNKNOWN_TERRAIN_COST
            }
        }
    }

    pub fn get(&self, terrain: TerrainKind) -> Option<f64> {
        self.0.get(&terrain).copied()
    }
}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self::empty()
            .with(TerrainKind::Dirt, 1.0)
            .with(TerrainKind::Grass, 3.0)
            .with(TerrainKind::Water, 5.0)
    }
}

/// Every cost must be a finite, non-negative number
pub(crate) fn validate_terrain_costs(
    costs: &TerrainCosts,
) -> Result<(), ValidationError> {
    if costs.0.values().all(|cost| cost.is_finite() && *cost >= 0.0) {
        Ok(())
    } else {
        Err(ValidationError::new("terrain_cost"))
    }
}
