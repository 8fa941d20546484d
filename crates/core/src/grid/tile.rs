use crate::{grid::terrain::TerrainKind, HasHexPosition, Hex};
use serde::{Deserialize, Serialize};

/// A single cell of a [HexGrid](crate::HexGrid). The position is fixed for
/// the life of the tile, but terrain and selection can change as the host
/// application edits the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// The location of this tile in the grid. Every tile in a grid has a
    /// unique position.
    pub(super) position: Hex,

    /// What the ground is like, which decides movement cost and whether the
    /// tile can be entered at all
    pub(super) terrain: TerrainKind,

    /// Is this tile currently highlighted? Managed through
    /// [Selection](crate::Selection), not serialized.
    #[serde(skip)]
    pub(super) selected: bool,
}

impl Tile {
    pub fn new(position: Hex, terrain: TerrainKind) -> Self {
        Self {
            position,
            terrain,
            selected: false,
        }
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Shorthand for checking if this tile's terrain can't be entered
    pub fn is_blocked(&self) -> bool {
        self.terrain.is_blocked()
    }
}

impl HasHexPosition for Tile {
    fn position(&self) -> Hex {
        self.position
    }
}
