pub mod terrain;
pub mod tile;

use crate::{
    config::GridConfig,
    grid::{
        terrain::{TerrainCosts, TerrainKind},
        tile::Tile,
    },
    timed, topology, Hex, HexMap,
};
use anyhow::{anyhow, Context};
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The capabilities the core needs from whatever owns the tiles. The core
/// never stores or mutates grid data itself; it only asks these questions.
/// [HexGrid] is a ready-made implementation, but host applications that
/// already keep their own tile storage can implement this directly.
pub trait GridAdapter {
    /// Is there a tile at this position? Coordinates without a tile are
    /// never returned by neighbor lookups or searches.
    fn tile_exists(&self, hex: Hex) -> bool;

    /// Get the terrain of the tile at this position, or `None` if there is no
    /// tile there
    fn tile_terrain(&self, hex: Hex) -> Option<TerrainKind>;

    /// Cost of entering a tile with this terrain. Implementations should
    /// return a large sentinel (see
    /// [UNKNOWN_TERRAIN_COST](crate::UNKNOWN_TERRAIN_COST)) for unmapped
    /// kinds rather than failing.
    fn terrain_cost(&self, terrain: TerrainKind) -> f64;

    /// Can tiles with this terrain never be entered?
    fn is_blocked(&self, terrain: TerrainKind) -> bool {
        terrain.is_blocked()
    }
}

/// A grid whose tiles can be visually highlighted. See
/// [Selection](crate::Selection).
pub trait SelectableGrid: GridAdapter {
    /// Mark or unmark the tile at a position. Returns `false` if there is no
    /// tile there.
    fn set_selected(&mut self, hex: Hex, selected: bool) -> bool;
}

impl<G: GridAdapter + ?Sized> GridAdapter for &G {
    fn tile_exists(&self, hex: Hex) -> bool {
        (**self).tile_exists(hex)
    }

    fn tile_terrain(&self, hex: Hex) -> Option<TerrainKind> {
        (**self).tile_terrain(hex)
    }

    fn terrain_cost(&self, terrain: TerrainKind) -> f64 {
        (**self).terrain_cost(terrain)
    }

    fn is_blocked(&self, terrain: TerrainKind) -> bool {
        (**self).is_blocked(terrain)
    }
}

impl<G: GridAdapter + ?Sized> GridAdapter for &mut G {
    fn tile_exists(&self, hex: Hex) -> bool {
        (**self).tile_exists(hex)
    }

    fn tile_terrain(&self, hex: Hex) -> Option<TerrainKind> {
        (**self).tile_terrain(hex)
    }

    fn terrain_cost(&self, terrain: TerrainKind) -> f64 {
        (**self).terrain_cost(terrain)
    }

    fn is_blocked(&self, terrain: TerrainKind) -> bool {
        (**self).is_blocked(terrain)
    }
}

impl<G: SelectableGrid + ?Sized> SelectableGrid for &mut G {
    fn set_selected(&mut self, hex: Hex, selected: bool) -> bool {
        (**self).set_selected(hex, selected)
    }
}

/// An in-memory grid of tiles, keyed by position, along with the cost table
/// for its terrain.
///
/// ## Serialization
/// Tiles serialize as a list rather than a map, since hexes can't be used as
/// keys in most formats. Selection state is not serialized.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HexGrid {
    /// The tiles that make up this grid, keyed by their position
    #[serde(with = "crate::util::hex_map_to_vec_serde")]
    tiles: HexMap<Tile>,

    /// Cost of entering each terrain type
    costs: TerrainCosts,
}

impl HexGrid {
    /// Create an empty grid with the given terrain costs
    pub fn new(costs: TerrainCosts) -> Self {
        Self {
            tiles: HexMap::default(),
            costs,
        }
    }

    /// Build a rectangular grid from a config. See [GridConfig] for the exact
    /// shape. Returns an error if the config is invalid.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let grid = timed!("Grid generation", {
            let mut grid = Self::new(config.costs.clone());
            for q in config.left..=config.right {
                // Shift each column so the grid comes out rectangular instead
                // of slanting along the r axis
                let q_offset = q.div_euclid(2);
                for r in (config.up - q_offset)..=(config.down - q_offset) {
                    grid.insert(Hex::new_qr(q, r), config.default_terrain);
                }
            }
            for terrain_override in &config.terrain {
                grid.insert(terrain_override.hex, terrain_override.terrain);
            }
            grid
        });
        info!("Generated grid with {} tiles", grid.len());
        Ok(grid)
    }

    /// Build a hexagon-shaped grid where every tile is `radius` or fewer
    /// steps from the origin, all with the same terrain.
    pub fn hexagon(
        radius: u32,
        terrain: TerrainKind,
        costs: TerrainCosts,
    ) -> Self {
        let mut grid = Self::new(costs);
        for hex in topology::area(Hex::ORIGIN, radius) {
            grid.insert(hex, terrain);
        }
        grid
    }

    /// Get a reference to the map of tiles that make up this grid
    pub fn tiles(&self) -> &HexMap<Tile> {
        &self.tiles
    }

    /// Get the tile at a position, if any
    pub fn tile(&self, hex: Hex) -> Option<&Tile> {
        self.tiles.get(&hex)
    }

    /// Get the cost table for this grid
    pub fn costs(&self) -> &TerrainCosts {
        &self.costs
    }

    /// Get the number of tiles in the grid
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add a tile, replacing whatever was at that position before. Returns
    /// the replaced tile.
    pub fn insert(&mut self, hex: Hex, terrain: TerrainKind) -> Option<Tile> {
        self.tiles.insert(hex, Tile::new(hex, terrain))
    }

    /// Remove the tile at a position, returning it
    pub fn remove(&mut self, hex: Hex) -> Option<Tile> {
        self.tiles.remove(&hex)
    }

    /// Change the terrain of an existing tile. Returns an error if there is
    /// no tile at that position.
    pub fn set_terrain(
        &mut self,
        hex: Hex,
        terrain: TerrainKind,
    ) -> anyhow::Result<()> {
        let tile = self
            .tiles
            .get_mut(&hex)
            .ok_or_else(|| anyhow!("no tile at {}", hex))?;
        tile.terrain = terrain;
        Ok(())
    }

    /// Advance the terrain of an existing tile to the next kind (see
    /// [TerrainKind::next]) and return the new terrain. Returns an error if
    /// there is no tile at that position.
    pub fn cycle_terrain(&mut self, hex: Hex) -> anyhow::Result<TerrainKind> {
        let tile = self
            .tiles
            .get_mut(&hex)
            .ok_or_else(|| anyhow!("no tile at {}", hex))?;
        tile.terrain = tile.terrain.next();
        Ok(tile.terrain)
    }

    /// Deserialize a grid from JSON. A grid can be serialized into JSON with
    /// [HexGrid::to_json]. Will fail if the input is malformed.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing grid")
    }

    /// Serializes this grid into JSON. This is a recoverable format, which can
    /// be loaded back into a [HexGrid] with [HexGrid::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("error serializing grid")
    }
}

impl GridAdapter for HexGrid {
    fn tile_exists(&self, hex: Hex) -> bool {
        self.tiles.contains_key(&hex)
    }

    fn tile_terrain(&self, hex: Hex) -> Option<TerrainKind> {
        self.tiles.get(&hex).map(Tile::terrain)
    }

    fn terrain_cost(&self, terrain: TerrainKind) -> f64 {
        self.costs.cost(terrain)
    }
}

impl SelectableGrid for HexGrid {
    fn set_selected(&mut self, hex: Hex, selected: bool) -> bool {
        match self.tiles.get_mut(&hex) {
            Some(tile) => {
                tile.selected = selected;
                true
            }
            None => false,
        }
    }
}
