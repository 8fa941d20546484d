use crate::{
    grid::terrain::{validate_terrain_costs, TerrainCosts, TerrainKind},
    layout::unit::Point3,
    Hex,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::{Validate, ValidationError};

/// Configuration for a [Navigator](crate::Navigator). This covers everything
/// the core needs to know about tile geometry and search tuning. Terrain
/// costs belong to the grid, see [GridConfig].
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NavConfig {
    /// Size, orientation and placement of tiles in world space
    #[validate]
    pub layout: LayoutConfig,

    /// Tuning for shortest path searches
    #[validate]
    pub pathfinding: PathfinderConfig,
}

/// Defines how hexes map onto world space. A [Layout](crate::Layout) is a pure
/// function of this config.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between the center of a tile and one of its 6 vertices. This
    /// is also the length of one side of the tile.
    #[validate(range(min = 0.001))]
    pub outer_radius: f64,

    /// Distance between the center of a tile and the midpoint of one of its
    /// sides. For a regular hexagon this is `outer_radius * sqrt(3) / 2`.
    /// Other values produce stretched tiles, which still tile the plane.
    #[validate(range(min = 0.001))]
    pub inner_radius: f64,

    /// Which way the tiles are rotated
    pub orientation: Orientation,

    /// Translation applied to every 3D tile location. Doesn't affect 2D
    /// positions.
    pub tile_offset: Point3,

    /// The `z` value of every 3D tile location, before the offset is applied
    pub tile_elevation: f64,
}

/// Orientation of each hexagon in world space
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Two sides of each tile are parallel to the x axis. Columns of tiles
    /// line up vertically.
    FlatTop,
    /// Two sides of each tile are parallel to the y axis. Rows of tiles line
    /// up horizontally.
    PointyTop,
}

/// Config for the shortest path search. See
/// [Pathfinder](crate::Pathfinder) for how these are used.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PathfinderConfig {
    /// How strongly the search prefers steps that keep heading towards the
    /// goal. Each step's cost is reduced by this times the alignment (a value
    /// in `[-1, 1]`) between the step and the direction to the goal. This
    /// should stay well below the smallest difference between two terrain
    /// costs, otherwise it starts to override terrain.
    #[validate(range(min = 0.0, max = 1.0))]
    pub alignment_weight: f64,
}

/// Config for building an in-memory [HexGrid](crate::HexGrid). The base
/// shape is a rectangle (in a flat-top layout) of tiles. Each column `q` in
/// `[left, right]` holds the rows `[up - floor(q/2), down - floor(q/2)]`,
/// which cancels out the diagonal slant of the `r` axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_bounds"))]
pub struct GridConfig {
    /// First column (q) of the grid
    pub left: i32,
    /// Last column (q) of the grid, inclusive
    pub right: i32,
    /// First row of the grid, before the per-column offset
    pub up: i32,
    /// Last row of the grid, inclusive, before the per-column offset
    pub down: i32,

    /// Terrain given to every generated tile that isn't overridden
    pub default_terrain: TerrainKind,

    /// Per-tile terrain. Overrides outside the rectangle add new tiles.
    pub terrain: Vec<TerrainOverride>,

    /// Movement cost of each terrain type
    #[validate(custom = "validate_terrain_costs")]
    pub costs: TerrainCosts,
}

/// Assign a terrain type to a single tile
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainOverride {
    pub hex: Hex,
    pub terrain: TerrainKind,
}

fn validate_bounds(config: &GridConfig) -> Result<(), ValidationError> {
    if config.left > config.right || config.up > config.down {
        Err(ValidationError::new("grid_bounds"))
    } else {
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            outer_radius: 100.0,
            inner_radius: 100.0 * 3f64.sqrt() / 2.0,
            orientation: Orientation::FlatTop,
            tile_offset: Point3::default(),
            tile_elevation: 0.0,
        }
    }
}

impl LayoutConfig {
    /// A regular hexagon layout with the given outer radius. The inner radius
    /// is derived from it.
    pub fn regular(outer_radius: f64, orientation: Orientation) -> Self {
        Self {
            outer_radius,
            inner_radius: outer_radius * 3f64.sqrt() / 2.0,
            orientation,
            ..Default::default()
        }
    }
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            alignment_weight: 0.1,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            left: -30,
            right: 30,
            up: -30,
            down: 30,
            default_terrain: TerrainKind::Grass,
            terrain: Vec::new(),
            costs: TerrainCosts::default(),
        }
    }
}
