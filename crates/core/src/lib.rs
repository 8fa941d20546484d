//! Hexnav is a hex grid geometry and pathfinding library. It converts between
//! hex coordinates and world positions, enumerates neighbors, lines, rings
//! and ranges on the hex lattice, and finds terrain-aware shortest paths
//! across a grid. Rendering, input handling and everything else visual is
//! left to the host application.
//!
//! ```
//! use hexnav::{GridConfig, HexGrid, Hex, NavConfig, Navigator, Point2};
//!
//! let grid = HexGrid::from_config(&GridConfig::default()).unwrap();
//! let navigator = Navigator::new(NavConfig::default(), grid).unwrap();
//!
//! // Resolve a pointer position to a tile, then path to it
//! let target = navigator.world_to_hex(Point2::new(640.0, -250.0));
//! let path = navigator.shortest_path(Hex::ORIGIN, target);
//! assert_eq!(path.last(), Some(&target));
//! ```
//!
//! The grid is pluggable: anything that implements [GridAdapter] can be
//! searched, so hosts that already store their own tiles don't need to copy
//! them into a [HexGrid]. See [NavConfig] for how tile geometry and search
//! behavior can be customized.

mod config;
mod grid;
mod hex;
mod layout;
mod navigator;
mod pathfinding;
mod selection;
pub mod topology;
mod util;

pub use crate::{
    config::{
        GridConfig, LayoutConfig, NavConfig, Orientation, PathfinderConfig,
        TerrainOverride,
    },
    grid::{
        terrain::{TerrainCosts, TerrainKind, UNKNOWN_TERRAIN_COST},
        tile::Tile,
        GridAdapter, HexGrid, SelectableGrid,
    },
    hex::{
        FractionalHex, HasHexPosition, Hex, HexDirection, HexIndexMap,
        HexIndexSet, HexMap, HexSet, DIRECTIONS,
    },
    layout::{
        unit::{Point2, Point3},
        Layout,
    },
    navigator::Navigator,
    pathfinding::Pathfinder,
    selection::Selection,
};
