//! This module holds the basic types and data structures of the hexagon grid.
//!
//! ## Coordinate Systems
//!
//! hexnav uses two different coordinate systems:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify cells (tiles) of the lattice. The system is the
//! [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r` and `s`). **For any tile
//! coordinate, all three components are integers and `q + r + s = 0`.** Since
//! the third component is always derivable from the other two, [Hex] only
//! stores `q` and `r`. Identity, hashing and ordering are all defined on
//! `(q, r)` alone, so any map or set keyed by [Hex] agrees on what "the same
//! tile" means no matter how the coordinate was constructed.
//!
//! During interpolation (e.g. drawing a line between two tiles) and while
//! converting from world space, coordinates are allowed to take on real
//! values. Those are represented by [FractionalHex], which can be rounded back
//! to the nearest [Hex].
//!
//! ### World Coordinates
//!
//! World coordinates are 2D (or 3D) real-valued positions, the space that a
//! host application renders into or reads pointer locations from. The
//! conversion between the two spaces is defined by a [Layout](crate::Layout),
//! which knows the size and orientation of each tile.
//!
//! +-------------------+
//! |        +y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        -y         |
//! +-------------------+
//!
//! In the diagram above, `o` (the origin) is the center of tile `(0, 0, 0)`.

mod data_structure;
mod fractional;
mod unit;

pub use self::{data_structure::*, fractional::*, unit::*};
