//! Queries that enumerate sets of hexes: neighbors, lines, rings and ranges.
//! Everything here except [neighbors] is pure lattice math and doesn't care
//! what tiles exist.

use crate::{FractionalHex, GridAdapter, Hex, DIRECTIONS};
use std::cmp;

/// Get the hexes adjacent to `hex` that have a tile in the grid, in direction
/// order. Positions without a tile are skipped; this never invents tiles.
pub fn neighbors(grid: &impl GridAdapter, hex: Hex) -> Vec<Hex> {
    hex.adjacents().filter(|adj| grid.tile_exists(*adj)).collect()
}

/// Get every hex on the straight line between two hexes, including both
/// endpoints. The result always has `distance + 1` entries, with no
/// duplicates.
pub fn line(start: Hex, end: Hex) -> Vec<Hex> {
    let distance = start.distance_to(end);
    // Clamp so a zero-length line doesn't divide by zero
    let step = 1.0 / f64::from(cmp::max(distance, 1));
    (0..=distance)
        .map(|i| FractionalHex::lerp(start, end, step * f64::from(i)).round())
        .collect()
}

/// Get every hex within `radius` steps of `center`, **not including the
/// center itself**. The result always has [range_size] entries. Use [area] if
/// you want the center too.
pub fn range(center: Hex, radius: u32) -> Vec<Hex> {
    area(center, radius)
        .into_iter()
        .filter(|hex| *hex != center)
        .collect()
}

/// The number of hexes returned by [range]: `3r(r+1)`
pub fn range_size(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * (r + 1)
}

/// Get every hex within `radius` steps of `center`, including the center.
/// Hexes come out column by column (ascending q, then ascending r).
pub fn area(center: Hex, radius: u32) -> Vec<Hex> {
    let r = radius as i32;
    let mut hexes = Vec::with_capacity(area_size(radius));
    for q in -r..=r {
        // If we just do [-r,r] for r as well, then we end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let r_min = cmp::max(-r, -q - r);
        let r_max = cmp::min(r, -q + r);
        for r in r_min..=r_max {
            hexes.push(center + Hex::new_qr(q, r));
        }
    }
    hexes
}

/// The number of hexes returned by [area]: `3r²+3r+1`
pub fn area_size(radius: u32) -> usize {
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    range_size(radius) + 1
}

/// Get every hex exactly `radius` steps from `center`, walking around the
/// ring in direction order. Radius 0 gives just the center.
pub fn ring(center: Hex, radius: u32) -> Vec<Hex> {
    if radius == 0 {
        return vec![center];
    }

    let r = radius as i32;
    let mut hexes = Vec::with_capacity(6 * radius as usize);
    // Start at the corner reached by walking from the center in direction 4,
    // then each side of the ring is a walk along the next direction
    let mut hex = center + Hex::direction(4).scale(r);
    for direction in DIRECTIONS.iter() {
        for _ in 0..radius {
            hexes.push(hex);
            hex = hex + *direction;
        }
    }
    hexes
}

/// Sum of absolute component differences. See [Hex::manhattan_distance_to].
pub fn manhattan_distance(a: Hex, b: Hex) -> i32 {
    a.manhattan_distance_to(b)
}
