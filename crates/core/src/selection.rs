use crate::{Hex, HexIndexSet, SelectableGrid};
use log::trace;

/// The set of hexes that are currently highlighted on a grid. The selection
/// is owned by the caller rather than the grid, so the caller always knows
/// exactly what it has marked and can undo it later. Hexes are kept in the
/// order they were selected.
///
/// Typical usage is to clear the old selection before marking a new one:
///
/// ```
/// use hexnav::{Hex, HexGrid, Selection, TerrainCosts, TerrainKind};
///
/// let mut grid =
///     HexGrid::hexagon(2, TerrainKind::Grass, TerrainCosts::default());
/// let mut selection = Selection::default();
/// selection.select(&mut grid, [Hex::ORIGIN, Hex::new_qr(1, 0)]);
/// assert_eq!(selection.len(), 2);
///
/// selection.unselect(&mut grid);
/// assert!(selection.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Selection {
    hexes: HexIndexSet,
}

impl Selection {
    /// Mark every hex that has a tile as selected, and record it. Hexes with
    /// no tile are skipped. This is additive: anything already in the
    /// selection stays there. Returns the number of tiles that were marked.
    pub fn select<G, I>(&mut self, grid: &mut G, hexes: I) -> usize
    where
        G: SelectableGrid,
        I: IntoIterator<Item = Hex>,
    {
        let mut marked = 0;
        for hex in hexes {
            if grid.set_selected(hex, true) {
                self.hexes.insert(hex);
                marked += 1;
            } else {
                trace!("Skipping selection of {}, no tile there", hex);
            }
        }
        marked
    }

    /// Unmark every recorded hex on the grid, then clear the selection.
    pub fn unselect<G: SelectableGrid>(&mut self, grid: &mut G) {
        for hex in self.hexes.drain(..) {
            // The tile may have been removed since it was selected, which is
            // fine, there's nothing left to unmark
            grid.set_selected(hex, false);
        }
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains(&hex)
    }

    /// Iterate over the selected hexes, in selection order
    pub fn iter(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hexes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HexGrid, TerrainCosts, TerrainKind};

    fn grid() -> HexGrid {
        HexGrid::hexagon(2, TerrainKind::Grass, TerrainCosts::default())
    }

    fn is_selected(grid: &HexGrid, hex: Hex) -> bool {
        grid.tile(hex).unwrap().is_selected()
    }

    #[test]
    fn test_select_skips_missing() {
        let mut grid = grid();
        let mut selection = Selection::default();
        let marked = selection.select(
            &mut grid,
            vec![Hex::new_qr(1, 0), Hex::new_qr(9, 9), Hex::new_qr(0, 1)],
        );
        assert_eq!(marked, 2);
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![Hex::new_qr(1, 0), Hex::new_qr(0, 1)]
        );
        assert!(!selection.contains(Hex::new_qr(9, 9)));
        assert!(is_selected(&grid, Hex::new_qr(1, 0)));
        assert!(!is_selected(&grid, Hex::ORIGIN));
    }

    #[test]
    fn test_select_is_additive() {
        let mut grid = grid();
        let mut selection = Selection::default();
        selection.select(&mut grid, vec![Hex::ORIGIN]);
        selection.select(&mut grid, vec![Hex::new_qr(-1, 0), Hex::ORIGIN]);
        assert_eq!(selection.len(), 2);
        assert!(is_selected(&grid, Hex::ORIGIN));
        assert!(is_selected(&grid, Hex::new_qr(-1, 0)));
    }

    #[test]
    fn test_unselect() {
        let mut grid = grid();
        let mut selection = Selection::default();
        let hexes = vec![Hex::ORIGIN, Hex::new_qr(2, -2), Hex::new_qr(0, -1)];
        selection.select(&mut grid, hexes.clone());

        // Removing a selected tile doesn't break unselecting the rest
        grid.remove(Hex::new_qr(0, -1));
        selection.unselect(&mut grid);
        assert!(selection.is_empty());
        assert!(grid.tiles().values().all(|tile| !tile.is_selected()));
    }
}
