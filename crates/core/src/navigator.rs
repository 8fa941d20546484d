use crate::{
    config::NavConfig,
    layout::unit::{Point2, Point3},
    topology, GridAdapter, Hex, Layout, Pathfinder, SelectableGrid, Selection,
};
use anyhow::Context;
use log::debug;
use validator::Validate;

/// The main entrypoint for host applications. A navigator pairs a grid with
/// a [Layout] and search settings, and exposes every geometry, topology and
/// search query the crate supports in one place.
///
/// The navigator owns its grid, but `G` can just as well be a reference
/// (`&MyGrid` or `&mut MyGrid`) if the host wants to keep ownership.
///
/// ```
/// use hexnav::{Hex, HexGrid, NavConfig, Navigator, TerrainCosts, TerrainKind};
///
/// let grid = HexGrid::hexagon(4, TerrainKind::Grass, TerrainCosts::default());
/// let navigator = Navigator::new(NavConfig::default(), grid).unwrap();
/// let path = navigator.shortest_path(Hex::ORIGIN, Hex::new_qr(3, -1));
/// assert_eq!(path.first(), Some(&Hex::ORIGIN));
/// assert_eq!(path.last(), Some(&Hex::new_qr(3, -1)));
/// ```
#[derive(Clone, Debug)]
pub struct Navigator<G: GridAdapter> {
    config: NavConfig,
    layout: Layout,
    grid: G,
}

impl<G: GridAdapter> Navigator<G> {
    /// Create a navigator over a grid. Returns an error if the config is
    /// invalid.
    pub fn new(config: NavConfig, grid: G) -> anyhow::Result<Self> {
        config.validate().context("invalid navigation config")?;
        let layout = Layout::new(config.layout)?;
        debug!("Initialized navigator with {:?}", config);
        Ok(Self {
            config,
            layout,
            grid,
        })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    /// Find the hex under a world position. The hex may not have a tile.
    pub fn world_to_hex(&self, point: Point2) -> Hex {
        self.layout.world_to_hex(point)
    }

    pub fn hex_to_world(&self, hex: Hex) -> Point2 {
        self.layout.hex_to_world(hex)
    }

    /// See [Layout::hex_to_world_location]
    pub fn hex_to_world_location(&self, hex: Hex) -> Point3 {
        self.layout.hex_to_world_location(hex)
    }

    /// Adjacent hexes that have a tile in the grid
    pub fn neighbors(&self, hex: Hex) -> Vec<Hex> {
        topology::neighbors(&self.grid, hex)
    }

    /// See [topology::range]. This is pure lattice math, so some of the
    /// returned hexes may not have tiles.
    pub fn range(&self, center: Hex, radius: u32) -> Vec<Hex> {
        topology::range(center, radius)
    }

    pub fn range_size(&self, radius: u32) -> usize {
        topology::range_size(radius)
    }

    /// See [topology::area]
    pub fn area(&self, center: Hex, radius: u32) -> Vec<Hex> {
        topology::area(center, radius)
    }

    /// See [topology::ring]
    pub fn ring(&self, center: Hex, radius: u32) -> Vec<Hex> {
        topology::ring(center, radius)
    }

    /// See [topology::line]
    pub fn line(&self, start: Hex, end: Hex) -> Vec<Hex> {
        topology::line(start, end)
    }

    pub fn distance(&self, a: Hex, b: Hex) -> i32 {
        a.distance_to(b)
    }

    /// Find the cheapest path between two hexes. Empty if there is none. See
    /// [Pathfinder] for the cost model.
    pub fn shortest_path(&self, start: Hex, goal: Hex) -> Vec<Hex> {
        Pathfinder::new(&self.grid, &self.layout, self.config.pathfinding)
            .shortest_path(start, goal)
    }
}

impl<G: SelectableGrid> Navigator<G> {
    /// Highlight some hexes on the grid, recording them in `selection`. See
    /// [Selection::select].
    pub fn select_hexes<I>(
        &mut self,
        selection: &mut Selection,
        hexes: I,
    ) -> usize
    where
        I: IntoIterator<Item = Hex>,
    {
        selection.select(&mut self.grid, hexes)
    }

    /// Clear every highlight recorded in `selection`
    pub fn unselect_hexes(&mut self, selection: &mut Selection) {
        selection.unselect(&mut self.grid);
    }
}
