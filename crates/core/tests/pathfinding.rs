use hexnav::{
    GridAdapter, Hex, HexGrid, HexSet, NavConfig, Navigator, TerrainCosts,
    TerrainKind,
};

/// A host-side grid that doesn't use [HexGrid] at all: a ring of walls in an
/// otherwise open field of dirt
struct WalledField {
    radius: i32,
    walls: HexSet,
}

impl GridAdapter for WalledField {
    fn tile_exists(&self, hex: Hex) -> bool {
        hex.length() <= self.radius
    }

    fn tile_terrain(&self, hex: Hex) -> Option<TerrainKind> {
        if !self.tile_exists(hex) {
            None
        } else if self.walls.contains(&hex) {
            Some(TerrainKind::Blocked)
        } else {
            Some(TerrainKind::Dirt)
        }
    }

    fn terrain_cost(&self, terrain: TerrainKind) -> f64 {
        TerrainCosts::default().cost(terrain)
    }
}

fn assert_connected(path: &[Hex]) {
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent_to(pair[1]), "{:?}", path);
    }
}

#[test]
fn test_custom_adapter() {
    // Wall off radius 2 except for a single gap
    let gap = Hex::new_qr(-2, 0);
    let walls = hexnav::topology::ring(Hex::ORIGIN, 2)
        .into_iter()
        .filter(|hex| *hex != gap)
        .collect();
    let field = WalledField { radius: 5, walls };
    let navigator = Navigator::new(NavConfig::default(), field).unwrap();

    let goal = Hex::new_qr(4, -1);
    let path = navigator.shortest_path(Hex::ORIGIN, goal);
    assert_eq!(path.first(), Some(&Hex::ORIGIN));
    assert_eq!(path.last(), Some(&goal));
    assert_connected(&path);
    // The only way out is through the gap
    assert!(path.contains(&gap), "{:?}", path);
    assert!(path.iter().all(|hex| !navigator.grid().walls.contains(hex)));
}

#[test]
fn test_sealed_off() {
    let walls = hexnav::topology::ring(Hex::ORIGIN, 2).into_iter().collect();
    let field = WalledField { radius: 5, walls };
    let navigator = Navigator::new(NavConfig::default(), field).unwrap();
    assert!(navigator
        .shortest_path(Hex::ORIGIN, Hex::new_qr(4, -1))
        .is_empty());
    // Still fine inside the walls
    assert_eq!(
        navigator.shortest_path(Hex::ORIGIN, Hex::new_qr(1, 0)).len(),
        2
    );
}

#[test]
fn test_pointer_to_path() {
    let grid =
        HexGrid::hexagon(6, TerrainKind::Grass, TerrainCosts::default());
    let navigator = Navigator::new(NavConfig::default(), grid).unwrap();
    let target = Hex::new_qr(-3, 5);

    // Resolve a point slightly off the tile's center, like a pointer click
    let click = navigator.hex_to_world(target);
    let clicked = navigator
        .world_to_hex(hexnav::Point2::new(click.x + 20.0, click.y - 15.0));
    assert_eq!(clicked, target);

    let path = navigator.shortest_path(Hex::ORIGIN, clicked);
    assert_eq!(path.len(), Hex::ORIGIN.distance_to(target) as usize + 1);
    assert_connected(&path);
}
