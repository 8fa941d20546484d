use crate::{
    config::PathfinderConfig, timed, GridAdapter, Hex, HexMap, Layout,
    UNKNOWN_TERRAIN_COST,
};
use log::debug;
use std::{
    cmp::Ordering,
    collections::{hash_map::Entry, BinaryHeap},
};

/// Weighted best-first search over a grid. A pathfinder borrows the grid and
/// layout it searches over, so it's cheap to create one per query.
///
/// ## Cost Model
///
/// Entering a tile costs that tile's terrain cost, according to the grid.
/// Tiles with blocked terrain are never entered at all. On top of the terrain
/// cost, each step gets a small discount (or surcharge) based on how well it
/// lines up with the direction to the goal, measured in world space:
///
/// ```text
/// cost = terrain_cost(next)
///     - alignment_weight * dot(dir(current, next), dir(next, goal))
/// ```
///
/// This breaks ties between equal-terrain routes in favor of ones that head
/// straight for the goal. It's a shaping term, not a real distance, so a
/// step can in principle come out slightly negative. The search doesn't
/// guard against that; keep `alignment_weight` well below the gaps between
/// terrain costs and it never matters in practice.
///
/// The frontier is ordered by `cost + manhattan_distance(next, goal)`. The
/// Manhattan distance on cube coordinates is twice the hex distance, so it can
/// overestimate on cheap terrain, which means results are not guaranteed to be
/// optimal when tiles cost less than 2. Ties between equal priorities go to
/// whichever node was queued first.
///
/// There is no step limit or cancellation. A search runs until it reaches
/// the goal or runs out of tiles, so callers with latency requirements should
/// bound the grid size.
#[derive(Clone, Debug)]
pub struct Pathfinder<'a, G: GridAdapter> {
    grid: &'a G,
    layout: &'a Layout,
    config: PathfinderConfig,
}

impl<'a, G: GridAdapter> Pathfinder<'a, G> {
    pub fn new(
        grid: &'a G,
        layout: &'a Layout,
        config: PathfinderConfig,
    ) -> Self {
        Self {
            grid,
            layout,
            config,
        }
    }

    /// Find the cheapest path from `start` to `goal`. The returned path
    /// starts with `start`, ends with `goal`, and each hex in it is adjacent
    /// to the next. If the goal can't be reached, the path is empty. That's
    /// a normal outcome, not an error, so always check for it.
    pub fn shortest_path(&self, start: Hex, goal: Hex) -> Vec<Hex> {
        debug!("Searching for path from {} to {}", start, goal);
        timed!("Path search", self.search(start, goal))
    }

    fn search(&self, start: Hex, goal: Hex) -> Vec<Hex> {
        let mut frontier = Frontier::default();
        let mut came_from: HexMap<Hex> = HexMap::default();
        let mut cost_so_far: HexMap<f64> = HexMap::default();
        frontier.push(start, 0.0);
        came_from.insert(start, start);
        cost_so_far.insert(start, 0.0);

        let mut expanded: usize = 0;
        while let Some(current) = frontier.pop() {
            if current == goal {
                break;
            }
            expanded += 1;

            // Every hex that gets queued has a cost recorded first
            let current_cost = cost_so_far[&current];
            for next in current.adjacents() {
                let blocked = match self.grid.tile_terrain(next) {
                    // No tile there
                    None => true,
                    Some(terrain) => self.grid.is_blocked(terrain),
                };
                if blocked {
                    continue;
                }

                let new_cost =
                    current_cost + self.edge_cost(current, next, goal);
                let improved = match cost_so_far.entry(next) {
                    Entry::Vacant(entry) => {
                        entry.insert(new_cost);
                        true
                    }
                    Entry::Occupied(mut entry) if new_cost < *entry.get() => {
                        entry.insert(new_cost);
                        true
                    }
                    Entry::Occupied(_) => false,
                };
                if improved {
                    let priority = new_cost
                        + f64::from(next.manhattan_distance_to(goal));
                    frontier.push(next, priority);
                    came_from.insert(next, current);
                }
            }
        }

        let path = reconstruct_path(&came_from, start, goal);
        if path.is_empty() {
            debug!(
                "No path from {} to {} (expanded {} nodes)",
                start, goal, expanded
            );
        } else {
            debug!(
                "Found path of {} hexes from {} to {} (expanded {} nodes)",
                path.len(),
                start,
                goal,
                expanded
            );
        }
        path
    }

    /// Cost of stepping from `current` into the adjacent hex `next`, while
    /// heading for `goal`. See the struct-level docs for the formula.
    pub fn edge_cost(&self, current: Hex, next: Hex, goal: Hex) -> f64 {
        let base_cost = match self.grid.tile_terrain(next) {
            Some(terrain) => self.grid.terrain_cost(terrain),
            None => UNKNOWN_TERRAIN_COST,
        };
        base_cost
            - self.config.alignment_weight
                * self.alignment(current, next, goal)
    }

    /// Dot product between the step direction and the direction from the
    /// step's destination to the goal, both in world space. 1 means the step
    /// points straight at the goal, -1 straight away. A step onto the goal
    /// itself has no remaining direction and counts as 0.
    fn alignment(&self, current: Hex, next: Hex, goal: Hex) -> f64 {
        match (
            self.layout.world_direction(current, next),
            self.layout.world_direction(next, goal),
        ) {
            (Some(step), Some(remaining)) => step.dot(&remaining),
            _ => 0.0,
        }
    }
}

/// Walk the breadcrumbs back from the goal to the start, then flip them around
fn reconstruct_path(
    came_from: &HexMap<Hex>,
    start: Hex,
    goal: Hex,
) -> Vec<Hex> {
    if !came_from.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;
    // Every recorded hex chains back to the start, which points to itself
    while let Some(&previous) = came_from.get(&current) {
        if current == start {
            break;
        }
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}

/// Min-priority queue of hexes. [BinaryHeap] is a max-heap, so the ordering
/// on [FrontierNode] is reversed.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierNode>,
    /// Incremented on every push, so equal priorities pop in insertion order
    sequence: u64,
}

impl Frontier {
    fn push(&mut self, hex: Hex, priority: f64) {
        self.heap.push(FrontierNode {
            priority,
            sequence: self.sequence,
            hex,
        });
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<Hex> {
        self.heap.pop().map(|node| node.hex)
    }
}

#[derive(Copy, Clone, Debug)]
struct FrontierNode {
    priority: f64,
    sequence: u64,
    hex: Hex,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lowest priority first, then oldest)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}
