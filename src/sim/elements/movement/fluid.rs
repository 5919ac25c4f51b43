use rand::Rng;

use crate::sim::data::element_grid::ElementGrid;
use crate::sim::elements::element::StateOfMatter;
use crate::sim::util::clock::Clock;
use crate::sim::util::vectors::{GridOffset, GridVector};

/// Default fluid element behavior
///
/// Fall like a solid, then spread sideways. A fluid only ever flows into
/// empty space, so unlike a solid it cannot displace another material. The
/// left/right order is a fair coin flip each tick; pooling fluid would
/// otherwise drift toward whichever side the rule table listed first.
pub fn fluid_process(
    pos: GridVector,
    grid: &mut ElementGrid,
    current_time: Clock,
    rng: &mut impl Rng,
) {
    let (first_lateral, second_lateral) = if rng.gen_bool(0.5) {
        (GridOffset::LEFT, GridOffset::RIGHT)
    } else {
        (GridOffset::RIGHT, GridOffset::LEFT)
    };
    let candidates = [
        GridOffset::DOWN,
        GridOffset::DOWN_LEFT,
        GridOffset::DOWN_RIGHT,
        first_lateral,
        second_lateral,
    ];

    for offset in candidates {
        let target = match grid.neighbor(pos, offset) {
            Ok(target) => target,
            Err(_) => continue,
        };
        let neighbor = grid.get(target);
        if neighbor.displaced(current_time) {
            continue;
        }
        if neighbor.get_type().state_of_matter() == StateOfMatter::Empty {
            grid.swap(pos, target, current_time);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::elements::element::ElementType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    /// An empty 8x8 grid, a clock one frame in, and a seeded rng
    fn get_test_grid() -> (ElementGrid, Clock, StdRng) {
        let mut clock = Clock::new();
        clock.update(Duration::from_millis(16));
        (ElementGrid::new_empty(8, 8), clock, StdRng::seed_from_u64(42))
    }

    fn set(grid: &mut ElementGrid, x: usize, y: usize, material: ElementType, clock: Clock) {
        grid.checked_set_material(GridVector { x, y }, material, clock)
            .unwrap();
    }

    fn material_at(grid: &ElementGrid, x: usize, y: usize) -> ElementType {
        grid.get(GridVector { x, y }).get_type()
    }

    #[test]
    fn test_falls_down() {
        let (mut grid, clock, mut rng) = get_test_grid();
        set(&mut grid, 3, 5, ElementType::Water, clock);

        fluid_process(GridVector { x: 3, y: 5 }, &mut grid, clock, &mut rng);

        assert_eq!(material_at(&grid, 3, 5), ElementType::Air);
        assert_eq!(material_at(&grid, 3, 4), ElementType::Water);
    }

    /// On the bottom row the only candidates left are the laterals, the
    /// fluid spreads exactly one cell to one side
    #[test]
    fn test_spreads_laterally_on_the_floor() {
        let (mut grid, clock, mut rng) = get_test_grid();
        set(&mut grid, 3, 0, ElementType::Water, clock);

        fluid_process(GridVector { x: 3, y: 0 }, &mut grid, clock, &mut rng);

        assert_eq!(material_at(&grid, 3, 0), ElementType::Air);
        let moved_left = material_at(&grid, 2, 0) == ElementType::Water;
        let moved_right = material_at(&grid, 4, 0) == ElementType::Water;
        assert!(moved_left ^ moved_right);
    }

    /// Water only flows into air; a lateral occupied by water is rejected
    /// and the free side wins no matter which order the coin flip picks
    #[test]
    fn test_flows_only_into_air() {
        let (mut grid, clock, mut rng) = get_test_grid();
        set(&mut grid, 3, 0, ElementType::Water, clock);
        set(&mut grid, 2, 0, ElementType::Water, clock);

        fluid_process(GridVector { x: 3, y: 0 }, &mut grid, clock, &mut rng);

        assert_eq!(material_at(&grid, 3, 0), ElementType::Air);
        assert_eq!(material_at(&grid, 2, 0), ElementType::Water);
        assert_eq!(material_at(&grid, 4, 0), ElementType::Water);
    }

    /// Unlike sand, water cannot displace a solid below it
    #[test]
    fn test_does_not_displace_sand() {
        let (mut grid, clock, mut rng) = get_test_grid();
        set(&mut grid, 3, 5, ElementType::Water, clock);
        set(&mut grid, 2, 4, ElementType::Sand, clock);
        set(&mut grid, 3, 4, ElementType::Sand, clock);
        set(&mut grid, 4, 4, ElementType::Sand, clock);
        set(&mut grid, 2, 5, ElementType::Sand, clock);
        set(&mut grid, 4, 5, ElementType::Sand, clock);

        fluid_process(GridVector { x: 3, y: 5 }, &mut grid, clock, &mut rng);

        assert_eq!(material_at(&grid, 3, 5), ElementType::Water);
    }

    /// In a corner every out-of-bounds candidate is skipped, never wrapped
    #[test]
    fn test_corner_does_not_wrap() {
        let (mut grid, clock, mut rng) = get_test_grid();
        set(&mut grid, 0, 0, ElementType::Water, clock);
        set(&mut grid, 1, 0, ElementType::Water, clock);

        fluid_process(GridVector { x: 0, y: 0 }, &mut grid, clock, &mut rng);

        assert_eq!(material_at(&grid, 0, 0), ElementType::Water);
        assert_eq!(material_at(&grid, 1, 0), ElementType::Water);
    }

    /// A lateral neighbor that already swapped this tick is not entered
    #[test]
    fn test_displaced_target_is_rejected() {
        let (mut grid, clock, mut rng) = get_test_grid();
        set(&mut grid, 3, 0, ElementType::Water, clock);
        set(&mut grid, 1, 0, ElementType::Water, clock);
        // The neighbor at (2, 0) becomes the displaced home of the water
        // that started at (1, 0)
        grid.swap(GridVector { x: 1, y: 0 }, GridVector { x: 2, y: 0 }, clock);

        fluid_process(GridVector { x: 3, y: 0 }, &mut grid, clock, &mut rng);

        assert_eq!(material_at(&grid, 2, 0), ElementType::Water);
        assert_eq!(material_at(&grid, 3, 0), ElementType::Air);
        assert_eq!(material_at(&grid, 4, 0), ElementType::Water);
    }
}
