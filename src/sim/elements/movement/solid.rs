use crate::sim::data::element_grid::ElementGrid;
use crate::sim::elements::element::StateOfMatter;
use crate::sim::util::clock::Clock;
use crate::sim::util::vectors::{GridOffset, GridVector};

/// Default solid element behavior
///
/// Fall straight down, then settle down-left, then down-right. Candidates
/// are tried in strict order and the first acceptable one wins, so a solid
/// makes at most one swap per tick. A candidate is acceptable when it exists,
/// has not already been displaced this tick, and is no more solid than a
/// liquid, which lets sand sink through water.
pub fn solid_process(pos: GridVector, grid: &mut ElementGrid, current_time: Clock) {
    const CANDIDATES: [GridOffset; 3] = [
        GridOffset::DOWN,
        GridOffset::DOWN_LEFT,
        GridOffset::DOWN_RIGHT,
    ];

    for offset in CANDIDATES {
        let target = match grid.neighbor(pos, offset) {
            Ok(target) => target,
            Err(_) => continue,
        };
        let neighbor = grid.get(target);
        if neighbor.displaced(current_time) {
            continue;
        }
        if neighbor.get_type().state_of_matter() <= StateOfMatter::Liquid {
            grid.swap(pos, target, current_time);
            return;
        }
    }
}
