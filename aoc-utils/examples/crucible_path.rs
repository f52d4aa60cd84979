//! Cheapest route of a crucible across a grid of heat-loss digits.
//!
//! Run with: cargo run --example crucible_path --release
//!
//! The crucible starts top-left and must reach bottom-right. Entering a cell costs
//! its digit. It cannot reverse, must move at least `min_run` cells before turning
//! and at most `max_run` cells in a straight line.
//!
//! The search state is `(position, direction, run length)`, explored lazily with
//! Dijkstra and deduplicated on the full state.

use std::time::Instant;

use aoc_utils::graph::dijkstra;
use aoc_utils::grid::Grid;
use aoc_utils::vec::{Vec2, vec2};

const INPUT: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Vec2,
    dir: Vec2,
    run: u32,
}

fn turns(dir: Vec2) -> [Vec2; 2] {
    [vec2(dir.y, -dir.x), vec2(-dir.y, dir.x)]
}

fn least_heat_loss(grid: &Grid<u32>, min_run: u32, max_run: u32) -> Option<u32> {
    let target = vec2(grid.width() as i64 - 1, grid.height() as i64 - 1);
    let starts = [Vec2::RIGHT, Vec2::DOWN].map(|dir| Crucible {
        pos: Vec2::ZERO,
        dir,
        run: 0,
    });

    dijkstra(
        starts,
        |state: &Crucible, _| {
            let mut moves = Vec::with_capacity(3);
            if state.run < max_run {
                moves.push(Crucible {
                    pos: state.pos + state.dir,
                    dir: state.dir,
                    run: state.run + 1,
                });
            }
            if state.run >= min_run {
                moves.extend(turns(state.dir).map(|dir| Crucible {
                    pos: state.pos + dir,
                    dir,
                    run: 1,
                }));
            }
            moves.retain(|next| grid.contains(next.pos));
            moves
        },
        |_, to: &Crucible| grid[to.pos],
    )
    .dedup_by(|state: &Crucible| *state)
    .find(|item| item.value.pos == target && item.value.run >= min_run)
    .map(|item| item.distance)
}

fn main() {
    let grid = Grid::parse(INPUT)
        .expect("rectangular input")
        .map(|cell| cell.value.to_digit(10).unwrap_or(0));

    println!("{}x{} grid", grid.width(), grid.height());

    for (name, min_run, max_run) in [("crucible", 0, 3), ("ultra crucible", 4, 10)] {
        let start = Instant::now();
        let loss = least_heat_loss(&grid, min_run, max_run);
        let elapsed = start.elapsed();
        match loss {
            Some(loss) => println!("{name:<15} heat loss {loss:>4}  ({elapsed:?})"),
            None => println!("{name:<15} cannot reach the factory"),
        }
    }
}
