//! Routing a crucible across a heat-loss map (day 17).

use gridwalk_core::Pos;
use gridwalk_grid::CostGrid;
use gridwalk_search::{shortest_path_cost, Run, RunLimited, RunLimits, SearchState};
use tracing::debug;

use crate::error::PuzzleError;

/// Least heat lost moving from the top-left to the bottom-right cell.
///
/// Entering a cell loses its digit's worth of heat; the starting cell
/// costs nothing. `limits` bounds straight runs.
#[tracing::instrument(skip_all, fields(min = limits.min, max = limits.max))]
pub fn min_heat_loss(grid: &CostGrid, limits: RunLimits) -> Result<u64, PuzzleError> {
    let rule = RunLimited::new(limits)?;
    let goal = grid.last_pos();
    let cost = shortest_path_cost(
        grid,
        SearchState::start(Pos::ORIGIN),
        &rule,
        |s: &SearchState<Run>| s.pos == goal,
    )?;
    debug!(?cost, "crucible route");
    cost.ok_or_else(|| {
        PuzzleError::no_answer(format!(
            "no route to {goal} with straight runs of {}..={}",
            limits.min, limits.max
        ))
    })
}
