//! Axis-greedy movement used when no path to the player exists.
//!
//! The mover closes one axis difference per move. With both differences
//! non-zero it compares the *signed* differences: `dx <= dy` moves along X
//! first, anything else along Y. That makes the preference depend on which
//! side of the player the enemy is on rather than on which gap is smaller,
//! and `dx == dy` always favours X.

use pursuit_core::{MarkerGrid, Point};

/// Candidate moves for one greedy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPlan {
    /// Step tried first.
    pub primary: Point,
    /// Step along the other axis, tried if `primary` is blocked. `None` when
    /// only one axis differs.
    pub retry: Option<Point>,
}

/// One unit toward zero difference.
fn toward(diff: i32) -> i32 {
    if diff < 0 { 1 } else { -1 }
}

/// Choose the axis order for a greedy step from `from` toward `target`.
///
/// Returns `None` when the two positions coincide.
pub fn plan(from: Point, target: Point) -> Option<AxisPlan> {
    let diff = from - target;
    if diff == Point::ZERO {
        return None;
    }
    let x_step = from.shift(toward(diff.x), 0);
    let y_step = from.shift(0, toward(diff.y));

    let plan = if diff.y == 0 {
        AxisPlan {
            primary: x_step,
            retry: None,
        }
    } else if diff.x == 0 {
        AxisPlan {
            primary: y_step,
            retry: None,
        }
    } else if diff.x <= diff.y {
        AxisPlan {
            primary: x_step,
            retry: Some(y_step),
        }
    } else {
        AxisPlan {
            primary: y_step,
            retry: Some(x_step),
        }
    };
    Some(plan)
}

/// The cell a greedy mover at `from` would enter, or `None` if both axis
/// attempts are blocked (or it already stands on `target`).
///
/// Cells outside the grid count as blocked.
pub fn greedy_step(grid: &impl MarkerGrid, from: Point, target: Point) -> Option<Point> {
    let plan = plan(from, target)?;
    if grid.is_open(plan.primary) {
        return Some(plan.primary);
    }
    plan.retry.filter(|&p| grid.is_open(p))
}
