use pursuit_core::Point;

use crate::arena::{NodeArena, NodeId};

impl NodeArena {
    /// The first step away from the start on the way to `goal`.
    ///
    /// Walks parent links until the node whose parent is the root. Returns
    /// `None` when `goal` is the root itself (already at the target).
    pub fn next_step(&self, goal: NodeId) -> Option<Point> {
        let mut id = goal;
        loop {
            let node = &self[id];
            let parent = node.parent?;
            if self[parent].parent.is_none() {
                return Some(node.pos);
            }
            id = parent;
        }
    }

    /// Full path from the start to `goal`, both included.
    pub fn path(&self, goal: NodeId) -> Vec<Point> {
        let mut path = Vec::with_capacity(self[goal].cost.max(0) as usize + 1);
        let mut cur = Some(goal);
        while let Some(id) = cur {
            path.push(self[id].pos);
            cur = self[id].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::SearchNode;

    fn chain(points: &[Point]) -> (NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let mut parent = None;
        for (cost, &pos) in points.iter().enumerate() {
            let id = arena.push(SearchNode {
                pos,
                cost: cost as i32,
                parent,
            });
            parent = Some(id);
        }
        (arena, parent.unwrap())
    }

    #[test]
    fn next_step_is_first_move_after_root() {
        let pts = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
        ];
        let (arena, goal) = chain(&pts);
        assert_eq!(arena.next_step(goal), Some(Point::new(1, 0)));
        assert_eq!(arena.path(goal), pts.to_vec());
    }

    #[test]
    fn adjacent_goal_is_the_next_step() {
        let (arena, goal) = chain(&[Point::new(3, 3), Point::new(3, 4)]);
        assert_eq!(arena.next_step(goal), Some(Point::new(3, 4)));
    }

    #[test]
    fn root_goal_means_no_move() {
        let (arena, goal) = chain(&[Point::new(2, 2)]);
        assert_eq!(goal, NodeId::ROOT);
        assert_eq!(arena.next_step(goal), None);
        assert_eq!(arena.path(goal), vec![Point::new(2, 2)]);
    }

    #[test]
    fn next_step_follows_branching_tree() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode {
            pos: Point::new(1, 1),
            cost: 0,
            parent: None,
        });
        let right = arena.push(SearchNode {
            pos: Point::new(2, 1),
            cost: 1,
            parent: Some(root),
        });
        let down = arena.push(SearchNode {
            pos: Point::new(1, 2),
            cost: 1,
            parent: Some(root),
        });
        let goal = arena.push(SearchNode {
            pos: Point::new(1, 3),
            cost: 2,
            parent: Some(down),
        });
        assert_eq!(arena.next_step(goal), Some(Point::new(1, 2)));
        assert_eq!(arena.next_step(right), Some(Point::new(2, 1)));
    }
}
