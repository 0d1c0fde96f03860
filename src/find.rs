use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::grid::{Maze, Point};

/// A frontier entry referencing a node in the search arena.
///
/// Ordered by `priority` alone; equal-priority entries come back from
/// the heap in whatever order its internals yield. The tie order is
/// deliberately left uncanonicalized.
#[derive(Debug, Eq)]
struct ToVisit {
    priority: usize,
    node: usize,
}

impl Ord for ToVisit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority).reverse() // reverse for BinaryHeap to be a min-heap
    }
}

impl PartialOrd for ToVisit {
    fn partial_cmp(&self, other: &ToVisit) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToVisit {
    fn eq(&self, other: &ToVisit) -> bool {
        self.priority == other.priority
    }
}

/// One node of the search tree: a coordinate and the arena index of the
/// node it was reached from.
#[derive(Debug, Clone, Copy)]
struct Node {
    point: Point,
    parent: Option<usize>,
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult {
    pub path: Vec<Point>,
    pub start: Point,
    pub goal: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState {
    Computing,
    NoPathFound,
    PathFound(PathResult),
}

/// Greedy best-first search over a [`Maze`].
///
/// The priority of a frontier entry is the Manhattan distance from its
/// coordinate to the goal; accumulated path cost is never part of the
/// key, so the returned path is not guaranteed to be the shortest one.
/// A coordinate may sit in the frontier several times (pushes are only
/// suppressed for already-visited cells), and the winning entry's
/// parent chain is the one the path is reconstructed from.
#[derive(Debug)]
pub struct PathFinder {
    start: Point,
    goal: Point,
    nodes: Vec<Node>,
    visited: Vec<Vec<bool>>,
    visit_list: BinaryHeap<ToVisit>,
    state: PathFinderState,
}

impl PathFinder {
    pub fn new(maze: &Maze, start: Point, goal: Point) -> Self {
        Self {
            start,
            goal,
            nodes: vec![Node {
                point: start,
                parent: None,
            }],
            visited: vec![vec![false; maze.size]; maze.size],
            visit_list: BinaryHeap::from([ToVisit {
                priority: 0,
                node: 0,
            }]),
            state: PathFinderState::Computing,
        }
    }

    pub fn finish(mut self, maze: &Maze) -> PathFinderState {
        loop {
            match self.step(maze) {
                PathFinderState::Computing => {}
                s => return s,
            }
        }
    }

    pub fn step(&mut self, maze: &Maze) -> PathFinderState {
        if self.state != PathFinderState::Computing {
            return self.state.clone();
        }
        if let Some(visit) = self.visit_list.pop() {
            // we have a point to process, find the valid neighbors to visit next

            let point = self.nodes[visit.node].point;

            if point == self.goal {
                log::debug!("goal reached, {} nodes allocated", self.nodes.len());

                // walk the parent chain back to the start
                let mut path: Vec<Point> = Vec::new();
                let mut current = Some(visit.node);
                while let Some(index) = current {
                    path.push(self.nodes[index].point);
                    current = self.nodes[index].parent;
                }
                path.reverse();

                self.state = PathFinderState::PathFound(PathResult {
                    path,
                    start: self.start,
                    goal: self.goal,
                });

                return self.state.clone();
            }

            self.visited[point.row][point.col] = true;

            for neighbor in maze.neighbors_of(point) {
                if !self.visited[neighbor.row][neighbor.col] {
                    self.nodes.push(Node {
                        point: neighbor,
                        parent: Some(visit.node),
                    });
                    self.visit_list.push(ToVisit {
                        priority: neighbor.manhattan(self.goal),
                        node: self.nodes.len() - 1,
                    });
                }
            }
        } else {
            self.state = PathFinderState::NoPathFound;
        }

        self.state.clone()
    }

    pub fn state(&self) -> &PathFinderState {
        &self.state
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }
}

/// Run the search from the maze's start to its goal and return the
/// coordinate path, or [`Error::NoPath`] if the frontier empties first.
pub fn find_path(maze: &Maze) -> Result<Vec<Point>, Error> {
    match PathFinder::new(maze, maze.start, maze.goal).finish(maze) {
        PathFinderState::PathFound(result) => Ok(result.path),
        _ => Err(Error::NoPath),
    }
}
