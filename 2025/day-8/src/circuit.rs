//! Merging junction boxes into circuits by wiring the closest pairs first.
//!
//! Both parts share the same machinery: every unordered pair of boxes is
//! tagged with its squared straight-line distance, the pairs are sorted
//! closest-first, and a disjoint-set forest tracks which boxes already share
//! a circuit. The parts differ only in when they stop consuming pairs.

use chumsky::prelude::*;
use glam::I64Vec3;
use itertools::Itertools;
use miette::Diagnostic;
use thiserror::Error;

/// How many of the closest pairs part 1 wires together. Redundant pairs
/// (boxes already in the same circuit) still count against this budget.
pub const PAIRS_TO_PROCESS: usize = 1000;

#[derive(Debug, Error, Diagnostic)]
pub enum CircuitError {
    /// The input contained no junction boxes, so there are no circuits to rank.
    #[error("no junction boxes provided")]
    #[diagnostic(code(aoc::circuits::empty_input))]
    EmptyInput,

    /// All candidate connections were consumed without the boxes ever merging
    /// into a single circuit.
    #[error("could not merge all junction boxes into a single circuit")]
    #[diagnostic(code(aoc::circuits::disconnected))]
    Disconnected,
}

/// Disjoint-set forest over junction-box indices, with union by size and
/// path compression.
#[derive(Debug)]
pub struct CircuitForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    circuits: usize,
}

impl CircuitForest {
    /// Creates a forest of singleton circuits, one per box.
    pub fn new(boxes: usize) -> Self {
        Self {
            parent: (0..boxes).collect(),
            size: vec![1; boxes],
            circuits: boxes,
        }
    }

    /// Root of `i`'s circuit.
    ///
    /// Iterative two-pass walk: first locate the root, then repoint every
    /// node on the path directly at it. Recursion would risk the stack on
    /// long unmerged chains.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            node = std::mem::replace(&mut self.parent[node], root);
        }
        root
    }

    /// Merges the circuits containing `a` and `b`, attaching the smaller
    /// tree under the larger (ties keep `a`'s root). Returns `false` without
    /// touching the forest when the boxes are already connected.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.circuits -= 1;
        true
    }

    /// Number of distinct circuits currently in the forest.
    pub fn circuits(&self) -> usize {
        self.circuits
    }

    /// Sizes of every circuit, in no particular order.
    ///
    /// Compresses every index first; `size` is only authoritative at roots,
    /// so the sizes are read strictly after the compression pass.
    pub fn circuit_sizes(&mut self) -> Vec<usize> {
        for i in 0..self.parent.len() {
            self.find(i);
        }
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .map(|i| self.size[i])
            .collect()
    }
}

/// Parses one `x,y,z` triple of signed integers per line.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec3>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .from_str::<i64>()
        .unwrapped();

    coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| I64Vec3::new(x, y, z))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// All unordered box pairs tagged with squared straight-line distance,
/// sorted ascending. The tuple `(dist2, a, b)` itself is the sort key, so
/// equal distances fall back to index order rather than an arbitrary one.
pub fn sorted_connections(boxes: &[I64Vec3]) -> Vec<(i64, usize, usize)> {
    let mut connections = (0..boxes.len())
        .tuple_combinations()
        .map(|(a, b)| ((boxes[a] - boxes[b]).length_squared(), a, b))
        .collect::<Vec<_>>();

    connections.sort_unstable();
    connections
}

/// Wires the first `max_pairs` closest pairs together and returns the
/// resulting forest. Every candidate pair consumes budget, whether or not
/// it actually merges two circuits.
pub fn connect_closest_circuits(boxes: &[I64Vec3], max_pairs: usize) -> CircuitForest {
    let mut forest = CircuitForest::new(boxes.len());

    for &(_, a, b) in sorted_connections(boxes).iter().take(max_pairs) {
        forest.union(a, b);
    }
    forest
}

/// Product of the three largest circuit sizes, padding with singleton
/// circuits when fewer than three exist.
pub fn three_largest_circuit_product(forest: &mut CircuitForest) -> Result<usize, CircuitError> {
    let mut sizes = forest.circuit_sizes();
    if sizes.is_empty() {
        return Err(CircuitError::EmptyInput);
    }

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.resize(sizes.len().max(3), 1);

    Ok(sizes.iter().take(3).product())
}

/// Walks the candidate connections closest-first, skipping pairs that are
/// already wired, until every box belongs to one circuit. Returns the pair
/// whose merge completed it; remaining candidates are never inspected.
pub fn find_last_connection_for_full_circuit(
    boxes: &[I64Vec3],
) -> Result<(usize, usize), CircuitError> {
    let mut forest = CircuitForest::new(boxes.len());

    for (_, a, b) in sorted_connections(boxes) {
        if forest.union(a, b) && forest.circuits() == 1 {
            return Ok((a, b));
        }
    }
    Err(CircuitError::Disconnected)
}
