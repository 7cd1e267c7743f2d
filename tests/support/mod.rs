//! Shared graph builders and brute-force oracles for the integration suites

#![allow(dead_code)]

use pathweave::graph::{Cell, Connection, Graph, GridGraph, MemoryGraph, WeightedGraph};
use pathweave::Result;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};

pub type Weighted = MemoryGraph<u8, u32>;

/// Undirected graph on `0..n`; self-loops and repeated pairs are dropped
pub fn undirected(n: u8, edges: &[(u8, u8, u32)]) -> Weighted {
    let mut graph = MemoryGraph::new();
    for vertex in 0..n {
        graph.add_vertex(vertex);
    }
    let mut seen = HashSet::new();
    for &(a, b, cost) in edges {
        let (a, b) = (a % n, b % n);
        if a == b || !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        graph.add_undirected_edge(a, b, cost);
    }
    graph
}

/// Cost of the direct edge `from -> to`, if any
pub fn edge_cost(graph: &Weighted, from: u8, to: u8) -> Option<u32> {
    graph
        .connections(&from)
        .ok()?
        .into_iter()
        .find(|c| c.to == to)
        .map(|c| c.cost)
}

/// Minimum cost over every simple path, by exhaustive enumeration
pub fn brute_force_min_cost(graph: &Weighted, start: u8, goal: u8) -> Option<u32> {
    fn walk(
        graph: &Weighted,
        at: u8,
        goal: u8,
        cost: u32,
        visited: &mut HashSet<u8>,
        best: &mut Option<u32>,
    ) {
        if at == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for connection in graph.connections(&at).unwrap_or_default() {
            if visited.insert(connection.to) {
                walk(graph, connection.to, goal, cost + connection.cost, visited, best);
                visited.remove(&connection.to);
            }
        }
    }

    let mut best = None;
    let mut visited = HashSet::from([start]);
    walk(graph, start, goal, 0, &mut visited, &mut best);
    best
}

/// Hop distance to every vertex reachable through `admit`
pub fn hop_distances<G, A>(graph: &G, start: &G::Vertex, admit: A) -> HashMap<G::Vertex, usize>
where
    G: Graph,
    A: Fn(&G::Vertex) -> bool,
{
    let mut distances = HashMap::new();
    if !admit(start) {
        return distances;
    }
    let mut queue = VecDeque::from([(start.clone(), 0)]);
    distances.insert(start.clone(), 0);
    while let Some((vertex, depth)) = queue.pop_front() {
        for connection in graph.connections(&vertex).unwrap_or_default() {
            if admit(&connection.to) && !distances.contains_key(&connection.to) {
                distances.insert(connection.to.clone(), depth + 1);
                queue.push_back((connection.to, depth + 1));
            }
        }
    }
    distances
}

/// Vertices reachable from `start` when `removed` is taken out of the graph
pub fn reachable_without(graph: &Weighted, start: u8, removed: Option<u8>) -> HashSet<u8> {
    hop_distances(graph, &start, |v| Some(*v) != removed)
        .into_keys()
        .collect()
}

/// Grid of `width x height` with walls from `walls`, keeping both corners open
pub fn walled_grid(width: usize, height: usize, walls: &[bool]) -> GridGraph {
    let mut grid = GridGraph::new(width, height).unwrap();
    let corners = [(0, 0), (width - 1, height - 1)];
    for (cell, &wall) in grid.vertices().into_iter().zip(walls) {
        if wall && !corners.contains(&cell) {
            grid.block(cell).unwrap();
        }
    }
    grid
}

pub fn open_cells(grid: &GridGraph, cell: &Cell) -> bool {
    grid.is_open(cell)
}

/// Grid search with the heuristic switched off
pub struct ZeroPotential<'a>(pub &'a GridGraph);

impl Graph for ZeroPotential<'_> {
    type Vertex = Cell;
    type Cost = u32;

    fn connections(&self, cell: &Cell) -> Result<Vec<Connection<Cell, u32>>> {
        self.0.connections(cell)
    }

    fn vertices(&self) -> Vec<Cell> {
        self.0.vertices()
    }
}

impl WeightedGraph for ZeroPotential<'_> {
    fn zero(&self) -> u32 {
        0
    }

    fn add(&self, a: &u32, b: &u32) -> u32 {
        a + b
    }

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }
}
