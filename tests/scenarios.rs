//! End-to-end scenarios through the public `pathweave` facade

mod support;

use pathweave::graph::{
    admit_all, articulation_points, cheapest_path, complete_path, connected_components,
    flood_fill, Graph, GridGraph, LabeledGraph, MemoryGraph,
};
use pathweave::{FloodStrategy, SearchOptions};
use std::collections::HashSet;
use support::{hop_distances, open_cells, walled_grid};
use tempfile::tempdir;

fn unlabelled(grid: &GridGraph, cell: &(usize, usize)) -> bool {
    grid.is_open(cell) && grid.label(cell).is_ok_and(|label| label == 0)
}

#[test]
fn test_ring_has_no_articulation_points() {
    let ring = MemoryGraph::from_undirected_edges([
        ('A', 'B', ()),
        ('B', 'C', ()),
        ('C', 'D', ()),
        ('D', 'A', ()),
    ]);
    assert!(articulation_points(&ring, &'A').unwrap().is_empty());
}

#[test]
fn test_bridging_vertex_between_cliques() {
    let mut graph = MemoryGraph::new();
    for clique in [[1, 2, 3], [5, 6, 7]] {
        for (i, a) in clique.iter().enumerate() {
            for b in &clique[i + 1..] {
                graph.add_undirected_edge(*a, *b, ());
            }
        }
    }
    graph.add_undirected_edge(3, 4, ());
    graph.add_undirected_edge(4, 5, ());

    let mut points = articulation_points(&graph, &1).unwrap();
    points.sort();
    assert_eq!(points, vec![3, 4, 5]);
}

#[test]
fn test_two_components() {
    let graph = MemoryGraph::from_undirected_edges([(1, 2, ()), (2, 3, ()), (4, 5, ())]);

    let components: Vec<HashSet<i32>> = connected_components(&graph)
        .unwrap()
        .into_iter()
        .map(|c| c.into_iter().collect())
        .collect();

    assert_eq!(
        components,
        vec![HashSet::from([1, 2, 3]), HashSet::from([4, 5])]
    );
}

#[test]
fn test_flood_fill_labels_open_grid_once() {
    for strategy in [FloodStrategy::DepthFirst, FloodStrategy::BreadthFirst] {
        let mut grid = GridGraph::<u32>::new(3, 3).unwrap();
        let labelled = flood_fill(&mut grid, &(0, 0), 1, unlabelled, strategy).unwrap();

        assert_eq!(labelled, 9);
        for cell in grid.vertices() {
            assert_eq!(grid.label(&cell).unwrap(), 1);
        }
    }
}

#[test]
fn test_flood_fill_stays_inside_walls() {
    let mut grid = GridGraph::<u32>::from_rows(&["..#..", "..#..", "###.."]).unwrap();
    let region = hop_distances(&grid, &(0, 0), |c| grid.is_open(c));

    let labelled =
        flood_fill(&mut grid, &(0, 0), 7, unlabelled, FloodStrategy::default()).unwrap();

    assert_eq!(labelled, region.len());
    assert_eq!(grid.label(&(1, 1)).unwrap(), 7);
    assert_eq!(grid.label(&(4, 0)).unwrap(), 0);
}

#[test]
fn test_cheapest_path_around_walls() {
    let grid = GridGraph::<u32>::from_rows(&[
        ".....",
        "####.",
        ".....",
        ".####",
        ".....",
    ])
    .unwrap();

    let result =
        cheapest_path(&grid, &(0, 0), &(4, 4), open_cells, &SearchOptions::default()).unwrap();

    assert_eq!(result.cost, Some(16));
    assert_eq!(result.hops(), 16);
    assert!(result.vertices.iter().all(|cell| grid.is_open(cell)));
}

#[test]
fn test_cheapest_path_budget_from_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("search.toml");
    std::fs::write(&path, "max-expansions = 3\n").unwrap();

    let opts = SearchOptions::load(&path).unwrap();
    let grid = walled_grid(6, 6, &[]);
    let result = cheapest_path(&grid, &(0, 0), &(5, 5), open_cells, &opts).unwrap();

    assert!(result.truncated);
    assert!(!result.found());
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = SearchOptions::from_toml_str("max-expansions = 0\n").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_disconnected_complete_path_is_empty() {
    let graph = MemoryGraph::from_undirected_edges([(1u8, 2u8, 1u32), (2, 3, 1), (4, 5, 1)]);
    let result = complete_path(&graph).unwrap();

    assert!(result.vertices.is_empty());
    assert!(result.cost.is_none());
}

#[test]
fn test_unknown_vertex_propagates() {
    let graph: MemoryGraph<u8, u32> = MemoryGraph::from_undirected_edges([(1, 2, 4)]);
    let err = cheapest_path(&graph, &9, &1, admit_all, &SearchOptions::default()).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.error_type(), "not_found");
}
