//! Property checks for the graph analyzer on generated graphs, with
//! petgraph's algorithms as the reference

use std::collections::{BTreeSet, HashMap};

use ferris_order::graph::LabeledDigraph;
use ferris_order::graph::analyzer::{has_cycle, strongly_connected_components, topological_order};
use petgraph::algo::{is_cyclic_directed, kosaraju_scc};
use pretty_assertions::assert_eq;

const GRAPH_COUNT: u64 = 300;
const MAX_VERTICES: u64 = 14;

/// Small deterministic generator so failures are reproducible by seed
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn label(index: u64) -> String {
    format!("task-{index}")
}

/// Any digraph without self-loops, duplicate edges allowed
fn random_graph(seed: u64) -> LabeledDigraph {
    let mut rng = Lcg::new(seed);
    let vertex_count = rng.below(MAX_VERTICES + 1);
    let mut graph = LabeledDigraph::new();

    for index in 0..vertex_count {
        graph.add_vertex(&label(index)).unwrap();
    }

    if vertex_count > 1 {
        let edge_count = rng.below(vertex_count * 3);
        for _ in 0..edge_count {
            let from = rng.below(vertex_count);
            let to = rng.below(vertex_count);
            if from != to {
                graph.add_edge(&label(from), &label(to)).unwrap();
            }
        }
    }

    graph
}

/// A DAG whose vertices are inserted in shuffled order so insertion order
/// carries no hint about the ranking
fn random_dag(seed: u64) -> LabeledDigraph {
    let mut rng = Lcg::new(seed);
    let vertex_count = rng.below(MAX_VERTICES) + 1;

    let mut insertion: Vec<u64> = (0..vertex_count).collect();
    for i in (1..insertion.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        insertion.swap(i, j);
    }

    let mut graph = LabeledDigraph::new();
    for index in &insertion {
        graph.add_vertex(&label(*index)).unwrap();
    }

    for from in 0..vertex_count {
        for to in (from + 1)..vertex_count {
            if rng.below(3) == 0 {
                graph.add_edge(&label(from), &label(to)).unwrap();
            }
        }
    }

    graph
}

fn partition(components: Vec<Vec<&str>>) -> BTreeSet<BTreeSet<String>> {
    components
        .into_iter()
        .map(|component| component.into_iter().map(str::to_string).collect())
        .collect()
}

fn oracle_partition(graph: &LabeledDigraph) -> BTreeSet<BTreeSet<String>> {
    let pg = graph.to_petgraph();
    kosaraju_scc(&pg)
        .into_iter()
        .map(|component| component.into_iter().map(|node| pg[node].clone()).collect())
        .collect()
}

#[test]
fn test_has_cycle_agrees_with_petgraph() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_graph(seed);
        assert_eq!(
            has_cycle(&graph),
            is_cyclic_directed(&graph.to_petgraph()),
            "seed {seed}"
        );
    }
}

#[test]
fn test_components_agree_with_petgraph() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_graph(seed);
        assert_eq!(
            partition(strongly_connected_components(&graph)),
            oracle_partition(&graph),
            "seed {seed}"
        );
    }
}

#[test]
fn test_components_cover_every_vertex_once() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_graph(seed);
        let mut members: Vec<&str> = strongly_connected_components(&graph)
            .into_iter()
            .flatten()
            .collect();
        let mut vertices: Vec<&str> = graph.vertices().collect();

        members.sort_unstable();
        vertices.sort_unstable();
        assert_eq!(members, vertices, "seed {seed}");
    }
}

#[test]
fn test_component_order_has_no_backward_edges() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_graph(seed);
        let components = strongly_connected_components(&graph);

        let component_of: HashMap<&str, usize> = components
            .iter()
            .enumerate()
            .flat_map(|(index, members)| members.iter().map(move |member| (*member, index)))
            .collect();

        for (from, to) in graph.edges() {
            assert!(
                component_of[from] <= component_of[to],
                "seed {seed}: edge {from} -> {to} points backward"
            );
        }
    }
}

#[test]
fn test_cycle_exists_exactly_when_a_component_has_several_members() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_graph(seed);
        let has_group = strongly_connected_components(&graph)
            .iter()
            .any(|component| component.len() > 1);
        assert_eq!(has_cycle(&graph), has_group, "seed {seed}");
    }
}

#[test]
fn test_topological_order_on_dags() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_dag(seed);
        assert!(!has_cycle(&graph), "seed {seed}");

        let order = topological_order(&graph);
        assert_eq!(order.len(), graph.vertex_count(), "seed {seed}");

        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(index, task)| (*task, index))
            .collect();
        assert_eq!(position.len(), order.len(), "seed {seed}: repeated task");

        for (from, to) in graph.edges() {
            assert!(
                position[from] < position[to],
                "seed {seed}: {from} placed after {to}"
            );
        }
    }
}

#[test]
fn test_dag_components_are_singletons_in_topological_order() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_dag(seed);
        let components = strongly_connected_components(&graph);

        assert!(components.iter().all(|component| component.len() == 1));
        assert_eq!(components.len(), graph.vertex_count(), "seed {seed}");
    }
}

#[test]
fn test_reversed_graph_keeps_components() {
    for seed in 0..GRAPH_COUNT {
        let graph = random_graph(seed);
        let reversed = graph.reversed();

        assert_eq!(reversed.edge_count(), graph.edge_count(), "seed {seed}");
        assert_eq!(
            partition(strongly_connected_components(&reversed)),
            partition(strongly_connected_components(&graph)),
            "seed {seed}"
        );
    }
}
