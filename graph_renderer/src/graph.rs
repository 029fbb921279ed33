//!
//! The undirected multigraph of a transit fixture.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::VecDeque;

use fixture_bench::Fixture;

///
/// A labelled edge.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The index of the first endpoint.
    pub source: usize,
    /// The index of the second endpoint.
    pub target: usize,
    /// The line label.
    pub label: u64,
    /// The 0-based index of the edge among the edges joining the same pair of nodes.
    pub instance: usize,
}

impl Edge {
    ///
    /// Whether both endpoints are the same node.
    ///
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

///
/// The undirected multigraph of a transit fixture.
///
/// Nodes are stored in ascending identifier order and addressed by index.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiGraph {
    /// The node identifiers.
    pub nodes: Vec<u64>,
    /// The edges, in insertion order.
    pub edges: Vec<Edge>,
    /// Node indexes by identifier.
    indexes: BTreeMap<u64, usize>,
    /// Edge counts by unordered pair of node indexes.
    instances: BTreeMap<(usize, usize), usize>,
}

impl MultiGraph {
    ///
    /// Creates a graph of the given nodes without edges.
    ///
    pub fn new(nodes: BTreeSet<u64>) -> Self {
        let nodes = nodes.into_iter().collect::<Vec<u64>>();
        let indexes = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (*node, index))
            .collect();
        Self {
            nodes,
            edges: vec![],
            indexes,
            instances: BTreeMap::new(),
        }
    }

    ///
    /// Builds the graph of a fixture.
    ///
    /// The nodes are `1..=N`, where `N` is the larger of the declared node count and the
    /// largest referenced node. Every record becomes one edge.
    ///
    pub fn from_fixture(fixture: &Fixture) -> Self {
        let declared = fixture.dimension(0).unwrap_or_default();
        let mut nodes = (1..=declared).collect::<BTreeSet<u64>>();
        for record in fixture.records.iter() {
            let (source, target) = record.endpoints();
            nodes.extend((1..=source.max(target)).chain([source, target]));
        }

        let mut graph = Self::new(nodes);
        for record in fixture.records.iter() {
            let (source, target) = record.endpoints();
            graph.add_edge(source, target, record.label().unwrap_or_default());
        }
        graph
    }

    ///
    /// Adds an edge and returns its instance index.
    ///
    /// # Panics
    /// If an endpoint is not a node of the graph.
    ///
    pub fn add_edge(&mut self, source: u64, target: u64, label: u64) -> usize {
        let source = self.indexes[&source];
        let target = self.indexes[&target];
        let pair = (source.min(target), source.max(target));
        let count = self.instances.entry(pair).or_default();
        let instance = *count;
        *count += 1;
        self.edges.push(Edge {
            source,
            target,
            label,
            instance,
        });
        instance
    }

    ///
    /// Returns the index of a node identifier.
    ///
    pub fn index(&self, node: u64) -> Option<usize> {
        self.indexes.get(&node).copied()
    }

    ///
    /// Returns the hop distances between all pairs of nodes, `None` if unreachable.
    ///
    pub fn hop_distances(&self) -> Vec<Vec<Option<usize>>> {
        let mut adjacency = vec![BTreeSet::new(); self.nodes.len()];
        for edge in self.edges.iter().filter(|edge| !edge.is_loop()) {
            adjacency[edge.source].insert(edge.target);
            adjacency[edge.target].insert(edge.source);
        }

        (0..self.nodes.len())
            .map(|start| {
                let mut distances = vec![None; self.nodes.len()];
                distances[start] = Some(0);
                let mut queue = VecDeque::from([start]);
                while let Some(node) = queue.pop_front() {
                    let distance = distances[node].unwrap_or_default() + 1;
                    for neighbor in adjacency[node].iter().copied() {
                        if distances[neighbor].is_none() {
                            distances[neighbor] = Some(distance);
                            queue.push_back(neighbor);
                        }
                    }
                }
                distances
            })
            .collect()
    }
}
