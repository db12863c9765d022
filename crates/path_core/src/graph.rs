use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{NodeIndex, NodeName, PathError};

type Neighbors = SmallVec<[NodeIndex; 4]>;

/// Directed, unit-weight graph over named nodes.
///
/// Names map to indices `0..len()` in input order. Index 0 is the source and
/// index `len() - 1` is the sink; with a single node they coincide.
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<NodeName>,
    index: AHashMap<NodeName, NodeIndex>,
    adjacency: Vec<Neighbors>,
    edge_count: usize,
    dropped_edges: usize,
}

impl Graph {
    /// Builds the graph, rejecting empty or duplicated node lists.
    ///
    /// Edges naming a node that is not in `names` are dropped without error.
    /// Repeating an edge has no effect.
    pub fn build<N, E>(names: &[N], edges: &[(E, E)]) -> Result<Self, PathError>
    where
        N: AsRef<str>,
        E: AsRef<str>,
    {
        if names.is_empty() {
            return Err(PathError::Empty);
        }

        let mut index = AHashMap::with_capacity(names.len());
        let mut owned = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let name = NodeName::from(name.as_ref());
            if index.insert(name.clone(), i).is_some() {
                return Err(PathError::DuplicateNode { name });
            }
            owned.push(name);
        }

        let mut graph = Graph {
            names: owned,
            index,
            adjacency: vec![Neighbors::new(); names.len()],
            edge_count: 0,
            dropped_edges: 0,
        };
        let mut seen = AHashSet::with_capacity(edges.len());
        for (src, dst) in edges {
            graph.add_edge(src.as_ref(), dst.as_ref(), &mut seen);
        }

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count,
            dropped = graph.dropped_edges,
            "graph built"
        );
        Ok(graph)
    }

    fn add_edge(&mut self, src: &str, dst: &str, seen: &mut AHashSet<(NodeIndex, NodeIndex)>) {
        let (Some(&u), Some(&v)) = (self.index.get(src), self.index.get(dst)) else {
            trace!(src, dst, "dropping edge with unknown endpoint");
            self.dropped_edges += 1;
            return;
        };
        if seen.insert((u, v)) {
            self.adjacency[u].push(v);
            self.edge_count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: construction rejects empty node lists.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn source(&self) -> NodeIndex {
        0
    }

    pub fn sink(&self) -> NodeIndex {
        self.names.len() - 1
    }

    pub fn name(&self, node: NodeIndex) -> &NodeName {
        &self.names[node]
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Outgoing neighbours of `node`, in the order their edges were first seen.
    pub fn neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[node]
    }

    /// Distinct edges kept after dropping unknown endpoints and repeats.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges ignored because an endpoint was not a known node.
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }
}
