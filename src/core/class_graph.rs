//! Projection of the architecture document onto a `petgraph` graph.
//!
//! Downstream clustering works on nodes and edges rather than on the
//! document's per-class edge lists; this resolves edge targets to nodes.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};

use super::graph::{ArchitectureGraph, EdgeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub name: String,
    /// True for targets that are not declared in the extracted sources.
    pub external: bool,
}

pub type ClassGraph = Graph<ClassNode, EdgeKind, Directed>;

pub struct ClassGraphBuilder {
    graph: ClassGraph,
    node_map: HashMap<String, NodeIndex>,
    simple_names: HashMap<String, Vec<NodeIndex>>,
}

impl ClassGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            simple_names: HashMap::new(),
        }
    }

    /// Builds one node per class, then one graph edge per dependency edge.
    pub fn from_architecture(document: &ArchitectureGraph) -> ClassGraph {
        let mut builder = Self::new();
        let sources: Vec<NodeIndex> = document
            .classes
            .iter()
            .map(|class| builder.add_class(class.class_name(), &class.simple_name))
            .collect();

        for (class, source) in document.classes.iter().zip(sources) {
            for dependency in &class.dependencies {
                let target = builder.resolve_or_external(&dependency.target);
                builder.graph.add_edge(source, target, dependency.kind);
            }
        }

        builder.build()
    }

    /// Classes sharing a name collapse into the first node with that name.
    pub fn add_class(&mut self, name: &str, simple_name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            return index;
        }
        let index = self.graph.add_node(ClassNode {
            name: name.to_string(),
            external: false,
        });
        self.node_map.insert(name.to_string(), index);
        self.simple_names
            .entry(simple_name.to_string())
            .or_default()
            .push(index);
        index
    }

    /// Exact name first, then a simple name that identifies exactly one class.
    pub fn resolve(&self, target: &str) -> Option<NodeIndex> {
        if let Some(&index) = self.node_map.get(target) {
            return Some(index);
        }
        match self.simple_names.get(target).map(Vec::as_slice) {
            Some([only]) => Some(*only),
            _ => None,
        }
    }

    fn resolve_or_external(&mut self, target: &str) -> NodeIndex {
        if let Some(index) = self.resolve(target) {
            return index;
        }
        let index = self.graph.add_node(ClassNode {
            name: target.to_string(),
            external: true,
        });
        self.node_map.insert(target.to_string(), index);
        index
    }

    pub fn build(self) -> ClassGraph {
        self.graph
    }
}

impl Default for ClassGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassGraphSummary {
    pub classes: usize,
    pub external_targets: usize,
    pub internal_edges: usize,
    pub external_edges: usize,
}

pub fn summarize(graph: &ClassGraph) -> ClassGraphSummary {
    let external_targets = graph
        .node_indices()
        .filter(|&index| graph[index].external)
        .count();
    let external_edges = graph
        .raw_edges()
        .iter()
        .filter(|edge| graph[edge.target()].external)
        .count();

    ClassGraphSummary {
        classes: graph.node_count() - external_targets,
        external_targets,
        internal_edges: graph.edge_count() - external_edges,
        external_edges,
    }
}
