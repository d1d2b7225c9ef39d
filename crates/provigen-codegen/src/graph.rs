//! Dependency graph assembled from binding reports
//!
//! Nodes are keys, edges are the [`Dependency`] values bindings report.
//! Lazy edges are recorded but ignored for cycle detection: a cycle that
//! passes through a provider is resolved at runtime.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use provigen_core::{Dependency, Key};

use crate::binding::Binding;

#[derive(Debug, Clone, Default)]
pub struct BindingGraph {
    graph: DiGraph<Key, Dependency>,
    node_indices: HashMap<Key, NodeIndex>,
}

impl BindingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, key: &Key) -> NodeIndex {
        if let Some(index) = self.node_indices.get(key) {
            return *index;
        }
        let index = self.graph.add_node(key.clone());
        self.node_indices.insert(key.clone(), index);
        index
    }

    /// Record one edge; repeated identical edges are stored once
    pub fn add_dependency(&mut self, dependency: Dependency) {
        let from = self.node(dependency.from());
        let to = self.node(dependency.to());
        let duplicate = self
            .graph
            .edges_connecting(from, to)
            .any(|edge| edge.weight() == &dependency);
        if duplicate {
            return;
        }
        tracing::trace!("BindingGraph: adding edge {}", dependency);
        self.graph.add_edge(from, to, dependency);
    }

    /// Record every dependency the binding reports
    pub fn add_binding(&mut self, binding: &dyn Binding) {
        for dependency in binding.dependencies() {
            self.add_dependency(dependency);
        }
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.node_indices.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing edges of `key`
    pub fn dependencies_of(&self, key: &Key) -> BTreeSet<Dependency> {
        let Some(index) = self.node_indices.get(key) else {
            return BTreeSet::new();
        };
        self.graph
            .edges(*index)
            .map(|edge| edge.weight().clone())
            .collect()
    }

    /// Whether some cycle consists only of eager edges
    pub fn has_eager_cycle(&self) -> bool {
        let eager = self
            .graph
            .filter_map(|_, _| Some(()), |_, dep| (!dep.is_lazy()).then_some(()));
        petgraph::algo::is_cyclic_directed(&eager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ImplicitProviderBinding;
    use petgraph::visit::EdgeRef;
    use provigen_core::TypeDescriptor;

    fn key(name: &str) -> Key {
        Key::of(TypeDescriptor::class(name))
    }

    fn provider_key(name: &str) -> Key {
        Key::of(TypeDescriptor::parameterized(
            "com.google.inject.Provider",
            vec![TypeDescriptor::class(name)],
        ))
    }

    #[test]
    fn test_add_binding() {
        let mut graph = BindingGraph::new();
        let binding = ImplicitProviderBinding::new(provider_key("a.Foo")).unwrap();
        graph.add_binding(&binding);
        graph.add_binding(&binding);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_key(&key("a.Foo")));
        assert_eq!(graph.dependencies_of(&provider_key("a.Foo")), binding.dependencies());
        assert!(graph.dependencies_of(&key("a.Missing")).is_empty());
    }

    #[test]
    fn test_cycle_through_provider_is_not_eager() {
        let mut graph = BindingGraph::new();
        // Foo needs Provider<Foo>, which forwards lazily back to Foo
        graph.add_dependency(Dependency::new(key("a.Foo"), provider_key("a.Foo"), false, false));
        graph.add_binding(&ImplicitProviderBinding::new(provider_key("a.Foo")).unwrap());
        assert!(!graph.has_eager_cycle());

        graph.add_dependency(Dependency::new(key("a.Bar"), key("a.Foo"), false, false));
        graph.add_dependency(Dependency::new(key("a.Foo"), key("a.Bar"), false, false));
        assert!(graph.has_eager_cycle());
    }

    #[test]
    fn test_edge_endpoints_match_dependency() {
        let mut graph = BindingGraph::new();
        graph.add_binding(&ImplicitProviderBinding::new(provider_key("a.Foo")).unwrap());
        for edge in graph.graph.edge_references() {
            assert_eq!(&graph.graph[edge.source()], edge.weight().from());
            assert_eq!(&graph.graph[edge.target()], edge.weight().to());
        }
    }
}
