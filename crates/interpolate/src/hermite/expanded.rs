use ndarray::Array1;

use super::Node;

/// The node sequence with each node repeated by its multiplicity.
///
/// Values are non-decreasing and every run of `k` equal values comes from a
/// single node of multiplicity `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedNodes(Array1<f64>);

impl ExpandedNodes {
    /// Expands nodes that are already sorted and distinct.
    pub(crate) fn from_sorted(nodes: &[Node]) -> Self {
        let expanded: Vec<f64> = nodes
            .iter()
            .flat_map(|node| std::iter::repeat_n(node.x, node.multiplicity))
            .collect();
        Self(Array1::from(expanded))
    }

    /// Returns the expanded sequence.
    #[must_use]
    pub fn as_array(&self) -> &Array1<f64> {
        &self.0
    }

    /// Returns the number of interpolation conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_each_node_by_multiplicity() {
        let nodes = [Node::new(1.0, 2), Node::simple(2.0), Node::new(4.0, 3)];
        let expanded = ExpandedNodes::from_sorted(&nodes);

        assert_eq!(expanded.len(), 6);
        assert_eq!(
            expanded.as_array().to_vec(),
            vec![1.0, 1.0, 2.0, 4.0, 4.0, 4.0]
        );
    }
}
