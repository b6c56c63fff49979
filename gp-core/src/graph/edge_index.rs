use std::collections::HashMap;

/// Derived lookup structures over an edge list.
///
/// `incidence` maps every vertex to the edges touching it (as either endpoint) and `lookup` maps an
/// ordered vertex pair directly to the index of the edge joining them. Keying on the pair itself
/// rather than a packed integer means there is no ceiling on the vertex count.
#[derive(Clone, Debug, Default)]
pub(super) struct EdgeIndex {
    /// Edges touching each vertex.
    incidence: HashMap<usize, Vec<usize>>,
    /// Edge joining each ordered pair.
    lookup: HashMap<(usize, usize), usize>,
}

impl EdgeIndex {
    /// Build both maps in a single pass. Expects an edge list that already passed validation.
    pub(super) fn build(edges: &[(usize, usize)]) -> Self {
        let mut index = Self {
            incidence: HashMap::new(),
            lookup: HashMap::with_capacity(edges.len()),
        };

        for (k, &(i, j)) in edges.iter().enumerate() {
            index.incidence.entry(i).or_default().push(k);
            index.incidence.entry(j).or_default().push(k);
            index.lookup.insert((i, j), k);
        }
        index
    }

    /// Number of vertices with at least one incident edge.
    pub(super) fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Index of the edge `from -> to`, if present.
    pub(super) fn edge(&self, from: usize, to: usize) -> Option<usize> {
        self.lookup.get(&(from, to)).copied()
    }

    /// Edges touching `vertex`; empty for unknown vertices.
    pub(super) fn incident(&self, vertex: usize) -> &[usize] {
        self.incidence.get(&vertex).map_or(&[][..], Vec::as_slice)
    }
}
