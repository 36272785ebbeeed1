//! Options for adjacency conversion

/// Rule for combining a matrix with its transpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symmetrization {
    /// `A + Aᵀ`: mirrored weights are summed and diagonal weights doubled
    #[default]
    Sum,
    /// Element-wise maximum of `A` and `Aᵀ`
    Max,
}

/// Configuration for [`edgelist_to_adjacency_with`](crate::edgelist_to_adjacency_with)
#[derive(Debug, Clone, Default)]
pub struct AdjacencyOptions {
    /// Whether to return a symmetric (undirected) adjacency
    pub undirected: bool,

    /// How entries and their mirror are combined when `undirected` is set
    pub symmetrization: Symmetrization,
}

impl AdjacencyOptions {
    /// Options for a directed adjacency
    pub fn directed() -> Self {
        Self::default()
    }

    /// Options for an undirected adjacency with the default [`Symmetrization`]
    pub fn undirected() -> Self {
        Self {
            undirected: true,
            ..Self::default()
        }
    }

    /// Sets the symmetrization rule
    pub fn with_symmetrization(mut self, symmetrization: Symmetrization) -> Self {
        self.symmetrization = symmetrization;
        self
    }

    /// Sets whether the adjacency is undirected
    pub fn with_undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }
}
