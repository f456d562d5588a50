use crate::vertex::VertexIdx;

/// Position of a line inside its diagram
pub type LineIdx = usize;

/// An undirected edge between two vertices of a diagram
///
/// The two ends are stored in the order in which they were connected,
/// i.e. `first` is the pivot of the growth step that added the line.
/// The order only matters for output; as an edge the line is undirected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Line {
    pub first: VertexIdx,
    pub second: VertexIdx,
}

impl Line {
    pub fn new(first: VertexIdx, second: VertexIdx) -> Self {
        Self { first, second }
    }

    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }

    /// The end that is not `vx`
    ///
    /// For a self-loop this is `vx` itself.
    pub fn other(&self, vx: VertexIdx) -> VertexIdx {
        if vx == self.second {
            self.first
        } else {
            self.second
        }
    }
}
