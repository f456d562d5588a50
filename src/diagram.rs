use std::borrow::Cow;
use std::fmt::{self, Display};

use ahash::AHashMap;

use crate::graph_util::Format;
use crate::line::Line;
use crate::vertex::{Direction, Multiplier, Role, Vertex, VertexIdx, VertexKind};

/// A (possibly incomplete) diagram
///
/// Vertices and lines live in diagram-local arrays and refer to each
/// other by index, so cloning a diagram yields an independent copy.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Diagram {
    vertices: Vec<Vertex>,
    lines: Vec<Line>,
    multiplier: Multiplier,
    remaining: usize,
}

impl Diagram {
    /// Start a diagram without any lines
    ///
    /// Returns `None` if the total number of slots is odd, since then
    /// the vertices can never be saturated.
    pub fn seed(vertices: Vec<Vertex>) -> Option<Self> {
        let slots: u64 = vertices.iter().map(|vx| vx.capacity() as u64).sum();
        if slots % 2 != 0 {
            return None;
        }
        Some(Self {
            vertices,
            lines: Vec::with_capacity((slots / 2) as usize),
            multiplier: 1,
            remaining: (slots / 2) as usize,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Number of lines still needed to saturate all vertices
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Total number of slots over all vertices
    pub fn slot_count(&self) -> u64 {
        self.vertices.iter().map(|vx| vx.capacity() as u64).sum()
    }

    /// The first vertex with a free slot
    pub fn pivot(&self) -> Option<VertexIdx> {
        self.vertices.iter().position(|vx| !vx.is_saturated())
    }

    /// Add a line from `pivot` to `candidate`
    ///
    /// The two ends are not interchangeable: `pivot` contributes a
    /// factor one and `candidate` the number of its free slots to the
    /// multiplier. Returns the updated multiplier. If it is zero, one
    /// of the ends had no free slot and the diagram must be discarded.
    pub fn connect(
        &mut self,
        pivot: VertexIdx,
        candidate: VertexIdx,
    ) -> Multiplier {
        let idx = self.lines.len();
        self.lines.push(Line::new(pivot, candidate));
        self.multiplier *= self.vertices[pivot].occupy_slot(idx, Role::First);
        if self.multiplier == 0 {
            return 0;
        }
        self.multiplier *=
            self.vertices[candidate].occupy_slot(idx, Role::Second);
        if self.multiplier > 0 {
            self.remaining -= 1;
        }
        self.multiplier
    }

    /// Labels used when printing the diagram
    ///
    /// External vertices show their momentum, with a minus sign for
    /// outgoing ones. Internal vertices whose label is shared with
    /// other internal vertices get a numeric suffix counting from one
    /// in vertex order.
    pub fn display_labels(&self) -> Vec<Cow<'_, str>> {
        let mut count: AHashMap<&str, usize> = AHashMap::new();
        for vx in &self.vertices {
            if let VertexKind::Internal { label } = vx.kind() {
                *count.entry(label.as_ref()).or_default() += 1;
            }
        }
        let mut seen: AHashMap<&str, usize> = AHashMap::new();
        self.vertices
            .iter()
            .map(|vx| match vx.kind() {
                VertexKind::External { direction, momentum } => {
                    match direction {
                        Direction::In => Cow::Borrowed(momentum.as_ref()),
                        Direction::Out => Cow::Owned(format!("-{momentum}")),
                    }
                }
                VertexKind::Internal { label } => {
                    let label = label.as_ref();
                    if count[label] > 1 {
                        let n = seen.entry(label).or_default();
                        *n += 1;
                        Cow::Owned(format!("{label}{n}"))
                    } else {
                        Cow::Borrowed(label)
                    }
                }
            })
            .collect()
    }
}

impl<'a> Format<'a> for Diagram {
    type Output = FormatDia<'a>;

    fn format(&'a self) -> Self::Output {
        FormatDia(self)
    }
}

pub struct FormatDia<'a>(&'a Diagram);

impl Display for FormatDia<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dia = self.0;
        if dia.multiplier > 1 {
            write!(f, "{}", dia.multiplier)?;
        }
        let labels = dia.display_labels();
        write!(f, "⟨")?;
        for line in &dia.lines {
            write!(f, "{{{},{}}}", labels[line.first], labels[line.second])?;
        }
        write!(f, "⟩")
    }
}
