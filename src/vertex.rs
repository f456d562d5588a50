use std::sync::Arc;

use crate::line::LineIdx;

/// Position of a vertex inside its diagram
pub type VertexIdx = usize;

/// Combinatorial weight of a diagram
pub type Multiplier = u128;

/// Direction of an external leg
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Direction {
    In,
    Out,
}

/// Which end of a new line a vertex is
///
/// The pivot of the growth search is always `First` and contributes a
/// factor of one. The `Second` end contributes the number of its slots
/// still free, i.e. the number of ways to choose the slot the line
/// attaches to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Role {
    First,
    Second,
}

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum VertexKind {
    /// Interaction vertex with the label of its type
    Internal { label: Arc<str> },
    /// Incoming or outgoing particle leg
    External {
        direction: Direction,
        momentum: Arc<str>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Vertex {
    kind: VertexKind,
    capacity: u32,
    lines: Vec<LineIdx>,
}

impl Vertex {
    pub fn internal(capacity: u32, label: impl Into<Arc<str>>) -> Self {
        Self::new(VertexKind::Internal { label: label.into() }, capacity)
    }

    pub fn external(
        capacity: u32,
        direction: Direction,
        momentum: impl Into<Arc<str>>,
    ) -> Self {
        let momentum = momentum.into();
        Self::new(VertexKind::External { direction, momentum }, capacity)
    }

    pub fn incoming(momentum: impl Into<Arc<str>>) -> Self {
        Self::external(1, Direction::In, momentum)
    }

    pub fn outgoing(momentum: impl Into<Arc<str>>) -> Self {
        Self::external(1, Direction::Out, momentum)
    }

    fn new(kind: VertexKind, capacity: u32) -> Self {
        Self {
            kind,
            capacity,
            lines: Vec::with_capacity(capacity as usize),
        }
    }

    pub fn kind(&self) -> &VertexKind {
        &self.kind
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Lines attached to this vertex, one entry per occupied slot
    ///
    /// A self-loop occupies two slots and is therefore listed twice.
    pub fn lines(&self) -> &[LineIdx] {
        &self.lines
    }

    pub fn is_external(&self) -> bool {
        matches!(self.kind, VertexKind::External { .. })
    }

    pub fn free_slots(&self) -> u32 {
        self.capacity - self.lines.len() as u32
    }

    pub fn is_saturated(&self) -> bool {
        self.lines.len() as u32 >= self.capacity
    }

    /// Attach one end of `line` to a free slot
    ///
    /// Returns the weight contributed by this attachment, or zero if
    /// there is no free slot left. In the latter case the vertex is
    /// left unchanged.
    pub fn occupy_slot(&mut self, line: LineIdx, role: Role) -> Multiplier {
        if self.is_saturated() {
            return 0;
        }
        let free = self.free_slots();
        self.lines.push(line);
        match role {
            Role::First => 1,
            Role::Second => free as Multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupy() {
        let mut vx = Vertex::internal(4, "λ");
        assert!(!vx.is_saturated());
        assert_eq!(vx.occupy_slot(0, Role::First), 1);
        assert_eq!(vx.occupy_slot(0, Role::Second), 3);
        assert_eq!(vx.occupy_slot(1, Role::Second), 2);
        assert_eq!(vx.occupy_slot(2, Role::Second), 1);
        assert!(vx.is_saturated());
        assert_eq!(vx.occupy_slot(3, Role::First), 0);
        assert_eq!(vx.occupy_slot(3, Role::Second), 0);
        assert_eq!(vx.lines(), &[0, 0, 1, 2]);
    }

    #[test]
    fn external() {
        let mut p = Vertex::incoming("p1");
        assert!(p.is_external());
        assert_eq!(p.capacity(), 1);
        assert_eq!(p.occupy_slot(0, Role::First), 1);
        assert_eq!(p.occupy_slot(0, Role::Second), 0);
        assert_eq!(p.lines().len(), 1);

        let q = Vertex::outgoing("q1");
        assert_eq!(
            q.kind(),
            &VertexKind::External {
                direction: Direction::Out,
                momentum: "q1".into()
            }
        );
        assert!(!Vertex::internal(3, "g").is_external());
    }
}
