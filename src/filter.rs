use log::trace;

use crate::diagram::Diagram;
use crate::graph_util::{connected_component, Format, IndexSet};

/// Which structural filters to apply to complete diagrams
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Filters {
    /// Reject diagrams with a self-loop
    pub normal_ordering: bool,
    /// Reject diagrams that are not connected
    pub fully_connected: bool,
    /// Reject diagrams with a piece not connected to any external vertex
    pub no_vacuum_pieces: bool,
}

impl Filters {
    pub fn accepts(&self, dia: &Diagram) -> bool {
        if self.normal_ordering && has_self_contraction(dia) {
            trace!("Rejected for self-contraction: {}", dia.format());
            return false;
        }
        if self.fully_connected && !is_fully_connected(dia) {
            trace!("Rejected as disconnected: {}", dia.format());
            return false;
        }
        if self.no_vacuum_pieces && has_vacuum_piece(dia) {
            trace!("Rejected for vacuum piece: {}", dia.format());
            return false;
        }
        true
    }
}

/// Whether any line starts and ends on the same vertex
pub fn has_self_contraction(dia: &Diagram) -> bool {
    dia.lines().iter().any(|l| l.is_self_loop())
}

/// Whether all vertices are connected
///
/// A diagram without vertices is not considered connected.
pub fn is_fully_connected(dia: &Diagram) -> bool {
    let nvertices = dia.vertices().len();
    nvertices > 0 && connected_component(dia, 0).len() == nvertices
}

/// Whether there is a connected piece without external vertices
pub fn has_vacuum_piece(dia: &Diagram) -> bool {
    let mut checked = IndexSet::default();
    for vx in 0..dia.vertices().len() {
        if checked.contains(&vx) {
            continue;
        }
        let component = connected_component(dia, vx);
        if !component.iter().any(|&v| dia.vertices()[v].is_external()) {
            return true;
        }
        checked.extend(component);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::vertex::Vertex;

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn dia(vertices: Vec<Vertex>, lines: &[(usize, usize)]) -> Diagram {
        let mut dia = Diagram::seed(vertices).unwrap();
        for &(from, to) in lines {
            assert!(dia.connect(from, to) > 0);
        }
        assert!(dia.is_complete());
        dia
    }

    fn all() -> Filters {
        Filters {
            normal_ordering: true,
            fully_connected: true,
            no_vacuum_pieces: true,
        }
    }

    #[test]
    fn self_contraction() {
        log_init();

        let tadpole = dia(
            vec![
                Vertex::incoming("p1"),
                Vertex::outgoing("q1"),
                Vertex::internal(4, "λ"),
            ],
            &[(0, 2), (1, 2), (2, 2)],
        );
        assert!(has_self_contraction(&tadpole));
        assert!(is_fully_connected(&tadpole));
        assert!(!has_vacuum_piece(&tadpole));
        assert!(!all().accepts(&tadpole));
        let filters = Filters {
            normal_ordering: false,
            ..all()
        };
        assert!(filters.accepts(&tadpole));
    }

    #[test]
    fn vacuum() {
        log_init();

        let bubble = dia(
            vec![
                Vertex::incoming("p1"),
                Vertex::outgoing("q1"),
                Vertex::internal(3, "g"),
                Vertex::internal(3, "g"),
            ],
            &[(0, 1), (2, 3), (2, 3), (2, 3)],
        );
        assert!(!has_self_contraction(&bubble));
        assert!(!is_fully_connected(&bubble));
        assert!(has_vacuum_piece(&bubble));
        assert!(!all().accepts(&bubble));
        assert!(Filters::default().accepts(&bubble));
    }

    #[test]
    fn disconnected_without_vacuum() {
        log_init();

        let dia = dia(
            vec![
                Vertex::incoming("p1"),
                Vertex::incoming("p2"),
                Vertex::outgoing("q1"),
                Vertex::outgoing("q2"),
            ],
            &[(0, 2), (1, 3)],
        );
        assert!(!is_fully_connected(&dia));
        assert!(!has_vacuum_piece(&dia));
        let filters = Filters {
            fully_connected: false,
            ..all()
        };
        assert!(filters.accepts(&dia));
        assert!(!all().accepts(&dia));
    }

    #[test]
    fn empty() {
        log_init();

        let dia = Diagram::seed(vec![]).unwrap();
        assert!(!is_fully_connected(&dia));
        assert!(!has_vacuum_piece(&dia));
        assert!(!has_self_contraction(&dia));
    }
}
