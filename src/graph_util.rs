use std::collections::VecDeque;
use std::fmt::Display;

use ahash::RandomState;

use crate::diagram::Diagram;
use crate::vertex::VertexIdx;

pub type IndexSet<T> = indexmap::IndexSet<T, RandomState>;

pub trait Format<'a> {
    type Output: Display;

    fn format(&'a self) -> Self::Output;
}

/// Distinct vertices sharing at least one line with `vx`
///
/// `vx` is its own neighbour if and only if it has a self-loop.
pub fn adjacent_vertices(dia: &Diagram, vx: VertexIdx) -> IndexSet<VertexIdx> {
    dia.vertices()[vx]
        .lines()
        .iter()
        .map(|&l| dia.lines()[l].other(vx))
        .collect()
}

/// All vertices reachable from `start` through a chain of lines
///
/// The result always contains `start` and lists vertices in
/// breadth-first order.
pub fn connected_component(
    dia: &Diagram,
    start: VertexIdx,
) -> IndexSet<VertexIdx> {
    let mut seen = IndexSet::default();
    seen.insert(start);
    let mut queue = VecDeque::from([start]);
    while let Some(vx) = queue.pop_front() {
        for next in adjacent_vertices(dia, vx) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
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
        dia
    }

    #[test]
    fn adjacency() {
        log_init();

        let dia = dia(
            vec![
                Vertex::incoming("p1"),
                Vertex::outgoing("q1"),
                Vertex::internal(4, "λ"),
            ],
            &[(0, 2), (1, 2), (2, 2)],
        );
        let adj = adjacent_vertices(&dia, 2);
        assert_eq!(adj.into_iter().collect::<Vec<_>>(), [0, 1, 2]);
        let adj = adjacent_vertices(&dia, 0);
        assert_eq!(adj.into_iter().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn components() {
        log_init();

        let dia = dia(
            vec![
                Vertex::incoming("p1"),
                Vertex::outgoing("q1"),
                Vertex::internal(2, "φ"),
                Vertex::internal(2, "φ"),
            ],
            &[(0, 1), (2, 3), (2, 3)],
        );
        let c = connected_component(&dia, 0);
        assert_eq!(c.into_iter().collect::<Vec<_>>(), [0, 1]);
        let c = connected_component(&dia, 3);
        assert_eq!(c.into_iter().collect::<Vec<_>>(), [3, 2]);
    }

    #[test]
    fn isolated() {
        log_init();

        let dia = Diagram::seed(vec![
            Vertex::incoming("p1"),
            Vertex::outgoing("q1"),
        ])
        .unwrap();
        let c = connected_component(&dia, 1);
        assert_eq!(c.into_iter().collect::<Vec<_>>(), [1]);
    }
}
