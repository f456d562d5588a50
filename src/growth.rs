use log::trace;

use crate::diagram::Diagram;
use crate::graph_util::Format;

/// All diagrams obtained from `dia` by adding a single line
///
/// The new line always starts at the lowest-index vertex with a free
/// slot and ends at the same or a higher-index vertex with a free
/// slot. Children with a vanishing multiplier are dropped. A complete
/// diagram has no children.
pub fn children(dia: &Diagram) -> Vec<Diagram> {
    let Some(pivot) = dia.pivot() else {
        return Vec::new();
    };
    (pivot..dia.vertices().len())
        .filter(|&candidate| !dia.vertices()[candidate].is_saturated())
        .filter_map(|candidate| {
            let mut child = dia.clone();
            if child.connect(pivot, candidate) > 0 {
                Some(child)
            } else {
                None
            }
        })
        .collect()
}

/// All complete diagrams that can be grown from `seed`
///
/// Diagrams are returned in depth-first order, with the branches of
/// each step ordered by the index of the vertex the new line ends on.
pub fn grow(seed: Diagram) -> Vec<Diagram> {
    let mut res = Vec::new();
    grow_into(seed, &mut res);
    res
}

fn grow_into(dia: Diagram, res: &mut Vec<Diagram>) {
    if dia.is_complete() {
        trace!("Complete diagram: {}", dia.format());
        res.push(dia);
        return;
    }
    for child in children(&dia) {
        grow_into(child, res);
    }
}
