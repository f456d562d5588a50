use itertools::Itertools;
use log::{debug, info};

use crate::config::{Config, VertexType};
use crate::diagram::Diagram;
use crate::growth::grow;

/// All multisets of `order` vertex types, each in catalog order
pub fn vertex_multisets(
    catalog: &[VertexType],
    order: usize,
) -> Vec<Vec<&VertexType>> {
    if order == 0 {
        return vec![Vec::new()];
    }
    catalog.iter().combinations_with_replacement(order).collect()
}

/// Seed diagrams for the given perturbation order
///
/// There is one seed for each multiset of vertex types with an even
/// total number of slots.
pub fn seeds(config: &Config, order: usize) -> Vec<Diagram> {
    let externals = config.external_vertices();
    vertex_multisets(&config.vertex_types, order)
        .into_iter()
        .filter_map(|types| {
            let vertices = externals
                .iter()
                .cloned()
                .chain(types.iter().map(|t| t.instantiate()))
                .collect();
            let seed = Diagram::seed(vertices)?;
            debug!(
                "Seed with vertices [{}] and {} slots",
                types.iter().map(|t| &t.label).join(", "),
                seed.slot_count()
            );
            Some(seed)
        })
        .collect()
}

/// All complete diagrams up to the configured perturbation order
///
/// No filters are applied.
pub fn diagrams(config: &Config) -> Vec<Diagram> {
    let mut res = Vec::new();
    for order in 0..=config.perturbation_order {
        let seeds = seeds(config, order);
        info!("Order {order}: {} seed diagrams", seeds.len());
        for seed in seeds {
            res.append(&mut grow(seed));
        }
    }
    res
}

/// All complete diagrams that pass the configured filters
pub fn accepted_diagrams(config: &Config) -> Vec<Diagram> {
    let filters = config.filters();
    let mut all = diagrams(config);
    let ngenerated = all.len();
    all.retain(|dia| filters.accepts(dia));
    info!("Generated {ngenerated} diagrams, accepted {}", all.len());
    all
}
