use std::io::Write;

use ahash::RandomState;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::diagram::Diagram;
use crate::graph_util::Format;
use crate::vertex::Multiplier;
use crate::version::VERSION_STRING;

type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
)]
pub enum OutFormat {
    /// One line per diagram, e.g. `12⟨{p1,λ}{-q1,λ}{λ,λ}⟩`
    #[default]
    Text,
    /// A YAML mapping from diagram number to multiplier and lines
    Yaml,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialise diagram: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Serialize)]
struct YamlDia<'a> {
    multiplier: Multiplier,
    lines: Vec<[&'a str; 2]>,
}

/// Write diagram number `num`, counting from one
pub fn write(
    mut out: impl Write,
    num: usize,
    dia: &Diagram,
    format: OutFormat,
) -> Result<(), WriteError> {
    use OutFormat::*;
    match format {
        Text => writeln!(out, "{}", dia.format())?,
        Yaml => {
            let labels = dia.display_labels();
            let lines = dia
                .lines()
                .iter()
                .map(|l| [&*labels[l.first], &*labels[l.second]])
                .collect();
            let mut entry = IndexMap::default();
            entry.insert(
                num,
                YamlDia {
                    multiplier: dia.multiplier(),
                    lines,
                },
            );
            serde_yaml::to_writer(out, &entry)?
        }
    }
    Ok(())
}

pub fn write_header(
    mut out: impl Write,
    format: OutFormat,
) -> Result<(), WriteError> {
    use OutFormat::*;
    match format {
        Text => {}
        Yaml => writeln!(out, "# Generated by {}", *VERSION_STRING)?,
    }
    Ok(())
}
