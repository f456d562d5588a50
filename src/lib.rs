pub mod config;
pub mod diagram;
pub mod enumerate;
pub mod filter;
pub mod graph_util;
pub mod growth;
pub mod line;
pub mod version;
pub mod vertex;
pub mod writer;

pub use config::{Config, ConfigError, VertexType};
pub use diagram::Diagram;
pub use enumerate::accepted_diagrams;
pub use filter::Filters;
pub use graph_util::Format;
pub use vertex::{Direction, Multiplier, Vertex, VertexKind};
