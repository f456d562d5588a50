use std::path::PathBuf;

use clap::Parser;
use feynmult::writer::OutFormat;
use feynmult::Config;

/// Enumerate Feynman diagrams together with their multiplicities
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub(crate) struct Args {
    /// Maximum number of interaction vertices.
    ///
    /// Overrides `perturbation_order` from the configuration file.
    #[clap(long)]
    pub(crate) order: Option<usize>,

    /// Keep diagrams where a line starts and ends on the same vertex.
    #[clap(long)]
    pub(crate) allow_self_contractions: bool,

    /// Keep diagrams that are not connected.
    #[clap(long)]
    pub(crate) allow_disconnected: bool,

    /// Keep diagrams with pieces not connected to any external leg.
    #[clap(long)]
    pub(crate) allow_vacuum: bool,

    /// Print the effective configuration as YAML and exit.
    #[clap(long)]
    pub(crate) print_config: bool,

    /// Output format.
    #[clap(short, long, value_enum, default_value = "text")]
    pub(crate) format: OutFormat,

    /// Output file. Print to standard output if absent.
    #[clap(short, long)]
    pub(crate) outfile: Option<PathBuf>,

    /// Verbosity level.
    #[clap(
        short,
        long,
        default_value = "info",
        help = "Verbosity level.
Possible values with increasing amount of output are
'off', 'error', 'warn', 'info', 'debug', 'trace'."
    )]
    pub(crate) loglevel: String,

    /// Configuration file in YAML format. Use built-in defaults if absent.
    #[clap()]
    pub(crate) config: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides to `config`
    pub(crate) fn apply_to(&self, config: &mut Config) {
        if let Some(order) = self.order {
            config.perturbation_order = order;
        }
        if self.allow_self_contractions {
            config.normal_ordering = false;
        }
        if self.allow_disconnected {
            config.fully_connected = false;
        }
        if self.allow_vacuum {
            config.no_vacuum_pieces = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "feynmult",
            "--order",
            "3",
            "--allow-vacuum",
            "-f",
            "yaml",
            "model.yaml",
        ]);
        assert_eq!(args.format, OutFormat::Yaml);
        assert_eq!(args.config, Some(PathBuf::from("model.yaml")));

        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config.perturbation_order, 3);
        assert!(config.normal_ordering);
        assert!(config.fully_connected);
        assert!(!config.no_vacuum_pieces);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["feynmult"]);
        assert_eq!(args.format, OutFormat::Text);
        assert_eq!(args.loglevel, "info");
        assert!(args.config.is_none());

        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config, Config::default());
    }
}
