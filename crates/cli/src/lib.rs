mod info;
mod layers;
mod matrix_set;
mod view;

use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "tilescope",
    version,
    about = "Inspect WMTS capabilities documents",
    long_about = "Tilescope fetches a WMTS GetCapabilities document, normalizes it into a typed model \
                  and resolves layers and tile matrix sets the same way catalog code does. \
                  SOURCE is an http(s) URL, a file:// URL or a local path."
)]
pub struct Cli {
    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// HTTP timeout in seconds (overrides TILESCOPE_HTTP_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show service metadata and content counts
    Info {
        #[arg(value_name = "SOURCE")]
        source: String,
    },
    /// List every layer in document order
    Layers {
        #[arg(value_name = "SOURCE")]
        source: String,
        /// Only show layers whose identifier or title contains this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// Resolve a layer by identifier or title
    #[command(
        long_about = "Resolves NAME against layer identifiers and titles. A namespace qualified \
                            name (ns:Layer) falls back to the bare name when no layer matches it exactly."
    )]
    Layer {
        #[arg(value_name = "SOURCE")]
        source: String,
        #[arg(value_name = "NAME")]
        name: String,
        /// Print the resolved layer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a tile matrix set by identifier
    MatrixSet {
        #[arg(value_name = "SOURCE")]
        source: String,
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
        /// Print the resolved tile matrix set as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = tilescope_runtime::init_logging("cli", cli.verbose);

    let config = tilescope_runtime::load_config(cli.timeout.map(Duration::from_secs));
    let service = tilescope_runtime::build_default_gateway(&config)?;

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Info { source } => rt.block_on(info::run(service, source)),
        Commands::Layers { source, filter } => rt.block_on(layers::list(service, source, filter)),
        Commands::Layer { source, name, json } => {
            rt.block_on(layers::show(service, source, name, json))
        }
        Commands::MatrixSet {
            source,
            identifier,
            json,
        } => rt.block_on(matrix_set::show(service, source, identifier, json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tilescope",
            "layer",
            "caps.xml",
            "topp:roads",
            "--json",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.timeout, Some(5));
        assert!(matches!(
            cli.command,
            Commands::Layer { ref name, json: true, .. } if name == "topp:roads"
        ));
    }

    #[test]
    fn test_timeout_defaults_to_env() {
        let cli = Cli::try_parse_from(["tilescope", "info", "caps.xml"]).unwrap();
        assert_eq!(cli.timeout, None);
        assert!(!cli.verbose);
    }
}
