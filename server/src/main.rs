//! Folio server binary.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use folio_server::ServerConfig;

/// Command-line interface for the folio server.
#[derive(Parser)]
#[command(name = "folio-server", version, about = "Serve the folio site")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Listen address, overriding the configuration
    #[arg(long)]
    addr: Option<String>,

    /// Built site directory, overriding the configuration
    #[arg(long)]
    site_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio_server::init_tracing(cli.verbose);

    let mut config = ServerConfig::load(&cli.config)?;
    config.apply_overrides(cli.addr, cli.site_root);

    folio_server::run(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["folio-server"]);

        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(cli.addr.is_none());
        assert!(cli.site_root.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "folio-server",
            "-c",
            "prod.toml",
            "--addr",
            "0.0.0.0:8080",
            "--site-root",
            "dist",
        ]);

        assert_eq!(cli.config, PathBuf::from("prod.toml"));
        assert_eq!(cli.addr.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.site_root, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_cli_verbose_levels() {
        let cli = Cli::parse_from(["folio-server", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }
}
