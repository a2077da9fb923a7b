//! Folio CLI
//!
//! Inspect, validate and export the portfolio content.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use folio::cmd::list::Collection;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Portfolio content checker and exporter"
)]
struct Cli {
    /// Path to configuration file (defaults to ./folio.toml when present)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List projects or posts in display order
    List {
        #[arg(value_enum, default_value = "projects")]
        collection: Collection,
        /// Only featured projects
        #[arg(long)]
        featured: bool,
    },
    /// Show one project or post by slug
    Show {
        slug: String,
    },
    /// Print carousel items as JSON
    Carousel {
        /// Only featured projects
        #[arg(long)]
        featured: bool,
        /// Print the cover flow window centred on this slug instead
        #[arg(long, value_name = "SLUG")]
        center: Option<String>,
    },
    /// Print every route to pre-render
    Routes,
    /// Print JSON-LD structured data
    Seo,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    let config = folio::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { strict } => folio::cmd::check::run(&config, strict)?,
        Commands::List {
            collection,
            featured,
        } => folio::cmd::list::run(&config, collection, featured)?,
        Commands::Show { slug } => folio::cmd::show::run(&config, &slug)?,
        Commands::Carousel { featured, center } => {
            folio::cmd::export::carousel(&config, featured, center.as_deref())?
        }
        Commands::Routes => folio::cmd::export::routes(&config)?,
        Commands::Seo => folio::cmd::export::json_ld(&config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["folio", "check", "--strict"];
        let cli = Cli::parse_from(args);

        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_list_defaults_to_projects() {
        let cli = Cli::parse_from(["folio", "list"]);
        match cli.command {
            Commands::List {
                collection,
                featured,
            } => {
                assert_eq!(collection, Collection::Projects);
                assert!(!featured);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_list_posts() {
        let cli = Cli::parse_from(["folio", "list", "posts"]);
        match cli.command {
            Commands::List { collection, .. } => assert_eq!(collection, Collection::Posts),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_show_command_parsing() {
        let cli = Cli::parse_from(["folio", "show", "robot-fish"]);
        match cli.command {
            Commands::Show { slug } => assert_eq!(slug, "robot-fish"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_carousel_featured() {
        let cli = Cli::parse_from(["folio", "carousel", "--featured"]);
        match cli.command {
            Commands::Carousel { featured, center } => {
                assert!(featured);
                assert!(center.is_none());
            }
            _ => panic!("Expected Carousel command"),
        }
    }

    #[test]
    fn test_cli_carousel_center() {
        let cli = Cli::parse_from(["folio", "carousel", "--center", "robot-fish"]);
        match cli.command {
            Commands::Carousel { center, .. } => assert_eq!(center.as_deref(), Some("robot-fish")),
            _ => panic!("Expected Carousel command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["folio", "-vvv", "routes"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["folio", "--config", "site.toml", "seo"]);
        assert_eq!(cli.config, Some(std::path::PathBuf::from("site.toml")));
    }
}
