use clap::{Parser, Subcommand};
use imgaize::catalog::Catalog;
use imgaize::{config, conversions, generate, output, route, sitemap};
use std::path::PathBuf;

/// Shared flag for commands with a machine-readable variant.
#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Emit JSON instead of the human-readable listing
    #[arg(long)]
    json: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "imgaize")]
#[command(about = "Site generator for the Imgaize in-browser image converter")]
#[command(long_about = "\
Site generator for the Imgaize in-browser image converter

The format catalog is the data source. Every (input, encodable output)
pair becomes a conversion landing page addressed by a <from>-to-<to>
slug, and the sitemap lists them all for search engines.

Site structure:

  site/
  ├── config.toml                  # base_url, site_name, sitemap.lastmod
  └── (generated) dist/
      ├── index.html               # Conversion directory
      ├── sitemap.xml
      └── jpeg-to-png/index.html   # One page per conversion

Slug resolution:
  Source token:  canonical value, or extension alias (jpg → jpeg)
  Target token:  same, but restricted to formats browsers can encode

Run 'imgaize gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the format catalog
    Formats(FormatArgs),
    /// List every valid conversion
    Conversions(FormatArgs),
    /// Resolve a conversion slug and show its page metadata
    Resolve {
        /// Slug to resolve, e.g. "jpeg-to-png"
        slug: String,
    },
    /// Print the sitemap XML to stdout
    Sitemap,
    /// Generate the full static site: pages + sitemap
    Build,
    /// Validate config and show the site inventory without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Formats(format_args) => {
            if format_args.json {
                let json = serde_json::to_string_pretty(catalog.input_formats())?;
                println!("{}", json);
            } else {
                output::print_formats_output(&catalog);
            }
        }
        Command::Conversions(format_args) => {
            let conversions = conversions::all_conversions(&catalog);
            if format_args.json {
                let json = serde_json::to_string_pretty(&conversions)?;
                println!("{}", json);
            } else {
                output::print_conversions_output(&conversions);
            }
        }
        Command::Resolve { slug } => {
            let config = config::load_config(&cli.source)?;
            let route = route::resolve_route(&slug, &catalog, &config.site_name)?;
            output::print_route_output(&route);
        }
        Command::Sitemap => {
            let config = config::load_config(&cli.source)?;
            let conversions = conversions::all_conversions(&catalog);
            let response = sitemap::SitemapResponse::new(
                &config.base_url,
                &conversions,
                config.sitemap.lastmod.as_deref(),
            );
            print!("{}", response.body);
        }
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!("==> Generating site → {}", cli.output.display());
            let stats = generate::generate(&config, &catalog, &cli.output)?;
            output::print_generate_output(&stats);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            output::print_formats_output(&catalog);
            let conversions = conversions::all_conversions(&catalog);
            println!("{} conversions, base URL {}", conversions.len(), config.base_url);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
