use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "realty")]
#[command(version = env!("REALTY_VERSION"))]
#[command(about = "Keep a catalog of real-estate listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog (overrides config and REALTY_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Extra config file, read before the user config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List listings, optionally filtered
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Add a listing
    #[command(alias = "n")]
    Add {
        /// Id for the listing (defaults to a time-based one)
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        image_url: String,
    },

    /// Change fields of a listing
    #[command(alias = "e")]
    Edit {
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show one listing
    #[command(alias = "v")]
    View {
        id: String,

        /// Print schema.org JSON-LD instead
        #[arg(long)]
        json_ld: bool,
    },

    /// Delete one or more listings
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List the distinct categories
    Categories,

    /// Print a sitemap.xml for the catalog
    Sitemap {
        /// Site root, e.g. https://homes.example
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print a robots.txt that points at the sitemap
    Robots {
        /// Site root, e.g. https://homes.example
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Lowest price, inclusive
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price, inclusive
    #[arg(long)]
    pub max_price: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,
}
