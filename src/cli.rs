//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for rentr using the `clap` crate.
//! It provides command parsing, argument validation, and conversions from parsed
//! flags into the library's search types.
//!
//! # Commands
//!
//! - **browse**: Interactive search session (default)
//! - **search**: One-shot filtered listing search
//! - **show**: Detail view of one listing
//! - **favorites**: Listings marked as favorite
//! - **saved**: Manage saved searches
//! - **config**: Inspect configuration
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use rentr::cli::{Cli, Commands};
//! use rentr::search::FilterCriteria;
//!
//! let cli = Cli::parse_from_args(["rentr", "search", "downtown", "--beds", "2"]);
//! if let Commands::Search { criteria, .. } = cli.get_command() {
//!     let criteria = FilterCriteria::from(&criteria);
//!     assert_eq!(criteria.min_bedrooms, Some(2));
//! }
//! ```

use crate::config::OutputFormat;
use crate::listing::PropertyType;
use crate::search::{FilterCriteria, PriceBounds, PriceRange};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Property type accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTypeArg {
    Apartment,
    House,
    Condo,
    Townhouse,
}

impl From<PropertyTypeArg> for PropertyType {
    fn from(arg: PropertyTypeArg) -> Self {
        match arg {
            PropertyTypeArg::Apartment => Self::Apartment,
            PropertyTypeArg::House => Self::House,
            PropertyTypeArg::Condo => Self::Condo,
            PropertyTypeArg::Townhouse => Self::Townhouse,
        }
    }
}

/// Result format accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Colored listing cards
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array in catalog format
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => Self::Table,
            FormatArg::Csv => Self::Csv,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Structured filter flags shared by `search`, `browse` and `saved create`
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaArgs {
    /// Minimum monthly rent (inclusive)
    #[arg(long = "min-price", value_name = "AMOUNT")]
    pub min_price: Option<u32>,

    /// Maximum monthly rent (inclusive)
    #[arg(long = "max-price", value_name = "AMOUNT")]
    pub max_price: Option<u32>,

    /// Minimum number of bedrooms
    #[arg(long = "beds", value_name = "N")]
    pub beds: Option<u32>,

    /// Minimum number of bathrooms
    #[arg(long = "baths", value_name = "N")]
    pub baths: Option<u32>,

    /// Accepted property types (can specify multiple: --type house --type condo)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub property_types: Vec<PropertyTypeArg>,

    /// Required amenities, matched exactly (can specify multiple)
    #[arg(short = 'a', long = "amenity", value_name = "AMENITY")]
    pub amenities: Vec<String>,

    /// Require (true) or exclude (false) pet friendly listings
    #[arg(long = "pet-friendly", value_name = "BOOL")]
    pub pet_friendly: Option<bool>,

    /// Require (true) or exclude (false) furnished listings
    #[arg(long = "furnished", value_name = "BOOL")]
    pub furnished: Option<bool>,

    /// Only listings with at least one parking space
    #[arg(long = "parking")]
    pub parking: bool,
}

impl CriteriaArgs {
    /// True when no filter flag was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The price flags, each bound kept separate
    #[must_use]
    pub const fn price_bounds(&self) -> PriceBounds {
        PriceBounds::new(self.min_price, self.max_price)
    }
}

impl From<&CriteriaArgs> for FilterCriteria {
    /// Unset price bounds fall back to the default range bounds
    fn from(args: &CriteriaArgs) -> Self {
        let mut builder = Self::builder()
            .property_types(args.property_types.iter().copied().map(PropertyType::from))
            .amenities(args.amenities.iter().cloned());

        let bounds = args.price_bounds();
        if !bounds.is_unset() {
            let range = bounds.over(PriceRange::default());
            builder = builder.price_range(range.min, range.max);
        }
        if let Some(beds) = args.beds {
            builder = builder.min_bedrooms(beds);
        }
        if let Some(baths) = args.baths {
            builder = builder.min_bathrooms(baths);
        }
        if let Some(pets) = args.pet_friendly {
            builder = builder.pet_friendly(pets);
        }
        if let Some(furnished) = args.furnished {
            builder = builder.furnished(furnished);
        }
        if args.parking {
            builder = builder.parking_required(true);
        }

        builder.build()
    }
}

/// Shared arguments for saved search operations
#[derive(Parser, Debug, Clone, Default)]
pub struct SavedSearchArgs {
    /// Start from a saved search (flags refine it)
    #[arg(short = 'F', long = "from", value_name = "NAME")]
    pub from: Option<String>,

    /// Save the effective search under this name
    #[arg(long = "save-search", value_name = "NAME")]
    pub save_search: Option<String>,

    /// Description for the saved search
    #[arg(long = "search-desc", value_name = "DESC", requires = "save_search")]
    pub search_desc: Option<String>,
}

/// Saved search management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SavedCommands {
    /// List all saved searches
    #[command(visible_alias = "ls")]
    List,

    /// Show detailed information about a saved search
    Show {
        /// Name of the saved search
        name: String,
    },

    /// Create a new saved search
    Create {
        /// Name of the saved search
        name: String,

        /// Description of the saved search
        #[arg(short = 'd', long = "description")]
        description: Option<String>,

        /// Free-text query stored with the search
        #[arg(long = "query", value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Delete a saved search
    #[command(visible_alias = "rm")]
    Delete {
        /// Name of the saved search to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Rename a saved search
    #[command(visible_alias = "mv")]
    Rename {
        /// Current name
        old_name: String,

        /// New name
        new_name: String,
    },

    /// Export saved searches to a file
    Export {
        /// Names of searches to export (exports all if not specified)
        #[arg(value_name = "NAME")]
        names: Vec<String>,

        /// Output file path (prints to stdout if not specified)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Import saved searches from a file
    Import {
        /// Path to the file to import from
        path: PathBuf,

        /// Overwrite existing searches with the same name
        #[arg(long = "overwrite", conflicts_with = "skip_existing")]
        overwrite: bool,

        /// Skip searches that already exist
        #[arg(long = "skip-existing", conflicts_with = "overwrite")]
        skip_existing: bool,
    },

    /// Show saved search usage statistics
    Stats,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "rentr")]
#[command(about = "Search and filter rental listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Listing catalog to load (JSON); overrides config
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive search session (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial free-text query
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Start from a saved search
        #[arg(short = 'F', long = "from", value_name = "NAME")]
        from: Option<String>,
    },

    /// Search listings by text and filters
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query matched against title, address and city
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Output format (overrides config)
        #[arg(long = "format", value_name = "FORMAT")]
        format: Option<FormatArg>,

        #[command(flatten)]
        saved_args: SavedSearchArgs,
    },

    /// Show full details of a listing
    Show {
        /// Listing id
        id: String,
    },

    /// List favorite listings
    #[command(visible_alias = "fav")]
    Favorites,

    /// Manage saved searches
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            criteria: CriteriaArgs::default(),
            from: None,
        })
    }

    /// Default log directive for the requested verbosity
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
