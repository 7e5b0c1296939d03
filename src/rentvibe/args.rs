use clap::{Parser, Subcommand};
use rentvibe::sort::SortOrder;

#[derive(Parser, Debug)]
#[command(name = "rentvibe")]
#[command(about = "Browse, filter and save rental listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every property
    #[command(alias = "ls")]
    List {
        /// Sort order: newest, price-low, price-high
        #[arg(short, long)]
        sort: Option<SortOrder>,
    },

    /// Filter the catalog
    #[command(alias = "s")]
    Search {
        /// Free text matched against title, location and description
        #[arg(short, long)]
        q: Option<String>,

        /// Location substring
        #[arg(short, long)]
        location: Option<String>,

        /// Lowest monthly rent
        #[arg(long, default_value_t = 0)]
        min_price: u64,

        /// Highest monthly rent
        #[arg(long, default_value_t = 150_000)]
        max_price: u64,

        /// Minimum bedrooms (e.g. 2 or 4+)
        #[arg(long)]
        bedrooms: Option<String>,

        /// Minimum bathrooms (e.g. 1 or 3+)
        #[arg(long)]
        bathrooms: Option<String>,

        /// Property type, e.g. Apartment or Villa
        #[arg(short = 't', long = "type")]
        property_type: Option<String>,

        /// Required amenity; repeat for more
        #[arg(short, long = "amenity")]
        amenities: Vec<String>,

        /// URL query string, e.g. "q=sea&city=Mumbai"
        #[arg(long, conflicts_with_all = ["q", "location"])]
        query_string: Option<String>,

        /// Sort order: newest, price-low, price-high
        #[arg(short, long)]
        sort: Option<SortOrder>,
    },

    /// Show one property with related listings
    #[command(alias = "v")]
    View { id: String },

    /// Save or unsave a property
    #[command(alias = "fav")]
    Favorite { id: String },

    /// List saved properties
    Favorites,

    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Check account credentials
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    Logout,

    Me,

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, related-limit, hash-iterations, sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
