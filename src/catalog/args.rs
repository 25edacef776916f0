use catalog::model::{Product, ProductPatch};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catalog", version)]
#[command(about = "File-backed product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the catalog home and an empty data file
    Init,

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show one product
    #[command(alias = "v")]
    Get { id: u64 },

    /// List products priced above a threshold
    Search {
        /// Only products with a price strictly greater than this
        #[arg(long = "price-gt")]
        price_gt: f64,
    },

    /// Add a new product
    #[command(alias = "n")]
    Add(ProductArgs),

    /// Replace every field of an existing product
    Update {
        id: u64,
        #[command(flatten)]
        product: ProductArgs,
    },

    /// Change some fields of an existing product
    Patch {
        id: u64,
        #[command(flatten)]
        patch: PatchArgs,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,

    #[arg(long = "code")]
    pub code_value: String,

    /// Expiration date (dd/mm/yyyy)
    #[arg(long)]
    pub expiration: String,

    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    #[arg(long)]
    pub published: bool,
}

impl From<ProductArgs> for Product {
    fn from(args: ProductArgs) -> Self {
        Product::new(
            args.name,
            args.quantity,
            args.code_value,
            args.expiration,
            args.price,
        )
        .published(args.published)
    }
}

#[derive(Args, Debug)]
pub struct PatchArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    #[arg(long = "code")]
    pub code_value: Option<String>,

    /// Expiration date (dd/mm/yyyy)
    #[arg(long)]
    pub expiration: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    #[arg(long)]
    pub published: Option<bool>,
}

impl From<PatchArgs> for ProductPatch {
    fn from(args: PatchArgs) -> Self {
        ProductPatch {
            name: args.name,
            quantity: args.quantity,
            code_value: args.code_value,
            is_published: args.published,
            expiration: args.expiration,
            price: args.price,
        }
    }
}
