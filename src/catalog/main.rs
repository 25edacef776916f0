use catalog::config::CatalogConfig;
use catalog::error::{CatalogError, Result};
use catalog::repository::snapshot::SnapshotRepository;
use catalog::service::CatalogService;
use catalog::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod print;
use args::{Cli, Commands};

const HOME_ENV: &str = "CATALOG_HOME";
const LOG_ENV: &str = "CATALOG_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,catalog=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

struct AppContext {
    home: PathBuf,
    config: CatalogConfig,
}

impl AppContext {
    fn file_store(&self) -> FileStore {
        FileStore::new(self.config.data_path(&self.home)).with_pretty(self.config.pretty)
    }

    fn service(&self) -> CatalogService<SnapshotRepository<FileStore>> {
        CatalogService::new(SnapshotRepository::new(self.file_store()))
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Get { id }) => handle_get(&ctx, id),
        Some(Commands::Search { price_gt }) => handle_search(&ctx, price_gt),
        Some(Commands::Add(product)) => handle_add(&ctx, product),
        Some(Commands::Update { id, product }) => handle_update(&ctx, id, product),
        Some(Commands::Patch { id, patch }) => handle_patch(&ctx, id, patch),
        Some(Commands::Delete { id }) => handle_delete(&ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context() -> Result<AppContext> {
    let home = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "catalog", "catalog")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "Could not determine a data directory; set {}",
                    HOME_ENV
                ))
            })?,
    };
    let config = CatalogConfig::load(&home)?;
    tracing::debug!(home = %home.display(), ?config, "context initialized");
    Ok(AppContext { home, config })
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let store = ctx.file_store();
    if store.init()? {
        print::print_success(format!(
            "Initialized catalog at {}",
            store.path().display()
        ));
    } else {
        print::print_info(format!(
            "Catalog already exists at {}",
            store.path().display()
        ));
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let products = ctx.service().list_all()?;
    print::print_products(&products);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: u64) -> Result<()> {
    let product = ctx.service().find_by_id(id)?;
    print::print_product(&product);
    Ok(())
}

fn handle_search(ctx: &AppContext, price_gt: f64) -> Result<()> {
    let products = ctx.service().find_by_price_above(price_gt)?;
    print::print_products(&products);
    Ok(())
}

fn handle_add(ctx: &AppContext, product: args::ProductArgs) -> Result<()> {
    let saved = ctx.service().insert(product.into())?;
    print::print_success(format!(
        "Product created ({}): {}",
        saved.id, saved.name
    ));
    Ok(())
}

fn handle_update(ctx: &AppContext, id: u64, product: args::ProductArgs) -> Result<()> {
    let product = catalog::model::Product::from(product).with_id(id);
    let saved = ctx.service().update(product)?;
    print::print_success(format!(
        "Product updated ({}): {}",
        saved.id, saved.name
    ));
    Ok(())
}

fn handle_patch(ctx: &AppContext, id: u64, patch: args::PatchArgs) -> Result<()> {
    let patch: catalog::model::ProductPatch = patch.into();
    if patch.is_empty() {
        print::print_info("Nothing to change.");
        return Ok(());
    }
    let saved = ctx.service().patch(id, patch)?;
    print::print_success(format!(
        "Product updated ({}): {}",
        saved.id, saved.name
    ));
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: u64) -> Result<()> {
    ctx.service().delete(id)?;
    print::print_success(format!("Product deleted ({})", id));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => print::print_config(&ctx.config),
        (Some(key), None) => match ctx.config.get(&key) {
            Some(value) => println!("{}", value),
            None => {
                return Err(CatalogError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        },
        (Some(key), Some(value)) => {
            let mut config = ctx.config.clone();
            config.set(&key, &value)?;
            config.save(&ctx.home)?;
            let shown = config.get(&key).unwrap_or(value);
            print::print_success(format!("{} set to {}", key, shown));
        }
    }
    Ok(())
}
