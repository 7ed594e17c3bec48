use clap::Parser;
use directories::ProjectDirs;
use realty::api::RealtyApi;
use realty::commands;
use realty::config::{RealtyConfig, CONFIG_FILENAME};
use realty::error::Result;
use realty::model::{ProductDraft, ProductPatch};
use realty::store::fs_backend::FsBackend;
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands, FieldArgs, FilterArgs};
use print::{print_lines, print_messages, print_product_detail, print_products};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RealtyApi<FsBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    let proj_dirs = ProjectDirs::from("com", "realty", "realty");
    let config = load_config(&cli, proj_dirs.as_ref())?;

    // Config is shown without mounting, so an unreadable catalog can still be diagnosed.
    if let Some(Commands::Config) = cli.command {
        return handle_config(&config);
    }

    let mut ctx = init_context(&cli, proj_dirs.as_ref(), config)?;

    match cli.command {
        Some(Commands::List(filter)) => handle_list(&ctx, filter),
        Some(Commands::Add {
            id,
            name,
            description,
            price,
            category,
            image_url,
        }) => handle_add(
            &mut ctx,
            ProductDraft {
                id: id.unwrap_or_default(),
                name,
                description,
                price,
                category,
                image_url,
            },
        ),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::View { id, json_ld }) => handle_view(&ctx, &id, json_ld),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Sitemap { base_url }) => handle_sitemap(&ctx, base_url),
        Some(Commands::Robots { base_url }) => handle_robots(&ctx, base_url),
        Some(Commands::Config) => handle_config(ctx.api.config()),
        None => handle_list(&ctx, FilterArgs::default()),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("REALTY_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("realty=debug")
        } else {
            EnvFilter::new("realty=warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli, proj_dirs: Option<&ProjectDirs>) -> Result<RealtyConfig> {
    let mut config_files: Vec<PathBuf> = Vec::new();
    if let Some(path) = &cli.config {
        config_files.push(path.clone());
    }
    if let Some(dirs) = proj_dirs {
        config_files.push(dirs.config_dir().join(CONFIG_FILENAME));
    }
    RealtyConfig::load(&config_files)
}

fn init_context(
    cli: &Cli,
    proj_dirs: Option<&ProjectDirs>,
    config: RealtyConfig,
) -> Result<AppContext> {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .or_else(|| proj_dirs.map(|d| d.data_dir().to_path_buf()));

    let backend = match data_dir {
        Some(dir) => FsBackend::new(dir),
        None => {
            tracing::warn!("no data directory available, changes will not be saved");
            FsBackend::unavailable()
        }
    };

    let api = RealtyApi::open(backend, config)?;
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, args: FilterArgs) -> Result<()> {
    let filter = ctx
        .api
        .filter_from(args.category.as_deref(), args.min_price, args.max_price)?;
    let result = ctx.api.list_products(&filter)?;
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: ProductDraft) -> Result<()> {
    let result = ctx.api.add_product(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: FieldArgs) -> Result<()> {
    let patch = ProductPatch {
        name: fields.name,
        description: fields.description,
        price: fields.price,
        category: fields.category,
        image_url: fields.image_url,
    };
    let result = ctx.api.update_product(id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str, json_ld: bool) -> Result<()> {
    if json_ld {
        let result = ctx.api.structured_data(id)?;
        if let Some(doc) = &result.document {
            println!("{}", doc);
        }
        return Ok(());
    }

    let result = ctx.api.view_product(id)?;
    for product in &result.listed_products {
        print_product_detail(product);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_products(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_lines(&result.categories);
    Ok(())
}

fn handle_sitemap(ctx: &AppContext, base_url: Option<String>) -> Result<()> {
    let result = ctx.api.sitemap(base_url.as_deref())?;
    if let Some(doc) = &result.document {
        print!("{}", doc);
    }
    Ok(())
}

fn handle_robots(ctx: &AppContext, base_url: Option<String>) -> Result<()> {
    let result = ctx.api.robots(base_url.as_deref())?;
    if let Some(doc) = &result.document {
        print!("{}", doc);
    }
    Ok(())
}

fn handle_config(config: &RealtyConfig) -> Result<()> {
    let result = commands::config::run(config)?;
    if let Some(doc) = &result.document {
        println!("{}", doc);
    }
    Ok(())
}
