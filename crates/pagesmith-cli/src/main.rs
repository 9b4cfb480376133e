use anyhow::Result;
use pagesmith_config::{CONFIG_FILE_NAME, Config};
use pagesmith_engine::{io, site};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine the site root from CLI args, falling back to the current directory
    let args: Vec<String> = env::args().collect();
    let site_root = if args.len() == 1 {
        PathBuf::from(".")
    } else if args.len() == 2 {
        PathBuf::from(&args[1])
    } else {
        eprintln!("Usage: {} [site-root]", args[0]);
        process::exit(1);
    };

    let config = match Config::load_from_dir(&site_root) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let paths = config.resolve(&site_root);

    if let Err(e) = io::validate_dir(&paths.content_dir) {
        eprintln!(
            "Error: Content directory '{}' is invalid: {e}",
            paths.content_dir.display()
        );
        eprintln!(
            "Create it, or change content_dir in {}",
            site_root.join(CONFIG_FILE_NAME).display()
        );
        process::exit(1);
    }

    if !paths.template.exists() {
        eprintln!("Error: Template '{}' not found", paths.template.display());
        process::exit(1);
    }

    log::info!("Building site from {}", site_root.display());
    let summary = site::build_site(
        &paths.content_dir,
        &paths.static_dir,
        &paths.template,
        &paths.output_dir,
    )?;

    println!(
        "Generated {} pages into {}",
        summary.pages,
        paths.output_dir.display()
    );

    Ok(())
}
