//! Command-line driver for the symbol catalog.
//!
//! # Responsibility
//! - Load or import the catalog, run one command, then force a final save.
//! - Print core envelope messages; exit non-zero when an action fails.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use symbolfinder_core::{api, default_log_level, init_logging, CatalogConfig, SymbolCatalog};

#[derive(Parser)]
#[command(name = "symbolfinder")]
#[command(about = "Browse and annotate a personal Unicode symbol catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file; defaults apply when it does not exist
    #[arg(short, long, global = true, default_value = "symbolfinder.json")]
    config: PathBuf,

    /// Absolute directory for rolling log files
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search with `+include` / `-exclude` terms
    #[command(alias = "s")]
    Search {
        /// Leading `-` starts an exclude term, not a flag
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
        /// Include hidden symbols
        #[arg(long)]
        show_hidden: bool,
        /// Only favorites
        #[arg(long)]
        favorites_only: bool,
        /// Leave out a general category (e.g. `Cc`); repeatable
        #[arg(long = "without-category", value_name = "CODE")]
        without_categories: Vec<String>,
    },
    /// Hide symbols by code point
    Hide { code_points: Vec<String> },
    /// Unhide symbols by code point
    Unhide { code_points: Vec<String> },
    /// Mark symbols as favorite
    Favorite { code_points: Vec<String> },
    /// Remove symbols from favorites
    Unfavorite { code_points: Vec<String> },
    /// Set the personal comment of one symbol
    Comment { code_point: String, text: String },
    /// Merge new entries from the Unicode data file
    UpdateData,
    /// List general categories
    Categories,
    /// Print symbols as a copyable list
    Export {
        code_points: Vec<String>,
        /// Print only the glyphs, concatenated
        #[arg(long)]
        glyphs: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match CatalogConfig::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut catalog = SymbolCatalog::new(config);
    let loaded = api::startup(&mut catalog);
    if !loaded.ok {
        eprintln!("{}", loaded.message);
        return ExitCode::FAILURE;
    }
    log::info!("event=cli_startup module=cli status=ok");

    let response = run(&mut catalog, cli.command);
    let saved = api::save(&mut catalog, true);
    if !saved.ok {
        eprintln!("{}", saved.message);
    }

    match response {
        Some(response) if !response.ok => {
            eprintln!("{}", response.message);
            ExitCode::FAILURE
        }
        Some(response) => {
            println!("{}", response.message);
            ExitCode::SUCCESS
        }
        None if saved.ok => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}

fn run(catalog: &mut SymbolCatalog, command: Commands) -> Option<api::ActionResponse> {
    match command {
        Commands::Search {
            text,
            show_hidden,
            favorites_only,
            without_categories,
        } => {
            for code in &without_categories {
                if !catalog.set_category_enabled(code, false) {
                    eprintln!("unknown category: {code}");
                }
            }
            let response = api::search(catalog, &text, show_hidden, favorites_only);
            for item in &response.items {
                let marker = match (item.is_favorite, item.is_hidden) {
                    (true, _) => "*",
                    (false, true) => "h",
                    (false, false) => " ",
                };
                println!(
                    "{marker} {:>6}  {}  {}  [{}]{}",
                    item.code_point,
                    item.glyph,
                    item.display_name,
                    item.category,
                    if item.personal_comment.is_empty() {
                        String::new()
                    } else {
                        format!("  # {}", item.personal_comment)
                    }
                );
            }
            println!("{}", response.message);
            None
        }
        Commands::Hide { code_points } => Some(api::set_hidden(catalog, &code_points, true)),
        Commands::Unhide { code_points } => Some(api::set_hidden(catalog, &code_points, false)),
        Commands::Favorite { code_points } => {
            Some(api::set_favorite(catalog, &code_points, true))
        }
        Commands::Unfavorite { code_points } => {
            Some(api::set_favorite(catalog, &code_points, false))
        }
        Commands::Comment { code_point, text } => {
            Some(api::set_comment(catalog, &code_point, &text))
        }
        Commands::UpdateData => Some(api::update_unicode_data(catalog)),
        Commands::Categories => {
            for (short_code, long_name, enabled) in catalog.category_list() {
                println!(
                    "{} {short_code}  {long_name}",
                    if enabled { "[x]" } else { "[ ]" }
                );
            }
            None
        }
        Commands::Export {
            code_points,
            glyphs,
        } => {
            if glyphs {
                println!("{}", api::copy_glyphs(catalog, &code_points));
            } else {
                print!("{}", api::copy_list(catalog, &code_points));
            }
            None
        }
    }
}
