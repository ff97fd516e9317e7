//! nekoapi CLI - print ASCII cats to the terminal.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nekoapi::config::CONFIG_FILE;
use nekoapi::{Category, Neko, NekoConfig};

#[derive(Parser)]
#[command(name = "nekoapi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with default keys and bubble settings [default: ./neko_config.toml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// A random cat (faces excluded)
    Random,

    /// A cat in the given mood
    Mood { mood: Option<String> },

    /// A cat saying something
    Say {
        message: String,

        #[arg(short, long)]
        mood: Option<String>,
    },

    /// A one-line cat face
    Face { kind: Option<String> },

    /// A kitten
    Kitten { kind: Option<String> },

    /// A big cat in the given pose
    Big { pose: Option<String> },

    /// A cat doing something
    Action { action: Option<String> },

    /// The sleeping cat
    Sleeping,

    /// Several random faces in a row
    Parade {
        #[arg(allow_negative_numbers = true)]
        count: Option<i64>,
    },

    /// List known keys
    List {
        #[arg(value_enum)]
        what: ListTarget,
    },

    /// Print every cat of a type (standard, face, kitten, big, action)
    All { cat_type: String },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListTarget {
    Moods,
    Actions,
    Types,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => NekoConfig::load(path)?,
        None if Path::new(CONFIG_FILE).is_file() => NekoConfig::load(CONFIG_FILE)?,
        None => NekoConfig::default(),
    };
    let neko = Neko::new(config)?;

    match cli.command {
        Commands::Random => println!("{}", neko.random_cat()),
        Commands::Mood { mood } => println!("{}", neko.cat_by_mood(mood.as_deref())?),
        Commands::Say { message, mood } => {
            println!("{}", neko.cat_with_message(&message, mood.as_deref())?)
        }
        Commands::Face { kind } => println!("{}", neko.cat_face(kind.as_deref())?),
        Commands::Kitten { kind } => println!("{}", neko.kitten(kind.as_deref())?),
        Commands::Big { pose } => println!("{}", neko.big_cat(pose.as_deref())?),
        Commands::Action { action } => println!("{}", neko.action_cat(action.as_deref())?),
        Commands::Sleeping => println!("{}", neko.sleeping_cat()),
        Commands::Parade { count } => println!("{}", neko.cat_parade(count)),
        Commands::List { what } => {
            let keys = match what {
                ListTarget::Moods => nekoapi::list_moods(),
                ListTarget::Actions => nekoapi::list_actions(),
                ListTarget::Types => nekoapi::list_cat_types(),
            };
            println!("{}", keys.join("\n"));
        }
        Commands::All { cat_type } => {
            let category = Category::parse(&cat_type)?;
            for (key, art) in nekoapi::get_all_cats_by_type(category.name())? {
                println!("{}:\n{}\n", key, art);
            }
        }
    }

    Ok(())
}
