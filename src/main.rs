use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;
use tasklist::{SqliteGateway, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist CLI - a single task list over a local SQLite store")]
#[command(version)]
struct Cli {
    /// Path to the store directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    store_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task to the end of the list
    Add { title: String },

    /// Print all tasks in order
    List,

    /// Remove the task at the given position
    Remove { index: usize },

    /// Move a task between positions (view order only; not persisted)
    Move { from: usize, to: usize },
}

fn print_list(store: &TaskStore<SqliteGateway>) {
    for (i, task) in store.tasks().iter().enumerate() {
        println!("{:>3}  {}", i, task.title);
    }
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let gateway = SqliteGateway::open(&cli.store_path)?;
    let mut store = TaskStore::new(gateway);
    store.load()?;

    match cli.command {
        Commands::Add { title } => {
            let index = store.add(&title)?;
            println!("Added \"{}\" at position {}", store.tasks()[index].title, index);
        }
        Commands::List => {
            print_list(&store);
        }
        Commands::Remove { index } => {
            let task = store.delete(index)?;
            println!("Removed \"{}\"", task.title);
        }
        Commands::Move { from, to } => {
            store.move_task(from, to)?;
            print_list(&store);
        }
    }

    Ok(())
}
