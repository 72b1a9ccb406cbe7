use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use shelf_client::{BookListView, HttpBooksApi, SubmitStatus};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// List and add books on a Shelf server
#[derive(Debug, Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "SHELF_URL", default_value = "http://127.0.0.1:3000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every book
    List,
    /// Create a book and print the updated list
    Add {
        /// Book title
        title: String,
    },
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let mut view = BookListView::new(HttpBooksApi::new(&cli.url));
    let loaded = view.mount().await;

    match cli.command {
        Command::List => {
            if !loaded {
                bail!("could not load books from {}", cli.url);
            }
            print!("{}", view.render());
        }
        Command::Add { title } => match view.submit(&title).await {
            SubmitStatus::Created(book) => {
                println!("created #{} {}", book.id, book.title);
                if loaded {
                    print!("{}", view.render());
                }
            }
            SubmitStatus::Rejected => {
                eprint!("{}", view.render());
                bail!("book was not created");
            }
            SubmitStatus::Failed => bail!("could not reach {}", cli.url),
        },
    }
    Ok(())
}
