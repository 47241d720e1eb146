//! Command-line host for the todo controller.
//!
//! Every invocation is one session: resolve the base URL, run `init`, apply
//! at most one action, then print the resulting state.

mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use todo_sync::{ApiError, ClientConfig, ReqwestTransport, Todo, TodoController};

#[derive(Parser)]
#[command(name = "todo", version, about = "Sync and edit a remote todo list")]
struct Cli {
    #[arg(long, help = "Base URL of the todo service (overrides API_BASE)")]
    api_base: Option<String>,

    #[arg(long, help = "Print the state snapshot as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Load and show the todo list (default)")]
    List,
    #[command(about = "GET an arbitrary path and show the response")]
    Ping {
        #[arg(default_value = "/healthz")]
        path: String,
    },
    #[command(about = "Create a todo")]
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    #[command(about = "Flip the done flag of a todo")]
    Toggle { id: String },
    #[command(about = "Delete a todo")]
    Delete { id: String },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn find_todo(controller: &TodoController<ReqwestTransport>, id: &str) -> anyhow::Result<Todo> {
    controller
        .state()
        .todos()
        .iter()
        .find(|t| t.id.to_string() == id)
        .cloned()
        .with_context(|| format!("no todo with id {id}"))
}

fn discard<T>(result: Result<T, ApiError>) -> Result<(), ApiError> {
    result.map(|_| ())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.api_base {
        Some(base) => ClientConfig::new(&base),
        None => ClientConfig::from_env(),
    };
    let mut controller = TodoController::from_config(&config, ReqwestTransport::new());
    let loaded = discard(controller.init().await);

    let outcome = match cli.command.unwrap_or(Command::List) {
        Command::List => loaded,
        Command::Ping { path } => discard(controller.ping(&path).await),
        Command::Add { title } => {
            controller.set_new_title(title.join(" "));
            discard(controller.create_todo().await)
        }
        Command::Toggle { id } => {
            let item = find_todo(&controller, &id)?;
            discard(controller.toggle_todo(&item).await)
        }
        Command::Delete { id } => {
            let item = find_todo(&controller, &id)?;
            discard(controller.delete_todo(&item).await)
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(controller.state())?);
    } else {
        print!("{}", render::render(controller.state()));
    }

    outcome.context("action did not succeed")
}
