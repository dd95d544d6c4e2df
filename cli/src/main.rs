//! `jot` - command-line client for the jot note service.
//!
//! Talks to a running jot-server over its REST API. Scripting gets JSON
//! on stdout by default; `--human` switches to formatted text. The
//! server location and session token come from `JOT_URL` and `JOT_TOKEN`
//! (or their flags), so a typical session is:
//!
//! ```text
//! jot register alice@example.com
//! export JOT_TOKEN=...
//! jot add "first note"
//! jot list --human
//! ```

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, edit::EditArgs, list::ListArgs, login::LoginArgs,
    register::RegisterArgs,
};

/// Keep short notes on a jot server from the command line.
#[derive(Parser)]
#[command(name = "jot", author, version, about, propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// jot server URL
    #[arg(long, env = "JOT_URL", default_value = "http://localhost:5001", global = true)]
    url: String,

    /// JWT Bearer token for authenticated commands
    #[arg(long, env = "JOT_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Register(RegisterArgs),
    /// Sign in to an existing account
    Login(LoginArgs),
    /// List your notes, newest first
    List(ListArgs),
    /// Add a new note
    Add(AddArgs),
    /// Replace the text of a note
    Edit(EditArgs),
    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = commands::build_client(cli.token.as_deref())?;

    match cli.command {
        Command::Register(args) => {
            commands::register::execute(&client, &cli.url, cli.human, args).await
        }
        Command::Login(args) => commands::login::execute(&client, &cli.url, cli.human, args).await,
        Command::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Command::Add(args) => commands::add::execute(&client, &cli.url, cli.human, args).await,
        Command::Edit(args) => commands::edit::execute(&client, &cli.url, cli.human, args).await,
        Command::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    }
}
