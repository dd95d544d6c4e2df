//! DELETE command - Remove a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, expect_no_content, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID to delete
    pub note_id: Uuid,

    /// Skip the confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Outcome of deleting a note. The server replies with an empty body,
/// so this is assembled locally for output.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteNoteResult {
    pub id: Uuid,
}

impl HumanReadable for DeleteNoteResult {
    fn print_human(&self) {
        println!("{} {}", "Deleted note".green().bold(), self.id);
    }
}

/// Ask before destroying anything. The prompt goes to stderr so stdout
/// stays clean for JSON consumers.
fn confirmed(note_id: Uuid) -> Result<bool> {
    use std::io::Write;

    eprint!(
        "{} This permanently deletes note {}. Continue? [y/N] ",
        "Warning:".yellow().bold(),
        note_id
    );
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    if human && !args.yes && !confirmed(args.note_id)? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let url = format!("{}/api/notes/{}", base_url, args.note_id);
    expect_no_content(client.delete(&url)).await?;

    output(&DeleteNoteResult { id: args.note_id }, human)
}
