//! ADD command - Create a new note.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output, resolve_text};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Note text (use @filename to read from a file, or - for stdin)
    pub text: String,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    text: String,
}

/// Response from creating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub owner: Uuid,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl HumanReadable for NoteResponse {
    fn print_human(&self) {
        println!("{}", "Note added!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
        println!();
        for line in self.text.lines() {
            println!("  {}", line);
        }
    }
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let request_body = CreateNoteRequest {
        text: resolve_text(args.text)?,
    };

    let response: NoteResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
