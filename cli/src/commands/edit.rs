//! EDIT command - Replace the text of a note.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output, resolve_text};

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Note ID to edit
    pub note_id: Uuid,

    /// New text for the note (use @filename to read from a file, or - for stdin)
    #[arg(short, long)]
    pub text: String,
}

/// Request body for updating a note.
#[derive(Serialize)]
struct UpdateNoteRequest {
    text: String,
}

/// Response from updating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub owner: Uuid,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl HumanReadable for NoteResponse {
    fn print_human(&self) {
        println!("{}", "Note updated!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
        println!();
        for line in self.text.lines() {
            println!("  {}", line);
        }
    }
}

/// Execute the edit command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: EditArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.note_id);

    let request_body = UpdateNoteRequest {
        text: resolve_text(args.text)?,
    };

    let response: NoteResponse = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}
