//! LIST command - Show your notes, newest first.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // Listing takes no filters; the server returns every note the
    // caller owns.
}

/// Response from listing notes. The server returns a bare array.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ListNotesResponse {
    pub notes: Vec<NoteEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NoteEntry {
    pub id: Uuid,
    pub owner: Uuid,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        if self.notes.is_empty() {
            println!("{}", "No notes yet.".dimmed());
            return;
        }

        println!("{} ({})", "Your notes".green().bold(), self.notes.len());
        println!();

        for note in &self.notes {
            let mut lines = note.text.lines();
            let first = lines.next().unwrap_or("");
            let tail = if lines.next().is_some() { " [more]" } else { "" };

            println!(
                "{} {}{}",
                "*".blue().bold(),
                truncate(first, 60).bold(),
                tail.dimmed()
            );
            println!(
                "  {} {}  {} {}",
                "id:".cyan(),
                note.id,
                "created:".cyan(),
                format_timestamp(&note.created)
            );
            println!();
        }
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let response: ListNotesResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
