//! REGISTER command - Create a new account.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output, read_password};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Email address for the new account
    pub email: String,

    /// Password (read from stdin when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Request body for registering an account.
#[derive(Serialize)]
struct RegisterRequest {
    email: String,
    password: String,
}

/// Response from registering: the new account plus a session token.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub user: Account,
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub created: DateTime<Utc>,
}

impl HumanReadable for RegisterResponse {
    fn print_human(&self) {
        println!("{}", "Account created!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.user.id);
        println!("  {} {}", "Email:".cyan(), self.user.email);
        println!(
            "  {} {}",
            "Created:".cyan(),
            format_timestamp(&self.user.created)
        );
        println!();
        println!("{}", "Session token:".yellow());
        println!("  {}", self.token);
        println!();
        println!(
            "  {}",
            format!("export JOT_TOKEN={}", self.token).dimmed()
        );
    }
}

/// Execute the register command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RegisterArgs,
) -> Result<()> {
    let url = format!("{}/api/register", base_url);

    let request_body = RegisterRequest {
        email: args.email,
        password: read_password(args.password)?,
    };

    let response: RegisterResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
