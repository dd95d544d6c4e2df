//! LOGIN command - Sign in to an existing account.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output, read_password};

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address of the account
    pub email: String,

    /// Password (read from stdin when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Request body for logging in.
#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Response from logging in: the account plus a fresh session token.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub user: Account,
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub created: DateTime<Utc>,
}

impl HumanReadable for LoginResponse {
    fn print_human(&self) {
        println!("{}", "Logged in!".green().bold());
        println!();
        println!("  {} {}", "Email:".cyan(), self.user.email);
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

/// Execute the login command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let url = format!("{}/api/login", base_url);

    let request_body = LoginRequest {
        email: args.email,
        password: read_password(args.password)?,
    };

    let response: LoginResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
