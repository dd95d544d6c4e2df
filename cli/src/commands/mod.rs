//! Command implementations for the jot CLI.
//!
//! Shared plumbing lives here: the HTTP client builder, the request
//! helper that surfaces server error messages, and the output switch
//! between JSON (default) and human-readable text.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod register;

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error body returned by the server for every failure status.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Types that can render themselves as formatted terminal output.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Build the HTTP client, attaching the bearer token when one is set.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("Token contains characters that cannot appear in a header")?;
        headers.insert(AUTHORIZATION, value);
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")
}

/// Send a request and decode the JSON response.
///
/// Failure statuses become errors carrying the server's message, so
/// the user sees "email already registered" rather than a bare 400.
pub async fn make_request<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .context("Request failed. Is the server running?")?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} ({})", error_message(response).await, status);
    }

    response
        .json::<T>()
        .await
        .context("Failed to parse server response")
}

/// Send a request whose success response carries no body.
pub async fn expect_no_content(request: reqwest::RequestBuilder) -> Result<()> {
    let response = request
        .send()
        .await
        .context("Request failed. Is the server running?")?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} ({})", error_message(response).await, status);
    }

    Ok(())
}

async fn error_message(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if text.is_empty() => "request failed".to_string(),
        Err(_) => text,
    }
}

/// Print a response as pretty JSON, or hand off to its human formatter.
pub fn output<T: Serialize + HumanReadable>(response: &T, human: bool) -> Result<()> {
    if human {
        response.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(response)?);
    }
    Ok(())
}

/// Format a timestamp for terminal display.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Truncate text to a single displayable line.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Resolve note text from an argument: `-` reads stdin, `@path` reads
/// a file, anything else is taken verbatim.
pub fn resolve_text(arg: String) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read note text from stdin")?;
        Ok(buffer)
    } else if let Some(path) = arg.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    } else {
        Ok(arg)
    }
}

/// Take the password from the argument, or read one line from stdin.
pub fn read_password(arg: Option<String>) -> Result<String> {
    match arg {
        Some(password) => Ok(password),
        None => {
            let mut line = String::new();
            std::io::stdin()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            Ok(line.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
