//! Jobkeeper CLI - Command-line client for the Jobkeeper HTTP API

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser)]
#[command(name = "jobkeeper")]
#[command(about = "Jobkeeper CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, env = "JOBKEEPER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new job
    Create {
        /// Job name
        name: String,
    },

    /// Show a single job
    Get {
        /// Job ID
        id: i64,
    },

    /// List all jobs
    List,

    /// Rename a job
    Update {
        /// Job ID
        id: i64,

        /// New job name
        name: String,
    },

    /// Delete a job
    Delete {
        /// Job ID
        id: i64,
    },

    /// Show server status
    Status,
}

#[derive(Deserialize, Tabled)]
struct JobRow {
    id: i64,
    name: String,
}

#[derive(Deserialize, Tabled)]
struct MessageRow {
    id: i64,
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await.context("Failed to connect to server")
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
        anyhow::bail!("{} ({})", message, status.as_u16());
    }

    response.json().await.context("Failed to parse response")
}

fn print_message(result: MessageRow) {
    println!("{}", format!("✓ {}", result.message).green().bold());
    println!();
    println!("{}", Table::new(vec![result]));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.api_url);

    match cli.command {
        Commands::Create { name } => {
            let result: MessageRow = client
                .call(Method::POST, "/api/job", Some(json!({ "name": name })))
                .await?;
            print_message(result);
        }

        Commands::Get { id } => {
            let response = client
                .send(Method::GET, &format!("/api/job/{}", id), None)
                .await?;

            if response.status() == StatusCode::NOT_FOUND {
                println!("{}", format!("Job {} not found", id).yellow());
            } else {
                let job: JobRow = decode(response).await?;
                println!("{}", Table::new(vec![job]));
            }
        }

        Commands::List => {
            let jobs: Vec<JobRow> = client.call(Method::GET, "/api/job", None).await?;

            if jobs.is_empty() {
                println!("{}", "No jobs".yellow());
            } else {
                println!("{}", format!("{} job(s)", jobs.len()).cyan().bold());
                println!("{}", Table::new(jobs));
            }
        }

        Commands::Update { id, name } => {
            let result: MessageRow = client
                .call(
                    Method::PUT,
                    &format!("/api/job/{}", id),
                    Some(json!({ "name": name })),
                )
                .await?;
            print_message(result);
        }

        Commands::Delete { id } => {
            let result: MessageRow = client
                .call(Method::DELETE, &format!("/api/job/{}", id), None)
                .await?;
            print_message(result);
        }

        Commands::Status => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match client
                .call::<serde_json::Value>(Method::GET, "/health", None)
                .await
            {
                Ok(health) => {
                    println!("  {} {}", "API URL:".bold(), cli.api_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), health["version"]);
                    println!("  {} {}", "Total Jobs:".bold(), health["jobs"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
