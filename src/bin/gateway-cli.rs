//! CLI tool for exercising the short-link pipeline by hand.
//!
//! # Usage
//!
//! ```bash
//! # Show how a request would be classified, without any network call
//! cargo run --bin gateway-cli -- inspect "https://sho.rt/abc123" -H "cf-ipcountry: FR"
//!
//! # Run the full decision against a live resolver
//! cargo run --bin gateway-cli -- resolve "http://localhost:3000/abc123"
//!
//! # Print the cloak rewrite path for a target
//! cargo run --bin gateway-cli -- cloak "https://example.com/page?a=1"
//! ```

use shortlink_gateway::application::services::{
    RedirectService, ResolverSettings, derive_client_context,
};
use shortlink_gateway::domain::eligibility::{Eligibility, classify};
use shortlink_gateway::domain::entities::{IncomingRequest, RedirectDecision};
use shortlink_gateway::infrastructure::{HttpLinkResolver, http_client};
use shortlink_gateway::utils::bot_agent::is_bot;
use shortlink_gateway::utils::target_url::validate_target;

use anyhow::{Context, Result};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, header};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

/// CLI tool for the short-link gateway.
#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show eligibility, crawler detection and client context for a request
    Inspect(RequestArgs),

    /// Run the full decision against a live resolver
    Resolve {
        #[command(flatten)]
        request: RequestArgs,

        /// Resolver origin used in production mode
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        internal_base: Url,
    },

    /// Print the cloak rewrite path for a redirect target
    Cloak {
        /// Redirect target as returned by the resolver
        target: String,
    },
}

/// A simulated inbound request.
#[derive(Args)]
struct RequestArgs {
    /// Absolute request URL, e.g. https://sho.rt/abc123
    url: Url,

    /// Extra request header, `Name: value` (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Evaluate in production mode
    #[arg(long)]
    production: bool,
}

/// Parts of an [`IncomingRequest`] owned by the CLI.
struct SimulatedRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

impl SimulatedRequest {
    fn from_args(args: &RequestArgs) -> Result<Self> {
        let uri: Uri = args
            .url
            .as_str()
            .parse()
            .context("URL is not a valid request URI")?;

        let mut headers = HeaderMap::new();
        if let Some(host) = uri.authority() {
            headers.insert(header::HOST, HeaderValue::from_str(host.as_str())?);
        }
        if args.url.scheme() == "https" {
            headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        }

        for raw in &args.headers {
            let (name, value) = raw
                .split_once(':')
                .with_context(|| format!("Header must be 'Name: value', got '{raw}'"))?;
            let name = HeaderName::from_bytes(name.trim().as_bytes())
                .with_context(|| format!("Invalid header name in '{raw}'"))?;
            let value = HeaderValue::from_str(value.trim())
                .with_context(|| format!("Invalid header value in '{raw}'"))?;
            headers.insert(name, value);
        }

        Ok(Self {
            method: Method::GET,
            uri,
            headers,
        })
    }

    fn incoming(&self) -> IncomingRequest<'_> {
        IncomingRequest::new(&self.method, &self.uri, &self.headers)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => inspect(&args)?,
        Commands::Resolve {
            request,
            internal_base,
        } => resolve(&request, internal_base).await?,
        Commands::Cloak { target } => cloak(&target)?,
    }

    Ok(())
}

/// Prints everything the gateway derives before calling the resolver.
fn inspect(args: &RequestArgs) -> Result<()> {
    let simulated = SimulatedRequest::from_args(args)?;
    let request = simulated.incoming();

    println!("{}", "🔍 Request".bright_blue().bold());
    println!();
    println!("  URL:  {}", args.url.as_str().cyan());
    let mode = if args.production {
        "production"
    } else {
        "development"
    };
    println!("  Mode: {}", mode.cyan());
    println!();

    let eligibility = classify(request.path());
    let label = match &eligibility {
        Eligibility::Candidate(alias) => format!("candidate (alias '{alias}')").green(),
        Eligibility::Protected => "protected (route guard)".yellow(),
        Eligibility::Skip(reason) => format!("skipped ({reason:?})").bright_black(),
    };
    println!("  {:<12} {}", "Eligibility".bright_white().bold(), label);

    let user_agent = request.header_or_empty(header::USER_AGENT);
    let bot = if is_bot(&user_agent) {
        "yes, no lookup".yellow()
    } else {
        "no".green()
    };
    println!("  {:<12} {}", "Crawler".bright_white().bold(), bot);

    let context = derive_client_context(&request, args.production);
    println!();
    println!("{}", "Client context:".bright_white().bold());
    println!(
        "  IP:        {}",
        context.ip.as_deref().unwrap_or("(none)").cyan()
    );
    println!("  Country:   {}", context.country.cyan());
    println!("  City:      {}", context.city.cyan());
    println!("  Continent: {}", context.continent.cyan());
    println!();

    Ok(())
}

/// Runs [`RedirectService::decide`] against a live resolver.
async fn resolve(args: &RequestArgs, internal_base: Url) -> Result<()> {
    let simulated = SimulatedRequest::from_args(args)?;
    let request = simulated.incoming();

    let client = http_client::shared().context("Failed to build HTTP client")?;
    let service = RedirectService::new(
        Arc::new(HttpLinkResolver::new(client)),
        ResolverSettings {
            production: args.production,
            internal_base_url: internal_base,
        },
    );

    if let Some(base) = service.resolver_base(&request) {
        println!("  Resolver: {}", base.as_str().bright_black());
    }

    match service.decide(&request).await {
        RedirectDecision::Redirect(target) => {
            println!("{} {}", "➡️  307 Redirect".green().bold(), target.cyan());
        }
        RedirectDecision::Rewrite(path) => {
            println!("{} {}", "🎭 Rewrite".bright_magenta().bold(), path.cyan());
        }
        RedirectDecision::Continue => {
            println!(
                "{}",
                "⏭️  Continue (passed through; run with RUST_LOG=debug for details)".yellow()
            );
        }
    }

    Ok(())
}

/// Prints the rewrite path a cloaked link would use.
fn cloak(target: &str) -> Result<()> {
    let base = Url::parse("http://localhost/").context("Invalid base URL")?;

    let validated = validate_target(target, &base)
        .map_err(|e| anyhow::anyhow!("Target rejected: {}", e))?;

    match RedirectDecision::cloak(&validated) {
        RedirectDecision::Rewrite(path) => println!("{}", path),
        other => anyhow::bail!("Unexpected decision: {}", other.label()),
    }

    Ok(())
}
