use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use metaseek_core::{OptionKind, ProviderId, SearchQuery};
use metaseek_providers::{blocks, catalog, client::SearchClient};
use std::time::Instant;

mod render;

#[derive(Parser, Debug)]
#[command(name = "metaseek")]
#[command(about = "Unified multi-provider search (CLI)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one search against the configured backend.
    Search(SearchCmd),
    /// Print the provider catalog (json).
    Providers,
    /// Print version info (json).
    Version,
}

#[derive(clap::Args, Debug)]
struct SearchCmd {
    /// Query text.
    query: String,

    /// Provider wire tag. Allowed: search_std, bochaai, searxng
    #[arg(long, default_value = "search_std")]
    provider: String,

    /// Advanced option as key=value (repeatable), e.g. --opt count=20.
    #[arg(long = "opt", value_name = "KEY=VALUE")]
    opts: Vec<String>,

    /// Backend endpoint (server base URL or full /api/search).
    #[arg(long, env = "METASEEK_ENDPOINT")]
    endpoint: String,

    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = metaseek_providers::client::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Emit the render blocks as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(cmd) => run_search(cmd).await,
        Commands::Providers => run_providers(),
        Commands::Version => run_version(),
    }
}

fn parse_opts(opts: &[String]) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for raw in opts {
        let Some((key, value)) = raw.split_once('=') else {
            bail!("invalid --opt {raw:?}: expected KEY=VALUE");
        };
        out.push((key.trim().to_string(), value.trim().to_string()));
    }
    Ok(out)
}

async fn run_search(cmd: SearchCmd) -> Result<()> {
    let provider = ProviderId::parse(&cmd.provider)?;
    let mut query = SearchQuery::new(cmd.query, provider)?;
    for (key, value) in parse_opts(&cmd.opts)? {
        query = query.with_option(key, value);
    }

    let client = SearchClient::new(reqwest::Client::new(), &cmd.endpoint)?
        .with_timeout_ms(cmd.timeout_ms);

    // The elapsed figure is measured around the transport call; the
    // model itself carries no timing.
    let t0 = Instant::now();
    let model = client.search(&query).await.context("search failed")?;
    let elapsed_ms = t0.elapsed().as_millis() as u64;

    let blocks = blocks::to_blocks(&model);
    if cmd.json {
        let out = serde_json::json!({
            "schema_version": 1,
            "provider": provider,
            "elapsed_ms": elapsed_ms,
            "empty": model.is_empty(),
            "blocks": blocks,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render::render_text(&blocks, model.is_empty(), elapsed_ms));
    }
    Ok(())
}

fn run_providers() -> Result<()> {
    let providers: Vec<serde_json::Value> = catalog::all()
        .into_iter()
        .map(|info| {
            let options: Vec<serde_json::Value> = info
                .options
                .iter()
                .map(|def| {
                    let (kind, allowed) = match def.kind {
                        OptionKind::Choice { allowed } => ("choice", Some(allowed)),
                        OptionKind::Count => ("count", None),
                        OptionKind::Flag => ("flag", None),
                        OptionKind::Text => ("text", None),
                    };
                    serde_json::json!({
                        "key": def.key,
                        "kind": kind,
                        "default": def.default,
                        "allowed": allowed,
                        "omit_when_default": def.omit_when_default,
                    })
                })
                .collect();
            serde_json::json!({
                "id": info.id,
                "display_name": info.display_name,
                "description": info.description,
                "default": info.id == catalog::default_provider(),
                "options": options,
                "capabilities": {
                    "suggestions": info.capabilities.suggestions,
                    "corrections": info.capabilities.corrections,
                    "answers": info.capabilities.answers,
                    "infoboxes": info.capabilities.infoboxes,
                },
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "schema_version": 1,
            "providers": providers,
        }))?
    );
    Ok(())
}

fn run_version() -> Result<()> {
    println!(
        "{}",
        serde_json::json!({
            "schema_version": 1,
            "name": "metaseek",
            "version": env!("CARGO_PKG_VERSION"),
        })
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_opts_splits_on_first_equals() {
        let out = parse_opts(&["engines=google,bing".to_string(), "a=b=c".to_string()]).unwrap();
        assert_eq!(
            out,
            vec![
                ("engines".to_string(), "google,bing".to_string()),
                ("a".to_string(), "b=c".to_string()),
            ]
        );
    }

    #[test]
    fn parse_opts_rejects_bare_keys() {
        assert!(parse_opts(&["count".to_string()]).is_err());
    }
}
