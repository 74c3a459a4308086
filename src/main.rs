use anyhow::Context;
use clap::{Parser, Subcommand};
use palaver_core::config::{Config, EmptyQuery};
use palaver_core::{integrity, Node, Search};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "palaver", about = "palaver — inspect a dialogue tree snapshot")]
struct Cli {
    /// Write debug logs to /tmp/palaver-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/palaver/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of nodes, as exported by the editor's state layer.
    #[arg(long, short)]
    nodes: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Nodes matching a free-text query, in collection order.
    Search {
        query: String,
        /// Show which rule matched each node.
        #[arg(long)]
        why: bool,
        /// Override `search.empty_query` (none | all).
        #[arg(long, value_parser = parse_empty_query)]
        empty_query: Option<EmptyQuery>,
    },
    /// Options that link to a node, given by id or name.
    Links { node: String },
    /// Option id → owning node, sorted by option id.
    Index,
    /// Report duplicate option ids, dangling links and stale names.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/palaver-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("palaver debug log started — tail -f /tmp/palaver-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "config: falling back to defaults");
            Config::defaults()
        }),
    };
    let nodes = load_nodes(&cli.nodes)?;

    let clean = run(cli.command, &config, &nodes)?;
    if !clean {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_empty_query(value: &str) -> Result<EmptyQuery, String> {
    value.parse().map_err(|err: palaver_core::Error| err.to_string())
}

fn load_nodes(path: &Path) -> anyhow::Result<Vec<Node>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading nodes from {}", path.display()))?;
    let nodes: Vec<Node> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing nodes from {}", path.display()))?;
    tracing::debug!(path = %path.display(), nodes = nodes.len(), "snapshot loaded");
    Ok(nodes)
}

/// Run one command, printing to stdout. Returns `false` when `check` found issues.
fn run(command: Command, config: &Config, nodes: &[Node]) -> anyhow::Result<bool> {
    match command {
        Command::Search { query, why, empty_query } => {
            let mut search_config = config.search;
            if let Some(policy) = empty_query {
                search_config.empty_query = policy;
            }
            let hits = Search::new(search_config).explain(&query, nodes);
            for hit in &hits {
                if why {
                    println!("{}\t{}\t({})", hit.node.id, hit.node.name, hit.reason);
                } else {
                    println!("{}\t{}", hit.node.id, hit.node.name);
                }
            }
            eprintln!("{} matched", palaver_core::plural(hits.len(), "node", None));
        }
        Command::Links { node } => {
            let target = nodes
                .iter()
                .find(|n| n.id == node)
                .or_else(|| nodes.iter().find(|n| n.name == node))
                .with_context(|| format!("no node with id or name {node:?}"))?;
            let owners = palaver_core::nodes_by_option_id(nodes);
            let links = palaver_core::find_links_to_node(Some(target), nodes);
            for option_id in &links {
                let from = owners.owner(option_id).map_or("?", |n| n.name.as_str());
                println!("{option_id}\tfrom {from}");
            }
            eprintln!(
                "{} to {}",
                palaver_core::plural(links.len(), "link", None),
                target.name
            );
        }
        Command::Index => {
            let index = palaver_core::nodes_by_option_id(nodes);
            let entries: Vec<_> = index.iter().collect();
            for (option_id, owner) in palaver_core::sort_by(&entries, |(id, _)| *id) {
                println!("{option_id}\t{}\t{}", owner.id, owner.name);
            }
            eprintln!(
                "{} across {}",
                palaver_core::plural(index.len(), "option", None),
                palaver_core::plural(nodes.len(), "node", None)
            );
        }
        Command::Check => {
            let issues = integrity::check(nodes);
            for issue in &issues {
                println!("{issue}");
            }
            eprintln!("{} found", palaver_core::plural(issues.len(), "issue", None));
            return Ok(issues.is_empty());
        }
    }
    Ok(true)
}
