//! orgnote CLI tool
//!
//! Command-line interface for collecting note metadata from org-mode
//! documents with orgnote-core.
//!
//! ## Commands
//!
//! - `parse <path>`: collect notes from a document or directory and print them
//! - `tree <file>`: parse a single document and pretty-print its node tree
//!
//! By default `parse` only reports notes that carry an identifier property,
//! matching what a knowledge-base sync would ingest; `--all` includes the
//! rest. Image renaming modifies files in place, disable it with
//! `--no-rename` when inspecting a directory you do not want touched.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use orgnote_core::{
    collect::Note,
    config::CollectorConfig,
    middleware::{image_rename_middleware, NodeMiddleware},
    org::OrgNode,
    parser::parse_org,
    tools::normalize_org_value,
    walk::{collect_note_from_file, collect_notes_from_dir_with},
};

#[derive(Parser)]
#[command(name = "orgnote")]
#[command(author, version, about = "Collect note metadata from org-mode documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect notes from a document or directory and print them
    Parse {
        /// Path to an org document or a directory to walk (overrides the
        /// configured root)
        path: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Include notes without an identifier property
        #[arg(long)]
        all: bool,

        /// Print notes as JSON instead of summaries
        #[arg(long)]
        json: bool,

        /// Collector configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Do not rename referenced images while collecting
        #[arg(long)]
        no_rename: bool,
    },

    /// Parse a single document and pretty-print its node tree
    Tree {
        /// Path to the org document
        file: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            path,
            verbose,
            all,
            json,
            config,
            no_rename,
        } => {
            init_tracing(verbose);

            let config = match config {
                Some(config_path) => CollectorConfig::load(config_path)?,
                None => CollectorConfig::default(),
            };
            let root = path.unwrap_or_else(|| config.root.clone());
            let rename_images = config.rename_images && !no_rename;

            let mut notes = if root.is_file() {
                let mut middleware: Vec<NodeMiddleware> = Vec::new();
                if rename_images {
                    if let Some(parent) = root.parent() {
                        middleware.push(image_rename_middleware(parent));
                    }
                }
                collect_note_from_file(&root, &middleware)?
                    .into_iter()
                    .collect()
            } else {
                collect_notes_from_dir_with(&root, rename_images)?
            };
            if !all {
                notes.retain(|note| note.id.is_some());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                for note in &notes {
                    println!("{}", summarize(note));
                }
                println!("{} note(s)", notes.len());
            }
            Ok(())
        }

        Commands::Tree { file, verbose } => {
            init_tracing(verbose);
            let content = std::fs::read_to_string(&file)?;
            print_tree(&parse_org(&content), 0);
            Ok(())
        }
    }
}

fn summarize(note: &Note) -> String {
    let meta = &note.meta;
    format!(
        "{} [id: {}] headings: {}, tags: {}, links: {}/{}, images: {}",
        meta.title.as_deref().unwrap_or("(untitled)"),
        note.id.as_deref().unwrap_or("-"),
        meta.headings.len(),
        meta.tags.join(","),
        meta.internal_links.len(),
        meta.external_links.len(),
        meta.images.len(),
    )
}

fn print_tree(node: &OrgNode, level: usize) {
    println!("{}{}", "  ".repeat(level), label(node));
    for child in node.children() {
        print_tree(child, level + 1);
    }
}

fn label(node: &OrgNode) -> String {
    match node {
        OrgNode::Headline { level, raw_value } => {
            format!("headline[{level}] {raw_value}")
        }
        OrgNode::Keyword { key, value } => {
            format!("keyword {key}: {:?}", normalize_org_value(value))
        }
        OrgNode::NodeProperty { key, value } => {
            format!("node-property {key}: {:?}", normalize_org_value(value))
        }
        OrgNode::Link {
            link_type,
            raw_link,
            ..
        } => format!("link {link_type:?} -> {raw_link}"),
        OrgNode::Text { value } => format!("text {value:?}"),
        OrgNode::Raw { value } => format!("raw {value:?}"),
        other => other.kind().to_string(),
    }
}
