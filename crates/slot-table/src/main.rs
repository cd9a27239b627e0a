use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use erc7201_slots::{annotation_slot, derive_slot, lint_namespace, Keccak256, NamespaceId};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod manifest;

use manifest::{build_registry, table, Manifest};

/// Derive ERC-7201 storage slots and audit the namespaces of a deployment
#[derive(Parser)]
#[command(name = "slot-table", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the base slot of each namespace
    Derive {
        #[arg(required = true)]
        namespaces: Vec<String>,

        /// Read each argument as a `@custom:storage-location` value such as
        /// `erc7201:example.main` and hash only the id after the tag
        #[arg(long)]
        annotation: bool,
    },

    /// Register every namespace of a JSON manifest and print the slot table.
    /// Fails on the first collision.
    Check {
        manifest: PathBuf,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Derive {
            namespaces,
            annotation,
        } => {
            for namespace in namespaces {
                let slot = if annotation {
                    annotation_slot(&namespace)
                        .ok_or_else(|| anyhow!("{}: not an erc7201 storage location", namespace))?
                } else {
                    for lint in lint_namespace(&NamespaceId::from(namespace.as_str())) {
                        warn!(namespace = %namespace, "{}", lint);
                    }
                    derive_slot(&namespace)
                };
                println!("{}  {}", slot, namespace);
            }
        }
        Command::Check { manifest, json } => {
            let contents = fs::read_to_string(&manifest)
                .with_context(|| format!("failed to read {}", manifest.display()))?;
            let manifest = Manifest::from_json(&contents).context("invalid manifest")?;

            let registry = build_registry::<Keccak256>(&manifest)?;
            info!(namespaces = registry.len(), "no slot collisions");

            let rows = table(&registry);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{}  {} ({} words)", row.slot, row.namespace, row.words);
                    for field in row.fields {
                        println!("    {}", field);
                    }
                }
            }
        }
    }

    Ok(())
}
