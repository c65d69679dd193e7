//! routify: compiles a YAML route manifest into a Rust source file holding a
//! `static` route table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use routify::compiler::{EmitOptions, RouteManifest, emit};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "routify")]
#[command(about = "Compile a route manifest into a static route table")]
#[command(version)]
struct Cli {
    /// Route manifest to read
    #[arg(short, long, default_value = "routes.yaml")]
    input: PathBuf,

    /// Rust source file to write
    #[arg(short, long, default_value = "routes.rs")]
    output: PathBuf,

    /// Path the generated code uses to reach the routify crate
    #[arg(short, long, default_value = "::routify")]
    crate_path: String,

    /// Name of the generated static
    #[arg(short, long, default_value = "ROUTES")]
    var_name: String,

    /// Handler type the table is parameterized with
    #[arg(short = 't', long, default_value = "Handler")]
    handler_type: String,

    /// Validate the manifest and build the trie without writing output
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let manifest = RouteManifest::from_path(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let table = manifest
        .build_names()
        .with_context(|| format!("building routes from {}", cli.input.display()))?;

    if cli.check {
        tracing::info!(routes = table.len(), input = %cli.input.display(), "manifest is valid");
        return Ok(());
    }

    let options = EmitOptions {
        crate_path: cli.crate_path,
        var_name: cli.var_name,
        handler_type: cli.handler_type,
    };
    let source = emit(&table, &options)?;
    std::fs::write(&cli.output, source)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    tracing::info!(
        routes = table.len(),
        output = %cli.output.display(),
        "route table written"
    );
    Ok(())
}
