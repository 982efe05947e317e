use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

mod diagnostics;
mod model;
mod render;
mod schema;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "query-profile-tree", version)]
#[command(about = "Print a query profile as an indented operator tree", long_about = None)]
struct Cli {
    /// Profile JSON file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("read profile file {}", path.display())),
        _ => io::read_to_string(io::stdin().lock()).context("read profile from stdin"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init();

    // 1) Parse + validate the whole document before printing anything.
    let text = read_input(cli.input.as_ref())?;
    let doc = schema::ProfileDocument::from_json(&text)?;
    let stats = schema::stats::parse_statistics_desc(&doc.statistics_desc)?;
    debug!(
        query_id = %doc.query_id,
        stats = stats.len(),
        profiles = doc.profiles.len(),
        "parsed profile document"
    );

    // 2) Link records into a forest.
    let tree = model::build_tree(doc.profiles);

    // 3) Render.
    let report = render::render_text_report(&doc.query_id, &stats, &tree)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .context("write report to stdout")?;

    Ok(())
}
