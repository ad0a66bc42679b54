use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use petgraph::dot::Dot;

use dfac::{render_plain, InputBatch, LoadedDefinition, Session, ValidateOptions};

#[derive(Parser)]
#[command(
    name = "dfac",
    about = "load a DFA definition and evaluate input lines against it"
)]
struct Args {
    /// automaton definition file (.dfa)
    definition: PathBuf,

    /// input file with one candidate line per row (.in); verdicts are written
    /// next to it as a .out file
    input: Option<PathBuf>,

    /// reject incomplete automatons instead of loading them with a warning
    #[arg(long)]
    strict: bool,

    /// print the loaded automaton as graphviz dot
    #[arg(long)]
    dot: bool,

    /// print the full report as json instead of writing the .out file
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut session = Session::with_options(ValidateOptions {
        reject_incomplete: args.strict,
    });

    let definition = load_definition(&args.definition)?;
    let outcome = session
        .load_definition(&definition)
        .with_context(|| format!("failed to load `{}`", definition.filename))?;
    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }

    if args.dot {
        println!("{}", Dot::new(&outcome.dfa.graph()));
    }

    let input = match args.input {
        Some(input) => input,
        None => return Ok(()),
    };

    let batch = load_batch(&input)?;
    let result = session.run_batch(&batch)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.report)?);
    } else {
        let out_path = input.with_extension("out");
        fs::write(&out_path, render_plain(&result.report))
            .with_context(|| format!("failed to write `{}`", out_path.display()))?;
        println!("wrote {}", out_path.display());
    }

    println!("{}", result.summary);
    Ok(())
}

fn load_definition(path: &Path) -> Result<LoadedDefinition> {
    Ok(LoadedDefinition {
        filename: file_name(path),
        content: read_normalized(path)?,
    })
}

fn load_batch(path: &Path) -> Result<InputBatch> {
    let content = read_normalized(path)?;
    Ok(InputBatch {
        filename: file_name(path),
        input_lines: content.lines().map(str::to_string).collect(),
    })
}

// line endings are normalized and outer whitespace trimmed before the content
// reaches the core, same treatment the frontend applies to picked files
fn read_normalized(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    Ok(content.replace("\r\n", "\n").trim().to_string())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
