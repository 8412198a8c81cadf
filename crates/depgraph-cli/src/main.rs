//! Hand-rolled CLI, grounded in `merman-cli`'s own argument parsing: no `clap`, a small `Args`
//! struct built up by hand, a flat `CliError` with manual `Display`/`From` impls, an `exit(2)` for
//! usage errors versus `exit(1)` for everything else.
//!
//! Reads a JSON ingest map (§6 "Ingest input") from a file or stdin, lays it out with the
//! selected back-end, and prints the output table (§6 "Output") as JSON. It exists to exercise
//! the external interfaces end to end; the scanner that produces the ingest map and any
//! rendering sink are out of scope here, same as in the core crate.

use std::io::Read;

use depgraph_layout::{IngestMap, LayoutConfig};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Layout(depgraph_layout::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<depgraph_layout::Error> for CliError {
    fn from(value: depgraph_layout::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    backend: String,
    pretty: bool,
    seed: Option<u64>,
}

fn usage() -> &'static str {
    "depgraph-cli\n\
\n\
USAGE:\n\
  depgraph-cli [--backend layered|force-directed] [--seed <n>] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the ingest map is read from stdin.\n\
  - --backend selects the layout back-end; defaults to 'layered'.\n\
  - --seed permutes ingest order; used to check layout is order-insensitive.\n\
  - Output is the node -> {href, x, y, is_dummy} table, printed as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        backend: "layered".to_string(),
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--backend" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.backend = name.clone();
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

/// Resolves a back-end name across both registered crates. `depgraph-layout` only knows its own
/// `"layered"` name; this is the one place that also knows about the `depgraph-layout-force`
/// peer, since the CLI is the boundary where peer crates get wired together, not the core.
fn resolve_backend(name: &str) -> Result<Box<dyn depgraph_layout::LayoutBackend>, CliError> {
    match depgraph_layout::backend::resolve(name) {
        Ok(backend) => Ok(backend),
        Err(depgraph_layout::Error::UnknownLayout { .. }) => {
            Ok(depgraph_layout_force::resolve(name)?)
        }
        Err(err) => Err(err.into()),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let raw = read_input(args.input.as_deref())?;
    let input: IngestMap = serde_json::from_str(&raw)?;
    let backend = resolve_backend(&args.backend)?;
    let config = LayoutConfig::default();

    let output = depgraph_layout::layout(&input, backend.as_ref(), &config, args.seed)?;

    if args.pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &output)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), &output)?;
    }
    println!();
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
