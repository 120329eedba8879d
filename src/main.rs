#![warn(clippy::all, rust_2018_idioms)]

use weighted_graph::{GraphResult, SavedGraph, Vertex, write_report};

const USAGE: &str = "usage: graph-tool <graph.ron> [start vertex]";

fn run(path: &str, start: Vertex) -> GraphResult<()> {
    let saved = SavedGraph::load(path)?;
    log::info!(
        "loaded {path}: {} vertices, {} edges, directed: {}",
        saved.vertex_count,
        saved.edges.len(),
        saved.directed
    );
    write_report(saved, start, &mut std::io::stdout().lock())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let start = match args.next().map(|s| s.parse::<Vertex>()) {
        None => 0,
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            eprintln!("invalid start vertex: {e}\n{USAGE}");
            return ExitCode::FAILURE;
        },
    };

    match run(&path, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("graph-tool failed on {path}: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
