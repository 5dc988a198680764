//! Batch shortest-path CLI.
//!
//! Reads a graph in the `G`/`E` text format, runs the selected algorithm
//! and writes a cost matrix (or a single distance vector with --source)
//! to the output file. Negative-cycle outcomes are normalized across all
//! four algorithms to the single output line `negative cycle`.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use shortest_paths::graph::Graph;
use shortest_paths::{
    io, BellmanFord, CostMatrix, Digraph, Dijkstra, Error, FloydWarshall, Johnson, Result,
    ShortestPathAlgorithm,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Floyd-Warshall: dense all-pairs, negative edges allowed
    Floyd,
    /// Bellman-Ford: per-source relaxation, negative edges allowed
    Bellman,
    /// Dijkstra: per-source, rejects graphs with negative edges
    Dijkstra,
    /// Johnson: reweighting + Dijkstra, negative edges allowed
    Johnson,
}

#[derive(Debug, Parser)]
#[command(about = "Shortest-path batch solver for weighted digraphs")]
struct Args {
    /// Algorithm to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Input graph file (header 'G <n> <m>', edges 'E <u> <v> <w>')
    input: PathBuf,

    /// Output file for the cost matrix
    output: PathBuf,

    /// Emit only the distance vector from this source vertex
    /// (bellman and dijkstra only)
    #[arg(long)]
    source: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let reader = BufReader::new(File::open(&args.input)?);
    let graph = io::read_digraph(reader)?;
    log::debug!(
        "loaded graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if let Some(source) = args.source {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
    }

    let mut out = BufWriter::new(File::create(&args.output)?);

    match args.algorithm {
        Algorithm::Floyd => {
            let matrix = FloydWarshall::new().cost_matrix(&graph);
            if matrix.has_negative_diagonal() {
                report_negative_cycle(&mut out)?;
            } else {
                io::write_matrix(&matrix, &mut out)?;
            }
        }
        Algorithm::Bellman => {
            single_source_output(&BellmanFord::new(), &graph, args.source, &mut out)?;
        }
        Algorithm::Dijkstra => {
            if graph.has_negative_edge() {
                return Err(Error::NegativeEdge);
            }
            single_source_output(&Dijkstra::new(), &graph, args.source, &mut out)?;
        }
        Algorithm::Johnson => match Johnson::new().cost_matrix(&graph) {
            Ok(matrix) => io::write_matrix(&matrix, &mut out)?,
            Err(Error::NegativeCycle) => report_negative_cycle(&mut out)?,
            Err(err) => return Err(err),
        },
    }

    out.flush()?;
    Ok(())
}

/// Runs a single-source engine either once (--source) or from every
/// vertex to assemble an all-pairs matrix, writing the result.
fn single_source_output<A, Out>(
    algorithm: &A,
    graph: &Digraph<i64>,
    source: Option<usize>,
    out: &mut Out,
) -> Result<()>
where
    A: ShortestPathAlgorithm<i64, Digraph<i64>>,
    Out: Write,
{
    log::debug!("running {}", algorithm.name());

    match source {
        Some(source) => match algorithm.compute_shortest_paths(graph, source) {
            Ok(result) => io::write_distances(&result.distances, out),
            Err(Error::NegativeCycle) => report_negative_cycle(out),
            Err(err) => Err(err),
        },
        None => match all_pairs(algorithm, graph) {
            Ok(matrix) => io::write_matrix(&matrix, out),
            Err(Error::NegativeCycle) => report_negative_cycle(out),
            Err(err) => Err(err),
        },
    }
}

/// Assembles an all-pairs matrix from per-source runs
fn all_pairs<A>(algorithm: &A, graph: &Digraph<i64>) -> Result<CostMatrix<i64>>
where
    A: ShortestPathAlgorithm<i64, Digraph<i64>>,
{
    let n = graph.vertex_count();
    let mut rows = Vec::with_capacity(n);

    for source in 0..n {
        rows.push(algorithm.compute_shortest_paths(graph, source)?.distances);
    }

    Ok(CostMatrix::from_rows(rows))
}

fn report_negative_cycle<Out: Write>(out: &mut Out) -> Result<()> {
    writeln!(out, "negative cycle")?;
    Ok(())
}
