//! Textual graph input and cost output.
//!
//! Graph files carry a `G <n> <m>` header followed by one `E <u> <v> <w>`
//! line per edge; weights may be negative. On output, unreachable
//! distances serialize as the token `inf` -- the in-memory `None` never
//! maps to a numeric stand-in.

use crate::graph::{Digraph, Graph};
use crate::{CostMatrix, Error, Result};
use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::io::{BufRead, Write};

/// Reads a digraph from the `G`/`E` text format.
///
/// Edge lines referencing a vertex outside `0..n` are skipped with a
/// warning; the rest of the graph is kept. A malformed header or edge
/// line aborts the parse.
pub fn read_digraph<R: BufRead>(reader: R) -> Result<Digraph<i64>> {
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(Error::InvalidFormat("missing G header line".into())),
        }
    };

    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 || fields[0] != "G" {
        return Err(Error::InvalidFormat(format!(
            "expected header 'G <n> <m>', got '{}'",
            header.trim()
        )));
    }
    let n: usize = parse_field(fields[1], &header)?;
    let declared_edges: usize = parse_field(fields[2], &header)?;

    let mut graph = Digraph::new(n);

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 || fields[0] != "E" {
            return Err(Error::InvalidFormat(format!(
                "expected edge line 'E <u> <v> <w>', got '{}'",
                line.trim()
            )));
        }

        let u: usize = parse_field(fields[1], &line)?;
        let v: usize = parse_field(fields[2], &line)?;
        let weight: i64 = parse_field(fields[3], &line)?;

        if let Err(err) = graph.connect(u, v, weight) {
            log::warn!("skipping edge {} -> {} (weight {}): {}", u, v, weight, err);
        }
    }

    if graph.edge_count() != declared_edges {
        log::warn!(
            "header declared {} edges, {} inserted",
            declared_edges,
            graph.edge_count()
        );
    }

    Ok(graph)
}

fn parse_field<T: std::str::FromStr>(field: &str, line: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| Error::InvalidFormat(format!("bad value '{}' in '{}'", field, line.trim())))
}

/// Writes one distance value, `inf` for unreachable
fn write_value<W, Out>(value: Option<W>, out: &mut Out) -> Result<()>
where
    W: PrimInt + Signed + Debug + Display,
    Out: Write,
{
    match value {
        Some(cost) => write!(out, "{}", cost)?,
        None => write!(out, "inf")?,
    }
    Ok(())
}

/// Writes a single distance row, space-separated, `inf` for unreachable
pub fn write_distances<W, Out>(distances: &[Option<W>], out: &mut Out) -> Result<()>
where
    W: PrimInt + Signed + Debug + Display,
    Out: Write,
{
    for (j, value) in distances.iter().enumerate() {
        if j > 0 {
            write!(out, " ")?;
        }
        write_value(*value, out)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Writes the vertex count followed by the n rows of the matrix
pub fn write_matrix<W, Out>(matrix: &CostMatrix<W>, out: &mut Out) -> Result<()>
where
    W: PrimInt + Signed + Debug + Display,
    Out: Write,
{
    writeln!(out, "{}", matrix.n())?;
    for i in 0..matrix.n() {
        write_distances(matrix.row(i), out)?;
    }
    Ok(())
}
