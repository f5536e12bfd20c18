//! Edge-list text input and run reports.
//!
//! Input format: the vertex count, the edge count, then one
//! `<endpoint> <endpoint> <cost>` triple per edge. Values are whitespace
//! separated; line breaks only matter for error messages.
//!
//! ```text
//! 3
//! 2
//! 0 1 0.5
//! 2 1 0.25
//! ```

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::graph::error::{MstError, MstResult};
use crate::graph::traits::types::{Edge, MstSolution, OriginalGraph};

/// Whitespace tokens tagged with their 1-based line.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));
        Self {
            inner: Box::new(inner),
            last_line: 0,
        }
    }

    fn next_value<T: FromStr>(&mut self, what: &str) -> MstResult<(usize, T)> {
        let Some((line, token)) = self.inner.next() else {
            return Err(MstError::input(
                self.last_line,
                format!("unexpected end of input, expected {what}"),
            ));
        };
        self.last_line = line;
        let value = token
            .parse()
            .map_err(|_| MstError::input(line, format!("expected {what}, found '{token}'")))?;
        Ok((line, value))
    }

    fn rest(&mut self) -> Option<(usize, &'a str)> {
        self.inner.next()
    }
}

/// Parse a graph from its edge-list text.
///
/// Endpoints are stored in canonical order whatever the column order.
///
/// # Errors
/// Returns [`MstError::Input`] naming the offending line for missing or
/// unparsable values, endpoints `>= n`, negative or non-finite costs, and
/// data after the last edge.
pub fn parse_graph(text: &str) -> MstResult<OriginalGraph> {
    let mut tokens = Tokens::new(text);

    let (_, num_vertices) = tokens.next_value::<usize>("vertex count")?;
    let (_, num_edges) = tokens.next_value::<usize>("edge count")?;

    // Each triple takes at least six bytes, so the header cannot reserve more.
    let mut edges = Vec::with_capacity(num_edges.min(text.len() / 6));
    for i in 0..num_edges {
        let (line, a) = tokens.next_value::<usize>("edge endpoint")?;
        let (_, b) = tokens.next_value::<usize>("edge endpoint")?;
        let (_, cost) = tokens.next_value::<f64>("edge cost")?;

        if a >= num_vertices || b >= num_vertices {
            return Err(MstError::input(
                line,
                format!("edge {i} ({a}, {b}) has an endpoint >= vertex count {num_vertices}"),
            ));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(MstError::input(
                line,
                format!("edge {i} cost {cost} must be finite and non-negative"),
            ));
        }
        edges.push(Edge::new(a, b, cost));
    }

    if let Some((line, token)) = tokens.rest() {
        return Err(MstError::input(
            line,
            format!("unexpected '{token}' after {num_edges} edges"),
        ));
    }

    OriginalGraph::new(num_vertices, edges)
}

impl FromStr for OriginalGraph {
    type Err = MstError;

    fn from_str(s: &str) -> MstResult<Self> {
        parse_graph(s)
    }
}

/// Read and parse a graph file.
pub fn read_graph(path: &Path) -> MstResult<OriginalGraph> {
    let text = fs::read_to_string(path).map_err(|e| MstError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_graph(&text)
}

/// One run's report.
#[derive(Debug, Clone)]
pub struct RunReport<'a> {
    /// Input file name, echoed verbatim.
    pub input_name: &'a str,
    pub graph: &'a OriginalGraph,
    pub solution: &'a MstSolution,
    pub elapsed: Duration,
    /// List every accepted edge after the summary.
    pub show_edges: bool,
}

/// Render a report block.
pub fn format_report(report: &RunReport<'_>) -> String {
    let solution = report.solution;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "*** Input file: {}", report.input_name);
    let _ = writeln!(out, "*** Total MST cost: {:.6}", solution.total_cost);
    let _ = writeln!(out, "Total time: {:.6}", report.elapsed.as_secs_f64());
    let _ = writeln!(out, "Number of rounds: {}", solution.rounds);
    let _ = writeln!(out, "SolutionSize: {}", solution.len());

    if report.show_edges {
        let _ = writeln!(out, "*** MST formed by {} edges", solution.len());
        for edge in solution.tree_edges(report.graph) {
            let _ = writeln!(out, "Edge {} - {} = {:.6}", edge.v, edge.u, edge.cost);
        }
    }
    out
}

/// Append a report block to `path`, creating the file if needed.
pub fn append_report(path: &Path, report: &RunReport<'_>) -> MstResult<()> {
    let io_err = |e: std::io::Error| MstError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(format_report(report).as_bytes())
        .map_err(io_err)
}
