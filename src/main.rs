use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use spanr::graph::{BoruvkaOptions, RunReport, append_report, boruvka_mst, read_graph};

fn print_usage() {
    println!("usage: spanr <input-file> <output-file> [S|N]");
    println!("\t<input-file>  (required) graph description: vertex count, edge count, edges");
    println!("\t<output-file> (required) results are appended to this file");
    println!("\t<S|N>         list the tree edges in the results or not (default N)");
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let input_name = args[0].as_str();
    let output_path = PathBuf::from(&args[1]);
    let show_edges = args
        .get(2)
        .is_some_and(|flag| flag.starts_with('S') || flag.starts_with('s'));

    let graph = match read_graph(&PathBuf::from(input_name)) {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(1);
        }
    };
    println!(
        "read {}: {} vertices, {} edges",
        input_name,
        graph.num_vertices(),
        graph.num_edges()
    );

    let start = Instant::now();
    let result = boruvka_mst(&graph, &BoruvkaOptions::default());
    let elapsed = start.elapsed();

    let solution = match result {
        Ok(solution) => solution,
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(1);
        }
    };

    for stats in &solution.round_stats {
        println!(
            "round {}: fragments = {}  edges = {}  accepted = {}  zero-diff = {}  solution size = {}  solution cost = {:.6}",
            stats.round,
            stats.fragments,
            stats.bipartite_edges,
            stats.accepted,
            stats.zero_diff,
            stats.solution_size,
            stats.solution_cost
        );
    }
    println!("total MST cost: {:.6}", solution.total_cost);
    println!("total time: {:.6}", elapsed.as_secs_f64());

    let report = RunReport {
        input_name,
        graph: &graph,
        solution: &solution,
        elapsed,
        show_edges,
    };
    if let Err(error) = append_report(&output_path, &report) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}
