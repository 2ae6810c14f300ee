use shortest_paths::*;

use anyhow::{bail, Context};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Find the shortest road between two cities.
#[derive(StructOpt, Debug)]
struct Cli {
    /// Name of the start vertex
    start: Option<String>,

    /// Name of the end vertex
    end: Option<String>,

    /// Load the graph from a structured .npy edge array (fields `from`, `to`,
    /// `distance`) instead of the built-in road network
    #[structopt(long, parse(from_os_str))]
    input: Option<std::path::PathBuf>,

    /// File with one vertex name per line, in vertex index order
    #[structopt(long, parse(from_os_str))]
    names: Option<std::path::PathBuf>,

    /// Print all vertices and exit
    #[structopt(long)]
    list: bool,

    /// Write the all-pairs distance matrix to this .npy file. The array is
    /// flat: n*n f64 values in row-major order, entry i*n + j being the
    /// distance from vertex i to vertex j (inf if unreachable)
    #[structopt(long, parse(from_os_str))]
    matrix: Option<std::path::PathBuf>,
}

fn load_graph(args: &Cli) -> anyhow::Result<Graph> {
    let mut graph = match &args.input {
        Some(path) => load_npy_graph(path)
            .with_context(|| format!("Could not load graph from {}", path.display()))?,
        None => road_network(),
    };
    if let Some(path) = &args.names {
        load_names(&mut graph, path)
            .with_context(|| format!("Could not read vertex names from {}", path.display()))?;
    }
    Ok(graph)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "shortest_paths=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::from_args();
    let graph = load_graph(&args)?;

    if args.list {
        for (i, v) in graph.vertices().iter().enumerate() {
            println!("{:>4}  {}", i, v.name);
        }
        return Ok(());
    }

    if let Some(output_path) = &args.matrix {
        info!(vertices = graph.num_vertices(), "computing distance matrix");
        let matrix = distance_matrix_with_progress(&graph);

        println!("Saving output.. ");
        write_distance_matrix(output_path, matrix)
            .with_context(|| format!("Writing {} failed", output_path.display()))?;
        println!("Saving output succeeded");
        return Ok(());
    }

    let (start_name, end_name) = match (&args.start, &args.end) {
        (Some(start), Some(end)) => (start, end),
        _ => bail!("Please select both a start and an end vertex."),
    };
    let start = graph.vertex_idx(start_name)?;
    let end = graph.vertex_idx(end_name)?;

    if start == end {
        println!("Start and end are identical. Distance: 0");
        return Ok(());
    }

    let result = ShortestPathFinder::new(&graph).find_shortest_path(Some(start), Some(end));
    if !result.path_exists() {
        println!("No path found between {} and {}.", start_name, end_name);
        return Ok(());
    }

    println!(
        "{}  ({} km)",
        result.path_as_string(&graph),
        result.display_distance()
    );
    info!(
        hops = result.edges.len(),
        distance = result.total_distance,
        "path found"
    );
    Ok(())
}
