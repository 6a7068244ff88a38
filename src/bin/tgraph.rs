//! CLI entry point for the `tgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use textgraph::cli::commands;
use textgraph::{GraphError, GraphFormat};

#[derive(Parser)]
#[command(
    name = "tgraph",
    about = "tgraph: inspect and edit plain-text graph files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
    },
    /// Print a graph in canonical set notation
    Show {
        /// Path to the graph file
        file: PathBuf,
        /// Input format: sets or pairs
        #[arg(long, default_value = "sets")]
        input: String,
    },
    /// Display counts and the graph type
    Info {
        /// Path to the graph file
        file: PathBuf,
        /// Input format: sets or pairs
        #[arg(long, default_value = "sets")]
        input: String,
    },
    /// Rewrite a graph file in set notation
    Convert {
        /// Path to the source file
        input_file: PathBuf,
        /// Path to the set-notation file to write
        output_file: PathBuf,
        /// Input format: sets or pairs
        #[arg(long, default_value = "pairs")]
        input: String,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        id: i32,
    },
    /// Add an edge, adding missing endpoints too
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// First (origin) vertex ID
        a: i32,
        /// Second (destination) vertex ID
        b: i32,
        /// Make the edge directed
        #[arg(long)]
        directed: bool,
    },
    /// Remove the vertex at an index and every edge touching it
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Position of the vertex
        index: usize,
    },
    /// Remove the edge at an index
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Position of the edge
        index: usize,
    },
    /// Show a vertex and its edges
    Get {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex ID
        id: i32,
        /// Input format: sets or pairs
        #[arg(long, default_value = "sets")]
        input: String,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the graph file
        file: PathBuf,
        /// Input format: sets or pairs
        #[arg(long, default_value = "sets")]
        input: String,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn parse_input(name: &str) -> GraphFormat {
    GraphFormat::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown input format: {} (expected sets or pairs)", name);
        process::exit(5);
    })
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Show { file, input } => commands::cmd_show(&file, parse_input(&input)),
        Commands::Info { file, input } => commands::cmd_info(&file, parse_input(&input), json),
        Commands::Convert {
            input_file,
            output_file,
            input,
        } => commands::cmd_convert(&input_file, parse_input(&input), &output_file),
        Commands::AddVertex { file, id } => commands::cmd_add_vertex(&file, id, json),
        Commands::AddEdge {
            file,
            a,
            b,
            directed,
        } => commands::cmd_add_edge(&file, a, b, directed, json),
        Commands::RemoveVertex { file, index } => commands::cmd_remove_vertex(&file, index, json),
        Commands::RemoveEdge { file, index } => commands::cmd_remove_edge(&file, index, json),
        Commands::Get { file, id, input } => {
            commands::cmd_get(&file, parse_input(&input), id, json)
        }
        Commands::Export {
            file,
            input,
            pretty,
        } => commands::cmd_export(&file, parse_input(&input), pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) | GraphError::FileNotFound { .. } | GraphError::FileAccess { .. } => 1,
            GraphError::MalformedGraphFile { .. }
            | GraphError::Parse(_)
            | GraphError::InvalidInteger(_)
            | GraphError::UnexpectedEndOfInput => 2,
            GraphError::IndexOutOfRange { .. } => 3,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
