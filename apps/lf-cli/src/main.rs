use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use lf_analysis::AnalyzerConfig;
use lf_app::{load_topology, render_text, run_analysis, sample_topology, AppResult};
use lf_graph::{Tier, Topology};
use lf_solver::SolverConfig;

#[derive(Parser)]
#[command(name = "lf-cli")]
#[command(about = "LogiFlow CLI - Capacitated distribution network analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate topology file syntax and structure
    Validate {
        /// Path to the topology JSON/YAML file
        topology_path: PathBuf,
    },
    /// Solve the network and print the full analysis report
    Analyze {
        /// Path to the topology JSON/YAML file
        topology_path: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Capacity at or below which a route is reported as low-capacity
        #[arg(long, default_value_t = 10.0)]
        low_capacity: f64,
        /// Saturated routes below this capacity are reported as bottlenecks
        #[arg(long, default_value_t = 20.0)]
        saturation: f64,
        /// How many low-capacity routes and bottom destinations to list
        #[arg(long, default_value_t = 3)]
        top_n: usize,
        /// Recommended capacity multiplier for saturated bottlenecks
        #[arg(long, default_value_t = 1.5)]
        recommend_factor: f64,
    },
    /// Run the analysis on the bundled sample network
    Demo {
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { topology_path } => cmd_validate(&topology_path),
        Commands::Analyze {
            topology_path,
            json,
            low_capacity,
            saturation,
            top_n,
            recommend_factor,
        } => {
            let analyzer = AnalyzerConfig {
                low_capacity_threshold: low_capacity,
                saturation_threshold: saturation,
                top_n,
                recommend_factor,
            };
            let topology = load_topology(&topology_path)?;
            cmd_analyze(&topology, &analyzer, json)
        }
        Commands::Demo { json } => cmd_analyze(&sample_topology(), &AnalyzerConfig::default(), json),
    }
}

fn cmd_validate(topology_path: &Path) -> AppResult<()> {
    println!("Validating topology: {}", topology_path.display());
    let topology = load_topology(topology_path)?;
    let graph = topology.build()?;
    println!("✓ Topology is valid");
    println!(
        "  {} origins, {} relays, {} destinations, {} routes",
        graph.nodes_in_tier(Tier::Origin).count(),
        graph.nodes_in_tier(Tier::Relay).count(),
        graph.nodes_in_tier(Tier::Destination).count(),
        graph.edges().iter().filter(|e| e.is_bounded()).count()
    );
    Ok(())
}

fn cmd_analyze(topology: &Topology, analyzer: &AnalyzerConfig, json: bool) -> AppResult<()> {
    let report = run_analysis(topology, Some(SolverConfig::default()), analyzer)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
