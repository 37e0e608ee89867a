//! CircuitPath CLI - Hamiltonian path and energy-efficiency analysis from the command line.

mod input;

use anyhow::Result;
use circuitpath::{
    compute_efficiency, sample_circuit, AnalysisOptions, AnalysisReport, CircuitGraph,
    CircuitPathCore, CircuitStats, EfficiencyReport, HamiltonianSearch, SearchOptions,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::process;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circuitpath")]
#[command(about = "Hamiltonian path and energy-efficiency analysis for electronic circuits", long_about = None)]
#[command(version)]
struct Cli {
    /// Log search progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a Hamiltonian path
    Path {
        #[command(flatten)]
        circuit: CircuitArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Find a Hamiltonian cycle
    Cycle {
        #[command(flatten)]
        circuit: CircuitArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Score the energy efficiency of a route (default: the Hamiltonian path)
    Efficiency {
        #[command(flatten)]
        circuit: CircuitArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Comma-separated component ids to score instead of the Hamiltonian path
        #[arg(long, value_name = "A,B,...")]
        route: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Report circuit properties
    Stats {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Run every analysis and print a full report
    Analyze {
        #[command(flatten)]
        circuit: CircuitArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct CircuitArgs {
    /// Start from the built-in sample circuit
    #[arg(long)]
    sample: bool,

    /// Circuit name
    #[arg(long, default_value = "Circuit")]
    name: String,

    /// Component to add (repeatable)
    #[arg(short = 'c', long = "component", value_name = "ID=KIND[@X,Y]")]
    components: Vec<String>,

    /// Connection to add, weight defaults to 1.0 (repeatable)
    #[arg(short = 'w', long = "connect", value_name = "A,B[,WEIGHT]")]
    connections: Vec<String>,
}

impl CircuitArgs {
    fn build(&self) -> Result<CircuitGraph> {
        let base = self.sample.then(sample_circuit);
        input::build_graph(base, &self.name, &self.components, &self.connections)
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Abort the search after this many milliseconds
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Exit with error code if no path or cycle is found
    #[arg(long)]
    require: bool,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        match self.time_limit_ms {
            Some(ms) => SearchOptions::default().with_time_limit(Duration::from_millis(ms)),
            None => SearchOptions::default(),
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Path {
            circuit,
            search,
            format,
        } => handle_path(&circuit, &search, format),
        Commands::Cycle {
            circuit,
            search,
            format,
        } => handle_cycle(&circuit, &search, format),
        Commands::Efficiency {
            circuit,
            search,
            route,
            format,
        } => handle_efficiency(&circuit, &search, route.as_deref(), format),
        Commands::Stats { circuit, format } => handle_stats(&circuit, format),
        Commands::Analyze {
            circuit,
            search,
            format,
        } => handle_analyze(&circuit, &search, format),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("circuitpath=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_path(circuit: &CircuitArgs, search: &SearchArgs, format: OutputFormat) -> Result<i32> {
    let graph = circuit.build()?;
    if graph.component_count() < 2 {
        eprintln!("Warning: the circuit needs at least 2 components");
        return Ok(0);
    }

    let started = Instant::now();
    let path = HamiltonianSearch::new(&graph)
        .with_options(search.options())
        .find_path()?;
    let elapsed = started.elapsed();
    let efficiency = path.as_ref().map(|p| compute_efficiency(&graph, p));

    match format {
        OutputFormat::Human => match (&path, &efficiency) {
            (Some(path), Some(efficiency)) => {
                println!("HAMILTONIAN PATH FOUND");
                println!("  Path:       {}", path.join(" -> "));
                println!("  Length:     {} components", path.len());
                println!("  Time:       {:.4} s", elapsed.as_secs_f64());
                println!("  Efficiency: {:.4}", efficiency.efficiency);
            }
            _ => {
                println!("NO HAMILTONIAN PATH");
                println!("  The circuit cannot be traversed visiting every component exactly once");
            }
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "circuit": graph.name(),
                "path": path,
                "efficiency": efficiency,
                "time_ms": elapsed.as_secs_f64() * 1000.0,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(exit_for(path.is_some(), search.require))
}

fn handle_cycle(circuit: &CircuitArgs, search: &SearchArgs, format: OutputFormat) -> Result<i32> {
    let graph = circuit.build()?;
    if graph.component_count() < 3 {
        eprintln!("Warning: the circuit needs at least 3 components for a cycle");
        return Ok(0);
    }

    let started = Instant::now();
    let cycle = HamiltonianSearch::new(&graph)
        .with_options(search.options())
        .find_cycle()?;
    let elapsed = started.elapsed();
    let efficiency = cycle.as_ref().map(|c| compute_efficiency(&graph, c));

    match format {
        OutputFormat::Human => match (&cycle, &efficiency) {
            (Some(cycle), Some(efficiency)) => {
                println!("HAMILTONIAN CYCLE FOUND");
                println!("  Cycle:      {}", cycle.join(" -> "));
                println!("  Length:     {} distinct components", cycle.len() - 1);
                println!("  Time:       {:.4} s", elapsed.as_secs_f64());
                println!("  Efficiency: {:.4}", efficiency.efficiency);
            }
            _ => {
                println!("NO HAMILTONIAN CYCLE");
                println!("  The first Hamiltonian path found (if any) does not close into a cycle");
            }
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "circuit": graph.name(),
                "cycle": cycle,
                "efficiency": efficiency,
                "time_ms": elapsed.as_secs_f64() * 1000.0,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(exit_for(cycle.is_some(), search.require))
}

fn handle_efficiency(
    circuit: &CircuitArgs,
    search: &SearchArgs,
    route: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    let graph = circuit.build()?;

    let route = match route {
        Some(text) => input::parse_route(text),
        None => {
            let path = HamiltonianSearch::new(&graph)
                .with_options(search.options())
                .find_path()?;
            match path {
                Some(path) => path,
                None => {
                    eprintln!("No Hamiltonian path to score; pass --route to score a custom route");
                    return Ok(exit_for(false, search.require));
                }
            }
        }
    };

    let report = compute_efficiency(&graph, &route);
    match format {
        OutputFormat::Human => {
            println!("ENERGY EFFICIENCY");
            println!("  Route:            {}", route.join(" -> "));
            print_efficiency(&report);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "circuit": graph.name(),
                "route": route,
                "efficiency": report,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(0)
}

fn handle_stats(circuit: &CircuitArgs, format: OutputFormat) -> Result<i32> {
    let graph = circuit.build()?;
    let stats = graph.stats();

    match format {
        OutputFormat::Human => {
            println!("CIRCUIT PROPERTIES: {}", graph.name());
            print_stats(&stats);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(0)
}

fn handle_analyze(circuit: &CircuitArgs, search: &SearchArgs, format: OutputFormat) -> Result<i32> {
    let graph = circuit.build()?;
    let options = AnalysisOptions {
        search: search.options(),
        ..AnalysisOptions::default()
    };
    let report = CircuitPathCore::analyze(&graph, options)?;

    match format {
        OutputFormat::Human => output_human(&report),
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }

    Ok(exit_for(report.has_path(), search.require))
}

fn exit_for(found: bool, require: bool) -> i32 {
    if require && !found {
        1
    } else {
        0
    }
}

fn output_human(report: &AnalysisReport) {
    println!("\nCircuit: {}", report.circuit);
    println!("{}", "─".repeat(60));

    match (&report.path, &report.path_efficiency) {
        (Some(path), Some(efficiency)) => {
            println!("\n  Hamiltonian path: {}", path.join(" -> "));
            print_efficiency(efficiency);
        }
        _ => println!("\n  Hamiltonian path: none"),
    }

    match (&report.cycle, &report.cycle_efficiency) {
        (Some(cycle), Some(efficiency)) => {
            println!("\n  Hamiltonian cycle: {}", cycle.join(" -> "));
            print_efficiency(efficiency);
        }
        _ => println!("\n  Hamiltonian cycle: none"),
    }

    if let Some(stats) = &report.stats {
        println!("\n  Properties:");
        print_stats(stats);
    }

    println!("\n  Search:");
    println!("    Steps:      {}", report.search.steps);
    println!("    Backtracks: {}", report.search.backtracks);
    println!("    Starts:     {}", report.search.starts_tried);
    println!("    Time:       {:.3} ms", report.search_time_ms);
}

fn print_efficiency(report: &EfficiencyReport) {
    println!("    Total resistance: {:.2} ohm", report.total_weight);
    println!("    Efficiency:       {:.4}", report.efficiency);
    println!("    Power loss:       {:.4}", report.power_loss);
    println!("    Tier:             {}", report.tier);
}

fn print_stats(stats: &CircuitStats) {
    println!("    Components:     {}", stats.component_count);
    println!("    Connections:    {}", stats.connection_count);
    println!("    Density:        {:.3}", stats.density);
    println!(
        "    Connected:      {}",
        if stats.is_connected { "yes" } else { "no" }
    );
    if let Some(diameter) = stats.diameter {
        println!("    Diameter:       {}", diameter);
    }
    println!("    Average degree: {:.2}", stats.average_degree);
    for (kind, count) in &stats.kind_counts {
        println!("    {:<15} {}", format!("{}:", kind), count);
    }
}
