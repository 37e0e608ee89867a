//! Sample analysis example: analyze the built-in circuit and print results.

use circuitpath::prelude::*;

fn main() -> anyhow::Result<()> {
    let graph = circuitpath::sample_circuit();
    let report = CircuitPathCore::analyze(&graph, AnalysisOptions::default())?;

    println!("Circuit: {}", report.circuit);
    match &report.path {
        Some(path) => println!("Hamiltonian path: {}", path.join(" -> ")),
        None => println!("No Hamiltonian path"),
    }
    match (&report.cycle, &report.cycle_efficiency) {
        (Some(cycle), Some(efficiency)) => {
            println!("Hamiltonian cycle: {}", cycle.join(" -> "));
            println!(
                "Total resistance: {:.2} ohm, efficiency {:.4} ({})",
                efficiency.total_weight, efficiency.efficiency, efficiency.tier
            );
        }
        _ => println!("No Hamiltonian cycle"),
    }

    println!("\n{}", report.to_json_pretty()?);
    Ok(())
}
