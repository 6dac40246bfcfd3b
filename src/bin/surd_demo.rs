//! SURD Demo: Canonical Causal Structures
//!
//! Runs the decomposition on the three benchmark systems with known
//! ground truth and prints the resulting R/U/S/leak tables:
//!
//! 1. Duplicated input  → redundant causality
//! 2. Independent input → unique causality
//! 3. XOR input         → synergistic causality

use std::collections::HashMap;

use causal_surd::{decompose_from_data, synthetic, Combination, Decomposition};

const N_SAMPLES: usize = 10_000;
const LAG: usize = 1;
const SEED: u64 = 42;

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  SURD: Synergistic-Unique-Redundant Decomposition");
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("Parameters: n = {N_SAMPLES}, lag = {LAG}, bins = [2, 2, 2]\n");

    let systems: [(&str, fn(usize, usize, u64) -> ndarray::Array2<f64>); 3] = [
        ("Duplicated input (expect Redundant ≈ 1 bit)", synthetic::duplicated_input),
        ("Independent input (expect Unique[0] ≈ 1 bit)", synthetic::independent_inputs),
        ("XOR input (expect Synergistic ≈ 1 bit)", synthetic::xor_system),
    ];

    for (name, generator) in systems {
        println!("───────────────────────────────────────────────────────────────");
        println!("  {name}");
        println!("───────────────────────────────────────────────────────────────");

        let data = generator(N_SAMPLES, LAG, SEED);
        let result = match decompose_from_data(&data, &[2, 2, 2]) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("  decomposition failed: {e}");
                continue;
            }
        };

        print_result(&result);
        println!();
    }
}

fn print_result(result: &Decomposition) {
    print_map("Redundant", &result.redundant);
    print_map("Unique", &result.unique);
    print_map("Synergistic", &result.synergistic);
    print_map("Mutual information", &result.mutual_info);
    println!("  Info leak: {:.6}", result.info_leak);
}

fn print_map(label: &str, map: &HashMap<Combination, f64>) {
    println!("  {label}:");
    let mut entries: Vec<(&Combination, &f64)> = map.iter().collect();
    entries.sort_by_key(|(c, _)| (c.len(), (*c).clone()));
    for (comb, value) in entries {
        println!("    {{{comb}}}: {value:.6} bits");
    }
}
