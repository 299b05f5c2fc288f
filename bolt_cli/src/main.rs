//! # Boltline CLI Application
//!
//! Terminal interface for fastener sizing calculations.
//!
//! Two ways to drive it:
//!
//! - Interactive (default): prompts with sensible defaults, prints a
//!   formatted report plus the wire JSON.
//! - `--json`: reads a `CalcRequest` from stdin and writes the
//!   `CalcResponse` to stdout, for scripting or a web shell.

use std::io::{self, BufRead, Read, Write};

use bolt_core::calculations::analysis::{self, AnalysisInput};
use bolt_core::calculations::design::{self, DesignInput, DesignOutcome, DEFAULT_SAFETY_FACTOR};
use bolt_core::materials::{MaterialSpec, PropertyClass};
use bolt_core::request::{CalcRequest, CalcResponse, Mode};
use bolt_core::units::Kilonewtons;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    if std::env::args().any(|arg| arg == "--json") {
        run_json();
        return;
    }

    println!("Boltline CLI - Fastener Sizing Calculator");
    println!("=========================================");
    println!();

    let mode = Mode::from_str_flexible(&prompt_line(
        "Mode: [a]nalysis (failure load) or [d]esign (pick a size) [a]: ",
    ))
    .unwrap_or_default();
    println!();

    match mode {
        Mode::Analysis => run_analysis(),
        Mode::Design => run_design(),
    }
}

/// Pipe mode: stdin request -> stdout response, errors to stderr as JSON.
fn run_json() {
    let mut body = String::new();
    if io::stdin().read_to_string(&mut body).is_err() {
        eprintln!("Error: could not read request from stdin");
        std::process::exit(1);
    }

    match CalcRequest::from_json(&body).and_then(|request| request.dispatch()) {
        Ok(response) => match response.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

fn run_analysis() {
    let diameter_mm = prompt_f64("Enter nominal diameter (mm) [12.0]: ", 12.0);
    let pitch_mm = prompt_f64("Enter thread pitch (mm) [1.75]: ", 1.75);
    let yield_mpa = prompt_f64("Enter yield strength (MPa) [400.0]: ", 400.0);

    let input = AnalysisInput {
        label: "CLI-Analysis".to_string(),
        nominal_diameter_mm: diameter_mm,
        pitch_mm,
        material: MaterialSpec::new(yield_mpa),
    };

    match analysis::calculate(&input) {
        Ok(result) => {
            let failure_kn: Kilonewtons = result.failure_load().into();

            println!();
            println!("═══════════════════════════════════════");
            println!("  FASTENER ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Thread:   {}", input.thread_spec());
            println!("  Yield:    {:.0} MPa", yield_mpa);
            println!();
            println!("Section:");
            println!("  Stress diameter: {:.4} mm", result.stress_diameter_mm);
            println!("  Stress area:     {:.2} mm²", result.stress_area_mm2);
            println!();
            println!("Result:");
            println!(
                "  Failure load: {:.2} N ({:.2} kN)",
                result.failure_load_rounded(),
                failure_kn.0
            );
            println!("═══════════════════════════════════════");

            print_wire_json(&CalcResponse::from_analysis(&result));
        }
        Err(e) => report_error(&e),
    }
}

fn run_design() {
    let load_n = prompt_f64("Enter required load (N) [20000.0]: ", 20000.0);

    println!();
    println!("Property classes:");
    for class in PropertyClass::ALL.iter() {
        println!(
            "  {:<5} ({:.0} MPa yield)",
            class.display_name(),
            class.yield_strength_mpa()
        );
    }
    let class = PropertyClass::from_str_flexible(&prompt_line("Select property class [8.8]: "))
        .unwrap_or_default();

    let safety_factor = prompt_f64(
        "Enter safety factor [1.5]: ",
        DEFAULT_SAFETY_FACTOR,
    );

    let input = DesignInput {
        label: "CLI-Design".to_string(),
        required_load_n: load_n,
        material: class.material(),
        safety_factor,
    };

    match design::calculate(&input) {
        Ok(outcome) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  REVERSE SIZING RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Required load: {:.0} N", input.required_load_n);
            println!(
                "  Material:      class {} ({:.0} MPa yield)",
                class,
                input.material.yield_strength_mpa
            );
            println!("  Safety factor: {:.2}", input.safety_factor);
            println!(
                "  Target:        {:.0} N factored",
                input.target_capacity_n()
            );
            println!();

            match &outcome {
                DesignOutcome::Selected(selection) => {
                    let capacity_kn: Kilonewtons = selection.capacity().into();
                    println!("Result: {}", status_icon(true));
                    println!("  Recommended size: {}", selection.label());
                    println!(
                        "  Capacity:         {:.0} N ({:.2} kN)",
                        selection.capacity_rounded_n(),
                        capacity_kn.0
                    );
                }
                DesignOutcome::NoFit => {
                    println!("Result: {}", status_icon(false));
                    println!("  No standard size carries this load.");
                    println!("  Try a higher strength material.");
                }
            }
            println!("═══════════════════════════════════════");

            print_wire_json(&CalcResponse::from_design(&outcome));
        }
        Err(e) => report_error(&e),
    }
}

fn print_wire_json(response: &CalcResponse) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = response.to_json_pretty() {
        println!("{}", json);
    }
}

fn report_error(e: &bolt_core::FastenerError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(&e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[NO FIT]"
    }
}
