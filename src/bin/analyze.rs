//! Litigation analysis binary.
//!
//! Reads a JSON request on stdin and writes the JSON analysis to stdout.
//!
//! Usage:
//!   cargo run --bin analyze -- nash < request.json
//!   cargo run --bin analyze -- settlement < request.json
//!
//! Options:
//!   --no-general     Disable the support-enumeration mixed solver
//!   --verbose        Enable debug logging

use std::env;
use std::io::Read;
use std::process::ExitCode;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use litigation_solver::game::SolverConfig;
use litigation_solver::request::{
    run_equilibrium, run_settlement, EquilibriumRequest, SettlementRequest,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let mut mode: Option<String> = None;
    let mut solver_config = SolverConfig::default();
    let mut level = LevelFilter::Info;

    for arg in &args[1..] {
        match arg.as_str() {
            "--no-general" => solver_config = solver_config.with_support_enumeration(false),
            "--verbose" | "-v" => level = LevelFilter::Debug,
            other if mode.is_none() => mode = Some(other.to_string()),
            other => {
                eprintln!("Unexpected argument: {}", other);
                return ExitCode::FAILURE;
            }
        }
    }

    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("logger init");

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", err);
        return ExitCode::FAILURE;
    }

    let output = match mode.as_deref() {
        Some("nash") => serde_json::from_str::<EquilibriumRequest>(&input)
            .map_err(|e| e.to_string())
            .and_then(|request| {
                run_equilibrium(&request, &solver_config).map_err(|e| e.to_string())
            })
            .and_then(|response| serde_json::to_string_pretty(&response).map_err(|e| e.to_string())),
        Some("settlement") => serde_json::from_str::<SettlementRequest>(&input)
            .map_err(|e| e.to_string())
            .and_then(|request| run_settlement(&request).map_err(|e| e.to_string()))
            .and_then(|analysis| serde_json::to_string_pretty(&analysis).map_err(|e| e.to_string())),
        _ => {
            eprintln!("Usage: analyze <nash|settlement> [--no-general] [--verbose]");
            return ExitCode::FAILURE;
        }
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
