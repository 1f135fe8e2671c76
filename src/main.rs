use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::fs::File;
use std::io::Read;
use std::process::ExitCode;

use pairing::eigen::diagonalize;
use pairing::output::write_output;
use pairing::parse::input::parse_input;
use pairing::parse::states::parse_states_file;
use pairing::{build_basis, HamiltonianMatrix, SysParams};

/// Usage: `pairing < input_file` or `pairing input_file`.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let input: Box<dyn Read> = match std::env::args().nth(1) {
        Some(fp) => Box::new(File::open(&fp).map_err(|e| format!("Error opening file {}: {}", fp, e))?),
        None => Box::new(std::io::stdin()),
    };
    let params = parse_input(input)?;
    let singles = parse_states_file(&params.states_file)?;

    let sys = SysParams::new(&singles, params.n_particles, params.max_broken_pairs, params.g);
    sys.log_parameters();

    let basis = build_basis(&sys)?;
    println!("{} Slater determinants", basis.len());

    let progress = ProgressBar::new(basis.len() as u64);
    progress.set_prefix("Hamiltonian rows: ");
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {prefix} {bar:40.cyan/blue} {pos:>7}/{len:7}")?
            .progress_chars("##-"),
    );
    let h = HamiltonianMatrix::from_basis_with_progress(&basis, &sys, &progress);
    progress.finish();

    let eigenvalues = diagonalize(&h)?;
    info!("Ground state energy: {:.6}", eigenvalues[0]);

    write_output(&params.output_path, &singles, sys.n_particles, &basis, &h, &eigenvalues)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
