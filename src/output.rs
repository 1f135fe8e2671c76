use derive_more::{Constructor, Error};
use log::info;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::eigen::{condense_eigenvalues, CONDENSE_TOLERANCE};
use crate::enumerate::Basis;
use crate::hamiltonian::HamiltonianMatrix;
use crate::SingleParticleState;

/// Writes all the output files of a run in `dir`.
/// # Arguments
/// * __`dir`__ - Output folder. Created with its parents if missing.
/// * __`singles`__ - The single-particle states.
/// * __`n_particles`__ - The number of particles.
/// * __`basis`__ - The many-body basis.
/// * __`h`__ - The Hamiltonian matrix.
/// * __`eigenvalues`__ - The sorted eigenvalues.
/// # Files
/// * __`sps.txt`__ - Single-particle states.
/// * __`nps.txt`__ - $N$-particle states.
/// * __`H.txt`__ - Hamiltonian matrix.
/// * __`eigen.txt`__ - Eigenvalues.
/// * __`eigen_less.txt`__ - Eigenvalues without the degenerate copies.
pub fn write_output(
    dir: &Path,
    singles: &[SingleParticleState],
    n_particles: usize,
    basis: &Basis,
    h: &HamiltonianMatrix,
    eigenvalues: &[f64],
) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|err| {
        OutputError::new(format!("Error creating folder {}: {}", dir.display(), err))
    })?;

    write_file(dir, "sps.txt", |out| {
        writeln!(out, "# 1-particle states")?;
        for s in singles.iter() {
            writeln!(out, "{}", s)?;
        }
        Ok(())
    })?;

    write_file(dir, "nps.txt", |out| {
        writeln!(out, "# {}-particle states", n_particles)?;
        for s in basis.iter() {
            writeln!(out, "{}", s)?;
        }
        Ok(())
    })?;

    write_file(dir, "H.txt", |out| {
        writeln!(out, "# Hamiltonian")?;
        write!(out, "{}", h)
    })?;

    write_file(dir, "eigen.txt", |out| {
        writeln!(out, "# eigenvalues")?;
        write_values(out, eigenvalues)
    })?;

    write_file(dir, "eigen_less.txt", |out| {
        writeln!(out, "# eigenvalues")?;
        write_values(out, &condense_eigenvalues(eigenvalues, CONDENSE_TOLERANCE))
    })?;

    info!("Wrote output files to {}", dir.display());
    Ok(())
}

fn write_values(out: &mut dyn Write, values: &[f64]) -> std::io::Result<()> {
    for v in values.iter() {
        writeln!(out, "{:>12.6}", v)?;
    }
    Ok(())
}

fn write_file<F>(dir: &Path, name: &str, body: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let fp = dir.join(name);
    let err = |e: std::io::Error| OutputError::new(format!("Error writing file {}: {}", fp.display(), e));
    let file = File::create(&fp).map_err(err)?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(err)?;
    out.flush().map_err(err)?;
    Ok(())
}

/// Error while writing the output files.
#[derive(Debug, Clone, Error, Constructor)]
pub struct OutputError {
    pub details: String,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Output error: {}", self.details)
    }
}
