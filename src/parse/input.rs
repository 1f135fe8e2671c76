use std::io::Read;
use std::path::PathBuf;

use log::debug;

use super::{fields, reader_builder, InputParseError, Result};

/// Run parameters read from the input file.
/// * __`states_file`__ - Path to the single-particle states file.
/// * __`n_particles`__ - Number of particles.
/// * __`max_broken_pairs`__ - Maximum number of broken pairs in a determinant.
/// * __`g`__ - Pairing strength.
/// * __`output_path`__ - Folder to store the output files.
#[derive(Debug, Clone, PartialEq)]
pub struct InputParams {
    pub states_file: PathBuf,
    pub n_particles: usize,
    pub max_broken_pairs: usize,
    pub g: f64,
    pub output_path: PathBuf,
}

const N_VALUES: usize = 5;

/// Parse the input file.
/// # Format
/// Five values, one per line, in order: states file, number of particles,
/// maximum number of broken pairs, $g$, output folder. Lines starting with
/// `#` are ignored. Only the first column of a line is read. Lines after the
/// fifth value are ignored.
/// ```rust
/// use pairing::parse::input::parse_input;
/// let input = "# states\nsps.dat\n4\n# truncation\n0\n0.5\nout\n";
/// let params = parse_input(input.as_bytes()).unwrap();
/// assert_eq!(params.n_particles, 4);
/// assert_eq!(params.g, 0.5);
/// ```
pub fn parse_input<R: Read>(rdr: R) -> Result<InputParams> {
    let mut values: Vec<String> = Vec::with_capacity(N_VALUES);
    let mut reader = reader_builder().from_reader(rdr);
    for result in reader.records() {
        let rec = result?;
        let cols = fields(&rec);
        if let Some(v) = cols.first() {
            values.push(v.to_string());
        }
        if values.len() == N_VALUES {
            break;
        }
    }
    if values.len() < N_VALUES {
        return Err(InputParseError::new(format!(
            "Bad input, expected {} values got {}.",
            N_VALUES,
            values.len()
        )));
    }
    let params = InputParams {
        states_file: PathBuf::from(&values[0]),
        n_particles: values[1].parse::<usize>()?,
        max_broken_pairs: values[2].parse::<usize>()?,
        g: values[3].parse::<f64>()?,
        output_path: PathBuf::from(&values[4]),
    };
    debug!("Input parameters: {:?}", params);
    Ok(params)
}
