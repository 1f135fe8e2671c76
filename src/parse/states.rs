use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::{fields, reader_builder, InputParseError, Result};
use crate::SingleParticleState;

/// Parse the single-particle states file.
/// # Arguments
/// * __`fp`__ - File path to the states file.
/// # Format
/// One state per line, two integer columns, $p$ then $\sigma$. The rest of a
/// line is ignored. Lines starting with `#` are ignored. The order of the
/// lines is the bit order.
pub fn parse_states_file(fp: &Path) -> Result<Vec<SingleParticleState>> {
    let file = File::open(fp).map_err(|err| {
        InputParseError::new(format!("Error opening file {}: {}", fp.display(), err))
    })?;
    parse_states(file)
}

/// Parse single-particle states from any reader. See [parse_states_file].
/// ```rust
/// use pairing::parse::states::parse_states;
/// let singles = parse_states("# p sigma\n1 1 # up\n1 -1\n".as_bytes()).unwrap();
/// assert_eq!(singles.len(), 2);
/// assert_eq!(singles[1].sigma, -1);
/// ```
pub fn parse_states<R: Read>(rdr: R) -> Result<Vec<SingleParticleState>> {
    let mut singles: Vec<SingleParticleState> = Vec::new();
    let mut reader = reader_builder().from_reader(rdr);
    for (k, result) in reader.records().enumerate() {
        let rec = result?;
        let cols = fields(&rec);
        if cols.is_empty() {
            continue;
        }
        // Should have at least 2 column.
        if cols.len() < 2 {
            return Err(InputParseError::new(format!(
                "Invalid number of elements on state {}, expected at least 2 got {}.",
                k,
                cols.len()
            )));
        }
        let p = cols[0].parse::<i32>()?;
        let sigma = cols[1].parse::<i32>()?;
        singles.push(SingleParticleState::new(p, sigma));
    }
    debug!("Read {} single particle states.", singles.len());
    Ok(singles)
}
