//! LAMMPS-style text dump reader.
//!
//! Reads a single configuration frame: `ITEM: TIMESTEP`,
//! `ITEM: NUMBER OF ATOMS`, `ITEM: BOX BOUNDS` with one `lo hi` pair
//! per axis, then `ITEM: ATOMS` records whose x/y/z columns are located
//! by name in the header. Box edge lengths are the upper minus the
//! lower bound per axis.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::pbc::BoxSize;

/// One parsed configuration frame.
#[derive(Debug, Clone)]
pub struct DumpFrame {
    /// Timestep from the `ITEM: TIMESTEP` header, if present.
    pub timestep: Option<i64>,
    /// Particle positions in file order.
    pub positions: Vec<[f64; 3]>,
    /// Periodic cell derived from the box bounds.
    pub box_size: BoxSize,
}

/// Read the first frame of a LAMMPS-style dump file.
pub fn read_lammps_dump<P: AsRef<Path>>(path: P) -> Result<DumpFrame, String> {
    let file =
        File::open(path.as_ref()).map_err(|e| format!("Failed to open dump file: {}", e))?;
    parse_dump(BufReader::new(file))
}

/// Parse a single dump frame from any buffered reader.
pub fn parse_dump<R: BufRead>(reader: R) -> Result<DumpFrame, String> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read dump line {}: {}", idx + 1, e))?;
        lines.push(line);
    }

    let mut timestep: Option<i64> = None;
    let mut n_atoms: Option<usize> = None;
    let mut bounds: Option<([f64; 3], [f64; 3])> = None;
    let mut positions: Option<Vec<[f64; 3]>> = None;

    let mut cursor = 0usize;
    while cursor < lines.len() {
        let line = lines[cursor].trim();
        cursor += 1;

        let Some(section) = line.strip_prefix("ITEM:") else {
            continue;
        };
        let section = section.trim();

        if section == "TIMESTEP" {
            let (value, next) = take_line(&lines, cursor, "timestep")?;
            timestep = Some(value.trim().parse::<i64>().map_err(|e| {
                format!("Failed to parse timestep '{}' on line {}: {}", value.trim(), cursor + 1, e)
            })?);
            cursor = next;
        } else if section == "NUMBER OF ATOMS" {
            let (value, next) = take_line(&lines, cursor, "atom count")?;
            n_atoms = Some(value.trim().parse::<usize>().map_err(|e| {
                format!(
                    "Failed to parse atom count '{}' on line {}: {}",
                    value.trim(),
                    cursor + 1,
                    e
                )
            })?);
            cursor = next;
        } else if section.starts_with("BOX BOUNDS") {
            let mut lo = [0.0f64; 3];
            let mut hi = [0.0f64; 3];
            for axis in 0..3 {
                let (value, next) = take_line(&lines, cursor, "box bounds")?;
                let fields: Vec<&str> = value.split_whitespace().collect();
                if fields.len() < 2 {
                    return Err(format!(
                        "Box bounds line {} has {} fields, expected at least 2 (lo hi)",
                        cursor + 1,
                        fields.len()
                    ));
                }
                lo[axis] = parse_field(fields[0], cursor + 1)?;
                hi[axis] = parse_field(fields[1], cursor + 1)?;
                cursor = next;
            }
            bounds = Some((lo, hi));
        } else if section.starts_with("ATOMS") {
            let count = n_atoms
                .ok_or_else(|| "Dump file is missing the 'ITEM: NUMBER OF ATOMS' header".to_string())?;
            let columns: Vec<&str> = section["ATOMS".len()..].split_whitespace().collect();
            let x_col = find_column(&columns, "x")?;
            let y_col = find_column(&columns, "y")?;
            let z_col = find_column(&columns, "z")?;
            let needed = x_col.max(y_col).max(z_col) + 1;

            let mut coords = Vec::with_capacity(count);
            for _ in 0..count {
                let (value, next) = take_line(&lines, cursor, "atom record")?;
                let fields: Vec<&str> = value.split_whitespace().collect();
                if fields.len() < needed {
                    return Err(format!(
                        "Atom line {} has {} fields, expected at least {}",
                        cursor + 1,
                        fields.len(),
                        needed
                    ));
                }
                coords.push([
                    parse_field(fields[x_col], cursor + 1)?,
                    parse_field(fields[y_col], cursor + 1)?,
                    parse_field(fields[z_col], cursor + 1)?,
                ]);
                cursor = next;
            }
            positions = Some(coords);
            // One frame per invocation; ignore anything that follows.
            break;
        }
        // Unrecognized ITEM sections are skipped.
    }

    let (lo, hi) =
        bounds.ok_or_else(|| "Dump file is missing the 'ITEM: BOX BOUNDS' header".to_string())?;
    let positions =
        positions.ok_or_else(|| "Dump file is missing the 'ITEM: ATOMS' header".to_string())?;
    let box_size = BoxSize::from_bounds(lo, hi)
        .map_err(|e| format!("Invalid box bounds in dump file: {}", e))?;

    Ok(DumpFrame {
        timestep,
        positions,
        box_size,
    })
}

fn take_line<'a>(
    lines: &'a [String],
    cursor: usize,
    what: &str,
) -> Result<(&'a str, usize), String> {
    match lines.get(cursor) {
        Some(line) => Ok((line.as_str(), cursor + 1)),
        None => Err(format!("Unexpected end of dump file while reading {}", what)),
    }
}

fn parse_field(field: &str, line_no: usize) -> Result<f64, String> {
    field
        .parse::<f64>()
        .map_err(|e| format!("Failed to parse value '{}' on line {}: {}", field, line_no, e))
}

fn find_column(columns: &[&str], name: &str) -> Result<usize, String> {
    columns
        .iter()
        .position(|&c| c == name)
        .ok_or_else(|| format!("Dump ATOMS header does not name a '{}' column", name))
}
