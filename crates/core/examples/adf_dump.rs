//! Angular distribution function from a LAMMPS-style dump file.
//!
//! Reads one configuration frame, computes the ADF, and prints the
//! histogram as an angle/density table ready for plotting.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example adf_dump -- config.lammpstrj 3.5 90
//! ```

use adf_core::cell_list::compute_adf_cell_list;
use adf_core::dump::read_lammps_dump;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <dump-file> <r-max> <num-bins>", args[0]);
        std::process::exit(1);
    }

    let r_max: f64 = args[2].parse().unwrap_or_else(|e| {
        eprintln!("Invalid cutoff radius '{}': {}", args[2], e);
        std::process::exit(1);
    });
    let num_bins: usize = args[3].parse().unwrap_or_else(|e| {
        eprintln!("Invalid bin count '{}': {}", args[3], e);
        std::process::exit(1);
    });
    if r_max <= 0.0 {
        eprintln!("Cutoff radius must be positive");
        std::process::exit(1);
    }
    if num_bins == 0 {
        eprintln!("Bin count must be at least 1");
        std::process::exit(1);
    }

    let frame = read_lammps_dump(&args[1]).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let edges = frame.box_size.edges();
    println!("Angular Distribution Function");
    println!("=============================");
    println!("File: {}", args[1]);
    println!("Particles: {}", frame.positions.len());
    println!("Box: {:.4} x {:.4} x {:.4}", edges[0], edges[1], edges[2]);
    println!("Cutoff: {:.4} (half smallest edge: {:.4})", r_max, frame.box_size.max_cutoff());
    if r_max > frame.box_size.max_cutoff() {
        eprintln!("Warning: cutoff exceeds half the smallest box edge; nearest images may be missed");
    }
    println!();

    let result = compute_adf_cell_list(&frame.positions, &frame.box_size, r_max, num_bins)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });

    if result.total_count == 0 {
        println!("No angles found within the cutoff radius.");
    }

    println!("{:>10}  {:>14}", "theta_deg", "density");
    for (edge, value) in result.theta_edges.iter().zip(&result.adf) {
        println!("{:>10.3}  {:>14.8}", edge, value);
    }
}
