//! Core library for adf-tools.
//!
//! Pure Rust implementation of the angular distribution function (ADF)
//! for periodic particle configurations. Provides minimum-image
//! displacement handling, direct and cell-list neighbor searches, angle
//! binning with normalization, and a LAMMPS-style dump reader.

pub mod adf;
pub mod cell_list;
pub mod dump;
pub mod pbc;
pub mod util;
