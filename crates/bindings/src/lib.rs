//! Python bindings for the adf-core engine.
//!
//! Exposes the ADF computation and the dump reader as NumPy-friendly
//! functions; plotting and interactive validation stay on the Python
//! side.

use ndarray::Array2;
use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2, ToPyArray};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use adf_core::adf::{compute_adf, AdfResult};
use adf_core::cell_list::compute_adf_cell_list;
use adf_core::dump::read_lammps_dump;
use adf_core::pbc::BoxSize;

fn array2_to_positions(arr: &ndarray::ArrayView2<f64>) -> PyResult<Vec<[f64; 3]>> {
    if arr.shape()[1] != 3 {
        return Err(PyValueError::new_err(format!(
            "positions must have shape (N, 3), got (N, {})",
            arr.shape()[1]
        )));
    }
    let n = arr.shape()[0];
    let mut positions = Vec::with_capacity(n);
    for i in 0..n {
        positions.push([arr[[i, 0]], arr[[i, 1]], arr[[i, 2]]]);
    }
    Ok(positions)
}

fn extract_box(box_size: &PyReadonlyArray1<f64>) -> PyResult<BoxSize> {
    let arr = box_size.as_array();
    if arr.len() != 3 {
        return Err(PyValueError::new_err(format!(
            "box_size must have exactly 3 components, got {}",
            arr.len()
        )));
    }
    BoxSize::new([arr[0], arr[1], arr[2]]).map_err(PyValueError::new_err)
}

fn result_to_arrays<'py>(
    py: Python<'py>,
    result: AdfResult,
) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    (
        PyArray1::from_vec_bound(py, result.theta_edges),
        PyArray1::from_vec_bound(py, result.adf),
    )
}

/// Compute the angular distribution function with the direct engine.
#[pyfunction]
#[pyo3(name = "compute_adf", signature = (positions, box_size, r_max, num_bins))]
fn compute_adf_py<'py>(
    py: Python<'py>,
    positions: PyReadonlyArray2<'py, f64>,
    box_size: PyReadonlyArray1<'py, f64>,
    r_max: f64,
    num_bins: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let pos = array2_to_positions(&positions.as_array())?;
    let cell = extract_box(&box_size)?;

    let result = compute_adf(&pos, &cell, r_max, num_bins).map_err(PyValueError::new_err)?;
    Ok(result_to_arrays(py, result))
}

/// Compute the angular distribution function with the cell-list engine.
#[pyfunction]
#[pyo3(name = "compute_adf_cell_list", signature = (positions, box_size, r_max, num_bins))]
fn compute_adf_cell_list_py<'py>(
    py: Python<'py>,
    positions: PyReadonlyArray2<'py, f64>,
    box_size: PyReadonlyArray1<'py, f64>,
    r_max: f64,
    num_bins: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let pos = array2_to_positions(&positions.as_array())?;
    let cell = extract_box(&box_size)?;

    let result =
        compute_adf_cell_list(&pos, &cell, r_max, num_bins).map_err(PyValueError::new_err)?;
    Ok(result_to_arrays(py, result))
}

/// Read one frame of a LAMMPS-style dump file.
///
/// Returns `(positions, box_size)` as NumPy arrays of shape (N, 3) and (3,).
#[pyfunction]
#[pyo3(name = "read_lammps_dump", signature = (path))]
fn read_lammps_dump_py<'py>(
    py: Python<'py>,
    path: &str,
) -> PyResult<(Bound<'py, PyArray2<f64>>, Bound<'py, PyArray1<f64>>)> {
    let frame = read_lammps_dump(path).map_err(|e| {
        if e.starts_with("Failed to open") {
            PyIOError::new_err(e)
        } else {
            PyValueError::new_err(e)
        }
    })?;

    let n = frame.positions.len();
    let mut arr = Array2::<f64>::zeros((n, 3));
    for (i, pos) in frame.positions.iter().enumerate() {
        arr[[i, 0]] = pos[0];
        arr[[i, 1]] = pos[1];
        arr[[i, 2]] = pos[2];
    }

    let edges = frame.box_size.edges();
    Ok((
        arr.to_pyarray_bound(py),
        PyArray1::from_vec_bound(py, edges.to_vec()),
    ))
}

#[pymodule]
fn adf_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_adf_py, m)?)?;
    m.add_function(wrap_pyfunction!(compute_adf_cell_list_py, m)?)?;
    m.add_function(wrap_pyfunction!(read_lammps_dump_py, m)?)?;
    Ok(())
}
