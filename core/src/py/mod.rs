// Python-bindinger (feature "python"). Samme navn og default-steg som det
// gamle skriptet, slik at eksisterende kallere kan bytte direkte.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::WozError;
use crate::models::Segment;
use crate::ramp::DEFAULT_STEP_MIN;

fn to_py_err(e: WozError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn as_pairs(segs: Vec<Segment>) -> Vec<(f64, f64)> {
    segs.into_iter().map(|s| (s.duration_min, s.power_pct)).collect()
}

#[pyfunction]
fn extract_numbers(s: &str) -> PyResult<Vec<u64>> {
    crate::numbers::extract_numbers(s).map_err(to_py_err)
}

#[pyfunction]
fn detect_type(line: &str) -> &'static str {
    crate::classify::detect_type(line).as_str()
}

#[pyfunction]
#[pyo3(signature = (ramp, time_per_unit = DEFAULT_STEP_MIN))]
fn convert_ramp_to_mrc(ramp: &str, time_per_unit: f64) -> PyResult<Vec<(f64, f64)>> {
    crate::ramp::convert_ramp_to_mrc(ramp, time_per_unit)
        .map(as_pairs)
        .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (steady, time_per_unit = DEFAULT_STEP_MIN))]
fn convert_steady_to_mrc(steady: &str, time_per_unit: f64) -> PyResult<Vec<(f64, f64)>> {
    crate::steady::convert_steady_to_mrc(steady, time_per_unit)
        .map(as_pairs)
        .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (name, woz_data, time_per_unit = DEFAULT_STEP_MIN))]
fn construct(name: &str, woz_data: Vec<String>, time_per_unit: f64) -> PyResult<Vec<String>> {
    crate::course::construct(name, &woz_data, time_per_unit).map_err(to_py_err)
}

#[pymodule]
fn woz_mrc_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_numbers, m)?)?;
    m.add_function(wrap_pyfunction!(detect_type, m)?)?;
    m.add_function(wrap_pyfunction!(convert_ramp_to_mrc, m)?)?;
    m.add_function(wrap_pyfunction!(convert_steady_to_mrc, m)?)?;
    m.add_function(wrap_pyfunction!(construct, m)?)?;
    Ok(())
}
