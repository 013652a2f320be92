use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

#[pyfunction]
fn show_training_info(
    action: u32,
    training_type: &str,
    duration: f64,
    weight: f64,
    height: f64,
    length_pool: u32,
    count_pool: u32,
) -> String {
    crate::report::show_training_info(
        action,
        training_type,
        duration,
        weight,
        height,
        length_pool,
        count_pool,
    )
}

#[pyfunction]
fn training_info_json(json_str: &str) -> PyResult<String> {
    crate::training_info_json(json_str).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn ftracker_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(show_training_info, m)?)?;
    m.add_function(wrap_pyfunction!(training_info_json, m)?)?;
    Ok(())
}
