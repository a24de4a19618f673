use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

// Få inn JSON-string fra payload (tillater både str og dict/list)
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    // Bruk Python sin json.dumps for å serialisere hvilket som helst Python-objekt
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| {
            PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}"))
        })
}

// Returnér som Python-objekt (dict/list) via Python's json.loads
fn json_to_py(py: Python<'_>, out: &str) -> PyResult<PyObject> {
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out,))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER — JSON inn → kjerne → JSON ut
// ──────────────────────────────────────────────────────────────────────────────

/// Tidslinjepunkter → { labels, counts, trend, total_sessions }.
#[pyfunction]
fn timeline_series_json(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, payload)?;
    let out = crate::timeline_series_json(&json_in).map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

/// Punktsammendrag for tooltip. Ugyldig indeks → ValueError.
#[pyfunction]
fn describe_point_json(
    py: Python<'_>,
    points: &PyAny,
    index: usize,
    cfg_json: Option<&str>,
) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, points)?;
    let out = crate::describe_point_json(&json_in, index, cfg_json)
        .map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

/// Spillogg → øktsammendrag via 4-timersregelen (nyeste først).
#[pyfunction]
fn sessions_from_games_json(
    py: Python<'_>,
    games: &PyAny,
    cfg_json: Option<&str>,
) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, games)?;
    let out = crate::sessions_from_games_json(&json_in, cfg_json)
        .map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn smashgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(timeline_series_json, m)?)?;
    m.add_function(wrap_pyfunction!(describe_point_json, m)?)?;
    m.add_function(wrap_pyfunction!(sessions_from_games_json, m)?)?;
    Ok(())
}
