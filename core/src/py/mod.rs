use chrono::Utc;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::achievements::AchievementDefinition;
use crate::analyzer;
use crate::angles;
use crate::config::EngineConfig;
use crate::engine::EngineContext;
use crate::models::{Point, Skeleton};
use crate::storage::PersistedState;

// ──────────────────────────────────────────────────────────────────────────────
// INPUT: JSON med sti-rapportering ved feil
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AnalyzeFrameIn {
    exercise: String,
    landmarks: Skeleton,
}

fn parse_skeleton(json_in: &str) -> PyResult<Skeleton> {
    let mut de = json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| {
        PyValueError::new_err(format!("parse error (landmarks) at {}: {}", e.path(), e))
    })
}

fn ids(list: &[&'static AchievementDefinition]) -> Vec<&'static str> {
    list.iter().map(|a| a.id).collect()
}

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// Funksjoner
// ──────────────────────────────────────────────────────────────────────────────

/// Vinkel ved `b` i grader (0..=180). Punktene gis som (x, y).
#[pyfunction]
fn calculate_angle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> u16 {
    angles::calculate_angle(
        Point::new(a.0, a.1),
        Point::new(b.0, b.1),
        Point::new(c.0, c.1),
    )
}

/// `{"exercise": "...", "landmarks": [...]}` → AnalysisResult som JSON.
#[pyfunction]
fn analyze_frame_json(json_in: &str) -> PyResult<String> {
    let mut de = json::Deserializer::from_str(json_in);
    let parsed: AnalyzeFrameIn = spte::deserialize(&mut de).map_err(|e| {
        PyValueError::new_err(format!("parse error (AnalyzeFrameIn) at {}: {}", e.path(), e))
    })?;
    let result = analyzer::analyze(&parsed.landmarks, &parsed.exercise).map_err(to_py_err)?;
    json::to_string(&result).map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// Engine-klasse (én tråd; Python-siden eier objektet)
// ──────────────────────────────────────────────────────────────────────────────

#[pyclass(unsendable)]
struct Engine {
    inner: EngineContext,
}

#[pymethods]
impl Engine {
    #[new]
    #[pyo3(signature = (state_json=None, config_json=None))]
    fn new(state_json: Option<&str>, config_json: Option<&str>) -> PyResult<Self> {
        let state = match state_json {
            Some(s) => PersistedState::from_json_str(s).map_err(to_py_err)?,
            None => PersistedState::default(),
        };
        let cfg = match config_json {
            Some(s) => EngineConfig::from_json_str(s).map_err(to_py_err)?,
            None => EngineConfig::default(),
        };
        Ok(Self { inner: EngineContext::new(cfg, state) })
    }

    fn select_exercise(&mut self, exercise_id: &str) -> PyResult<Vec<&'static str>> {
        let unlocked = self.inner.select_exercise(exercise_id).map_err(to_py_err)?;
        Ok(ids(&unlocked))
    }

    fn start(&mut self) -> PyResult<()> {
        self.inner.start(Utc::now()).map_err(to_py_err)
    }

    /// Landmarks-liste som JSON → frame-resultat som JSON, eller None når ingen økt er aktiv.
    fn process(&mut self, landmarks_json: &str) -> PyResult<Option<String>> {
        let skeleton = parse_skeleton(landmarks_json)?;
        let Some(out) = self.inner.process_frame(&skeleton, Utc::now()) else {
            return Ok(None);
        };
        let v = json::json!({
            "analysis": out.analysis,
            "rep": out.rep.map(|r| r.count),
            "rep_state": out.rep_state,
            "unlocked": ids(&out.newly_unlocked),
        });
        Ok(Some(v.to_string()))
    }

    fn stop(&mut self) -> PyResult<Option<String>> {
        let Some(out) = self.inner.stop(Utc::now()) else {
            return Ok(None);
        };
        let v = json::json!({
            "session": out.session,
            "unlocked": ids(&out.newly_unlocked),
        });
        Ok(Some(v.to_string()))
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn record_coaching_use(&mut self) -> Vec<&'static str> {
        ids(&self.inner.record_coaching_use())
    }

    fn coaching_prompt(&self) -> String {
        self.inner.coaching_request().to_prompt()
    }

    /// Persistert tilstand som JSON (kalleren lagrer den selv).
    fn state_json(&self) -> PyResult<String> {
        self.inner.state().to_json_string().map_err(to_py_err)
    }

    #[getter]
    fn rep_count(&self) -> u32 {
        self.inner.rep_count()
    }

    #[getter]
    fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn biomech_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_angle, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_frame_json, m)?)?;
    m.add_class::<Engine>()?;
    Ok(())
}
