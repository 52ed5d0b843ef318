//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::{ParameterMode, Phase};
use crate::session::{Session, TurnResult};

use super::py_core::PyGameParameters;

/// Python wrapper for TurnResult.
#[pyclass(name = "TurnResult")]
#[derive(Clone, Debug)]
pub struct PyTurnResult(pub TurnResult);

#[pymethods]
impl PyTurnResult {
    #[getter]
    fn human(&self) -> u32 {
        self.0.human.value()
    }

    #[getter]
    fn computer(&self) -> Option<u32> {
        self.0.computer.map(|f| f.value())
    }

    #[getter]
    fn product(&self) -> u64 {
        self.0.product
    }

    #[getter]
    fn history(&self) -> Vec<u32> {
        self.0.history.clone()
    }

    /// "human", "computer", or None while play continues.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.0
            .outcome
            .map(|result| result.winner().to_string().to_lowercase())
    }

    fn __repr__(&self) -> String {
        format!(
            "TurnResult(product={}, history={:?})",
            self.0.product, self.0.history
        )
    }
}

/// Python wrapper for Session.
#[pyclass(name = "Session")]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    /// Create a session. Classic mode when `params` is None.
    #[new]
    #[pyo3(signature = (params = None, seed = 42))]
    fn new(params: Option<PyGameParameters>, seed: u64) -> Self {
        let session = match params {
            Some(p) => Session::with_parameters(p.0, seed),
            None => Session::new(seed),
        };
        Self { session }
    }

    fn start(&mut self) {
        self.session.start();
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    /// Submit a factor given as int or text.
    ///
    /// Raises ValueError on invalid input or when the game is not running.
    fn submit(&mut self, entry: &Bound<'_, PyAny>) -> PyResult<PyTurnResult> {
        let turn = if let Ok(value) = entry.extract::<i64>() {
            self.session.submit_human_move(value)?
        } else {
            let text: String = entry.str()?.extract()?;
            self.session.submit_human_input(&text)?
        };
        Ok(PyTurnResult(turn))
    }

    fn toggle_misere(&mut self) {
        self.session.toggle_misere();
    }

    fn toggle_hard_mode(&mut self) {
        self.session.toggle_hard_mode();
    }

    /// Switch to classic (True) or custom (False) parameters.
    fn set_classic(&mut self, classic: bool) {
        let mode = if classic {
            ParameterMode::Classic
        } else {
            ParameterMode::Custom
        };
        self.session.set_mode(mode);
    }

    fn apply_custom(&mut self, max_entry: u32, target: u64) -> PyResult<()> {
        Ok(self.session.apply_custom(max_entry, target)?)
    }

    #[getter]
    fn params(&self) -> PyGameParameters {
        PyGameParameters(*self.session.params())
    }

    #[getter]
    fn product(&self) -> u64 {
        self.session.product()
    }

    #[getter]
    fn history(&self) -> Vec<u32> {
        self.session.history()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.session.phase() == Phase::Terminal
    }

    /// Snapshot as bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        Ok(self.session.snapshot().to_bytes()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(product={}, moves={}, phase={:?})",
            self.session.product(),
            self.session.history().len(),
            self.session.phase()
        )
    }
}
