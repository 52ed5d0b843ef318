//! Python bindings for the multiplicative Nim engine.
//!
//! # Quick Start
//!
//! ```python
//! import multiplicative_nim as nim
//!
//! params = nim.GameParameters(max_entry=9, target=1000, hard_mode=True)
//! session = nim.Session(params, seed=42)
//! session.start()
//!
//! turn = session.submit("9")
//! print(turn.product, turn.history, turn.winner)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::NimError;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

impl From<NimError> for PyErr {
    fn from(err: NimError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// multiplicative_nim: multiplicative Nim against an optimal opponent.
#[pymodule]
fn multiplicative_nim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameParameters>()?;
    m.add_class::<PyTurnResult>()?;
    m.add_class::<PySession>()?;

    m.add_function(wrap_pyfunction!(optimal_factor, m)?)?;

    Ok(())
}
