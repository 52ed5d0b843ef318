//! Parameter and calculator bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameParameters, GameRng};
use crate::strategy::{compute_optimal_factor, EffectiveTarget};

/// Python wrapper for GameParameters.
#[pyclass(name = "GameParameters")]
#[derive(Clone, Debug)]
pub struct PyGameParameters(pub GameParameters);

#[pymethods]
impl PyGameParameters {
    /// Create custom parameters.
    ///
    /// Raises ValueError for max_entry < 3 or target < 2.
    #[new]
    #[pyo3(signature = (max_entry = 9, target = 1000, misere = false, hard_mode = false))]
    fn new(max_entry: u32, target: u64, misere: bool, hard_mode: bool) -> PyResult<Self> {
        let params = GameParameters::custom(max_entry, target)?
            .with_misere(misere)
            .with_hard_mode(hard_mode);
        Ok(Self(params))
    }

    /// The classic 9 / 1000 game.
    #[staticmethod]
    fn classic() -> Self {
        Self(GameParameters::classic())
    }

    #[getter]
    fn max_entry(&self) -> u32 {
        self.0.max_entry()
    }

    #[getter]
    fn target(&self) -> u64 {
        self.0.target()
    }

    #[getter]
    fn misere(&self) -> bool {
        self.0.misere()
    }

    #[getter]
    fn hard_mode(&self) -> bool {
        self.0.hard_mode()
    }

    fn __repr__(&self) -> String {
        format!("GameParameters({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Optimal factor from `product`, drawing from `seed` if undecided.
#[pyfunction]
#[pyo3(signature = (product, target, max_entry, misere = false, seed = 0))]
pub fn optimal_factor(product: u64, target: u64, max_entry: u32, misere: bool, seed: u64) -> u32 {
    let mut rng = GameRng::new(seed);
    compute_optimal_factor(
        product,
        EffectiveTarget::for_game(target, misere),
        max_entry,
        &mut rng,
    )
}
