//! Python bindings for polydfa.
//!
//! This module exposes the interpolators and the polynomial automaton to
//! Python using PyO3. Enable the `python` feature to use this.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::dfa::{AcceptPolicy, PolyAutomaton, TransitionSample};
use crate::gf::{Gf, GfVector};
use crate::interp::{BilinearPoly, VandermondeSolver};

fn value_error(e: crate::error::Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for a bilinear interpolation polynomial.
#[pyclass(name = "BilinearPoly")]
pub struct PyBilinearPoly {
    inner: BilinearPoly,
}

#[pymethods]
impl PyBilinearPoly {
    /// Fit a polynomial through a complete (x, y, z) grid over GF(order).
    #[new]
    fn new(order: u32, x: Vec<u32>, y: Vec<u32>, z: Vec<u32>) -> PyResult<Self> {
        let field = Gf::new(order).map_err(value_error)?;
        let x = GfVector::from_values(&field, x).map_err(value_error)?;
        let y = GfVector::from_values(&field, y).map_err(value_error)?;
        let z = GfVector::from_values(&field, z).map_err(value_error)?;

        let inner = BilinearPoly::fit(&field, &x, &y, &z).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Evaluate the polynomial at (x, y).
    fn evaluate(&self, x: u32, y: u32) -> PyResult<u32> {
        Ok(self
            .inner
            .evaluate_values(x, y)
            .map_err(value_error)?
            .value())
    }

    /// Get the coefficient vector in basis order.
    fn coefficients(&self) -> Vec<u32> {
        self.inner.coefficients().values().to_vec()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Python wrapper for the polynomial automaton.
#[pyclass(name = "PolyAutomaton")]
pub struct PyPolyAutomaton {
    inner: PolyAutomaton,
}

#[pymethods]
impl PyPolyAutomaton {
    /// Fit an automaton from (token, current, next) rows over GF(order).
    #[new]
    #[pyo3(signature = (order, samples, freeze_on_accept=true))]
    fn new(order: u32, samples: Vec<(u32, u32, u32)>, freeze_on_accept: bool) -> PyResult<Self> {
        let field = Gf::new(order).map_err(value_error)?;
        let samples: Vec<TransitionSample> =
            samples.into_iter().map(TransitionSample::from).collect();
        let policy = if freeze_on_accept {
            AcceptPolicy::Freeze
        } else {
            AcceptPolicy::Evaluate
        };

        let inner =
            PolyAutomaton::with_policy(&field, &samples, policy).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Consume one input token.
    fn transition(&mut self, token: u32) -> PyResult<()> {
        self.inner.transition(token).map_err(value_error)
    }

    /// Get the current state.
    fn current_state(&self) -> u32 {
        self.inner.current_state()
    }

    /// Check whether the automaton is in an accepting state.
    fn is_accepting(&self) -> bool {
        self.inner.is_accepting()
    }

    /// Reset to the zero state.
    fn restart(&mut self) {
        self.inner.restart();
    }
}

/// Reconstruct a polynomial's coefficients from samples at all nonzero
/// points of GF(order), returned ascending by degree.
#[pyfunction]
fn interpolate(order: u32, samples: Vec<u32>) -> PyResult<Vec<u32>> {
    let field = Gf::new(order).map_err(value_error)?;
    let y = GfVector::from_values(&field, samples).map_err(value_error)?;

    let solver = VandermondeSolver::new(field);
    let poly = solver.interpolate(&y).map_err(value_error)?;
    Ok(poly.coefficients().values().to_vec())
}

/// The polydfa Python module.
#[pymodule]
fn polydfa(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyBilinearPoly>()?;
    m.add_class::<PyPolyAutomaton>()?;
    m.add_function(wrap_pyfunction!(interpolate, m)?)?;
    Ok(())
}
