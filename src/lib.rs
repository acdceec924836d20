//! Life Sim Core - seeded text-based life simulation engine
//!
//! A catalogue of talents, events and age tables drives a life from birth to
//! death: attributes are allocated, talents drawn, and each year an event is
//! picked by weight and run through its branches. A seed fully determines
//! the outcome. Python bindings are available behind the `python` feature.

pub mod catalogue;
pub mod condition;
pub mod config;
pub mod error;
pub mod event;
pub mod property;
pub mod random;
pub mod simulator;
pub mod talent;

pub use catalogue::{Catalogue, CatalogueWarning};
pub use config::{CatalogueData, LifeConfig};
pub use error::{LifeSimError, Result};
pub use simulator::{LifeOutcome, LifePhase, LifeSimulator};

use std::sync::Arc;

/// Run one complete life over a shared catalogue with a fresh random stream
pub fn begin_life(catalogue: &Arc<Catalogue>, config: LifeConfig) -> Result<LifeOutcome> {
    LifeSimulator::with_catalogue(Arc::clone(catalogue), config).begin_life()
}

#[cfg(feature = "python")]
mod python {
    use crate::catalogue::Catalogue;
    use crate::config::LifeConfig;
    use crate::simulator::{LifeSession, LifeSimulator};
    use once_cell::sync::OnceCell;
    use parking_lot::RwLock;
    use pyo3::prelude::*;
    use std::sync::Arc;

    // ========================================================================
    // Cached Simulator
    // ========================================================================

    /// Process-wide simulator. Its random stream carries over between calls
    /// until a different seed is requested.
    static CACHED_SIMULATOR: OnceCell<Arc<RwLock<LifeSimulator>>> = OnceCell::new();

    fn cached_simulator() -> PyResult<Arc<RwLock<LifeSimulator>>> {
        CACHED_SIMULATOR.get().cloned().ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Catalogue not initialized. Call init_catalogue() first.",
            )
        })
    }

    fn run_life(
        simulator: &RwLock<LifeSimulator>,
        seed: Option<u64>,
        inherit_talent_id: i32,
        max_years: Option<u32>,
    ) -> PyResult<LifeSession> {
        let mut simulator = simulator.write();
        let config = LifeConfig {
            seed,
            inherit_talent_id,
            max_years,
        };
        simulator.set_config(config);
        let outcome = simulator.begin_life()?;
        Ok(LifeSession::new(outcome))
    }

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Load and validate the catalogue (call once at startup)
    ///
    /// # Arguments
    /// * `json` - Catalogue document with `talents`, `ages` and `events`
    ///
    /// # Raises
    /// KeyError on duplicate or unknown ids, ValueError on any other invalid data
    #[pyfunction]
    fn init_catalogue(json: &str) -> PyResult<usize> {
        let catalogue = Arc::new(Catalogue::from_json(json)?);
        let warnings = catalogue.warnings().len();

        if let Some(existing) = CACHED_SIMULATOR.get() {
            existing.write().set_catalogue(catalogue);
        } else {
            let simulator = LifeSimulator::with_catalogue(catalogue, LifeConfig::default());
            let _ = CACHED_SIMULATOR.set(Arc::new(RwLock::new(simulator)));
        }

        Ok(warnings)
    }

    #[pyfunction]
    fn is_catalogue_initialized() -> bool {
        CACHED_SIMULATOR.get().is_some()
    }

    /// Simulate one complete life
    ///
    /// # Arguments
    /// * `seed` - Explicit seed; a different seed than the previous call restarts the stream
    /// * `inherit_talent_id` - Talent carried over from a previous life, -1 for none
    /// * `max_years` - Ceiling on simulated years; recommended for untrusted catalogues
    ///
    /// # Raises
    /// RuntimeError if `init_catalogue` was not called first
    #[pyfunction]
    #[pyo3(signature = (seed=None, inherit_talent_id=-1, max_years=None))]
    fn begin_life(
        seed: Option<u64>,
        inherit_talent_id: i32,
        max_years: Option<u32>,
    ) -> PyResult<LifeSession> {
        let simulator = cached_simulator()?;
        run_life(&simulator, seed, inherit_talent_id, max_years)
    }

    /// Simulate one complete life on a blocking thread
    ///
    /// Lives share the cached simulator and its random stream, so concurrent
    /// calls run one after another.
    ///
    /// # Example (Python)
    /// ```python
    /// session = await begin_life_async(seed=42)
    /// print(session.log)
    /// ```
    #[pyfunction]
    #[pyo3(signature = (seed=None, inherit_talent_id=-1, max_years=None))]
    fn begin_life_async<'py>(
        py: Python<'py>,
        seed: Option<u64>,
        inherit_talent_id: i32,
        max_years: Option<u32>,
    ) -> PyResult<Bound<'py, PyAny>> {
        let simulator = cached_simulator()?;

        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            tokio::task::spawn_blocking(move || {
                run_life(&simulator, seed, inherit_talent_id, max_years)
            })
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Simulation task panicked: {}",
                    e
                ))
            })?
        })
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    #[pymodule]
    fn life_sim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(init_catalogue, m)?)?;
        m.add_function(wrap_pyfunction!(is_catalogue_initialized, m)?)?;
        m.add_function(wrap_pyfunction!(begin_life, m)?)?;
        m.add_function(wrap_pyfunction!(begin_life_async, m)?)?;
        m.add_class::<LifeSession>()?;
        Ok(())
    }
}
