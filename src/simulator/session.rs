//! Life outcome and its Python session handle

use serde::Serialize;

use crate::property::{PropertyKey, PropertyState};

/// Final (or current) view of one life
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeOutcome {
    /// Seed of the random stream this life was drawn from
    pub seed: u64,
    /// 1-based position of this life within that stream
    pub life: u32,
    /// Years advanced
    pub years: u32,
    pub state: PropertyState,
    /// Acquired talent ids in acquisition order
    pub talents: Vec<i32>,
    /// Triggered event ids in first-trigger order
    pub events: Vec<i32>,
    /// Newline-joined narrative
    pub log: String,
}

impl LifeOutcome {
    #[inline]
    pub fn property(&self, key: PropertyKey) -> i32 {
        self.state.get(key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(feature = "python")]
pub use python::LifeSession;

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use pyo3::types::{PyAny, PyDict, PyList};

    use super::LifeOutcome;
    use crate::error::LifeSimError;
    use crate::property::PropertyKey;

    const REPORTED_PROPERTIES: [PropertyKey; 9] = [
        PropertyKey::Chr,
        PropertyKey::Int,
        PropertyKey::Str,
        PropertyKey::Mny,
        PropertyKey::Spr,
        PropertyKey::Lif,
        PropertyKey::Age,
        PropertyKey::Total,
        PropertyKey::Tms,
    ];

    /// Handle holding a finished life in Rust memory.
    ///
    /// Python reads fields lazily instead of receiving the whole outcome
    /// serialized up front.
    #[pyclass]
    pub struct LifeSession {
        outcome: LifeOutcome,
    }

    impl LifeSession {
        pub fn new(outcome: LifeOutcome) -> Self {
            Self { outcome }
        }
    }

    #[pymethods]
    impl LifeSession {
        #[getter]
        fn seed(&self) -> u64 {
            self.outcome.seed
        }

        #[getter]
        fn total_years(&self) -> u32 {
            self.outcome.years
        }

        #[getter]
        fn final_age(&self) -> i32 {
            self.outcome.state.age
        }

        #[getter]
        fn log(&self) -> &str {
            &self.outcome.log
        }

        /// Log split into lines
        fn get_lines(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
            let list = PyList::empty(py);
            for line in self.outcome.log.lines() {
                list.append(line)?;
            }
            Ok(list.into())
        }

        /// Final property values keyed by name
        fn get_properties(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
            let dict = PyDict::new(py);
            for key in REPORTED_PROPERTIES {
                dict.set_item(key.as_str(), self.outcome.property(key))?;
            }
            Ok(dict.into())
        }

        fn get_talents(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
            let list = PyList::new(py, &self.outcome.talents)?;
            Ok(list.into())
        }

        fn get_events(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
            let list = PyList::new(py, &self.outcome.events)?;
            Ok(list.into())
        }

        fn to_json(&self) -> PyResult<String> {
            Ok(self.outcome.to_json().map_err(LifeSimError::from)?)
        }

        fn __repr__(&self) -> String {
            format!(
                "LifeSession(seed={}, years={}, final_age={})",
                self.outcome.seed, self.outcome.years, self.outcome.state.age
            )
        }
    }
}
