//! CPU scheduling simulation engine.
//!
//! Given a fixed set of processes and a policy (FCFS, SJF, SRTF, Round Robin
//! or Priority), computes the processor timeline and the average waiting and
//! turnaround times. The engine is exposed to Python as `cpusim_rust`; any
//! form entry or chart drawing lives on the Python side.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod engine;
pub mod interner;
pub mod logging;
pub mod metrics;
mod models;
pub mod policy;
pub mod process_table;
pub mod strategies;

pub use config::SimulationConfig;
pub use engine::{simulate, EngineError};
pub use metrics::{compute_metrics, Metrics};
pub use models::{Process, ProcessMetrics, RunResult, Time, TimelineInterval};
pub use policy::Policy;
pub use process_table::{ProcessTable, ValidationError};
pub use strategies::{CompletionRecord, Schedule, Strategy};

/// Python exception classes, one per [`EngineError`] kind.
mod exceptions {
    use pyo3::create_exception;
    use pyo3::exceptions::PyValueError;

    create_exception!(
        cpusim_rust,
        ValidationError,
        PyValueError,
        "The process set was rejected."
    );
    create_exception!(
        cpusim_rust,
        UnsupportedPolicyError,
        PyValueError,
        "The policy selector is not recognised."
    );
    create_exception!(
        cpusim_rust,
        InvalidParameterError,
        PyValueError,
        "A policy parameter is missing or out of range."
    );
}

/// Python exception class raised for each kind of engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExceptionKind {
    Validation,
    UnsupportedPolicy,
    InvalidParameter,
}

impl ExceptionKind {
    fn of(err: &EngineError) -> Self {
        match err {
            EngineError::Validation(_) => ExceptionKind::Validation,
            EngineError::UnsupportedPolicy(_) => ExceptionKind::UnsupportedPolicy,
            EngineError::InvalidParameter(_) => ExceptionKind::InvalidParameter,
        }
    }

    /// Class name as registered on the Python module.
    fn name(self) -> &'static str {
        match self {
            ExceptionKind::Validation => "ValidationError",
            ExceptionKind::UnsupportedPolicy => "UnsupportedPolicyError",
            ExceptionKind::InvalidParameter => "InvalidParameterError",
        }
    }
}

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match ExceptionKind::of(&err) {
            ExceptionKind::Validation => exceptions::ValidationError::new_err(message),
            ExceptionKind::UnsupportedPolicy => exceptions::UnsupportedPolicyError::new_err(message),
            ExceptionKind::InvalidParameter => exceptions::InvalidParameterError::new_err(message),
        }
    }
}

/// Simulate `processes` under `policy`.
///
/// # Arguments
/// * `processes` - Process descriptors, in the order used for tie-breaks
/// * `policy` - "FCFS", "SJF", "SRTF", "ROUND_ROBIN" or "PRIORITY" (or a display label)
/// * `time_quantum` - Slice length, required for Round Robin
/// * `verbosity` - Diagnostic output to stderr (0-3)
///
/// # Raises
/// * ValidationError, UnsupportedPolicyError or InvalidParameterError
#[pyfunction]
#[pyo3(name = "simulate", signature = (processes, policy, time_quantum=None, verbosity=0))]
fn py_simulate(
    processes: Vec<Process>,
    policy: String,
    time_quantum: Option<i64>,
    verbosity: u8,
) -> PyResult<RunResult> {
    let config = SimulationConfig {
        policy,
        time_quantum,
        verbosity,
    };
    Ok(simulate(processes, &config)?)
}

/// Simulate `processes` with a prepared `SimulationConfig`.
#[pyfunction]
fn run_simulation(processes: Vec<Process>, config: SimulationConfig) -> PyResult<RunResult> {
    Ok(simulate(processes, &config)?)
}

/// `(tag, label)` for each supported policy, in presentation order.
#[pyfunction]
fn policy_labels() -> Vec<(String, String)> {
    Policy::ALL
        .iter()
        .map(|p| (p.tag().to_string(), p.label().to_string()))
        .collect()
}

/// The cpusim_rust Python module.
#[pymodule]
fn cpusim_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    // Data types
    m.add_class::<Process>()?;
    m.add_class::<TimelineInterval>()?;
    m.add_class::<ProcessMetrics>()?;
    m.add_class::<RunResult>()?;
    m.add_class::<SimulationConfig>()?;

    // Errors
    m.add(
        ExceptionKind::Validation.name(),
        py.get_type_bound::<exceptions::ValidationError>(),
    )?;
    m.add(
        ExceptionKind::UnsupportedPolicy.name(),
        py.get_type_bound::<exceptions::UnsupportedPolicyError>(),
    )?;
    m.add(
        ExceptionKind::InvalidParameter.name(),
        py.get_type_bound::<exceptions::InvalidParameterError>(),
    )?;

    // Engine
    m.add_function(wrap_pyfunction!(py_simulate, m)?)?;
    m.add_function(wrap_pyfunction!(run_simulation, m)?)?;
    m.add_function(wrap_pyfunction!(policy_labels, m)?)?;

    Ok(())
}
