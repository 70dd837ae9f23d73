//! Configuration for a simulation run.

use pyo3::prelude::*;

/// Policy selection and run options.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Policy selector: "FCFS", "SJF", "SRTF", "ROUND_ROBIN" or "PRIORITY"
    /// (aliases and display labels are also accepted)
    #[pyo3(get, set)]
    pub policy: String,
    /// Slice length for Round Robin; ignored by other policies
    #[pyo3(get, set)]
    pub time_quantum: Option<i64>,
    /// Verbosity level: 0=silent, 1=dispatch, 2=queue, 3=trace
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: "FCFS".to_string(),
            time_quantum: None,
            verbosity: 0,
        }
    }
}

impl SimulationConfig {
    /// Config for `policy` with default options.
    pub fn for_policy(policy: &str) -> Self {
        Self {
            policy: policy.to_string(),
            ..Self::default()
        }
    }

    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }
}

#[pymethods]
impl SimulationConfig {
    #[new]
    #[pyo3(signature = (policy=None, time_quantum=None, verbosity=None))]
    fn new(policy: Option<String>, time_quantum: Option<i64>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            policy: policy.unwrap_or(defaults.policy),
            time_quantum,
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(policy={:?}, time_quantum={:?}, verbosity={})",
            self.policy, self.time_quantum, self.verbosity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.policy, "FCFS");
        assert_eq!(config.time_quantum, None);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::for_policy("RR").with_time_quantum(3);
        assert_eq!(config.policy, "RR");
        assert_eq!(config.time_quantum, Some(3));
    }
}
