//! Policy selection and dispatch to a strategy.

use std::fmt;
use std::str::FromStr;

use crate::engine::EngineError;
use crate::models::Time;
use crate::strategies::{
    Fcfs, PriorityScheduling, RoundRobin, ShortestJobFirst, ShortestRemainingTimeFirst, Strategy,
};

/// The supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin,
    Priority,
}

impl Policy {
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::RoundRobin,
        Policy::Priority,
    ];

    /// Canonical selector.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "ROUND_ROBIN",
            Self::Priority => "PRIORITY",
        }
    }

    /// Human-readable name, as shown in a policy picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::Srtf => "Shortest Remaining Time First (SRTF)",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority Scheduling",
        }
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Build the strategy for this policy.
    ///
    /// `time_quantum` is required (and must be positive) for Round Robin and
    /// ignored otherwise.
    pub fn strategy(&self, time_quantum: Option<Time>) -> Result<Box<dyn Strategy>, EngineError> {
        let strategy: Box<dyn Strategy> = match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(ShortestJobFirst),
            Self::Srtf => Box::new(ShortestRemainingTimeFirst),
            Self::Priority => Box::new(PriorityScheduling),
            Self::RoundRobin => match time_quantum {
                Some(q) if q > 0 => Box::new(RoundRobin::new(q)),
                Some(q) => {
                    return Err(EngineError::InvalidParameter(format!(
                        "time quantum must be positive, got {}",
                        q
                    )))
                }
                None => {
                    return Err(EngineError::InvalidParameter(
                        "Round Robin requires a time quantum".to_string(),
                    ))
                }
            },
        };
        Ok(strategy)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Policy {
    type Err = EngineError;

    /// Accepts canonical tags and common aliases case-insensitively, and the
    /// display labels from [`Policy::label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_uppercase().replace(['-', ' '], "_");
        let policy = match normalized.as_str() {
            "FCFS" => Some(Self::Fcfs),
            "SJF" => Some(Self::Sjf),
            "SRTF" => Some(Self::Srtf),
            "ROUND_ROBIN" | "RR" => Some(Self::RoundRobin),
            "PRIORITY" => Some(Self::Priority),
            _ => None,
        };

        policy
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|p| p.label().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| EngineError::UnsupportedPolicy(s.to_string()))
    }
}
