//! Verbosity-gated diagnostics for simulation runs.
//!
//! Nothing is formatted unless the run's verbosity reaches the macro's level.
//! Levels:
//! - 0: SILENT
//! - 1: DISPATCH (run summary, dispatched intervals, completions)
//! - 2: QUEUE (ready set at each scheduling decision)
//! - 3: TRACE (arrivals, idle clock jumps)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_DISPATCH: u8 = 1;
pub const VERBOSITY_QUEUE: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at DISPATCH level (verbosity >= 1).
///
/// Used for: the start and end of a run, each interval a process is given
/// the CPU, and each completion.
#[macro_export]
macro_rules! log_dispatch {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DISPATCH {
            eprintln!($($arg)*);
        }
    };
}

/// Log at QUEUE level (verbosity >= 2).
///
/// Used for: the ready set at every scheduling decision.
#[macro_export]
macro_rules! log_queue {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_QUEUE {
            eprintln!($($arg)*);
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
///
/// Used for: idle jumps of the clock to the next arrival, and SRTF
/// arrivals.
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_DISPATCH);
        assert!(VERBOSITY_DISPATCH < VERBOSITY_QUEUE);
        assert!(VERBOSITY_QUEUE < VERBOSITY_TRACE);
    }

    #[test]
    fn test_silent_run_skips_all_macros() {
        let verbosity = VERBOSITY_SILENT;
        log_dispatch!(verbosity, "dispatch {}", 1);
        log_queue!(verbosity, "queue {:?}", [1, 2]);
        log_trace!(verbosity, "trace {}", "x");
    }
}
