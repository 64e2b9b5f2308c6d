//! Logging statistics from simulation runs
mod display;

pub use display::DisplayLogger;

use enum_map::Enum;
use thiserror::Error;

/// Simulation run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Event {
    /// One independent trial of all agents against a freshly reset environment.
    Trial,
    /// A complete regret comparison over all trials.
    Run,
}

/// A value that can be logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Loggable {
    /// Nothing. No data to log.
    /// Logging Nothing data may still produce a placeholder entry for the name.
    Nothing,
    /// A scalar value. Aggregate by taking means.
    Scalar(f64),
}

impl From<f64> for Loggable {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

/// Log statistics from a simulation run.
pub trait StatsLogger {
    /// Log a value.
    ///
    /// # Args
    /// * `event` - The event associated with this value.
    /// * `name` - The name that identifies this value.
    /// * `value` - The value to log.
    ///
    /// # Errors
    /// If the logged value is structurally incompatible with previous values logged under
    /// the same name.
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError>;

    /// Mark the end of an event.
    fn done(&mut self, event: Event);
}

/// Logger that does nothing
impl StatsLogger for () {
    fn log(&mut self, _: Event, _: &str, _: Loggable) -> Result<(), LogError> {
        Ok(())
    }

    fn done(&mut self, _: Event) {}
}

impl<T: StatsLogger + ?Sized> StatsLogger for &mut T {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        T::log(self, event, name, value)
    }

    fn done(&mut self, event: Event) {
        T::done(self, event)
    }
}

impl<T: StatsLogger + ?Sized> StatsLogger for Box<T> {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        T::log(self, event, name, value)
    }

    fn done(&mut self, event: Event) {
        T::done(self, event)
    }
}

/// A logged value is incompatible with earlier values of the same name.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("\"{name}\": incompatible value {value:?}, expected {expected}")]
pub struct LogError {
    name: String,
    value: Loggable,
    expected: String,
}

impl LogError {
    pub fn new<N: Into<String>, E: Into<String>>(name: N, value: Loggable, expected: E) -> Self {
        Self {
            name: name.into(),
            value,
            expected: expected.into(),
        }
    }
}
