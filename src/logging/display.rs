//! Command-line statistics logger
use super::{Event, LogError, Loggable, StatsLogger};
use crate::utils::stats::OnlineMeanVariance;
use enum_map::{enum_map, EnumMap};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};
use yansi::Paint;

/// Logger that displays summaries of the logged values to standard output.
///
/// Values are aggregated per event and name, and displayed at most once per `display_period`
/// (checked when an event ends) and when the logger is dropped.
#[derive(Debug)]
pub struct DisplayLogger {
    events: EnumMap<Event, EventLog>,
    display_period: Duration,
    last_display_time: Instant,
}

impl DisplayLogger {
    pub fn new(display_period: Duration) -> Self {
        Self {
            events: enum_map! { _ => EventLog::default() },
            display_period,
            last_display_time: Instant::now(),
        }
    }

    /// Number of times `event` has ended.
    pub fn event_count(&self, event: Event) -> u64 {
        self.events[event].index
    }

    /// Summary of the values logged under `name` since the last display.
    pub fn summary(&self, event: Event, name: &str) -> Option<&OnlineMeanVariance<f64>> {
        match self.events[event].aggregators.get(name)? {
            Aggregator::Nothing => None,
            Aggregator::Scalar(stats) => Some(stats),
        }
    }

    /// Display the summary and clear all aggregated values.
    pub fn display(&mut self) {
        for (event, event_log) in self.events.iter_mut() {
            let summary_size = event_log.index - event_log.summary_start_index;
            if summary_size == 0 {
                continue;
            }
            println!();
            println!(
                "{}",
                Paint::new(format!(
                    "==== {:?}s {} - {} ====",
                    event,
                    event_log.summary_start_index,
                    event_log.index - 1
                ))
                .bold()
            );
            for (name, aggregator) in &mut event_log.aggregators {
                println!("{:<40} {}", Paint::fixed(35, name), aggregator);
                aggregator.clear();
            }
            event_log.summary_start_index = event_log.index;
        }
        self.last_display_time = Instant::now();
    }
}

impl Default for DisplayLogger {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl StatsLogger for DisplayLogger {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        let aggregators = &mut self.events[event].aggregators;
        if let Some(aggregator) = aggregators.get_mut(name) {
            aggregator
                .update(value)
                .map_err(|expected| LogError::new(name, value, expected))
        } else {
            aggregators.insert(name.into(), Aggregator::new(value));
            Ok(())
        }
    }

    fn done(&mut self, event: Event) {
        self.events[event].index += 1;
        if self.last_display_time.elapsed() >= self.display_period {
            self.display();
        }
    }
}

impl Drop for DisplayLogger {
    fn drop(&mut self) {
        self.display();
    }
}

#[derive(Debug, Default)]
struct EventLog {
    /// Global index for this event
    index: u64,
    /// Value of `index` at the start of this summary period
    summary_start_index: u64,
    aggregators: BTreeMap<String, Aggregator>,
}

#[derive(Debug)]
enum Aggregator {
    Nothing,
    Scalar(OnlineMeanVariance<f64>),
}

impl Aggregator {
    fn new(value: Loggable) -> Self {
        match value {
            Loggable::Nothing => Self::Nothing,
            Loggable::Scalar(x) => {
                let mut stats = OnlineMeanVariance::new();
                stats.push(x);
                Self::Scalar(stats)
            }
        }
    }

    /// Add a value; on a type mismatch returns the name of the expected type.
    fn update(&mut self, value: Loggable) -> Result<(), &'static str> {
        match (self, value) {
            (Self::Nothing, Loggable::Nothing) => Ok(()),
            (Self::Scalar(stats), Loggable::Scalar(x)) => {
                stats.push(x);
                Ok(())
            }
            (Self::Nothing, _) => Err("Nothing"),
            (Self::Scalar(_), _) => Err("Scalar"),
        }
    }

    fn clear(&mut self) {
        if let Self::Scalar(stats) = self {
            *stats = OnlineMeanVariance::new();
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Nothing => Ok(()),
            Self::Scalar(stats) => {
                if let Some(mean) = stats.mean() {
                    write!(f, "{:.3}", mean)?;
                }
                if stats.count() > 1 {
                    if let Some(stddev) = stats.stddev() {
                        let spread = format!("(σ {:.3})", stddev);
                        write!(f, " {}", Paint::fixed(8, spread))?;
                    }
                }
                Ok(())
            }
        }
    }
}
