//! The periodic driver calling [`SortEngine::step`] until the run completes

use std::ops::ControlFlow;
use std::time::Duration;

use crate::engine::SortEngine;
use crate::event::StepResult;

/// The default time between two steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Cadence of a [`StepClock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Time to wait between two steps, zero runs as fast as possible
    pub interval: Duration,
    /// Stop after this many steps even if the run is not done
    pub max_steps: Option<usize>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            max_steps: None,
        }
    }
}

impl ClockConfig {
    /// A clock ticking without delay
    pub fn immediate() -> Self {
        Self {
            interval: Duration::ZERO,
            max_steps: None,
        }
    }
}

/// What happened while the clock was running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSummary {
    /// Steps performed by this clock
    pub steps: usize,
    /// Whether the run reported completion
    pub completed: bool,
}

/// Drives an engine at a fixed interval
#[derive(Debug, Clone, Default)]
pub struct StepClock {
    config: ClockConfig,
}

impl StepClock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Step `engine` until it reports completion, `on_step` breaks, or the step limit is hit
    ///
    /// `on_step` sees the engine after each step together with its result.
    pub fn run<T: Ord + Clone + std::fmt::Debug>(
        &self,
        engine: &mut SortEngine<T>,
        mut on_step: impl FnMut(&SortEngine<T>, &StepResult<T>) -> ControlFlow<()>,
    ) -> Result<ClockSummary, crate::Error> {
        let mut summary = ClockSummary {
            steps: 0,
            completed: false,
        };

        loop {
            if self
                .config
                .max_steps
                .is_some_and(|max_steps| summary.steps >= max_steps)
            {
                tracing::warn!(steps = summary.steps, "step limit reached before completion");
                break;
            }

            let result = engine.step()?;
            summary.steps += 1;
            summary.completed = result.done;

            if on_step(engine, &result).is_break() || result.done {
                break;
            }

            if !self.config.interval.is_zero() {
                std::thread::sleep(self.config.interval);
            }
        }

        Ok(summary)
    }
}
