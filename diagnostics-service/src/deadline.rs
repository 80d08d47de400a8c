//! Bounded simulated work.
//!
//! Races a unit of simulated work against a fixed ceiling and reports
//! which finished first. On timeout the background task is abandoned, not
//! cancelled: it runs to completion and signals into a one-shot channel
//! nobody listens on anymore. The one-shot write is buffered, so the
//! abandoned task can never block the process.

use std::time::Duration;

use tokio::sync::oneshot;

/// Substituted when the requested duration is absent, non-numeric, or
/// non-positive.
pub const DEFAULT_SIMULATED_SECS: u64 = 30;

/// Which side of the race finished first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    /// The simulated work signalled completion before the ceiling.
    Completed,
    /// The ceiling elapsed first; the work was left running.
    Exceeded,
}

/// Runs simulated work under a fixed ceiling.
pub struct WorkSimulator {
    ceiling: Duration,
}

impl WorkSimulator {
    /// Creates a simulator with the given ceiling.
    pub fn new(ceiling: Duration) -> Self {
        Self { ceiling }
    }

    /// Sleeps for `simulated` on a background task and waits for the
    /// earlier of its completion signal or the ceiling.
    pub async fn run(&self, simulated: Duration) -> WorkOutcome {
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            tokio::time::sleep(simulated).await;
            // The receiver is gone once the ceiling fired; the send still
            // never blocks
            let _ = tx.send(());
        });

        tokio::select! {
            _ = rx => WorkOutcome::Completed,
            _ = tokio::time::sleep(self.ceiling) => WorkOutcome::Exceeded,
        }
    }
}

/// Parses the requested simulated duration from a path parameter.
pub fn parse_simulated_secs(raw: &str) -> u64 {
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => value as u64,
        _ => DEFAULT_SIMULATED_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulated_secs() {
        assert_eq!(parse_simulated_secs("2"), 2);
        assert_eq!(parse_simulated_secs("0"), DEFAULT_SIMULATED_SECS);
        assert_eq!(parse_simulated_secs("-5"), DEFAULT_SIMULATED_SECS);
        assert_eq!(parse_simulated_secs("abc"), DEFAULT_SIMULATED_SECS);
        assert_eq!(parse_simulated_secs(""), DEFAULT_SIMULATED_SECS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_work_completes_under_ceiling() {
        let simulator = WorkSimulator::new(Duration::from_secs(5));
        let outcome = simulator.run(Duration::from_secs(0)).await;
        assert_eq!(outcome, WorkOutcome::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_work_exceeds_at_ceiling_not_at_duration() {
        let simulator = WorkSimulator::new(Duration::from_secs(1));
        let start = tokio::time::Instant::now();

        let outcome = simulator.run(Duration::from_secs(10)).await;

        assert_eq!(outcome, WorkOutcome::Exceeded);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(1));
        assert!(elapsed < Duration::from_secs(10), "returned at {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_work_does_not_disturb_later_runs() {
        let simulator = WorkSimulator::new(Duration::from_secs(1));
        assert_eq!(
            simulator.run(Duration::from_secs(30)).await,
            WorkOutcome::Exceeded
        );
        // The abandoned task is still sleeping; a new race is unaffected
        assert_eq!(
            simulator.run(Duration::from_secs(0)).await,
            WorkOutcome::Completed
        );
    }
}
