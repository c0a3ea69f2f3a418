//! Turns a stream of flight plan updates (JSON lines) into strip print
//! requests.

use crate::domain::strip::{FlightPlan, StripEvent, StripTracker};
use crate::utils::error::Result;
use std::io::BufRead;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub plans: usize,
    pub malformed: usize,
    pub strips: usize,
    pub failed: usize,
}

pub struct StripFeed {
    tracker: StripTracker,
}

impl StripFeed {
    pub fn new(tracker: StripTracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &StripTracker {
        &self.tracker
    }

    /// Read updates until end of input, calling `emit` for every strip that
    /// should be printed. A failing `emit` is logged and counted; the feed
    /// carries on with the next update. Only read errors stop the feed.
    pub fn run<R, F>(&mut self, reader: R, mut emit: F) -> Result<FeedSummary>
    where
        R: BufRead,
        F: FnMut(&StripEvent) -> Result<()>,
    {
        let mut summary = FeedSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let plan: FlightPlan = match serde_json::from_str(line) {
                Ok(plan) => plan,
                Err(e) => {
                    tracing::warn!("Skipping malformed update on line {}: {}", index + 1, e);
                    summary.malformed += 1;
                    continue;
                }
            };
            summary.plans += 1;

            let Some(event) = self.tracker.observe(&plan) else {
                continue;
            };

            tracing::info!("{} strip for {}", event.kind.title(), event.callsign);
            summary.strips += 1;
            if let Err(e) = emit(&event) {
                tracing::error!("❌ Printing strip for {} failed: {}", event.callsign, e);
                summary.failed += 1;
            }
        }

        Ok(summary)
    }
}
