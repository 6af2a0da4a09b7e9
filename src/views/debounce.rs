// ABOUTME: Debounced value for search inputs
// ABOUTME: A new value only takes effect after it has been left alone for the delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::SEARCH_DEBOUNCE_MS;
use std::time::Duration;
use tokio::time::Instant;

/// Value that settles `delay` after the last change
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debounced<T> {
    /// Start settled on `initial`
    pub const fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            settled: initial,
            pending: None,
        }
    }

    /// Record a new input value at `now`
    pub fn set(&mut self, value: T, now: Instant) {
        if self.pending.is_none() && value == self.settled {
            return;
        }
        self.pending = Some((value, now + self.delay));
    }

    /// Settle the pending value if its deadline has passed; returns the settled value
    pub fn poll(&mut self, now: Instant) -> &T {
        if let Some((_, deadline)) = &self.pending {
            if now >= *deadline {
                if let Some((value, _)) = self.pending.take() {
                    self.settled = value;
                }
            }
        }
        &self.settled
    }

    /// Wait for the pending value, if any, to settle
    pub async fn settle(&mut self) -> &T {
        if let Some((_, deadline)) = &self.pending {
            tokio::time::sleep_until(*deadline).await;
        }
        self.poll(Instant::now())
    }

    /// Last settled value
    pub const fn value(&self) -> &T {
        &self.settled
    }

    /// Latest input, settled or not
    pub fn input(&self) -> &T {
        self.pending.as_ref().map_or(&self.settled, |(value, _)| value)
    }
}

impl Debounced<String> {
    /// Search input with the standard delay
    #[must_use]
    pub const fn search() -> Self {
        Self::new(String::new(), Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}
