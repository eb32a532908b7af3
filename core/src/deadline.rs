//! Wall-clock budget for the bisect search.
//!
//! A [`Deadline`] is an absolute cutoff derived from the configured timeout at
//! the start of a diff call. Only the bisect loop consults it; all other
//! phases run to completion.

use std::time::{Duration, Instant};

/// Absolute point in time after which bisect abandons minimality.
///
/// A non-positive or non-finite timeout produces an unlimited deadline that
/// never expires.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    cutoff: Option<Instant>,
}

impl Deadline {
    pub(crate) fn from_timeout_secs(timeout_secs: f64) -> Self {
        let cutoff = if timeout_secs.is_finite() && timeout_secs > 0.0 {
            Duration::try_from_secs_f64(timeout_secs)
                .ok()
                .and_then(|budget| Instant::now().checked_add(budget))
        } else {
            None
        };
        Self { cutoff }
    }

    /// Cooperative check, evaluated once per outer bisect iteration.
    pub(crate) fn expired(&self) -> bool {
        match self.cutoff {
            Some(cutoff) => Instant::now() > cutoff,
            None => false,
        }
    }
}
