use tokio::time::{Duration, Instant};

/// Cancellation context for a single call.
///
/// Carries the deadline the hosting runtime imposes on the invocation.
/// Blocking domain operations check it before starting work and race
/// against it while waiting, so a cancelled caller gets an answer promptly
/// instead of a leaked pending query.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context with no deadline
    pub fn unbounded() -> Self {
        Self { deadline: None }
    }

    /// A context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// A context that expires at the given instant
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= Instant::now())
    }
}
