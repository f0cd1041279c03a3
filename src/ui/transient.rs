use std::time::Duration;

use strum_macros::Display;

use crate::utils::app_time::{AppInstant, remaining};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// A value that disappears `ttl` after it was shown.
///
/// Each slot owns exactly one deadline: showing a new value replaces both the
/// value and its deadline, so an older message can never clear a newer one.
#[derive(Debug, Clone)]
pub struct TransientSlot<T> {
    ttl: Duration,
    current: Option<(T, AppInstant)>,
}

impl<T> TransientSlot<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show(&mut self, value: T, now: AppInstant) {
        self.current = Some((value, now + self.ttl));
    }

    pub fn get(&self, now: AppInstant) -> Option<&T> {
        match &self.current {
            Some((value, deadline)) if now < *deadline => Some(value),
            _ => None,
        }
    }

    pub fn is_active(&self, now: AppInstant) -> bool {
        self.get(now).is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Time until the visible value expires; used to schedule a repaint.
    pub fn time_left(&self, now: AppInstant) -> Option<Duration> {
        self.current
            .as_ref()
            .and_then(|(_, deadline)| remaining(*deadline, now))
    }
}

/// Soonest of several optional deadlines.
pub fn soonest(deadlines: impl IntoIterator<Item = Option<Duration>>) -> Option<Duration> {
    deadlines.into_iter().flatten().min()
}
