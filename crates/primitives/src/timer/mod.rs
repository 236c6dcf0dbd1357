//! Deadline timer driven by explicit `now` instants.
//!
//! [`Timer`] holds at most one pending action together with the instant it
//! becomes due. Arming replaces whatever was pending, so a burst of arms
//! collapses into a single trailing-edge firing. Nothing runs on its own: the
//! owner polls with the current time from its event loop.
//!
//! The same type backs both the edit debounce (the action is the publish
//! trigger) and the share rate limiter (the timer is only consulted for
//! [`Timer::is_pending`]).

#[cfg(test)]
mod tests;

use std::time::Duration;

use web_time::Instant;

/// A single-slot cancellable timer.
#[derive(Debug, Clone)]
pub struct Timer<A> {
	pending: Option<(Instant, A)>,
}

impl<A> Default for Timer<A> {
	fn default() -> Self {
		Self { pending: None }
	}
}

impl<A> Timer<A> {
	/// Creates a disarmed timer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Arms the timer to yield `action` once `delay` has elapsed after `now`.
	///
	/// Any previously pending action is dropped and its deadline forgotten.
	pub fn arm(&mut self, now: Instant, delay: Duration, action: A) {
		self.pending = Some((now + delay, action));
	}

	/// Drops the pending action, if any. Returns whether one was pending.
	pub fn cancel(&mut self) -> bool {
		self.pending.take().is_some()
	}

	/// Instant at which the pending action becomes due.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(at, _)| *at)
	}

	/// Returns true while an action is armed (regardless of whether it is due).
	pub fn is_armed(&self) -> bool {
		self.pending.is_some()
	}

	/// Returns true while an action is armed and not yet due at `now`.
	pub fn is_pending(&self, now: Instant) -> bool {
		self.deadline().is_some_and(|at| now < at)
	}

	/// Takes the pending action if it is due at `now`.
	///
	/// Yields each armed action at most once.
	pub fn poll(&mut self, now: Instant) -> Option<A> {
		match self.pending {
			Some((at, _)) if now >= at => self.pending.take().map(|(_, action)| action),
			_ => None,
		}
	}
}
