//! Edit fan-out and debounced publishing.
//!
//! [`ChangeCoordinator`] is the only writer of the session's documents:
//!
//! - Edits update the [`DocumentStore`] and are written through to storage
//!   immediately, then (re)arm the debounce.
//! - Blur events (re)arm the debounce without touching any document.
//! - When the debounce fires, a single publish renders a fresh preview with
//!   the next version and hands a snapshot to the [`HashCodec`].
//!
//! # Error Handling
//!
//! - Share encode failures: logged at debug, the session continues
//! - Storage failures: returned to the caller, not handled
//!
//! [`HashCodec`]: stck_share::HashCodec

#[cfg(test)]
mod tests;

use stck_config::PlaygroundConfig;
use stck_document::{DocumentKey, DocumentSet, DocumentStore};
use stck_preview::{PreviewRenderer, PreviewResource};
use stck_primitives::{Duration, Instant, Timer};
use stck_share::{EncodeOutcome, HashCodec, Location};
use stck_storage::{KeyValueStore, PersistenceAdapter, StorageError};
use tracing::{debug, trace};

use crate::EditorBinding;
use crate::bootstrap::{Resolution, resolve};

/// What caused a publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishTrigger {
	/// Debounce fired after an edit.
	Edit,
	/// Debounce fired after an editor lost focus.
	Blur,
	/// Session start.
	Bootstrap,
	/// Explicit refresh request; bypasses the debounce.
	Refresh,
}

/// Whether a publish is waiting on the debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
	Idle,
	PendingPublish,
}

/// Outcome of one publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
	pub trigger: PublishTrigger,
	/// The fresh preview. Its version differs from every earlier one.
	pub preview: PreviewResource,
	/// Share outcome, or `None` when encoding failed.
	pub share: Option<EncodeOutcome>,
}

/// Owns the live documents and keeps storage, share token and preview in sync.
#[derive(Debug)]
pub struct ChangeCoordinator<S, L> {
	store: DocumentStore,
	persistence: PersistenceAdapter<S>,
	codec: HashCodec,
	location: L,
	renderer: PreviewRenderer,
	debounce: Timer<PublishTrigger>,
	debounce_window: Duration,
	preview: Option<PreviewResource>,
}

impl<S: KeyValueStore, L: Location> ChangeCoordinator<S, L> {
	/// Creates a coordinator over `documents` without publishing.
	pub fn new(
		documents: DocumentSet,
		persistence: PersistenceAdapter<S>,
		location: L,
		config: &PlaygroundConfig,
	) -> Self {
		Self {
			store: DocumentStore::new(documents),
			persistence,
			codec: HashCodec::new(config.share_interval()),
			location,
			renderer: PreviewRenderer::new(),
			debounce: Timer::new(),
			debounce_window: config.debounce(),
			preview: None,
		}
	}

	/// Starts a session: resolves the starting documents, then publishes once
	/// so the preview and share token reflect them immediately.
	pub fn bootstrap(
		store: S,
		location: L,
		config: &PlaygroundConfig,
		now: Instant,
	) -> Result<(Self, Resolution), StorageError> {
		let persistence = PersistenceAdapter::with_prefix(store, config.storage_prefix());
		let mut coordinator = Self::new(config.default_documents(), persistence, location, config);
		let resolution = resolve(
			&mut coordinator.store,
			&coordinator.location,
			&coordinator.persistence,
			config,
		)?;

		coordinator.publish(PublishTrigger::Bootstrap, now);
		Ok((coordinator, resolution))
	}

	/// Applies a change reported by the editor for `key`.
	///
	/// `None` means the widget has no value right now and is ignored. The new
	/// text is written through to storage before returning.
	pub fn on_change(&mut self, key: DocumentKey, text: Option<&str>, now: Instant) -> Result<(), StorageError> {
		let Some(text) = text else {
			trace!(%key, "session.change.no_value");
			return Ok(());
		};

		self.store.set(key, text);
		self.debounce.arm(now, self.debounce_window, PublishTrigger::Edit);
		self.persistence.write(key, text)
	}

	/// An editor lost focus: (re)arm the debounce.
	pub fn on_blur(&mut self, now: Instant) {
		self.debounce.arm(now, self.debounce_window, PublishTrigger::Blur);
	}

	/// Publishes immediately, dropping any pending debounced publish.
	pub fn refresh(&mut self, now: Instant) -> PublishReport {
		self.debounce.cancel();
		self.publish(PublishTrigger::Refresh, now)
	}

	/// Fires the debounced publish if it is due at `now`.
	pub fn tick(&mut self, now: Instant) -> Option<PublishReport> {
		let trigger = self.debounce.poll(now)?;
		Some(self.publish(trigger, now))
	}

	fn publish(&mut self, trigger: PublishTrigger, now: Instant) -> PublishReport {
		let snapshot = self.store.snapshot();
		let preview = self.renderer.render(&snapshot);

		let share = match self.codec.encode(&snapshot, &mut self.location, now) {
			Ok(outcome) => Some(outcome),
			Err(err) => {
				debug!(error = %err, "session.publish.encode_failed");
				None
			}
		};

		debug!(?trigger, version = preview.version(), ?share, "session.publish");
		self.preview = Some(preview.clone());
		PublishReport {
			trigger,
			preview,
			share,
		}
	}

	pub fn state(&self) -> CoordinatorState {
		if self.debounce.is_armed() {
			CoordinatorState::PendingPublish
		} else {
			CoordinatorState::Idle
		}
	}

	/// When the pending publish is due, if one is armed.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debounce.deadline()
	}

	pub fn documents(&self) -> &DocumentSet {
		self.store.documents()
	}

	/// The most recently published preview.
	pub fn preview(&self) -> Option<&PreviewResource> {
		self.preview.as_ref()
	}

	/// Mount parameters for the editor widget of `key`.
	pub fn binding(&self, key: DocumentKey) -> EditorBinding {
		EditorBinding {
			key,
			language: key.language(),
			initial_text: self.store.get(key).to_owned(),
			related: self.store.documents().related(key),
		}
	}

	pub fn location(&self) -> &L {
		&self.location
	}

	pub fn persistence(&self) -> &PersistenceAdapter<S> {
		&self.persistence
	}
}
