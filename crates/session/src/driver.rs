//! Tokio event loop for a [`ChangeCoordinator`].
//!
//! The driver owns the coordinator on a spawned task. Editor events arrive
//! over an unbounded channel and are applied in order; between events the
//! task sleeps until the debounce deadline. Every publish carrying a new
//! version replaces the value in a [`watch`] channel, which the preview
//! surface observes and remounts on.
//!
//! Dropping or closing the [`SessionHandle`] ends the session. A storage
//! failure also ends it and is returned from [`SessionHandle::close`].

use stck_document::DocumentKey;
use stck_preview::PreviewResource;
use stck_primitives::Instant;
use stck_share::Location;
use stck_storage::{KeyValueStore, StorageError};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{ChangeCoordinator, PublishReport, SessionError};

/// Input to a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	/// The editor for `key` reported new text (`None`: no value).
	Change { key: DocumentKey, text: Option<String> },
	/// An editor lost focus.
	Blur,
	/// The preview's refresh control was used.
	Refresh,
}

/// Handle to a session running on a tokio task.
pub struct SessionHandle<S, L> {
	events: mpsc::UnboundedSender<SessionEvent>,
	preview: watch::Receiver<Option<PreviewResource>>,
	task: JoinHandle<Result<ChangeCoordinator<S, L>, StorageError>>,
}

impl<S, L> SessionHandle<S, L> {
	/// Queues an event. Returns false once the session has ended.
	pub fn send(&self, event: SessionEvent) -> bool {
		self.events.send(event).is_ok()
	}

	/// Subscribes to published previews.
	pub fn preview(&self) -> watch::Receiver<Option<PreviewResource>> {
		self.preview.clone()
	}

	/// Ends the session after all queued events are applied and returns the
	/// coordinator.
	pub async fn close(self) -> Result<ChangeCoordinator<S, L>, SessionError> {
		drop(self.events);
		Ok(self.task.await??)
	}
}

/// Runs `coordinator` on a new tokio task.
///
/// The coordinator's current preview (typically the bootstrap publish) is the
/// initial value of the preview channel.
pub fn spawn<S, L>(coordinator: ChangeCoordinator<S, L>) -> SessionHandle<S, L>
where
	S: KeyValueStore + Send + 'static,
	L: Location + Send + 'static,
{
	let (events, rx) = mpsc::unbounded_channel();
	let (preview_tx, preview) = watch::channel(coordinator.preview().cloned());
	let task = tokio::spawn(run(coordinator, rx, preview_tx));
	SessionHandle { events, preview, task }
}

async fn run<S, L>(
	mut coordinator: ChangeCoordinator<S, L>,
	mut events: mpsc::UnboundedReceiver<SessionEvent>,
	preview: watch::Sender<Option<PreviewResource>>,
) -> Result<ChangeCoordinator<S, L>, StorageError>
where
	S: KeyValueStore,
	L: Location,
{
	loop {
		let deadline = coordinator.next_deadline();
		let sleep = tokio::time::sleep_until(deadline.map_or_else(tokio::time::Instant::now, tokio::time::Instant::from_std));

		tokio::select! {
			event = events.recv() => {
				let Some(event) = event else {
					debug!("session.driver.closed");
					return Ok(coordinator);
				};
				let now = now();
				let report = match event {
					SessionEvent::Change { key, text } => {
						if let Err(err) = coordinator.on_change(key, text.as_deref(), now) {
							warn!(error = %err, "session.driver.storage_failed");
							return Err(err);
						}
						None
					}
					SessionEvent::Blur => {
						coordinator.on_blur(now);
						None
					}
					SessionEvent::Refresh => Some(coordinator.refresh(now)),
				};
				if let Some(report) = report {
					emit(&preview, report);
				}
			}
			_ = sleep, if deadline.is_some() => {
				if let Some(report) = coordinator.tick(now()) {
					emit(&preview, report);
				}
			}
		}
	}
}

fn emit(preview: &watch::Sender<Option<PreviewResource>>, report: PublishReport) {
	preview.send_if_modified(|current| {
		let remount = report.preview.needs_remount(current.as_ref());
		if remount {
			*current = Some(report.preview);
		}
		remount
	});
}

/// Current time on the tokio clock, so paused test time drives the debounce.
fn now() -> Instant {
	tokio::time::Instant::now().into_std()
}
