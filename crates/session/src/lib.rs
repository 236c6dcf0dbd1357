//! Session orchestration for the stck playground.
//!
//! [`ChangeCoordinator`] owns the live [`DocumentSet`] for the lifetime of a
//! session. Edits are applied and written through to storage immediately;
//! publishing (share token + fresh preview) is debounced so a burst of edits
//! collapses into one publish carrying the latest text.
//!
//! [`ChangeCoordinator::bootstrap`] decides the starting documents: a valid share token wins,
//! otherwise each document falls back to stored text and then to its default.
//!
//! The coordinator itself is synchronous and clock-agnostic: the host feeds it
//! events and calls [`ChangeCoordinator::tick`] from its event loop.
//! [`driver`] provides such a loop on tokio.
//!
//! [`DocumentSet`]: stck_document::DocumentSet

mod bootstrap;
mod coordinator;
#[cfg(not(target_arch = "wasm32"))]
pub mod driver;
mod editor;
pub mod error;

pub use bootstrap::{DocumentSource, Resolution};
pub use coordinator::{ChangeCoordinator, CoordinatorState, PublishReport, PublishTrigger};
pub use editor::EditorBinding;
pub use error::SessionError;
