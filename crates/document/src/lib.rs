//! Document model for the stck playground.
//!
//! A [`DocumentSet`] always holds exactly three text documents, one per
//! [`DocumentKey`]. The shape is enforced by the type itself; untyped
//! candidates (decoded share tokens, imported JSON) only become a
//! [`DocumentSet`] through [`validate`], which reports a [`ShapeError`]
//! instead of partially applying anything.
//!
//! [`DocumentStore`] is the single mutable holder of the live set. Everything
//! downstream (persistence, sharing, preview) receives snapshots.

pub mod defaults;
pub mod error;
pub mod key;
pub mod set;
pub mod store;

pub use error::ShapeError;
pub use key::DocumentKey;
pub use set::{DocumentSet, RelatedDocument, validate};
pub use store::DocumentStore;
