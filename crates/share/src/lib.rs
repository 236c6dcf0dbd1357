//! Share tokens for the stck playground.
//!
//! A [`ShareToken`] carries a complete [`DocumentSet`] in a URL fragment:
//! the set is serialized to canonical JSON, base64-encoded, and then
//! percent-encoded so the result survives as a fragment verbatim.
//!
//! [`decode`] reverses each layer and validates the shape. A malformed
//! fragment is a [`DecodeError`], a well-formed one with the wrong keys is a
//! [`ShapeError`]. Either way nothing is partially applied.
//!
//! [`HashCodec`] publishes tokens to a [`Location`], skipping writes while
//! its rate limiter is pending and when the fragment already matches.
//!
//! [`DocumentSet`]: stck_document::DocumentSet
//! [`ShapeError`]: stck_document::ShapeError

mod codec;
pub mod error;
mod location;
mod token;

pub use codec::{EncodeOutcome, HashCodec, SkipReason};
pub use error::{DecodeError, EncodeError, ShareError};
pub use location::{Location, UrlLocation};
pub use token::{ShareToken, decode, decode_candidate, encode_token};
