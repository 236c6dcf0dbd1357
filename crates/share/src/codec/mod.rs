//! Rate-limited publishing of share tokens.


use stck_document::DocumentSet;
use stck_primitives::{DEFAULT_SHARE_INTERVAL, Duration, Instant, Timer};
use tracing::{debug, trace};

use crate::{EncodeError, Location, ShareToken, encode_token};

/// Why an encode did not touch the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	/// The previous encode was less than the share interval ago.
	RateLimited,
	/// The fragment already holds this exact token.
	Unchanged,
}

/// Result of [`HashCodec::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeOutcome {
	/// The token was written to the fragment.
	Published(ShareToken),
	Skipped(SkipReason),
}

impl EncodeOutcome {
	pub fn token(&self) -> Option<&ShareToken> {
		match self {
			EncodeOutcome::Published(token) => Some(token),
			EncodeOutcome::Skipped(_) => None,
		}
	}
}

/// Writes share tokens into a [`Location`] at most once per interval.
///
/// The limiter is wall-clock gated and independent of any upstream debounce.
/// It is armed whenever a token is computed, including when the fragment
/// turns out to be unchanged.
#[derive(Debug, Clone)]
pub struct HashCodec {
	interval: Duration,
	limiter: Timer<()>,
}

impl Default for HashCodec {
	fn default() -> Self {
		Self::new(DEFAULT_SHARE_INTERVAL)
	}
}

impl HashCodec {
	pub fn new(interval: Duration) -> Self {
		Self {
			interval,
			limiter: Timer::new(),
		}
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Encodes `documents` and publishes the token to `location`.
	pub fn encode(
		&mut self,
		documents: &DocumentSet,
		location: &mut impl Location,
		now: Instant,
	) -> Result<EncodeOutcome, EncodeError> {
		if self.limiter.is_pending(now) {
			trace!("share.encode.rate_limited");
			return Ok(EncodeOutcome::Skipped(SkipReason::RateLimited));
		}

		let token = encode_token(documents)?;
		self.limiter.arm(now, self.interval, ());

		if location.fragment().as_deref() == Some(token.as_str()) {
			trace!("share.encode.unchanged");
			return Ok(EncodeOutcome::Skipped(SkipReason::Unchanged));
		}

		location.set_fragment(token.as_str());
		debug!(len = token.as_str().len(), "share.encode.published");
		Ok(EncodeOutcome::Published(token))
	}
}
