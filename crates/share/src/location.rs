use url::Url;

/// The URL whose fragment carries the share token.
///
/// In a browser this is `window.location`; natively it is a [`UrlLocation`].
pub trait Location {
	/// Current fragment without the leading `#`, if any.
	fn fragment(&self) -> Option<String>;

	/// Replaces the fragment. Each call is one history write.
	fn set_fragment(&mut self, fragment: &str);
}

/// A [`Location`] backed by a parsed [`Url`].
#[derive(Debug, Clone)]
pub struct UrlLocation {
	url: Url,
	history_len: usize,
}

impl UrlLocation {
	pub fn new(url: Url) -> Self {
		Self { url, history_len: 0 }
	}

	pub fn parse(input: &str) -> Result<Self, url::ParseError> {
		Url::parse(input).map(Self::new)
	}

	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Number of fragment writes made through this location.
	pub fn history_len(&self) -> usize {
		self.history_len
	}
}

impl Location for UrlLocation {
	fn fragment(&self) -> Option<String> {
		self.url.fragment().map(str::to_owned)
	}

	fn set_fragment(&mut self, fragment: &str) {
		self.url.set_fragment(Some(fragment));
		self.history_len += 1;
	}
}
