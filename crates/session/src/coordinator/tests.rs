use pretty_assertions::assert_eq;
use stck_share::{ShareToken, SkipReason, UrlLocation, decode};
use stck_storage::{MemoryStore, Result as StorageResult};

use super::*;

const DEBOUNCE: Duration = Duration::from_millis(500);

fn config() -> PlaygroundConfig {
	PlaygroundConfig::default()
}

fn coordinator() -> ChangeCoordinator<MemoryStore, UrlLocation> {
	ChangeCoordinator::new(
		DocumentSet::new("a", "b", "c"),
		PersistenceAdapter::new(MemoryStore::new()),
		UrlLocation::parse("https://stck.example/").unwrap(),
		&config(),
	)
}

fn fragment_documents(coord: &ChangeCoordinator<MemoryStore, UrlLocation>) -> DocumentSet {
	decode(&coord.location().fragment().unwrap()).unwrap()
}

#[test]
fn test_edit_writes_through_immediately() {
	let mut coord = coordinator();
	let t0 = Instant::now();

	coord.on_change(DocumentKey::Css, Some("body{color:red}"), t0).unwrap();

	assert_eq!(coord.documents().get(DocumentKey::Css), "body{color:red}");
	assert_eq!(
		coord.persistence().read(DocumentKey::Css).unwrap().as_deref(),
		Some("body{color:red}")
	);
	assert_eq!(coord.state(), CoordinatorState::PendingPublish);
	assert_eq!(coord.preview(), None);
}

#[test]
fn test_burst_of_edits_collapses_to_one_publish() {
	let mut coord = coordinator();
	let t0 = Instant::now();

	for i in 0..10u64 {
		let text = format!("<p>{i}</p>");
		coord
			.on_change(DocumentKey::Html, Some(&text), t0 + Duration::from_millis(i * 100))
			.unwrap();
	}

	let last_edit = t0 + Duration::from_millis(900);
	assert_eq!(coord.next_deadline(), Some(last_edit + DEBOUNCE));
	assert!(coord.tick(last_edit + Duration::from_millis(499)).is_none());

	let report = coord.tick(last_edit + DEBOUNCE).expect("debounce fired");
	assert_eq!(report.trigger, PublishTrigger::Edit);
	assert_eq!(report.preview.version(), 1);
	assert!(report.preview.document().unwrap().contains("<p>9</p>"));
	assert_eq!(fragment_documents(&coord).get(DocumentKey::Html), "<p>9</p>");

	assert!(coord.tick(last_edit + DEBOUNCE * 4).is_none());
	assert_eq!(coord.state(), CoordinatorState::Idle);
	assert_eq!(coord.location().history_len(), 1);
}

#[test]
fn test_no_value_is_ignored() {
	let mut coord = coordinator();
	coord.on_change(DocumentKey::Js, None, Instant::now()).unwrap();

	assert_eq!(coord.documents(), &DocumentSet::new("a", "b", "c"));
	assert_eq!(coord.state(), CoordinatorState::Idle);
	assert_eq!(coord.persistence().read(DocumentKey::Js).unwrap(), None);
}

#[test]
fn test_empty_text_is_a_valid_edit() {
	let mut coord = coordinator();
	coord.on_change(DocumentKey::Js, Some(""), Instant::now()).unwrap();

	assert_eq!(coord.documents().get(DocumentKey::Js), "");
	assert_eq!(coord.persistence().read(DocumentKey::Js).unwrap().as_deref(), Some(""));
}

#[test]
fn test_blur_rearms_without_mutating() {
	let mut coord = coordinator();
	let t0 = Instant::now();

	coord.on_change(DocumentKey::Html, Some("x"), t0).unwrap();
	coord.on_blur(t0 + Duration::from_millis(300));
	assert!(coord.tick(t0 + DEBOUNCE).is_none());

	let report = coord.tick(t0 + Duration::from_millis(800)).unwrap();
	assert_eq!(report.trigger, PublishTrigger::Blur);
	assert_eq!(coord.documents(), &DocumentSet::new("x", "b", "c"));
}

#[test]
fn test_blur_alone_publishes_current_documents() {
	let mut coord = coordinator();
	let t0 = Instant::now();
	coord.on_blur(t0);

	let report = coord.tick(t0 + DEBOUNCE).unwrap();
	assert_eq!(report.trigger, PublishTrigger::Blur);
	assert_eq!(fragment_documents(&coord), DocumentSet::new("a", "b", "c"));
}

#[test]
fn test_refresh_publishes_now_and_cancels_pending() {
	let mut coord = coordinator();
	let t0 = Instant::now();

	coord.on_change(DocumentKey::Html, Some("x"), t0).unwrap();
	let report = coord.refresh(t0 + Duration::from_millis(10));

	assert_eq!(report.trigger, PublishTrigger::Refresh);
	assert_eq!(coord.state(), CoordinatorState::Idle);
	assert!(coord.tick(t0 + DEBOUNCE).is_none());
}

#[test]
fn test_identical_publishes_get_distinct_versions() {
	let mut coord = coordinator();
	let t0 = Instant::now();

	let first = coord.refresh(t0);
	let second = coord.refresh(t0 + Duration::from_millis(1));

	assert_eq!(first.preview.uri(), second.preview.uri());
	assert!(second.preview.version() > first.preview.version());
	assert!(second.preview.needs_remount(Some(&first.preview)));
	assert_eq!(coord.preview(), Some(&second.preview));
}

#[test]
fn test_share_is_rate_limited_across_publishes() {
	let mut coord = coordinator();
	let t0 = Instant::now();

	let first = coord.refresh(t0);
	assert!(matches!(first.share, Some(EncodeOutcome::Published(_))));

	coord.on_change(DocumentKey::Css, Some("p{}"), t0 + Duration::from_millis(100)).unwrap();
	let second = coord.tick(t0 + Duration::from_millis(600)).unwrap();
	assert_eq!(second.share, Some(EncodeOutcome::Skipped(SkipReason::RateLimited)));
	assert_eq!(second.preview.version(), 2);
	assert!(second.preview.document().unwrap().contains("<style>p{}</style>"));
	assert_eq!(coord.location().history_len(), 1);

	coord.on_change(DocumentKey::Css, Some("q{}"), t0 + Duration::from_secs(5)).unwrap();
	let third = coord.tick(t0 + Duration::from_millis(5_500)).unwrap();
	let token: Option<&ShareToken> = third.share.as_ref().and_then(EncodeOutcome::token);
	assert!(token.is_some());
	assert_eq!(fragment_documents(&coord).get(DocumentKey::Css), "q{}");
}

#[test]
fn test_binding_lists_other_documents() {
	let coord = coordinator();
	let binding = coord.binding(DocumentKey::Js);

	assert_eq!(binding.language, "javascript");
	assert_eq!(binding.initial_text, "c");
	let related: Vec<_> = binding.related.iter().map(|d| (d.language, d.text.as_str())).collect();
	assert_eq!(related, vec![("html", "a"), ("css", "b")]);
}

#[derive(Debug, Default)]
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
	fn read(&self, _key: &str) -> StorageResult<Option<String>> {
		Err(StorageError::Unavailable)
	}

	fn write(&mut self, _key: &str, _text: &str) -> StorageResult<()> {
		Err(StorageError::Unavailable)
	}
}

#[test]
fn test_storage_failure_propagates() {
	let mut coord = ChangeCoordinator::new(
		DocumentSet::default(),
		PersistenceAdapter::new(UnavailableStore),
		UrlLocation::parse("https://stck.example/").unwrap(),
		&config(),
	);
	let t0 = Instant::now();

	let err = coord.on_change(DocumentKey::Html, Some("x"), t0).unwrap_err();
	assert!(matches!(err, StorageError::Unavailable));

	// The in-memory edit and its publish still go ahead.
	assert_eq!(coord.documents().get(DocumentKey::Html), "x");
	assert!(coord.tick(t0 + DEBOUNCE).is_some());
}

#[test]
fn test_bootstrap_storage_failure_propagates() {
	let location = UrlLocation::parse("https://stck.example/").unwrap();
	let result = ChangeCoordinator::bootstrap(UnavailableStore, location, &config(), Instant::now());
	assert!(matches!(result, Err(StorageError::Unavailable)));
}

#[test]
fn test_custom_debounce_window() {
	let config = PlaygroundConfig::parse("debounce_ms = 50").unwrap();
	let mut coord = ChangeCoordinator::new(
		DocumentSet::default(),
		PersistenceAdapter::new(MemoryStore::new()),
		UrlLocation::parse("https://stck.example/").unwrap(),
		&config,
	);
	let t0 = Instant::now();
	coord.on_change(DocumentKey::Html, Some("x"), t0).unwrap();
	assert!(coord.tick(t0 + Duration::from_millis(50)).is_some());
}
