use std::time::Duration;

use web_time::Instant;

use super::*;

const WINDOW: Duration = Duration::from_millis(500);

#[test]
fn test_disarmed_timer_never_fires() {
	let mut timer: Timer<u32> = Timer::new();
	let now = Instant::now();
	assert!(!timer.is_armed());
	assert_eq!(timer.deadline(), None);
	assert_eq!(timer.poll(now + Duration::from_secs(60)), None);
}

#[test]
fn test_fires_once_after_delay() {
	let mut timer = Timer::new();
	let t0 = Instant::now();
	timer.arm(t0, WINDOW, "publish");

	assert!(timer.is_pending(t0));
	assert_eq!(timer.poll(t0 + Duration::from_millis(499)), None);
	assert_eq!(timer.poll(t0 + WINDOW), Some("publish"));
	assert_eq!(timer.poll(t0 + WINDOW * 2), None);
	assert!(!timer.is_armed());
}

#[test]
fn test_rearm_pushes_deadline_and_replaces_action() {
	let mut timer = Timer::new();
	let t0 = Instant::now();
	timer.arm(t0, WINDOW, 1);
	timer.arm(t0 + Duration::from_millis(400), WINDOW, 2);

	assert_eq!(timer.poll(t0 + WINDOW), None);
	assert_eq!(timer.deadline(), Some(t0 + Duration::from_millis(900)));
	assert_eq!(timer.poll(t0 + Duration::from_millis(900)), Some(2));
}

#[test]
fn test_cancel_drops_pending_action() {
	let mut timer = Timer::new();
	let t0 = Instant::now();
	timer.arm(t0, WINDOW, ());
	assert!(timer.cancel());
	assert!(!timer.cancel());
	assert_eq!(timer.poll(t0 + WINDOW), None);
}

#[test]
fn test_is_pending_false_once_due() {
	let mut timer = Timer::new();
	let t0 = Instant::now();
	timer.arm(t0, Duration::from_secs(5), ());
	assert!(timer.is_pending(t0 + Duration::from_millis(4999)));
	assert!(!timer.is_pending(t0 + Duration::from_secs(5)));
	assert!(timer.is_armed());
}

#[test]
fn test_zero_delay_is_due_immediately() {
	let mut timer = Timer::new();
	let t0 = Instant::now();
	timer.arm(t0, Duration::ZERO, 7);
	assert!(!timer.is_pending(t0));
	assert_eq!(timer.poll(t0), Some(7));
}
