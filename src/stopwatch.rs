//! Elapsed-time measurement against the monotonic clock.
//!
//! A [`Stopwatch`] accumulates elapsed hnsecs across start/stop cycles, and a [`TimedScope`]
//! reports the lifetime of a scope to a callback when dropped. Both read `CLOCK_MONOTONIC`,
//! so wall-clock adjustments never affect measurements.
//!
//! # Examples
//!
//! ```
//! # use civiltime::stopwatch::Stopwatch;
//! # use civiltime::units::TimeUnit;
//! let mut sw = Stopwatch::start_new().unwrap();
//! let work: u64 = (0..1000).sum();
//! assert!(work > 0);
//! sw.stop().unwrap();
//! assert!(sw.elapsed().total(TimeUnit::Hours).unwrap() < 1);
//! ```

use core::mem::MaybeUninit;
use libc::{timespec, clock_gettime, CLOCK_MONOTONIC};
use crate::units::{Duration, HNSECS_PER_SECOND};

/// Read the monotonic clock in hnsecs. Returns `None` if `libc::clock_gettime` fails.
///
/// Only differences between readings are meaningful; the zero point is unspecified.
pub fn monotonic_hnsecs() -> Option<i64> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_MONOTONIC, time.as_mut_ptr()) {
			0 => {
				let t = time.assume_init();
				Some(
					t.tv_sec
						.saturating_mul(HNSECS_PER_SECOND)
						.saturating_add(t.tv_nsec as i64 / 100)
				)
			}
			_ => None
		}
	}
}

/// A stopwatch accumulating elapsed time across start/stop cycles.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stopwatch {
	accumulated: i64,
	started: Option<i64>
}

impl Stopwatch {
	/// A stopped stopwatch with nothing accumulated.
	pub const fn new() -> Stopwatch {
		Stopwatch { accumulated: 0, started: None }
	}

	/// Create a stopwatch and start it immediately. Returns `None` if the clock read fails.
	pub fn start_new() -> Option<Stopwatch> {
		let mut sw = Stopwatch::new();
		sw.start()?;
		Some(sw)
	}

	/// Start (or restart) timing. A no-op if already running. Returns `None` if the clock read
	/// fails.
	pub fn start(&mut self) -> Option<()> {
		if self.started.is_none() {
			self.started = Some(monotonic_hnsecs()?);
		}
		Some(())
	}

	/// Stop timing, folding the running interval into the accumulated total. A no-op if not
	/// running. Returns `None` if the clock read fails, in which case the running interval is
	/// discarded.
	pub fn stop(&mut self) -> Option<()> {
		if let Some(start) = self.started.take() {
			self.accumulated = self
				.accumulated
				.saturating_add(monotonic_hnsecs()?.saturating_sub(start));
		}
		Some(())
	}

	/// Reset to a stopped stopwatch with nothing accumulated.
	pub fn reset(&mut self) {
		*self = Stopwatch::new();
	}

	/// Whether the stopwatch is currently running.
	pub const fn running(&self) -> bool {
		self.started.is_some()
	}

	/// The total accumulated time, including the currently-running interval if any.
	///
	/// If the clock read fails mid-run, only completed intervals are reported.
	pub fn elapsed(&self) -> Duration {
		let running = match self.started {
			Some(start) => match monotonic_hnsecs() {
				Some(now) => now.saturating_sub(start),
				None => 0
			},
			None => 0
		};
		Duration::from_hnsecs(self.accumulated.saturating_add(running))
	}
}

/// Reports the lifetime of a scope to a callback when dropped.
///
/// If the clock cannot be read at construction or at drop, the callback is not invoked.
///
/// # Examples
///
/// ```
/// # use civiltime::stopwatch::TimedScope;
/// # use civiltime::units::TimeUnit;
/// let mut elapsed = None;
/// {
/// 	let _guard = TimedScope::new(|d| elapsed = Some(d));
/// 	let work: u64 = (0..1000).product();
/// 	assert_eq!(work, 0);
/// }
/// assert!(elapsed.unwrap().total(TimeUnit::Minutes).unwrap() < 1);
/// ```
pub struct TimedScope<F: FnMut(Duration)> {
	start: Option<i64>,
	report: F
}

impl<F: FnMut(Duration)> TimedScope<F> {
	/// Start timing; `report` receives the elapsed time when the guard drops.
	pub fn new(report: F) -> TimedScope<F> {
		TimedScope { start: monotonic_hnsecs(), report }
	}
}

impl<F: FnMut(Duration)> Drop for TimedScope<F> {
	fn drop(&mut self) {
		if let (Some(start), Some(now)) = (self.start, monotonic_hnsecs()) {
			(self.report)(Duration::from_hnsecs(now.saturating_sub(start)));
		}
	}
}
