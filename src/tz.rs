//! The time-zone collaborator interface.
//!
//! The core treats a time zone purely as an opaque UTC-offset capability: given a zone, ask
//! for its offset in seconds, and ask whether it is canonically UTC. Zone-database lookups and
//! DST rules are out of scope and live with external collaborators.
//!
//! One wrinkle inherited from RFC 5322: a `-0000` numeric offset (and any unrecognized legacy
//! zone name) means "the offset is unknown, treat as zero" and is deliberately **not** the
//! same zone as true UTC, even though both report a zero offset. [`TimeZone::Unknown`] keeps
//! that distinction representable.
//!
//! # Examples
//!
//! ```
//! # use civiltime::tz::TimeZone;
//! assert_eq!(TimeZone::Utc.utc_offset(), 0);
//! assert_eq!(TimeZone::Unknown.utc_offset(), 0);
//! assert!(TimeZone::Utc.is_utc());
//! assert!(!TimeZone::Unknown.is_utc());
//! assert_ne!(TimeZone::Utc, TimeZone::Unknown);
//! ```

use crate::datetime::DateTime;
use crate::units::HNSECS_PER_SECOND;

/// A fixed-offset time zone.
///
/// UTC offsets are added to UTC to determine the local time. For example, New York during
/// standard time has a UTC offset of `-5 hours` (or `-18000 seconds`), so `16:00 UTC` becomes
/// `11:00 EST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeZone {
	/// True UTC.
	Utc,
	/// A fixed UTC offset, in seconds.
	Fixed(i32),
	/// An unknown offset, treated as zero but distinct from true UTC (RFC 5322's `-0000`).
	Unknown
}

impl TimeZone {
	/// The UTC offset of this zone, in seconds.
	pub const fn utc_offset(self) -> i32 {
		match self {
			TimeZone::Utc | TimeZone::Unknown => 0,
			TimeZone::Fixed(s) => s
		}
	}

	/// Whether this zone is canonically UTC. `Fixed(0)` and `Unknown` are not.
	pub const fn is_utc(self) -> bool {
		matches!(self, TimeZone::Utc)
	}
}

/// A civil date/time paired with the zone its fields are local to.
///
/// # Examples
///
/// ```
/// # use civiltime::calendar::Month;
/// # use civiltime::datetime::{Date, DateTime, Time};
/// # use civiltime::tz::{TimeZone, ZonedDateTime};
/// let local = ZonedDateTime {
/// 	datetime: DateTime::new(
/// 		Date::new(1970, Month::January, 1).unwrap(),
/// 		Time::new(1, 0, 0, 0).unwrap()
/// 	),
/// 	zone: TimeZone::Fixed(3600)
/// };
/// // 01:00 at UTC+1 is the Unix epoch instant
/// assert_eq!(local.ticks(), 621_355_968_000_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZonedDateTime {
	/// The calendar fields, expressed in local time
	pub datetime: DateTime,
	/// The zone those fields are local to
	pub zone: TimeZone
}

impl ZonedDateTime {
	/// Resolve this local date/time to an absolute instant: hnsecs since 0001-01-01T00:00:00
	/// UTC.
	pub const fn ticks(&self) -> i64 {
		self.datetime
			.ticks()
			.saturating_sub(self.zone.utc_offset() as i64 * HNSECS_PER_SECOND)
	}
}
