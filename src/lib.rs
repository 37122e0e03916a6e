//! Calendar and civil-time arithmetic on 100-nanosecond ticks.
//!
//! The canonical instant representation throughout this crate is the "hnsec" tick: a signed
//! 64-bit count of 100-nanosecond intervals since 0001-01-01T00:00:00 UTC in the proleptic
//! Gregorian calendar. Everything else converts to and from that counter exactly, with integer
//! arithmetic only.
//!
//! The crate is divided by concern: [`calendar`] holds the month/weekday vocabulary and the raw
//! year/month/day <-> day-count math; [`units`] the time-unit vocabulary and fixed-unit
//! [`Duration`]s; [`datetime`] the validated [`Date`], [`Time`] and [`DateTime`] value types
//! with calendar-aware arithmetic; [`epoch`] the conversions to Unix, FILETIME and DOS
//! timestamps plus the ISO fractional-second suffix; [`tz`] fixed-offset zones and
//! [`ZonedDateTime`]; and [`rfc822`] the RFC 822 / RFC 5322 date-time parser.
//!
//! This crate supports `no_std`. If the `now` feature is enabled, the [`epoch`] module gains a
//! helper to read the current wall-clock time ([`epoch::now_ticks`]) and the [`stopwatch`]
//! module provides monotonic elapsed-time measurement.
//!
//! # Examples
//!
//! Converting a Unix timestamp to calendar time.
//! ```
//! # use civiltime::calendar::{Month, Weekday};
//! # use civiltime::datetime::DateTime;
//! # use civiltime::epoch::ticks_from_unix;
//! let dt = DateTime::from_ticks(ticks_from_unix(1_718_617_807));
//! assert_eq!(dt.date().year(), 2024);
//! assert_eq!(dt.date().month(), Month::June);
//! assert_eq!(dt.date().day(), 17);
//! assert_eq!(dt.date().weekday(), Weekday::Monday);
//! assert_eq!(dt.time().hour(), 9);
//! assert_eq!(dt.time().minute(), 50);
//! assert_eq!(dt.time().second(), 7);
//! ```
//!
//! Parsing a mail header date down to an absolute instant.
//! ```
//! # use civiltime::epoch::unix_from_ticks;
//! # use civiltime::rfc822::parse_rfc822;
//! let z = parse_rfc822(b"Sat, 6 Jan 1990 12:14:19 -0800").unwrap();
//! assert_eq!(unix_from_ticks(z.ticks()), 631_656_859);
//! ```

#![no_std]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod calendar;
pub mod units;
pub mod datetime;
pub mod epoch;
pub mod tz;
pub mod rfc822;
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub mod stopwatch;

pub use calendar::{Month, Weekday};
pub use datetime::{Date, DateTime, DateTimeError, DayOverflow, Time};
pub use rfc822::parse_rfc822;
pub use tz::{TimeZone, ZonedDateTime};
pub use units::{Duration, TimeUnit};
