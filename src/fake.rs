//! Primitive value synthesis.
//!
//! Draws styled strings and date/time values from the caller's RNG so the
//! whole object graph consumes a single seeded stream. String styles map
//! onto the `fake` crate's fakers; plain strings come from a printable
//! ASCII charset with a bounded random length.

use crate::descriptor::StringStyle;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

// Generated timestamps fall in [2000-01-01, 2030-01-01).
const EPOCH_MIN: i64 = 946_684_800;
const EPOCH_MAX: i64 = 1_893_456_000;

const SECONDS_PER_DAY: u32 = 86_400;

pub fn string<R: Rng + ?Sized>(rng: &mut R, style: &StringStyle) -> String {
    match style {
        StringStyle::Plain { max_len } => {
            let len = rng.random_range(1..=(*max_len).max(1));
            (0..len)
                .map(|_| rng.random_range(b'!'..=b'~') as char)
                .collect()
        }
        StringStyle::Word => Word().fake_with_rng(rng),
        StringStyle::Sentence => Sentence(3..8).fake_with_rng(rng),
        StringStyle::FullName => Name().fake_with_rng(rng),
        StringStyle::Email => SafeEmail().fake_with_rng(rng),
        StringStyle::Company => CompanyName().fake_with_rng(rng),
        StringStyle::Uuid => uuid(rng),
    }
}

/// Version-4 UUID string assembled from raw draws.
pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        rng.random::<u32>(),
        rng.random::<u16>(),
        (rng.random::<u16>() & 0x0FFF) | 0x4000,
        (rng.random::<u16>() & 0x3FFF) | 0x8000,
        rng.random::<u64>() & 0xFFFF_FFFF_FFFF_u64
    )
}

pub fn int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

pub fn float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    // random_range panics on NaN or infinite endpoints.
    if !min.is_finite() || !max.is_finite() {
        return 0.0;
    }
    if min >= max {
        return min;
    }
    rng.random_range(min..max)
}

pub fn datetime<R: Rng + ?Sized>(rng: &mut R) -> NaiveDateTime {
    let secs = rng.random_range(EPOCH_MIN..EPOCH_MAX);
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.naive_utc())
}

pub fn date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    datetime(rng).date()
}

pub fn time<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let secs = rng.random_range(0..SECONDS_PER_DAY);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN)
}
