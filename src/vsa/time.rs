use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{Result, VsaError};

/// Offset-less form, read as UTC. `%.f` also accepts a missing fraction.
const BARE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Normalizes an evaluation timestamp to RFC3339 in UTC (`...Z`).
///
/// Accepts RFC3339 with any offset, or `YYYY-MM-DDTHH:MM:SS` which is taken
/// to already be UTC. Fractional seconds are dropped. The date/time separator
/// must be an uppercase `T` and a UTC designator an uppercase `Z`.
pub fn normalize_time(value: &str) -> Result<String> {
    if !has_canonical_designators(value) {
        return Err(VsaError::TimeFormat(value.to_owned()));
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Ok(format_utc(t.with_timezone(&Utc)));
    }

    if let Ok(t) = NaiveDateTime::parse_from_str(value, BARE_FORMAT) {
        return Ok(format_utc(Utc.from_utc_datetime(&t)));
    }

    Err(VsaError::TimeFormat(value.to_owned()))
}

// Uppercase 'T' separator and 'Z' designator only.
fn has_canonical_designators(value: &str) -> bool {
    value.as_bytes().get(10) == Some(&b'T') && !value.ends_with('z')
}

fn format_utc(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
