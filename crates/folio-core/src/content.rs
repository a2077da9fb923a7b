//! Content record types: portfolio projects and writing posts.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One source variant of a video reel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelSource {
    /// Asset path or URL.
    pub src: String,

    /// MIME type, e.g. `video/mp4`.
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Short video showreel attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelAsset {
    /// Poster image shown before playback.
    pub poster: String,

    /// Source variants in preference order. Must not be empty.
    pub sources: Vec<ReelSource>,

    pub width: u32,
    pub height: u32,

    /// Duration in seconds, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
}

/// Interactive 3D model attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeAsset {
    /// Model path (glTF/GLB).
    pub model: String,

    /// Whether the model uses Draco-compressed geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draco: Option<bool>,

    /// Still image used when WebGL is unavailable.
    pub fallback_image: String,

    pub width: u32,
    pub height: u32,

    /// Alternative text for the model and its fallback.
    pub alt: String,
}

/// Labelled link to an external resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A portfolio case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// URL-safe identifier; also the route segment under `/projects/`.
    pub slug: String,

    pub title: String,
    pub role: String,
    pub timeframe: String,

    /// Technology names in display order.
    pub stack: Vec<String>,

    pub problem: String,
    pub approach: String,
    pub outcomes: String,
    pub impact: String,

    #[serde(default)]
    pub reel: Option<ReelAsset>,

    #[serde(default)]
    pub three: Option<ThreeAsset>,

    #[serde(default)]
    pub links: Vec<ExternalLink>,

    /// Display prioritization hint.
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Whether a reel or a 3D model is attached.
    pub fn has_media(&self) -> bool {
        self.reel.is_some() || self.three.is_some()
    }

    /// Stack joined for a single metadata line.
    pub fn stack_label(&self) -> String {
        self.stack.join(", ")
    }
}

/// Index entry for an externally hosted article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,

    /// Publication date as written in the source record.
    #[serde(rename = "dateISO")]
    pub date_iso: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Where the article actually lives.
    pub url: String,
}

impl WritingPost {
    /// Publication date, or `None` if `date_iso` does not parse.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date_iso)
    }
}

/// Parse a date using the ECMAScript date-time string format.
///
/// Accepts `YYYY`, `YYYY-MM` and `YYYY-MM-DD` (also with a signed six-digit
/// year such as `+002025`), optionally followed by `THH:mm`, `THH:mm:ss` or
/// `THH:mm:ss.sss` and then `Z` or a `±HH:mm` offset. A missing month or day
/// is `01`, a missing time is midnight, and a missing offset is UTC.
/// `T24:00` denotes midnight at the end of the day.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let (date_part, time_part) = match value.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };

    let date = parse_calendar_date(date_part)?;
    let Some(time_part) = time_part else {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    };

    let (clock, offset) = split_offset(time_part)?;
    let naive = parse_clock(date, clock)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Exactly `len` ASCII digits.
fn digits(s: &str, len: usize) -> Option<u32> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let (year, rest) = match s.as_bytes().first()? {
        b'+' | b'-' => {
            let year = i32::try_from(digits(s.get(1..7)?, 6)?).ok()?;
            // -000000 is not a valid year
            if s.starts_with('-') && year == 0 {
                return None;
            }
            let year = if s.starts_with('-') { -year } else { year };
            (year, &s[7..])
        }
        _ => (i32::try_from(digits(s.get(..4)?, 4)?).ok()?, &s[4..]),
    };

    let (month, day) = if rest.is_empty() {
        (1, 1)
    } else {
        let rest = rest.strip_prefix('-')?;
        match rest.split_once('-') {
            Some((month, day)) => (digits(month, 2)?, digits(day, 2)?),
            None => (digits(rest, 2)?, 1),
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split `HH:mm[:ss[.sss]]` from a trailing `Z` or `±HH:mm`.
fn split_offset(s: &str) -> Option<(&str, FixedOffset)> {
    if let Some(clock) = s.strip_suffix('Z') {
        return Some((clock, FixedOffset::east_opt(0)?));
    }

    match s.rfind(['+', '-']) {
        Some(pos) => {
            let (clock, offset) = s.split_at(pos);
            let (hours, minutes) = offset[1..].split_once(':')?;
            let (hours, minutes) = (digits(hours, 2)?, digits(minutes, 2)?);
            if hours > 23 || minutes > 59 {
                return None;
            }
            let seconds = (hours * 3600 + minutes * 60) as i32;
            let offset = if offset.starts_with('-') {
                FixedOffset::west_opt(seconds)?
            } else {
                FixedOffset::east_opt(seconds)?
            };
            Some((clock, offset))
        }
        None => Some((s, FixedOffset::east_opt(0)?)),
    }
}

fn parse_clock(date: NaiveDate, s: &str) -> Option<NaiveDateTime> {
    let (hms, fraction) = match s.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (s, None),
    };

    let mut fields = hms.split(':');
    let hour = digits(fields.next()?, 2)?;
    let minute = digits(fields.next()?, 2)?;
    let second = match fields.next() {
        Some(second) => digits(second, 2)?,
        None if fraction.is_some() => return None,
        None => 0,
    };
    if fields.next().is_some() {
        return None;
    }

    let nanos = match fraction {
        Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
            f.parse::<u32>().ok()? * 10u32.pow(9 - f.len() as u32)
        }
        Some(_) => return None,
        None => 0,
    };

    if hour == 24 {
        return (minute == 0 && second == 0 && nanos == 0)
            .then(|| date.succ_opt())
            .flatten()
            .and_then(|next| next.and_hms_opt(0, 0, 0));
    }

    date.and_hms_nano_opt(hour, minute, second, nanos)
}
