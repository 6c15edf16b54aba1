//! Exercise log filters.
//!
//! A log query always matches on the owner's username and may add an
//! inclusive date window and a result cap.

use std::num::NonZeroUsize;

use super::exercise::Exercise;
use super::exercise_date::ExerciseDate;
use super::user::Username;

/// Result cap for a log query.
///
/// The client value is read like an integer prefix: leading whitespace and a
/// sign are allowed, parsing stops at the first non-digit. A missing value,
/// a value without digits, or `0` all mean *no cap*; a negative value caps at
/// its magnitude.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::LogLimit;
///
/// assert_eq!(LogLimit::parse(Some("2")).cap(), Some(2));
/// assert_eq!(LogLimit::parse(Some("0")).cap(), None);
/// assert_eq!(LogLimit::parse(Some("abc")).cap(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogLimit(Option<NonZeroUsize>);

impl LogLimit {
    /// No cap.
    pub const UNBOUNDED: Self = Self(None);

    /// Cap at `count` entries; `0` means no cap.
    pub fn at_most(count: usize) -> Self {
        Self(NonZeroUsize::new(count))
    }

    /// Interpret a raw query-string value.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(leading_integer_magnitude)
            .map(Self::at_most)
            .unwrap_or(Self::UNBOUNDED)
    }

    /// The cap, if any.
    pub fn cap(self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }
}

/// Magnitude of the leading integer in `raw`, saturating on overflow.
fn leading_integer_magnitude(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let digits: Vec<u32> = unsigned
        .chars()
        .map_while(|ch| ch.to_digit(10))
        .collect();
    if digits.is_empty() {
        return None;
    }

    Some(digits.into_iter().fold(0_usize, |acc, digit| {
        acc.saturating_mul(10).saturating_add(digit as usize)
    }))
}

/// Filter applied to the exercise store when reading a user's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub username: Username,
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: LogLimit,
}

impl LogFilter {
    /// Match every exercise owned by `username`.
    pub fn for_username(username: Username) -> Self {
        Self {
            username,
            from: None,
            to: None,
            limit: LogLimit::UNBOUNDED,
        }
    }

    /// Require `date >= from`.
    pub fn with_from(mut self, from: Option<ExerciseDate>) -> Self {
        self.from = from;
        self
    }

    /// Require `date <= to`.
    pub fn with_to(mut self, to: Option<ExerciseDate>) -> Self {
        self.to = to;
        self
    }

    /// Cap the number of returned entries.
    pub fn with_limit(mut self, limit: LogLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `exercise` satisfies the username and date bounds.
    ///
    /// The cap is not part of the predicate; stores apply it after matching.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let date = exercise.date();
        exercise.username() == &self.username
            && self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
    }
}
