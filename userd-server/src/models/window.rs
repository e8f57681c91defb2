//! List window for `GET /users`

use serde::Deserialize;

/// Maximum rows returned by a single list call
pub const MAX_COUNT: i64 = 10;

/// Offset/limit window, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    /// Rows to skip (>= 0)
    pub start: i64,
    /// Rows to return (1..=10)
    pub count: i64,
}

impl ListWindow {
    /// Build a window from raw integers.
    ///
    /// - Count outside 1..=10 becomes 10
    /// - Negative start becomes 0
    pub fn new(start: i64, count: i64) -> Self {
        let count = if (1..=MAX_COUNT).contains(&count) {
            count
        } else {
            MAX_COUNT
        };
        Self {
            start: start.max(0),
            count,
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.start
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.count
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self::new(0, MAX_COUNT)
    }
}

/// Raw query parameters. Kept as strings so junk values degrade to 0
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub count: Option<String>,
    pub start: Option<String>,
}

impl ListParams {
    /// Build from decoded query pairs. The first occurrence of a key wins,
    /// repeats are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "count" => &mut params.count,
                "start" => &mut params.start,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

fn lenient_int(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

impl From<ListParams> for ListWindow {
    fn from(params: ListParams) -> Self {
        Self::new(
            lenient_int(params.start.as_deref()),
            lenient_int(params.count.as_deref()),
        )
    }
}
