//! Request parameter sanitation.
//!
//! Out-of-range values are replaced with defaults rather than rejected. The
//! enums here record which path was taken so callers (and tests) can tell a
//! caller-supplied value from a default.

use serde::Serialize;
use serde_json::Value;

/// Sentences kept in the extractive summary when the request does not say.
pub const DEFAULT_EXTRACTIVE_K: usize = 2;

pub const DEFAULT_MIN_LENGTH: i64 = 40;
pub const DEFAULT_MAX_LENGTH: i64 = 160;
pub const DEFAULT_NUM_BEAMS: i64 = 4;

/// Requested `min_length` values below this are replaced by the default.
pub const MIN_LENGTH_FLOOR: i64 = 5;

/// Headroom added over `min_length` when `max_length` is raised.
const MAX_LENGTH_HEADROOM: i64 = 20;

// Fixed decoding policy, not overridable per request
pub const DO_SAMPLE: bool = false;
pub const LENGTH_PENALTY: f32 = 0.8;
pub const NO_REPEAT_NGRAM_SIZE: i64 = 3;
pub const EARLY_STOPPING: bool = true;

// =============================================================================
// Extractive K
// =============================================================================

/// Number of sentences to keep in the extractive summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractiveK {
    /// The request carried a positive integer
    Requested(usize),
    /// Absent or not a positive integer
    Defaulted,
}

impl ExtractiveK {
    /// Interpret the raw `extractive_k` field.
    ///
    /// Accepts positive JSON integers, integral floats and numeric strings.
    /// Anything else (zero, negatives, fractions, booleans, text) defaults.
    pub fn parse(raw: Option<&Value>) -> Self {
        let parsed = match raw {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 1.0).map(|f| f as u64)),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };

        match parsed.and_then(|k| usize::try_from(k).ok()) {
            Some(k) if k > 0 => Self::Requested(k),
            _ => Self::Defaulted,
        }
    }

    pub fn value(self) -> usize {
        match self {
            Self::Requested(k) => k,
            Self::Defaulted => DEFAULT_EXTRACTIVE_K,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, Self::Defaulted)
    }
}

// =============================================================================
// Generation parameters
// =============================================================================

/// Sanitized generation parameters actually sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub min_length: i64,
    pub max_length: i64,
    pub num_beams: i64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            num_beams: DEFAULT_NUM_BEAMS,
        }
    }
}

impl GenerationParams {
    /// Apply defaults and the length safety rules.
    ///
    /// - `min_length` below the floor falls back to the default
    /// - `max_length` below the sanitized `min_length` becomes
    ///   `max(min_length + 20, default max)`
    /// - `num_beams` is only defaulted when absent
    pub fn sanitize(
        min_length: Option<i64>,
        max_length: Option<i64>,
        num_beams: Option<i64>,
    ) -> Self {
        let mut min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        if min_length < MIN_LENGTH_FLOOR {
            min_length = DEFAULT_MIN_LENGTH;
        }

        let mut max_length = max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        if max_length < min_length {
            max_length = (min_length.saturating_add(MAX_LENGTH_HEADROOM)).max(DEFAULT_MAX_LENGTH);
        }

        Self {
            min_length,
            max_length,
            num_beams: num_beams.unwrap_or(DEFAULT_NUM_BEAMS),
        }
    }
}
