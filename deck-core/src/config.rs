//! Configuration constants and settings for the deck calculator.

use serde::{Deserialize, Serialize};

use crate::model::{CoatingType, Difficulty, Preparation, RailingMaterial};

/// Percentage adjustment applied to new instances.
pub const DEFAULT_PERCENTAGE: u32 = 100;

/// Coats applied to new instances.
pub const DEFAULT_COATS: u8 = 2;

/// Fewest coats a finish can specify.
pub const MIN_COATS: u8 = 1;

/// Most coats a finish can specify.
pub const MAX_COATS: u8 = 3;

/// Assumed tread depth (ft) when converting a stair run to surface area.
pub const TREAD_DEPTH: f64 = 1.0;

/// Riser surface relative to the tread surface.
pub const RISER_FACTOR: f64 = 1.0;

/// Stringer surface relative to the tread surface.
pub const STRINGER_FACTOR: f64 = 0.75;

/// Relative distance from an integer within which a scaled value snaps to it
/// instead of rounding up.
pub const SCALE_EPS: f64 = 1e-9;

/// Finish defaults stamped onto every newly created instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceDefaults {
    pub coating_type: Option<CoatingType>,
    pub difficulty: Option<Difficulty>,
    pub railing_material: Option<RailingMaterial>,
    pub coats: Option<u8>,
    pub percentage_adjustment: u32,
    /// Explicit preparation set; `None` means the material's default.
    pub preparation: Option<Preparation>,
}

impl Default for InstanceDefaults {
    fn default() -> Self {
        Self {
            coating_type: Some(CoatingType::SemiTransparentStain),
            difficulty: Some(Difficulty::Medium),
            railing_material: Some(RailingMaterial::Wood),
            coats: Some(DEFAULT_COATS),
            percentage_adjustment: DEFAULT_PERCENTAGE,
            preparation: None,
        }
    }
}

impl InstanceDefaults {
    /// Parse defaults from JSON; missing keys keep their built-in values.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::EstimateError::ParseError {
            line: e.line(),
            message: e.to_string(),
        })
    }

    /// Preparation steps a new instance starts with.
    pub fn initial_preparation(&self) -> Preparation {
        self.preparation
            .clone()
            .unwrap_or_else(|| Preparation::for_material(self.railing_material))
    }
}

/// Forgiving numeric helpers for free-text form fields.
pub mod numeric {
    /// Parse the leading decimal number of `s`, or 0.
    ///
    /// Mirrors browser `parseFloat`: leading whitespace is skipped and
    /// trailing garbage ignored, so `"12ft"` is 12. Anything without a
    /// numeric prefix, and any non-finite result, is 0.
    pub fn parse_or_zero(s: &str) -> f64 {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end += 1;
        }

        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;

        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            digits += frac_end - frac_start;
            if digits > 0 {
                end = frac_end;
            }
        }

        if digits == 0 {
            return 0.0;
        }

        // Exponent only counts when digits follow it.
        if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        match s[..end].parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }

    /// Whether a form field is empty after trimming.
    #[inline]
    pub fn is_blank(s: &str) -> bool {
        s.trim().is_empty()
    }

    /// Whether the whole field parses as a number.
    pub fn is_numeric(s: &str) -> bool {
        s.trim().parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
    }

    /// Render a number the way a form field shows it (`20`, `20.5`).
    pub fn format_number(value: f64) -> String {
        if value == 0.0 {
            // Avoid "-0".
            return "0".to_string();
        }
        format!("{}", value)
    }

    /// Round to one decimal place.
    #[inline]
    pub fn round_tenth(value: f64) -> f64 {
        let scaled = value * 10.0;
        if scaled.is_finite() {
            scaled.round() / 10.0
        } else {
            value
        }
    }

    /// Collapse NaN and infinities to 0, like an unparseable field.
    #[inline]
    pub fn finite_or_zero(value: f64) -> f64 {
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}
