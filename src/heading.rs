//! Heading representation and formatting.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A heading in degrees, clockwise from north.
///
/// The value is never normalized: `360.0` and `0.0` stay distinct, and
/// negative or non-finite values are kept as-is. Formatting follows
/// JavaScript's `Number.prototype.toString`:
///
/// - integral values print without a fraction (`45`)
/// - `-0` prints as `0`
/// - magnitudes of at least `1e21` or below `1e-6` use exponent form (`1e+21`, `1e-7`)
/// - NaN prints `NaN`; infinities print `Infinity` and `-Infinity`
///
/// In JSON, finite headings are plain numbers and non-finite headings are
/// the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
///
/// # Example
///
/// ```
/// use shuttle_marker::Heading;
///
/// assert_eq!(Heading::new(45.0).to_string(), "45");
/// assert_eq!(Heading::new(12.5).to_string(), "12.5");
/// assert_eq!(Heading::new(f64::INFINITY).to_string(), "Infinity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Heading(pub f64);

impl Heading {
    pub const NORTH: Self = Self(0.0);

    pub fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Returns the compass point nearest to this heading.
    ///
    /// The heading is reduced modulo 360 for this lookup only. Boundaries
    /// round clockwise, so `22.5` is `NE`. Returns `None` for NaN and
    /// infinite headings.
    pub fn cardinal(&self) -> Option<CardinalPoint> {
        if !self.0.is_finite() {
            return None;
        }
        let degrees = self.0.rem_euclid(360.0);
        let index = ((degrees + 22.5) / 45.0).floor() as usize % 8;
        Some(CardinalPoint::ALL[index])
    }

    /// Returns the raw bit pattern, used as a hash key.
    pub(crate) fn to_bits(self) -> u64 {
        self.0.to_bits()
    }
}

impl From<f64> for Heading {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            // Covers negative zero.
            f.write_str("0")
        } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
            let exp = format!("{:e}", value);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, power)
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{}", value)
        }
    }
}

impl Serialize for Heading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(self)
        }
    }
}

/// Wire form accepted for a heading.
#[derive(Deserialize)]
#[serde(untagged)]
enum HeadingRepr {
    Degrees(f64),
    Named(String),
}

impl<'de> Deserialize<'de> for Heading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match HeadingRepr::deserialize(deserializer)? {
            HeadingRepr::Degrees(degrees) => Ok(Self(degrees)),
            HeadingRepr::Named(name) => match name.as_str() {
                "NaN" => Ok(Self(f64::NAN)),
                "Infinity" => Ok(Self(f64::INFINITY)),
                "-Infinity" => Ok(Self(f64::NEG_INFINITY)),
                other => Err(serde::de::Error::custom(format!(
                    "invalid heading {:?}, expected a number, \"NaN\", \"Infinity\" or \"-Infinity\"",
                    other
                ))),
            },
        }
    }
}

// ============================================================================
// CardinalPoint
// ============================================================================

/// One of the eight principal compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum CardinalPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CardinalPoint {
    /// All points in clockwise order starting at north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CardinalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
