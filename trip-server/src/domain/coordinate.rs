//! Geographic coordinate type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct InvalidCoordinate {
    input: String,
    reason: &'static str,
}

impl InvalidCoordinate {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A WGS84 point in degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Both are finite. This type guarantees validity by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Coordinate;
///
/// let durham = Coordinate::parse("35.994, -78.8986").unwrap();
/// assert_eq!(durham.lat(), 35.994);
/// assert_eq!(durham.lon(), -78.8986);
/// assert_eq!(durham.to_string(), "35.994, -78.8986");
///
/// // Out of range latitude
/// assert!(Coordinate::parse("91.0, 0.0").is_err());
///
/// // Not a pair
/// assert!(Coordinate::parse("35.994").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Downtown Durham, NC.
    pub const DURHAM: Coordinate = Coordinate {
        lat: 35.9940,
        lon: -78.8986,
    };

    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        let shown = format!("{lat:?}, {lon:?}");
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinate::new(&shown, "must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::new(
                &shown,
                "latitude must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate::new(
                &shown,
                "longitude must be between -180 and 180",
            ));
        }
        Ok(Self { lat, lon })
    }

    /// Parse `"lat, lon"` text as typed into the origin/destination inputs.
    ///
    /// Whitespace around either number is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidCoordinate> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InvalidCoordinate::new(
                s,
                "expected two comma-separated numbers",
            ));
        };

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| InvalidCoordinate::new(s, "latitude is not a number"))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| InvalidCoordinate::new(s, "longitude is not a number"))?;

        Self::new(lat, lon).map_err(|e| InvalidCoordinate::new(s, e.reason))
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// GeoJSON position order: `[lon, lat]`.
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

impl fmt::Display for Coordinate {
    /// Writes `"lat, lon"`, keeping a trailing `.0` on whole numbers so the
    /// text parses back to the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, {:?}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Coordinate> for geo_types::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo_types::Coord { x: c.lon, y: c.lat }
    }
}

/// Unvalidated wire form of a coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lon)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        RawCoordinate {
            lat: c.lat,
            lon: c.lon,
        }
    }
}
