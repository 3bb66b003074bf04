//! Conversion from engine DTOs to domain legs.

use tracing::warn;

use crate::domain::{
    Coordinate, DomainError, InvalidCoordinate, ItineraryLeg, OptionId, seconds_f64,
};

use super::types::{EngineResponse, LegDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Geometry is not a line of `[lon, lat]` positions
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),

    /// A point of the geometry is out of range
    #[error("invalid geometry point: {0}")]
    InvalidPoint(#[from] InvalidCoordinate),

    /// A leg measurement is out of range
    #[error(transparent)]
    InvalidLeg(#[from] DomainError),
}

/// Convert an engine response into the leg table.
///
/// Legs without a usable travel time are dropped with a warning. Any other
/// malformed leg fails the whole response, since options cannot be grouped
/// reliably without it.
pub fn convert_response(response: &EngineResponse) -> Result<Vec<ItineraryLeg>, ConversionError> {
    let mut legs = Vec::with_capacity(response.legs.len());

    for dto in &response.legs {
        if let Some(leg) = convert_leg(dto)? {
            legs.push(leg);
        }
    }

    Ok(legs)
}

/// Convert one leg; `Ok(None)` if it has no travel time.
pub fn convert_leg(dto: &LegDto) -> Result<Option<ItineraryLeg>, ConversionError> {
    let option = dto.option.ok_or(ConversionError::MissingField("option"))?;
    let segment = dto.segment.ok_or(ConversionError::MissingField("segment"))?;

    let travel_time = match dto.travel_time {
        Some(t) if t.is_finite() => t,
        _ => {
            warn!(option, segment, "dropping leg without travel time");
            return Ok(None);
        }
    };

    let travel_time = seconds_f64(travel_time)
        .ok_or(DomainError::InvalidLeg("travel time is out of range"))?;
    let wait_time = seconds_f64(dto.wait_time.unwrap_or(0.0))
        .ok_or(DomainError::InvalidLeg("wait time is out of range"))?;

    let geometry = match &dto.geometry {
        Some(geometry) => convert_geometry(geometry)?,
        None => Vec::new(),
    };

    let leg = ItineraryLeg::new(
        OptionId(option),
        segment,
        travel_time,
        wait_time,
        dto.distance.unwrap_or(0.0),
        geometry,
    )?;

    Ok(Some(leg))
}

/// Points of a GeoJSON `LineString`, converted from `[lon, lat]`.
fn convert_geometry(geometry: &geojson::Geometry) -> Result<Vec<Coordinate>, ConversionError> {
    let geojson::Value::LineString(positions) = &geometry.value else {
        return Err(ConversionError::InvalidGeometry("expected a LineString"));
    };

    positions
        .iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Coordinate::new(*lat, *lon).map_err(ConversionError::from),
            _ => Err(ConversionError::InvalidGeometry(
                "position needs longitude and latitude",
            )),
        })
        .collect()
}
