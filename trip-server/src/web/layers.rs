//! Map layers as GeoJSON.
//!
//! Each response carries a fresh `FeatureCollection`; the browser replaces
//! whatever it drew before. Line features carry `layer` and `color`
//! properties, markers also carry a `label`.

use geojson::{Feature, FeatureCollection, Geometry};

use crate::domain::Coordinate;
use crate::planner::{ItinerarySummary, RouteGeometry};

pub const ROUTE_COLOR: &str = "blue";
pub const WALK_COLOR: &str = "lightblue";
pub const TRANSIT_COLOR: &str = "blue";
pub const ORIGIN_COLOR: &str = "red";
pub const DESTINATION_COLOR: &str = "#93979C";

fn line_feature(points: &[Coordinate], layer: &str, color: &str) -> Option<Feature> {
    if points.is_empty() {
        return None;
    }
    let line: geo_types::LineString<f64> = points
        .iter()
        .copied()
        .map(geo_types::Coord::from)
        .collect();

    let mut feature = Feature::from(Geometry::from(&line));
    feature.set_property("layer", layer);
    feature.set_property("color", color);
    Some(feature)
}

fn marker_feature(point: Coordinate, layer: &str, label: &str, color: &str) -> Feature {
    let point = geo_types::Point::from(geo_types::Coord::from(point));

    let mut feature = Feature::from(Geometry::from(&point));
    feature.set_property("layer", layer);
    feature.set_property("label", label);
    feature.set_property("color", color);
    feature
}

/// Line features for a planned route.
///
/// Direct trips draw one blue line. Transit draws the walk in light blue,
/// the rides in blue and the walk out in light blue. Empty segments are
/// skipped.
pub fn route_layers(summary: &ItinerarySummary) -> Vec<Feature> {
    match &summary.route {
        RouteGeometry::Single(points) => line_feature(points, "route", ROUTE_COLOR)
            .into_iter()
            .collect(),
        RouteGeometry::Transit {
            first_walk,
            transit,
            last_walk,
        } => [
            line_feature(first_walk, "walk", WALK_COLOR),
            line_feature(transit, "transit", TRANSIT_COLOR),
            line_feature(last_walk, "walk", WALK_COLOR),
        ]
        .into_iter()
        .flatten()
        .collect(),
    }
}

/// Origin and destination markers for whichever are set.
pub fn selection_layers(
    origin: Option<Coordinate>,
    destination: Option<Coordinate>,
) -> Vec<Feature> {
    let mut features = Vec::with_capacity(2);
    if let Some(origin) = origin {
        features.push(marker_feature(origin, "origin", "Origin", ORIGIN_COLOR));
    }
    if let Some(destination) = destination {
        features.push(marker_feature(
            destination,
            "destination",
            "Destination",
            DESTINATION_COLOR,
        ));
    }
    features
}

/// Everything to draw: the route (if any) under the markers.
pub fn map_layers(
    summary: Option<&ItinerarySummary>,
    origin: Option<Coordinate>,
    destination: Option<Coordinate>,
) -> FeatureCollection {
    let mut features = summary.map(route_layers).unwrap_or_default();
    features.extend(selection_layers(origin, destination));

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
