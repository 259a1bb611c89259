//! Embedded route geometry, as GeoJSON.

use anyhow::{Result, bail};
use serde::Deserialize;

use gd_core::GeoPoint;

/// Unter den Linden → Hallesches Tor, down Friedrichstraße.
pub const FRIEDRICHSTRASSE: &str = r#"{
  "type": "Feature",
  "properties": {},
  "geometry": {
    "type": "LineString",
    "coordinates": [
      [13.38886, 52.517037],
      [13.388963, 52.516011],
      [13.389218, 52.513648],
      [13.389503, 52.511232],
      [13.389789, 52.508770],
      [13.390065, 52.507392],
      [13.390322, 52.506043],
      [13.390698, 52.503861],
      [13.391034, 52.501904],
      [13.391427, 52.499817],
      [13.391512, 52.498502],
      [13.389704, 52.497762],
      [13.387930, 52.497318],
      [13.385983, 52.496891]
    ]
  }
}"#;

/// Brandenburger Tor → Siegessäule along Straße des 17. Juni.
pub const TIERGARTEN: &str = r#"{
  "type": "LineString",
  "coordinates": [
    [13.377704, 52.516275],
    [13.372441, 52.515998],
    [13.365162, 52.515560],
    [13.357904, 52.515081],
    [13.352460, 52.514741],
    [13.350112, 52.514543]
  ]
}"#;

#[derive(Deserialize)]
struct LineString {
    #[serde(rename = "type")]
    kind:        String,
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeoJson {
    Feature { geometry: LineString },
    Geometry(LineString),
}

/// Parse a GeoJSON `LineString`, bare or wrapped in a `Feature`.
pub fn parse_line_string(json: &str) -> Result<Vec<GeoPoint>> {
    let line = match serde_json::from_str::<GeoJson>(json)? {
        GeoJson::Feature { geometry } => geometry,
        GeoJson::Geometry(line) => line,
    };
    if line.kind != "LineString" {
        bail!("expected a LineString, got {}", line.kind);
    }
    Ok(line.coordinates.into_iter().map(GeoPoint::from).collect())
}
