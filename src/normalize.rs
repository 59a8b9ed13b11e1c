//! Normalizes upstream payloads into core types.
//!
//! The center registry and the boundary source are separate services
//! whose response shapes have drifted over time. Everything tolerated
//! here is a shape seen in production. Items that cannot be normalized
//! are skipped; a malformed payload yields an empty list, never an error.

use serde_json::Value;
use tracing::debug;

use crate::types::{CenterStatus, EvacuationCenter, Point, WaySegment};

/// Extracts evacuation centers from a registry response.
///
/// Items missing an id, name, or coordinates are skipped. Counts default
/// to zero and an unrecognized status reads as open.
pub fn centers_from_response(response: &Value) -> Vec<EvacuationCenter> {
    let Some(items) = center_items(response) else {
        debug!("normalize: response carries no center list");
        return Vec::new();
    };
    items.iter().filter_map(center_from_item).collect()
}

/// The registry has shipped three shapes: `{"success":…,"data":[…]}`,
/// a bare array, and the double-wrapped `{"data":{"data":[…]}}`.
fn center_items(response: &Value) -> Option<&Vec<Value>> {
    if let Some(items) = response.as_array() {
        return Some(items);
    }
    let data = response.get("data")?;
    if let Some(items) = data.as_array() {
        return Some(items);
    }
    data.get("data")?.as_array()
}

fn center_from_item(item: &Value) -> Option<EvacuationCenter> {
    let id = id_field(item)?;
    let name = item
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())?
        .to_string();
    let lat = coord_field(item, &["latitude", "lat"])?;
    let lng = coord_field(item, &["longitude", "lng"])?;

    Some(EvacuationCenter {
        id,
        name,
        lat,
        lng,
        capacity: count_field(item, &["capacity"]),
        current_occupancy: count_field(item, &["current_occupancy", "occupancy"]),
        status: item
            .get("status")
            .and_then(Value::as_str)
            .map(status_from_str)
            .unwrap_or(CenterStatus::Open),
        contact_person: text_field(item, "contact_person"),
        contact_number: text_field(item, "contact_number"),
    })
}

/// Extracts way segments from an Overpass-style boundary response.
///
/// Only `way` elements with at least one geometry node survive; nodes,
/// relations, and ways without inline geometry are skipped.
pub fn segments_from_overpass(response: &Value) -> Vec<WaySegment> {
    let Some(elements) = response.get("elements").and_then(Value::as_array) else {
        debug!("normalize: overpass response has no elements");
        return Vec::new();
    };
    elements.iter().filter_map(segment_from_element).collect()
}

fn segment_from_element(element: &Value) -> Option<WaySegment> {
    if element.get("type").and_then(Value::as_str) != Some("way") {
        return None;
    }
    let id = id_field(element)?;
    let points: Vec<Point> = element
        .get("geometry")?
        .as_array()?
        .iter()
        .filter_map(|node| {
            let lat = lenient_f64(node.get("lat")?)?;
            let lng = coord_field(node, &["lon", "lng"])?;
            Some(Point::new(lat, lng))
        })
        .collect();

    if points.is_empty() {
        return None;
    }
    Some(WaySegment::new(id, points))
}

/// Ids arrive as numbers from some deployments and strings from others;
/// both canonicalize to strings.
fn id_field(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn coord_field(item: &Value, names: &[&str]) -> Option<f64> {
    names.iter().find_map(|name| lenient_f64(item.get(name)?))
}

/// Numbers sometimes arrive as numeric strings.
fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn count_field(item: &Value, names: &[&str]) -> u32 {
    names
        .iter()
        .find_map(|name| lenient_f64(item.get(name)?))
        .map(|count| if count.is_finite() && count > 0.0 { count as u32 } else { 0 })
        .unwrap_or(0)
}

fn status_from_str(raw: &str) -> CenterStatus {
    match raw.trim().to_ascii_lowercase().as_str() {
        "full" => CenterStatus::Full,
        "closed" => CenterStatus::Closed,
        _ => CenterStatus::Open,
    }
}

fn text_field(item: &Value, name: &str) -> Option<String> {
    item.get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
