use thiserror::Error;

use crate::core::options;
use crate::core::panels::{Advisory, TabUpdate};
use crate::models::{GeoPoint, LocationInfo};

/// Centre used when the draft has no coordinates yet
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: 37.3595704,
    longitude: 127.105399,
};

/// Zoom used when the draft has none
pub const DEFAULT_ZOOM: u8 = 10;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Map widget is not available: {0}")]
    Unavailable(String),
}

/// Opaque handle to a map created by a [`MapProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHandle(pub u64);

/// Opaque handle to a marker placed by a [`MapProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Interactive map widget supplied by the host
///
/// Click events are delivered back through [`LocationPanel::handle_click`].
pub trait MapProvider {
    fn create_map(&mut self, options: MapOptions) -> Result<MapHandle, MapError>;

    fn place_marker(&mut self, map: MapHandle, point: GeoPoint) -> MarkerHandle;

    fn move_marker(&mut self, marker: MarkerHandle, point: GeoPoint);
}

/// Widget state of the location tab: the map and its single marker
#[derive(Debug, Default)]
pub struct LocationPanel {
    map: Option<MapHandle>,
    marker: Option<MarkerHandle>,
}

impl LocationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.map.is_some()
    }

    /// Create the map once and flag it ready in the draft
    ///
    /// Returns `None` when the map already exists.
    pub fn mount<P: MapProvider>(
        &mut self,
        provider: &mut P,
        location: &LocationInfo,
    ) -> Result<Option<TabUpdate>, MapError> {
        if self.map.is_some() {
            return Ok(None);
        }

        let center = if location.latitude != 0.0 || location.longitude != 0.0 {
            GeoPoint {
                latitude: location.latitude,
                longitude: location.longitude,
            }
        } else {
            DEFAULT_CENTER
        };
        let zoom = if location.zoom == 0 { DEFAULT_ZOOM } else { location.zoom };

        let map = provider.create_map(MapOptions { center, zoom })?;
        self.map = Some(map);

        tracing::debug!("Map mounted at {:?} (zoom {})", center, zoom);

        Ok(Some(TabUpdate::Location(LocationInfo {
            is_map_loaded: true,
            ..location.clone()
        })))
    }

    /// Upsert the marker at the clicked point and record it in the draft
    pub fn handle_click<P: MapProvider>(
        &mut self,
        provider: &mut P,
        location: &LocationInfo,
        point: GeoPoint,
    ) -> Option<TabUpdate> {
        let map = self.map?;

        match self.marker {
            Some(marker) => provider.move_marker(marker, point),
            None => self.marker = Some(provider.place_marker(map, point)),
        }

        Some(TabUpdate::Location(LocationInfo {
            selected_location: Some(point),
            latitude: point.latitude,
            longitude: point.longitude,
            ..location.clone()
        }))
    }
}

pub fn set_nearby_range(location: &LocationInfo, range: &str) -> Option<TabUpdate> {
    if !options::is_known_nearby_range(range) {
        return None;
    }
    Some(TabUpdate::Location(LocationInfo {
        nearby_range: Some(range.to_string()),
        ..location.clone()
    }))
}

/// Script URL that loads the map widget for `client_id`
pub fn map_script_url(script_base: &str, client_id: &str) -> String {
    format!("{}?ncpClientId={}", script_base, urlencoding::encode(client_id))
}

pub fn advisories(location: &LocationInfo) -> Vec<Advisory> {
    let mut out = Vec::new();
    if location.selected_location.is_none() {
        out.push(Advisory::new("selectedLocation", "Pick your location on the map."));
    }
    if location.nearby_range.is_none() {
        out.push(Advisory::new("nearbyRange", "Select a nearby range."));
    }
    out
}
