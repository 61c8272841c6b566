use super::canvas::{MapCanvas, Pin, PinHandle, PinLayer};
use super::view::MapView;
use crate::model::Coordinate;
use crate::render::{DELETE_BUTTON_CLASS, Popup, escape_html};
use serde::Serialize;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

const LEAFLET_VERSION: &str = "1.9.4";

/// Remote raster tiles shown under the pins.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

#[derive(Serialize)]
struct MarkerJs<'a> {
    lat: f64,
    lng: f64,
    popup: &'a str,
}

/// A canvas that renders to a standalone Leaflet HTML page.
///
/// The page loads Leaflet and the tile layer from their CDNs; everything
/// else, including the popups, is inlined.
#[derive(Debug, Clone)]
pub struct LeafletMap {
    view: MapView,
    tiles: TileLayer,
    layer: PinLayer,
}

impl LeafletMap {
    pub fn new(view: MapView, tiles: TileLayer) -> Self {
        Self {
            view,
            tiles,
            layer: PinLayer::new(),
        }
    }

    /// Renders the full HTML document.
    pub fn to_document(&self, page_title: &str) -> String {
        let popups: Vec<String> = self.layer.as_slice().iter().map(|p| p.popup.to_html()).collect();
        let markers: Vec<MarkerJs> = self
            .layer
            .as_slice()
            .iter()
            .zip(&popups)
            .map(|(pin, popup)| MarkerJs {
                lat: pin.at.lat,
                lng: pin.at.lng,
                popup,
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
<style>
  html, body, #map {{ height: 100%; margin: 0; }}
  .leaflet-popup-content img {{ max-width: 220px; display: block; margin-top: 4px; }}
  .{delete_class} {{ color: #b00020; cursor: pointer; text-decoration: underline; }}
</style>
</head>
<body>
<div id="map"></div>
<script>
const map = L.map('map').setView([{lat}, {lng}], {zoom});
L.tileLayer({tile_url}, {{ attribution: {attribution} }}).addTo(map);
const markers = {markers};
for (const m of markers) {{
  L.marker([m.lat, m.lng]).addTo(map).bindPopup(m.popup);
}}
document.addEventListener('click', (e) => {{
  const target = e.target.closest('.{delete_class}');
  if (target) {{
    window.prompt('This page is read-only. Delete from your terminal with:', 'atlas delete ' + target.dataset.id);
  }}
}});
</script>
</body>
</html>
"#,
            title = escape_html(page_title),
            version = LEAFLET_VERSION,
            delete_class = DELETE_BUTTON_CLASS,
            lat = self.view.center.lat,
            lng = self.view.center.lng,
            zoom = self.view.zoom,
            tile_url = script_json(&self.tiles.url_template),
            attribution = script_json(&self.tiles.attribution),
            markers = script_json(&markers),
        )
    }
}

impl MapCanvas for LeafletMap {
    fn view(&self) -> &MapView {
        &self.view
    }

    fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    fn place_pin(&mut self, at: Coordinate, popup: Popup) -> PinHandle {
        self.layer.place(at, popup)
    }

    fn remove_pin(&mut self, handle: PinHandle) -> bool {
        self.layer.remove(handle)
    }

    fn clear(&mut self) {
        self.layer.clear();
    }

    fn pins(&self) -> &[Pin] {
        self.layer.as_slice()
    }
}

/// JSON for embedding inside a `<script>` element: `</` cannot close the tag.
fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}
