use crate::model::Coordinate;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;

/// The visible window of a map: a center and a zoom level.
///
/// At zoom 1 the whole world is visible. Every zoom step halves the visible
/// longitude span; the latitude span is always half the longitude span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
}

impl MapView {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn lng_span(&self) -> f64 {
        360.0 / f64::from(1u32 << (self.zoom - MIN_ZOOM))
    }

    pub fn lat_span(&self) -> f64 {
        self.lng_span() / 2.0
    }

    /// `[west, east]`
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span() / 2.0;
        [self.center.lng - half, self.center.lng + half]
    }

    /// `[south, north]`
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Moves the center by a number of pan steps (a tenth of the span each).
    pub fn pan(&mut self, lat_steps: i32, lng_steps: i32) {
        let lat = self.center.lat + f64::from(lat_steps) * self.lat_span() / 10.0;
        let lng = self.center.lng + f64::from(lng_steps) * self.lng_span() / 10.0;
        self.center = Coordinate::clamped(lat, lng);
    }

    pub fn center_on(&mut self, at: Coordinate) {
        self.center = at;
    }

    /// Maps a cell of a `width` x `height` grid showing this view to the
    /// coordinate at the middle of that cell.
    pub fn coordinate_at(&self, width: u16, height: u16, col: u16, row: u16) -> Coordinate {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        let width = f64::from(width.max(1));
        let height = f64::from(height.max(1));

        let lng = west + (f64::from(col) + 0.5) * (east - west) / width;
        let lat = north - (f64::from(row) + 0.5) * (north - south) / height;
        Coordinate::clamped(lat, lng)
    }

    /// The grid cell showing `at`, if it is inside the view.
    pub fn cell_of(&self, width: u16, height: u16, at: Coordinate) -> Option<(u16, u16)> {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();

        let x = (at.lng - west) * f64::from(width) / (east - west);
        let y = (north - at.lat) * f64::from(height) / (north - south);
        if x < 0.0 || y < 0.0 || x >= f64::from(width) || y >= f64::from(height) {
            return None;
        }
        Some((x.floor() as u16, y.floor() as u16))
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        (west..=east).contains(&at.lng) && (south..=north).contains(&at.lat)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(Coordinate { lat: 20.0, lng: 0.0 }, 3)
    }
}
