//! Grid cells: every easting/northing a written UTM or MGRS value stands for

use crate::coordinate::UtmCoordinate;

/// A latitude / offset-from-central-meridian pair, both in degrees
pub(crate) type Vertex = [f64; 2];

/// Rectangle of eastings and northings inside one zone and band
///
/// Minimum edges are inclusive and maximum edges exclusive, matching the
/// truncation used for MGRS digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub zone: u8,
    pub band: char,
    pub min_easting: f64,
    pub max_easting: f64,
    pub min_northing: f64,
    pub max_northing: f64,
}

impl GridCell {
    /// Square of `size` meters whose south-west corner is `corner`
    pub fn square(corner: &UtmCoordinate, size: f64) -> Self {
        GridCell {
            zone: corner.zone,
            band: corner.band.to_ascii_uppercase(),
            min_easting: corner.easting,
            max_easting: corner.easting + size,
            min_northing: corner.northing,
            max_northing: corner.northing + size,
        }
    }

    /// Every position that rounds to `written` at `decimals` decimal places
    pub fn rounded(written: &UtmCoordinate, decimals: usize) -> Self {
        let half = 0.5 * 10f64.powi(-(decimals as i32));
        GridCell {
            zone: written.zone,
            band: written.band.to_ascii_uppercase(),
            min_easting: written.easting - half,
            max_easting: written.easting + half,
            min_northing: written.northing - half,
            max_northing: written.northing + half,
        }
    }

    pub fn centre(&self) -> (f64, f64) {
        ((self.min_easting + self.max_easting) / 2.0, (self.min_northing + self.max_northing) / 2.0)
    }

    pub fn contains(&self, easting: f64, northing: f64) -> bool {
        (self.min_easting..self.max_easting).contains(&easting)
            && (self.min_northing..self.max_northing).contains(&northing)
    }

    /// Points along the edge, counter-clockwise from the south-west corner
    pub fn outline(&self, per_side: usize) -> Vec<(f64, f64)> {
        let corners = [
            (self.min_easting, self.min_northing),
            (self.max_easting, self.min_northing),
            (self.max_easting, self.max_northing),
            (self.min_easting, self.max_northing),
        ];

        let mut points = Vec::with_capacity(4 * per_side);
        for (index, &(e0, n0)) in corners.iter().enumerate() {
            let (e1, n1) = corners[(index + 1) % corners.len()];
            for step in 0..per_side {
                let t = step as f64 / per_side as f64;
                points.push((e0 + (e1 - e0) * t, n0 + (n1 - n0) * t));
            }
        }
        points
    }
}

/// Clip a closed ring of vertices to a latitude/offset window
///
/// Sutherland-Hodgman against the four window edges; the result is empty
/// when the ring lies wholly outside.
pub(crate) fn clip_to_window(ring: Vec<Vertex>, south: f64, north: f64, west: f64, east: f64) -> Vec<Vertex> {
    let ring = clip_ring(&ring, 0, south, true);
    let ring = clip_ring(&ring, 0, north, false);
    let ring = clip_ring(&ring, 1, west, true);
    clip_ring(&ring, 1, east, false)
}

fn clip_ring(ring: &[Vertex], axis: usize, limit: f64, keep_above: bool) -> Vec<Vertex> {
    let inside = |v: &Vertex| if keep_above { v[axis] >= limit } else { v[axis] <= limit };
    let crossing = |a: &Vertex, b: &Vertex| {
        let t = (limit - a[axis]) / (b[axis] - a[axis]);
        let mut v = [a[0] + (b[0] - a[0]) * t, a[1] + (b[1] - a[1]) * t];
        v[axis] = limit;
        v
    };

    let mut clipped = Vec::with_capacity(ring.len() + 4);
    for (index, current) in ring.iter().enumerate() {
        let previous = &ring[(index + ring.len() - 1) % ring.len()];
        match (inside(previous), inside(current)) {
            (true, true) => clipped.push(*current),
            (true, false) => clipped.push(crossing(previous, current)),
            (false, true) => {
                clipped.push(crossing(previous, current));
                clipped.push(*current);
            },
            (false, false) => {},
        }
    }
    clipped
}
