use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Normal, NormalError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

pub const VENUE_CENTER: GeoPoint = GeoPoint {
    lat: 40.7128,
    lon: -74.0060,
};

/// Grid half-width in standard deviations; anything further out is clamped to
/// the border cells.
const EXTENT_SIGMAS: f64 = 4.0;

/// Largest grid side the heatmap will bin or paint.
pub const MAX_GRID_SIZE: usize = 256;

/// Upper bound on generated crowd samples.
pub const MAX_SAMPLES: usize = 200_000;

/// Seeded crowd positions scattered normally around `center`.
pub fn synthetic_samples(
    seed: u64,
    count: usize,
    center: GeoPoint,
    spread_deg: f64,
) -> Result<Vec<GeoPoint>, NormalError> {
    let lat = Normal::new(center.lat, spread_deg)?;
    let lon = Normal::new(center.lon, spread_deg)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| GeoPoint {
            lat: rng.sample(lat),
            lon: rng.sample(lon),
        })
        .collect())
}

/// Square histogram of samples. Row 0 is the northern edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DensityGrid {
    size: usize,
    cells: Vec<u32>,
    peak: u32,
}

impl DensityGrid {
    /// `size` is clamped to `1..=MAX_GRID_SIZE`.
    pub fn from_samples(
        points: &[GeoPoint],
        center: GeoPoint,
        spread_deg: f64,
        size: usize,
    ) -> Self {
        let size = size.clamp(1, MAX_GRID_SIZE);
        let half = (spread_deg * EXTENT_SIGMAS).max(f64::EPSILON);
        let mut cells = vec![0u32; size * size];

        let bin = |v: f64, lo: f64| -> usize {
            let t = (v - lo) / (2.0 * half);
            ((t * size as f64).floor().max(0.0) as usize).min(size - 1)
        };

        for p in points {
            let col = bin(p.lon, center.lon - half);
            let row = size - 1 - bin(p.lat, center.lat - half);
            cells[row * size + col] += 1;
        }

        let peak = cells.iter().copied().max().unwrap_or(0);
        Self { size, cells, peak }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn count(&self, row: usize, col: usize) -> u32 {
        self.cells.get(row * self.size + col).copied().unwrap_or(0)
    }

    /// Cell count relative to the densest cell, in `0.0..=1.0`.
    pub fn intensity(&self, row: usize, col: usize) -> f32 {
        if self.peak == 0 {
            return 0.0;
        }
        self.count(row, col) as f32 / self.peak as f32
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn peak(&self) -> u32 {
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_deterministic_per_seed() {
        let a = synthetic_samples(42, 200, VENUE_CENTER, 0.01).unwrap();
        let b = synthetic_samples(42, 200, VENUE_CENTER, 0.01).unwrap();
        let c = synthetic_samples(43, 200, VENUE_CENTER, 0.01).unwrap();
        assert_eq!(a.len(), 200);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn non_finite_spread_is_rejected() {
        assert!(synthetic_samples(1, 10, VENUE_CENTER, f64::NAN).is_err());
    }

    #[test]
    fn every_sample_lands_in_a_cell() {
        let pts = synthetic_samples(42, 1500, VENUE_CENTER, 0.01).unwrap();
        let grid = DensityGrid::from_samples(&pts, VENUE_CENTER, 0.01, 48);
        assert_eq!(grid.size(), 48);
        assert_eq!(grid.total(), 1500);
        assert!(grid.peak() > 0);
    }

    #[test]
    fn outliers_clamp_to_border() {
        let far = [
            GeoPoint { lat: 90.0, lon: 180.0 },
            GeoPoint { lat: -90.0, lon: -180.0 },
        ];
        let grid = DensityGrid::from_samples(&far, VENUE_CENTER, 0.01, 4);
        assert_eq!(grid.count(0, 3), 1);
        assert_eq!(grid.count(3, 0), 1);
    }

    #[test]
    fn centre_is_densest_region() {
        let pts = synthetic_samples(7, 4000, VENUE_CENTER, 0.01).unwrap();
        let grid = DensityGrid::from_samples(&pts, VENUE_CENTER, 0.01, 8);
        let centre = grid.count(3, 3) + grid.count(3, 4) + grid.count(4, 3) + grid.count(4, 4);
        let corners = grid.count(0, 0) + grid.count(0, 7) + grid.count(7, 0) + grid.count(7, 7);
        assert!(centre > corners);
        assert!((0.0..=1.0).contains(&grid.intensity(3, 3)));
    }

    #[test]
    fn oversized_grid_is_clamped() {
        let pts = synthetic_samples(42, 100, VENUE_CENTER, 0.01).unwrap();
        let grid = DensityGrid::from_samples(&pts, VENUE_CENTER, 0.01, 1usize << 33);
        assert_eq!(grid.size(), MAX_GRID_SIZE);
        assert_eq!(grid.total(), 100);

        let zero = DensityGrid::from_samples(&pts, VENUE_CENTER, 0.01, 0);
        assert_eq!(zero.size(), 1);
        assert_eq!(zero.count(0, 0), 100);
    }

    #[test]
    fn empty_grid_has_zero_intensity() {
        let grid = DensityGrid::from_samples(&[], VENUE_CENTER, 0.01, 4);
        assert_eq!(grid.peak(), 0);
        assert_eq!(grid.intensity(1, 1), 0.0);
    }
}
