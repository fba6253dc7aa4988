//! Display-only data for the dashboard panels: seeded crowd samples,
//! analytics series and the literal KPI/roadmap content.

pub mod analytics;
pub mod density;
pub mod kpi;
pub mod roadmap;

use anyhow::{Context, Result, ensure};

use crate::config::Settings;
use density::{DensityGrid, MAX_GRID_SIZE, MAX_SAMPLES, VENUE_CENTER};

/// Synthetic panel data, generated once per session.
#[derive(Clone, Debug, Default)]
pub struct SyntheticData {
    pub density: DensityGrid,
    pub accuracy: Vec<[f64; 2]>,
}

impl SyntheticData {
    pub fn generate(settings: &Settings) -> Result<Self> {
        ensure!(
            (1..=MAX_GRID_SIZE).contains(&settings.heatmap_grid),
            "heatmap_grid {} out of range (1..={MAX_GRID_SIZE})",
            settings.heatmap_grid
        );
        ensure!(
            settings.heatmap_samples <= MAX_SAMPLES,
            "heatmap_samples {} out of range (0..={MAX_SAMPLES})",
            settings.heatmap_samples
        );
        let samples = density::synthetic_samples(
            settings.heatmap_seed,
            settings.heatmap_samples,
            VENUE_CENTER,
            settings.heatmap_spread_deg,
        )
        .context("generate density samples")?;
        let density = DensityGrid::from_samples(
            &samples,
            VENUE_CENTER,
            settings.heatmap_spread_deg,
            settings.heatmap_grid,
        );
        let accuracy =
            analytics::seeded_accuracy_curve(settings.analytics_seed, analytics::TRAINING_EPOCHS)
                .context("generate accuracy curve")?;
        log::debug!(
            "synthetic data ready: {} samples, peak cell {}, {} epochs",
            density.total(),
            density.peak(),
            accuracy.len()
        );
        Ok(Self { density, accuracy })
    }
}
