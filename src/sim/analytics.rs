use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Normal, NormalError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub response_minutes: f64,
    pub accuracy_pct: f64,
}

pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "Manual Monitoring",
        response_minutes: 18.0,
        accuracy_pct: 65.0,
    },
    Scenario {
        name: "Standard CCTV",
        response_minutes: 12.0,
        accuracy_pct: 82.0,
    },
    Scenario {
        name: "SmartCrowd AI",
        response_minutes: 2.8,
        accuracy_pct: 99.0,
    },
];

pub const TRAINING_EPOCHS: usize = 100;

/// Running sum of `epochs` draws from N(0.5, 0.1), as `[epoch, value]` points.
pub fn accuracy_curve(rng: &mut impl Rng, epochs: usize) -> Result<Vec<[f64; 2]>, NormalError> {
    let step = Normal::new(0.5, 0.1)?;
    let mut total = 0.0;
    Ok((0..epochs)
        .map(|epoch| {
            total += rng.sample(step);
            [epoch as f64, total]
        })
        .collect())
}

pub fn seeded_accuracy_curve(
    seed: Option<u64>,
    epochs: usize,
) -> Result<Vec<[f64; 2]>, NormalError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    accuracy_curve(&mut rng, epochs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_scenario_is_fastest() {
        let fastest = SCENARIOS
            .iter()
            .min_by(|a, b| a.response_minutes.total_cmp(&b.response_minutes))
            .unwrap();
        assert_eq!(fastest.name, "SmartCrowd AI");
    }

    #[test]
    fn curve_has_requested_length_and_epochs() {
        let curve = seeded_accuracy_curve(Some(1), TRAINING_EPOCHS).unwrap();
        assert_eq!(curve.len(), TRAINING_EPOCHS);
        assert_eq!(curve[0][0], 0.0);
        assert_eq!(curve[99][0], 99.0);
    }

    #[test]
    fn curve_is_deterministic_for_seed() {
        assert_eq!(
            seeded_accuracy_curve(Some(9), 20).unwrap(),
            seeded_accuracy_curve(Some(9), 20).unwrap()
        );
    }

    #[test]
    fn curve_trends_upwards() {
        let curve = seeded_accuracy_curve(Some(3), TRAINING_EPOCHS).unwrap();
        // Mean step is 0.5, so 100 epochs land well above 30.
        assert!(curve[TRAINING_EPOCHS - 1][1] > 30.0);
    }

    #[test]
    fn zero_epochs_is_empty() {
        assert!(seeded_accuracy_curve(Some(3), 0).unwrap().is_empty());
    }
}
