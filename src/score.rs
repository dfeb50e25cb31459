use rand::rngs::StdRng;
use rand::Rng;

use crate::config::ScoreBands;
use crate::{Objective, PerformanceEstimate};

/// Produces plausible-looking performance estimates, each drawn uniformly
/// from a bounded band. This is not a predictive model: the numbers are not
/// derived from any real ad data, only constrained to stay inside the
/// configured ranges.
pub fn score_objective(
    objective: Objective,
    bands: &ScoreBands,
    rng: &mut StdRng,
) -> PerformanceEstimate {
    let (score_bias, ctr_bias, cpc_bias) = objective_bias(objective);

    PerformanceEstimate {
        performance_score: draw(
            rng,
            bands.performance_min,
            bands.performance_max,
            score_bias,
        ),
        estimated_ctr: draw(rng, bands.ctr_min, bands.ctr_max, ctr_bias),
        estimated_cpc: draw(rng, bands.cpc_min, bands.cpc_max, cpc_bias),
        improvement_potential: draw(rng, bands.improvement_min, bands.improvement_max, 0.0),
    }
}

/// Uniform draw inside the band, with a bias that narrows the range toward
/// one end without ever leaving it. bias > 0 raises the floor, bias < 0
/// lowers the ceiling; |bias| is a fraction of the band width.
fn draw(rng: &mut StdRng, min: f64, max: f64, bias: f64) -> f64 {
    if !(max > min) {
        return min;
    }
    let width = max - min;
    let (low, high) = if bias >= 0.0 {
        (min + width * bias.min(0.9), max)
    } else {
        (min, max + width * bias.max(-0.9))
    };
    rng.gen_range(low..=high)
}

fn objective_bias(objective: Objective) -> (f64, f64, f64) {
    match objective {
        Objective::Awareness => (0.0, 0.0, -0.2),
        Objective::Traffic => (0.05, 0.2, -0.1),
        Objective::Conversions => (0.25, 0.1, 0.1),
        Objective::Engagement => (0.1, 0.15, -0.15),
        Objective::Leads => (0.15, 0.05, 0.05),
        Objective::Sales => (0.25, 0.1, 0.15),
    }
}
