//! Performance modifier (Mperf) selector
//!
//! Only a winner's multiplier can move away from 1.0. The cost ratio
//! (own / opponent, lower is better) decides how decisive the win was.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::performance::PerformanceSignal;

/// How cost ratios are mapped to Mperf. Fixed per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MperfModel {
    /// Per-format step tables
    #[default]
    Step,
    /// `1 + 0.25 * tanh(2 * (1 - ratio))`; close to but not identical with the step tables
    Continuous,
}

impl MperfModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Continuous => "continuous",
        }
    }
}

impl FromStr for MperfModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" => Ok(Self::Step),
            "continuous" => Ok(Self::Continuous),
            other => Err(format!("unknown Mperf model '{}'", other)),
        }
    }
}

/// Mperf for one side of a comparison.
///
/// Losers, draws, long contests and mismatched signals all get 1.0.
pub fn performance_multiplier(
    model: MperfModel,
    is_winner: bool,
    own: &PerformanceSignal,
    opponent: &PerformanceSignal,
) -> f64 {
    if !is_winner {
        return 1.0;
    }

    match (own, opponent) {
        (PerformanceSignal::Icpc(own), PerformanceSignal::Icpc(opponent)) => {
            select(model, cost_ratio(own.penalty, opponent.penalty), icpc_step)
        }
        (PerformanceSignal::Ioi(own), PerformanceSignal::Ioi(opponent)) => select(
            model,
            cost_ratio(own.final_score_time, opponent.final_score_time),
            ioi_step,
        ),
        _ => 1.0,
    }
}

/// Mperf for a winner whose cost is compared with a plain reference cost
pub fn multiplier_for_costs(
    model: MperfModel,
    is_winner: bool,
    own: &PerformanceSignal,
    reference_cost: f64,
) -> f64 {
    if !is_winner {
        return 1.0;
    }

    match own {
        PerformanceSignal::Icpc(own) => {
            select(model, cost_ratio(own.penalty, reference_cost), icpc_step)
        }
        PerformanceSignal::Ioi(own) => select(
            model,
            cost_ratio(own.final_score_time, reference_cost),
            ioi_step,
        ),
        PerformanceSignal::Long => 1.0,
    }
}

/// `own / opponent`, or `None` when the opponent has no cost to compare with
fn cost_ratio(own: f64, opponent: f64) -> Option<f64> {
    if opponent > 0.0 && own.is_finite() && opponent.is_finite() {
        Some(own / opponent)
    } else {
        None
    }
}

fn select(model: MperfModel, ratio: Option<f64>, step: fn(f64) -> f64) -> f64 {
    match (model, ratio) {
        (_, None) => 1.0,
        (MperfModel::Step, Some(ratio)) => step(ratio),
        (MperfModel::Continuous, Some(ratio)) => continuous(ratio),
    }
}

fn icpc_step(ratio: f64) -> f64 {
    if ratio < 0.7 {
        1.25
    } else if ratio < 0.9 {
        1.15
    } else if ratio <= 1.1 {
        1.0
    } else if ratio <= 1.4 {
        0.9
    } else {
        0.8
    }
}

fn ioi_step(ratio: f64) -> f64 {
    if ratio < 0.6 {
        1.25
    } else if ratio < 0.85 {
        1.15
    } else if ratio <= 1.15 {
        1.0
    } else if ratio <= 1.5 {
        0.9
    } else {
        0.8
    }
}

fn continuous(ratio: f64) -> f64 {
    1.0 + 0.25 * (2.0 * (1.0 - ratio)).tanh()
}
