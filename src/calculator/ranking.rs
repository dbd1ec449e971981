//! Ordering strategies by headline ROI

use serde::Serialize;

use super::returns::{StrategyComparison, StrategyKind};

/// Position of a strategy relative to the other two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiTier {
    Best,
    Middle,
    Worst,
}

/// One entry of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedStrategy {
    pub strategy: StrategyKind,
    pub roi: f64,
    /// 1 = highest ROI
    pub rank: u8,
    pub tier: RoiTier,
}

impl StrategyComparison {
    /// Strategies from highest to lowest headline ROI
    ///
    /// Ties keep airbnb, lease, flip order.
    pub fn ranking(&self) -> Vec<RankedStrategy> {
        let mut scored: Vec<(StrategyKind, f64)> = StrategyKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind).headline_roi()))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .enumerate()
            .map(|(i, (strategy, roi))| RankedStrategy {
                strategy,
                roi,
                rank: i as u8 + 1,
                tier: match i {
                    0 => RoiTier::Best,
                    1 => RoiTier::Middle,
                    _ => RoiTier::Worst,
                },
            })
            .collect()
    }

    /// The strategy with the highest headline ROI
    pub fn best(&self) -> StrategyKind {
        self.ranking()[0].strategy
    }
}
