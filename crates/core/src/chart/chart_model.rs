//! Pie chart models for visualizing an allocation plan.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocation::{AllocationPlan, AssetBucket};
use crate::constants::{CHART_HOLE, PASTEL_PALETTE};

/// One wedge of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub bucket: AssetBucket,
    /// Display name of the bucket
    pub label: String,
    /// Raw weight from the plan
    pub value: Decimal,
    /// Share of the whole pie (0-100), one decimal place
    pub share_pct: Decimal,
    /// Fill color (hex code)
    pub color: String,
}

/// Donut chart of a household plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub title: String,
    /// Inner radius as a fraction of the outer radius
    pub hole: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Lays out a plan as a donut, normalizing weights into shares.
    pub fn from_plan(plan: &AllocationPlan) -> Self {
        let total = plan.total_weight();

        let slices = plan
            .buckets()
            .iter()
            .enumerate()
            .map(|(i, (bucket, value))| {
                let share_pct = if total > Decimal::ZERO {
                    (*value / total * dec!(100)).round_dp(1)
                } else {
                    Decimal::ZERO
                };
                PieSlice {
                    bucket: *bucket,
                    label: bucket.label().to_string(),
                    value: *value,
                    share_pct,
                    color: PASTEL_PALETTE[i % PASTEL_PALETTE.len()].to_string(),
                }
            })
            .collect();

        Self {
            title: format!(
                "{}-person household allocation plan",
                plan.family_members
            ),
            hole: CHART_HOLE,
            slices,
        }
    }

    pub fn total_value(&self) -> Decimal {
        self.slices.iter().map(|s| s.value).sum()
    }
}
