use std::collections::BTreeSet;

use household_core::{
    errors::ValidationError, AllocationPlan as CoreAllocationPlan, HouseholdFeature,
    HouseholdProfile, PieChart as CorePieChart,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Request body for plan and chart endpoints. Missing fields take the form defaults.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdProfileInput {
    /// Age of the main earner, 20-60
    pub age: Option<u32>,
    /// Risk tolerance, 1 (conservative) to 10 (aggressive)
    pub risk: Option<u32>,
    /// Household size, 1-10
    pub family_members: Option<u32>,
    /// Any of `school_age_children`, `dependent_elders`, `mortgage`
    #[serde(default)]
    pub features: Vec<String>,
    /// Education spending priority, 1-5
    pub edu_priority: Option<u32>,
}

impl TryFrom<HouseholdProfileInput> for HouseholdProfile {
    type Error = ValidationError;

    fn try_from(input: HouseholdProfileInput) -> Result<Self, Self::Error> {
        let defaults = HouseholdProfile::default();
        let features = input
            .features
            .iter()
            .map(|f| f.parse::<HouseholdFeature>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self {
            age: input.age.unwrap_or(defaults.age),
            risk: input.risk.unwrap_or(defaults.risk),
            family_members: input.family_members.unwrap_or(defaults.family_members),
            features,
            edu_priority: input.edu_priority.unwrap_or(defaults.edu_priority),
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    pub family_members: u32,
    pub cash_pct: f64,
    pub fixed_income_pct: f64,
    pub equity_pct: f64,
    pub insurance_pct: f64,
    /// Sum of the four weights; not normalized to one
    pub total_weight: f64,
}

impl From<CoreAllocationPlan> for AllocationPlan {
    fn from(p: CoreAllocationPlan) -> Self {
        Self {
            family_members: p.family_members,
            cash_pct: as_f64(p.cash_pct),
            fixed_income_pct: as_f64(p.fixed_income_pct),
            equity_pct: as_f64(p.equity_pct),
            insurance_pct: as_f64(p.insurance_pct),
            total_weight: as_f64(p.total_weight()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share_pct: f64,
    pub color: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub title: String,
    pub hole: f64,
    pub slices: Vec<PieSlice>,
}

impl From<CorePieChart> for PieChart {
    fn from(c: CorePieChart) -> Self {
        Self {
            title: c.title,
            hole: c.hole,
            slices: c
                .slices
                .into_iter()
                .map(|s| PieSlice {
                    label: s.label,
                    value: as_f64(s.value),
                    share_pct: as_f64(s.share_pct),
                    color: s.color,
                })
                .collect(),
        }
    }
}
