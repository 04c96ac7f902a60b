//! Household profile and allocation plan models.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::{Result, ValidationError};

/// Special circumstances a household can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdFeature {
    SchoolAgeChildren,
    DependentElders,
    Mortgage,
}

impl HouseholdFeature {
    /// All features in the order they are offered to the user.
    pub const ALL: [HouseholdFeature; 3] = [
        HouseholdFeature::SchoolAgeChildren,
        HouseholdFeature::DependentElders,
        HouseholdFeature::Mortgage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseholdFeature::SchoolAgeChildren => "school_age_children",
            HouseholdFeature::DependentElders => "dependent_elders",
            HouseholdFeature::Mortgage => "mortgage",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HouseholdFeature::SchoolAgeChildren => "School-age children",
            HouseholdFeature::DependentElders => "Dependent elders",
            HouseholdFeature::Mortgage => "Mortgage",
        }
    }
}

impl fmt::Display for HouseholdFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseholdFeature {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HouseholdFeature::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownFeature(s.to_string()))
    }
}

/// The parameters a household enters to get an allocation plan.
///
/// `features` is a set, so two profiles that list the same flags in a
/// different order are equal and share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseholdProfile {
    /// Age of the household's main earner
    pub age: u32,
    /// Risk tolerance, 1 (conservative) to 10 (aggressive)
    pub risk: u32,
    pub family_members: u32,
    pub features: BTreeSet<HouseholdFeature>,
    /// Education spending priority, 1 (lowest) to 5 (highest)
    pub edu_priority: u32,
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE as u32,
            risk: DEFAULT_RISK as u32,
            family_members: DEFAULT_FAMILY_MEMBERS as u32,
            features: BTreeSet::new(),
            edu_priority: DEFAULT_EDU_PRIORITY as u32,
        }
    }
}

impl HouseholdProfile {
    pub fn has_feature(&self, feature: HouseholdFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Checks every parameter against its bounds, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age, AGE_MIN, AGE_MAX)?;
        check_range("risk", self.risk, RISK_MIN, RISK_MAX)?;
        check_range(
            "familyMembers",
            self.family_members,
            FAMILY_MEMBERS_MIN,
            FAMILY_MEMBERS_MAX,
        )?;
        check_range(
            "eduPriority",
            self.edu_priority,
            EDU_PRIORITY_MIN,
            EDU_PRIORITY_MAX,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, min: u8, max: u8) -> Result<()> {
    if value < min as u32 || value > max as u32 {
        return Err(ValidationError::OutOfRange {
            field,
            value: value as i64,
            min: min as i64,
            max: max as i64,
        }
        .into());
    }
    Ok(())
}

/// The four asset buckets of a plan, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetBucket {
    Cash,
    FixedIncome,
    Equity,
    Insurance,
}

impl AssetBucket {
    pub const ALL: [AssetBucket; 4] = [
        AssetBucket::Cash,
        AssetBucket::FixedIncome,
        AssetBucket::Equity,
        AssetBucket::Insurance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetBucket::Cash => "Cash",
            AssetBucket::FixedIncome => "Fixed income",
            AssetBucket::Equity => "Equity",
            AssetBucket::Insurance => "Insurance",
        }
    }
}

/// Allocation weights derived from a household profile.
///
/// Weights are raw formula outputs and are not normalized; their sum is
/// usually above one. Shares of the whole are computed by the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    /// Household size, used for the chart title
    pub family_members: u32,
    pub cash_pct: Decimal,
    pub fixed_income_pct: Decimal,
    pub equity_pct: Decimal,
    pub insurance_pct: Decimal,
}

impl AllocationPlan {
    pub fn weight(&self, bucket: AssetBucket) -> Decimal {
        match bucket {
            AssetBucket::Cash => self.cash_pct,
            AssetBucket::FixedIncome => self.fixed_income_pct,
            AssetBucket::Equity => self.equity_pct,
            AssetBucket::Insurance => self.insurance_pct,
        }
    }

    /// Bucket weights in display order.
    pub fn buckets(&self) -> [(AssetBucket, Decimal); 4] {
        AssetBucket::ALL.map(|bucket| (bucket, self.weight(bucket)))
    }

    pub fn total_weight(&self) -> Decimal {
        self.buckets().iter().map(|(_, w)| *w).sum()
    }
}
