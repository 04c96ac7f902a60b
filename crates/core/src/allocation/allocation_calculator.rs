//! The bucket formula.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{AllocationPlan, HouseholdFeature, HouseholdProfile};

const CASH_BASE: Decimal = dec!(0.3);
const CASH_FLOOR: Decimal = dec!(0.1);
const FIXED_INCOME_BASE: Decimal = dec!(0.4);
const ELDER_CARE_FACTOR: Decimal = dec!(0.5);
const EQUITY_BASE: Decimal = dec!(0.2);
const RISK_STEP: Decimal = dec!(0.05);
const INSURANCE_BASE: Decimal = dec!(0.1);
const EDU_STEP: Decimal = dec!(0.2);

/// Maps a household profile onto the four bucket weights.
///
/// Total over any profile; callers validate bounds first. Only risk,
/// education priority and the dependent-elders flag affect the weights.
pub fn compute_allocation(profile: &HouseholdProfile) -> AllocationPlan {
    let risk = Decimal::from(profile.risk);
    let edu_priority = Decimal::from(profile.edu_priority);

    let family_factor = if profile.has_feature(HouseholdFeature::DependentElders) {
        ELDER_CARE_FACTOR
    } else {
        Decimal::ONE
    };

    AllocationPlan {
        family_members: profile.family_members,
        cash_pct: (CASH_BASE - RISK_STEP * risk).max(CASH_FLOOR),
        fixed_income_pct: FIXED_INCOME_BASE * family_factor,
        equity_pct: EQUITY_BASE + RISK_STEP * risk,
        insurance_pct: INSURANCE_BASE + EDU_STEP * edu_priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(risk: u32, edu_priority: u32, features: &[HouseholdFeature]) -> HouseholdProfile {
        HouseholdProfile {
            risk,
            edu_priority,
            features: features.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn default_household_plan() {
        // age 30, risk 5, three members, no features, education priority 3
        let plan = compute_allocation(&HouseholdProfile::default());
        assert_eq!(plan.family_members, 3);
        assert_eq!(plan.cash_pct, dec!(0.1));
        assert_eq!(plan.fixed_income_pct, dec!(0.4));
        assert_eq!(plan.equity_pct, dec!(0.45));
        assert_eq!(plan.insurance_pct, dec!(0.7));
    }

    #[test]
    fn cash_is_clamped_to_floor() {
        assert_eq!(compute_allocation(&profile(1, 3, &[])).cash_pct, dec!(0.25));
        assert_eq!(compute_allocation(&profile(4, 3, &[])).cash_pct, dec!(0.1));
        assert_eq!(compute_allocation(&profile(10, 3, &[])).cash_pct, dec!(0.1));
    }

    #[test]
    fn dependent_elders_halve_fixed_income() {
        let without = compute_allocation(&profile(5, 3, &[HouseholdFeature::Mortgage]));
        let with = compute_allocation(&profile(
            5,
            3,
            &[HouseholdFeature::Mortgage, HouseholdFeature::DependentElders],
        ));
        assert_eq!(with.fixed_income_pct, dec!(0.2));
        assert_eq!(with.fixed_income_pct * dec!(2), without.fixed_income_pct);
        assert_eq!(with.cash_pct, without.cash_pct);
        assert_eq!(with.equity_pct, without.equity_pct);
        assert_eq!(with.insurance_pct, without.insurance_pct);
    }

    #[test]
    fn other_features_do_not_change_weights() {
        let plain = compute_allocation(&profile(7, 2, &[]));
        let flagged = compute_allocation(&profile(
            7,
            2,
            &[HouseholdFeature::SchoolAgeChildren, HouseholdFeature::Mortgage],
        ));
        assert_eq!(plain, flagged);
    }

    #[test]
    fn equity_and_insurance_scale_linearly() {
        let plan = compute_allocation(&profile(10, 5, &[]));
        assert_eq!(plan.equity_pct, dec!(0.7));
        assert_eq!(plan.insurance_pct, dec!(1.1));

        let plan = compute_allocation(&profile(1, 1, &[]));
        assert_eq!(plan.equity_pct, dec!(0.25));
        assert_eq!(plan.insurance_pct, dec!(0.3));
    }
}
