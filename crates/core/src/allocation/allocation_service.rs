//! Service for computing household allocation plans with a TTL cache.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use log::{debug, info};

use crate::chart::PieChart;
use crate::constants::DEFAULT_PLAN_CACHE_TTL_SECS;
use crate::errors::Result;

use super::{compute_allocation, AllocationPlan, HouseholdProfile};

/// Trait for allocation service.
pub trait AllocationServiceTrait: Send + Sync {
    /// Validates the profile and returns its plan, from cache when fresh.
    fn calculate_allocation(&self, profile: &HouseholdProfile) -> Result<AllocationPlan>;

    /// Builds the donut chart for a profile's plan.
    fn build_chart(&self, profile: &HouseholdProfile) -> Result<PieChart>;

    /// Drops every cached plan.
    fn clear_cache(&self);

    /// Number of plans currently held, fresh or not.
    fn cached_entries(&self) -> usize;
}

/// Cache entry for a computed plan.
struct CachedPlan {
    plan: AllocationPlan,
    cached_at: DateTime<Utc>,
}

/// Computes allocation plans, memoizing them per profile for a fixed TTL.
pub struct AllocationService {
    ttl: Duration,
    cache: DashMap<HouseholdProfile, CachedPlan>,
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}

impl AllocationService {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_PLAN_CACHE_TTL_SECS as i64))
    }

    /// Creates a service whose plans expire after `ttl`. A zero TTL disables caching.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            cache: DashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn caching_enabled(&self) -> bool {
        self.ttl > Duration::zero()
    }

    fn is_fresh(&self, entry: &CachedPlan, now: DateTime<Utc>) -> bool {
        now - entry.cached_at < self.ttl
    }

    pub(crate) fn calculate_at(
        &self,
        profile: &HouseholdProfile,
        now: DateTime<Utc>,
    ) -> Result<AllocationPlan> {
        profile.validate()?;

        if !self.caching_enabled() {
            return Ok(compute_allocation(profile));
        }

        if let Some(entry) = self.cache.get(profile) {
            if self.is_fresh(&entry, now) {
                debug!("Allocation cache hit for {:?}", profile);
                return Ok(entry.plan.clone());
            }
        }

        debug!("Allocation cache miss for {:?}", profile);
        let plan = compute_allocation(profile);
        info!(
            "Computed allocation plan for a {}-person household (risk {}, education priority {})",
            profile.family_members, profile.risk, profile.edu_priority
        );

        self.purge_expired(now);
        self.cache.insert(
            profile.clone(),
            CachedPlan {
                plan: plan.clone(),
                cached_at: now,
            },
        );
        Ok(plan)
    }

    fn purge_expired(&self, now: DateTime<Utc>) {
        let before = self.cache.len();
        self.cache.retain(|_, entry| now - entry.cached_at < self.ttl);
        let purged = before - self.cache.len();
        if purged > 0 {
            debug!("Purged {} expired allocation plans", purged);
        }
    }
}

impl AllocationServiceTrait for AllocationService {
    fn calculate_allocation(&self, profile: &HouseholdProfile) -> Result<AllocationPlan> {
        self.calculate_at(profile, Utc::now())
    }

    fn build_chart(&self, profile: &HouseholdProfile) -> Result<PieChart> {
        let plan = self.calculate_allocation(profile)?;
        Ok(PieChart::from_plan(&plan))
    }

    fn clear_cache(&self) {
        self.cache.clear();
    }

    fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
