/// Inclusive bounds and defaults for the household parameters.
pub const AGE_MIN: u8 = 20;
pub const AGE_MAX: u8 = 60;
pub const DEFAULT_AGE: u8 = 30;

pub const RISK_MIN: u8 = 1;
pub const RISK_MAX: u8 = 10;
pub const DEFAULT_RISK: u8 = 5;

pub const FAMILY_MEMBERS_MIN: u8 = 1;
pub const FAMILY_MEMBERS_MAX: u8 = 10;
pub const DEFAULT_FAMILY_MEMBERS: u8 = 3;

pub const EDU_PRIORITY_MIN: u8 = 1;
pub const EDU_PRIORITY_MAX: u8 = 5;
pub const DEFAULT_EDU_PRIORITY: u8 = 3;

/// How long a computed plan stays in the cache.
pub const DEFAULT_PLAN_CACHE_TTL_SECS: u64 = 3600;

/// Fraction of the pie radius left empty in the middle of the donut.
pub const CHART_HOLE: f64 = 0.3;

/// Qualitative pastel palette used for chart slices, in order.
pub const PASTEL_PALETTE: [&str; 11] = [
    "#66C5CC", "#F6CF71", "#F89C74", "#DCB0F2", "#87C55F", "#9EB9F3", "#FE88B1", "#C9DB74",
    "#8BE0A4", "#B497E7", "#B3B3B3",
];

/// File name offered by the (disabled) export button.
pub const EXPORT_FILE_NAME: &str = "asset_allocation.csv";
