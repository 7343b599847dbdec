//! Fixed reference data for the encampment-cost verification tool.
//!
//! Everything here is a static enumeration: the research checklist, source
//! URLs, the cost-component taxonomy and the operation-frequency estimates
//! never change based on verifier state.

/// User-supplied estimate of Chicago's annual encampment-cleanup spend.
/// Unverified; the verification tool exists to organize confirming it.
pub const ESTIMATED_ANNUAL_CLEANUP_COST: f64 = 20_000_000.0;

/// Budget documents to research when verifying the estimate.
pub const VERIFICATION_CHECKLIST: [&str; 10] = [
    "Chicago 2024 Annual Budget - Department of Streets and Sanitation",
    "Chicago 2025 Proposed Budget - Homeless Services",
    "Chicago Department of Family & Support Services Budget",
    "Chicago Police Department - Homeless Outreach Budget",
    "Chicago Department of Public Health - Homeless Services",
    "Chicago Park District - Encampment Cleanup Costs",
    "Chicago Transit Authority - Homeless Response Costs",
    "Emergency Management & Communications Budget",
    "Chicago Recovery Plan (ARPA) - Homeless Services Allocation",
    "Illinois State Budget - Chicago Homeless Services",
];

/// Key starting points for budget research, in presentation order.
pub const RESEARCH_URLS: [(&str, &str); 8] = [
    (
        "Chicago Budget Office",
        "https://www.chicago.gov/city/en/depts/obm.html",
    ),
    (
        "Chicago 2024 Budget",
        "https://www.chicago.gov/city/en/depts/obm/provdrs/budget.html",
    ),
    (
        "DFSS Budget Information",
        "https://www.chicago.gov/city/en/depts/fss.html",
    ),
    (
        "Streets & Sanitation",
        "https://www.chicago.gov/city/en/depts/streets.html",
    ),
    ("Chicago Open Data Portal", "https://data.cityofchicago.org/"),
    ("Illinois Comptroller", "https://illinoiscomptroller.gov/"),
    (
        "HUD Chicago Data",
        "https://www.huduser.gov/portal/datasets/ahar.html",
    ),
    (
        "Chicago Coalition for the Homeless",
        "https://www.chicagohomeless.org/",
    ),
];

/// Where cleanup money plausibly goes, for budget line-item matching.
pub const COST_COMPONENTS: [(&str, &str); 8] = [
    (
        "personnel costs",
        "Police, sanitation workers, social workers, security",
    ),
    (
        "equipment costs",
        "Trucks, protective equipment, cleaning supplies",
    ),
    (
        "disposal costs",
        "Waste removal, hazmat disposal, recycling",
    ),
    ("property restoration", "Cleaning, repairs, landscaping"),
    (
        "social services",
        "Outreach workers, mental health services",
    ),
    (
        "administrative costs",
        "Coordination, planning, documentation",
    ),
    ("legal costs", "Notice posting, legal compliance"),
    (
        "storage costs",
        "Personal property storage as required by law",
    ),
];

/// Rough annual operation counts used to sanity-check per-cleanup cost.
pub const CLEANUP_FREQUENCY: [(&str, u32); 4] = [
    ("daily small cleanups", 365),
    ("weekly major cleanups", 52),
    ("monthly encampment clearings", 12),
    ("emergency responses", 100),
];

pub fn total_estimated_operations() -> u32 {
    CLEANUP_FREQUENCY.iter().map(|(_, n)| n).sum()
}
