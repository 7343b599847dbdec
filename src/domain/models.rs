use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Named numeric assumptions feeding the cost-benefit model.
///
/// One immutable instance per analysis run or scenario. Defaults carry the
/// Chicago base case; an assumptions TOML file may override any subset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ModelInputs {
    pub eligible_households: f64,
    pub adoption_rate: f64,
    pub development_cost: f64,
    pub annual_operating_cost: f64,
    pub hours_saved_per_user: f64,
    pub hourly_time_value: f64,
    pub search_cost_savings_per_user: f64,
    pub shelter_nights_avoided_per_user: f64,
    pub shelter_cost_per_night: f64,
    pub caseworker_hours_saved_per_user: f64,
    pub caseworker_hourly_rate: f64,
    pub discount_rate: f64,
    pub horizon_years: u32,
}

impl Default for ModelInputs {
    fn default() -> Self {
        Self {
            eligible_households: 10_000.0,
            adoption_rate: 0.05,
            development_cost: 350_000.0,
            annual_operating_cost: 150_000.0,
            hours_saved_per_user: 40.0,
            hourly_time_value: 20.0,
            search_cost_savings_per_user: 1_200.0,
            shelter_nights_avoided_per_user: 35.0,
            shelter_cost_per_night: 60.0,
            caseworker_hours_saved_per_user: 10.0,
            caseworker_hourly_rate: 90.0,
            discount_rate: 0.03,
            horizon_years: 5,
        }
    }
}

/// Derived metrics; a pure function of [`ModelInputs`].
///
/// `payback_period_months` is `None` when monthly net cash flow is not
/// positive (the project never breaks even).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub annual_users: u64,
    pub total_benefit_first_year: f64,
    pub total_cost_first_year: f64,
    pub net_benefit_first_year: f64,
    pub benefit_cost_ratio: f64,
    pub roi_percentage: f64,
    pub five_year_net_present_value: f64,
    pub payback_period_months: Option<f64>,
}

/// The exported JSON artifact: results alongside the inputs producing them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisArtifact {
    pub inputs: ModelInputs,
    pub results: AnalysisResult,
}

#[derive(Serialize)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub results: AnalysisResult,
}

/// One external budget claim to verify.
///
/// `amount` stays `None` until manual research supplies a figure; only
/// `verified` and `amount` are ever mutated.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BudgetSource {
    pub name: String,
    pub url: String,
    pub year: i32,
    pub amount: Option<f64>,
    pub description: String,
    pub verified: bool,
}

#[derive(Serialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub detail: String,
}

#[derive(Serialize)]
pub struct FrequencyEntry {
    pub operation: String,
    pub per_year: u32,
}

#[derive(Serialize)]
pub struct VerificationSummary {
    pub estimated_annual_cost: f64,
    pub status: String,
    pub sources: Vec<BudgetSource>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AssumptionsFile {
    #[serde(default)]
    pub model: ModelInputs,
}
