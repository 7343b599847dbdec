use crate::domain::models::{AnalysisResult, ModelInputs, ScenarioOutcome};

/// Fixed named perturbations of the base assumptions.
///
/// The set and its ordering are enumerated configuration, not runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Conservative,
    Base,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Conservative, Scenario::Base, Scenario::Optimistic];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::Base => "base",
            Scenario::Optimistic => "optimistic",
        }
    }

    pub fn adjust(&self, base: &ModelInputs) -> ModelInputs {
        let mut inputs = base.clone();
        match self {
            Scenario::Conservative => {
                inputs.adoption_rate = base.adoption_rate * 0.6;
                inputs.annual_operating_cost = base.annual_operating_cost * 1.25;
            }
            Scenario::Base => {}
            Scenario::Optimistic => {
                inputs.adoption_rate = base.adoption_rate * 1.4;
                inputs.annual_operating_cost = base.annual_operating_cost * 0.9;
            }
        }
        inputs
    }
}

/// Quantified first-year benefit for a single user.
fn per_user_benefit(inputs: &ModelInputs) -> f64 {
    inputs.hours_saved_per_user * inputs.hourly_time_value
        + inputs.search_cost_savings_per_user
        + inputs.shelter_nights_avoided_per_user * inputs.shelter_cost_per_night
        + inputs.caseworker_hours_saved_per_user * inputs.caseworker_hourly_rate
}

/// Run the cost-benefit formulas over one set of assumptions.
///
/// Pure and deterministic: identical inputs yield identical outputs.
/// Ratio metrics fall back to 0 when the cost basis is 0 rather than
/// dividing by zero.
pub fn compute(inputs: &ModelInputs) -> AnalysisResult {
    let annual_users = (inputs.eligible_households * inputs.adoption_rate).round();
    let total_benefit = annual_users * per_user_benefit(inputs);
    let total_cost = inputs.development_cost + inputs.annual_operating_cost;
    let net_benefit = total_benefit - total_cost;

    let benefit_cost_ratio = if total_cost > 0.0 {
        total_benefit / total_cost
    } else {
        0.0
    };
    let roi_percentage = if total_cost > 0.0 {
        net_benefit / total_cost * 100.0
    } else {
        0.0
    };

    // Development cost is charged in year 1 only; later years carry
    // operating cost against the same annual benefit.
    let mut npv = 0.0;
    for year in 1..=inputs.horizon_years {
        let mut cash_flow = total_benefit - inputs.annual_operating_cost;
        if year == 1 {
            cash_flow -= inputs.development_cost;
        }
        npv += cash_flow / (1.0 + inputs.discount_rate).powi(year as i32);
    }

    let monthly_net = (total_benefit - inputs.annual_operating_cost) / 12.0;
    let payback_period_months = if monthly_net > 0.0 {
        Some(inputs.development_cost / monthly_net)
    } else {
        None
    };

    AnalysisResult {
        annual_users: annual_users as u64,
        total_benefit_first_year: total_benefit,
        total_cost_first_year: total_cost,
        net_benefit_first_year: net_benefit,
        benefit_cost_ratio,
        roi_percentage,
        five_year_net_present_value: npv,
        payback_period_months,
    }
}

/// Compute every fixed scenario variant, in `Scenario::ALL` order.
pub fn scenario_analysis(inputs: &ModelInputs) -> Vec<ScenarioOutcome> {
    Scenario::ALL
        .iter()
        .map(|s| ScenarioOutcome {
            scenario: s.label().to_string(),
            results: compute(&s.adjust(inputs)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{compute, scenario_analysis, Scenario};
    use crate::domain::models::ModelInputs;

    #[test]
    fn base_case_matches_known_figures() {
        let r = compute(&ModelInputs::default());
        assert_eq!(r.annual_users, 500);
        assert_eq!(r.total_benefit_first_year, 2_500_000.0);
        assert_eq!(r.total_cost_first_year, 500_000.0);
        assert_eq!(r.net_benefit_first_year, 2_000_000.0);
        assert_eq!(r.benefit_cost_ratio, 5.0);
        assert_eq!(
            r.roi_percentage,
            r.net_benefit_first_year / r.total_cost_first_year * 100.0
        );
    }

    #[test]
    fn compute_is_bitwise_deterministic() {
        let inputs = ModelInputs::default();
        let a = compute(&inputs);
        let b = compute(&inputs);
        assert_eq!(a.annual_users, b.annual_users);
        assert_eq!(
            a.total_benefit_first_year.to_bits(),
            b.total_benefit_first_year.to_bits()
        );
        assert_eq!(
            a.benefit_cost_ratio.to_bits(),
            b.benefit_cost_ratio.to_bits()
        );
        assert_eq!(
            a.five_year_net_present_value.to_bits(),
            b.five_year_net_present_value.to_bits()
        );
        assert_eq!(
            a.payback_period_months.map(f64::to_bits),
            b.payback_period_months.map(f64::to_bits)
        );
    }

    #[test]
    fn bcr_is_zero_when_benefits_are_zero() {
        let inputs = ModelInputs {
            hours_saved_per_user: 0.0,
            search_cost_savings_per_user: 0.0,
            shelter_nights_avoided_per_user: 0.0,
            caseworker_hours_saved_per_user: 0.0,
            ..ModelInputs::default()
        };
        let r = compute(&inputs);
        assert_eq!(r.total_benefit_first_year, 0.0);
        assert_eq!(r.benefit_cost_ratio, 0.0);
    }

    #[test]
    fn zero_cost_basis_reports_zero_ratios() {
        let inputs = ModelInputs {
            development_cost: 0.0,
            annual_operating_cost: 0.0,
            ..ModelInputs::default()
        };
        let r = compute(&inputs);
        assert_eq!(r.benefit_cost_ratio, 0.0);
        assert_eq!(r.roi_percentage, 0.0);
    }

    #[test]
    fn payback_is_none_when_monthly_net_is_not_positive() {
        let inputs = ModelInputs {
            hours_saved_per_user: 0.0,
            search_cost_savings_per_user: 0.0,
            shelter_nights_avoided_per_user: 0.0,
            caseworker_hours_saved_per_user: 0.0,
            ..ModelInputs::default()
        };
        let r = compute(&inputs);
        assert_eq!(r.payback_period_months, None);
    }

    #[test]
    fn payback_is_never_negative() {
        let r = compute(&ModelInputs::default());
        let months = r.payback_period_months.expect("base case breaks even");
        assert!(months >= 0.0 && months.is_finite());
    }

    #[test]
    fn scenario_bcr_is_monotonic_for_defaults() {
        let outcomes = scenario_analysis(&ModelInputs::default());
        let labels: Vec<&str> = outcomes.iter().map(|o| o.scenario.as_str()).collect();
        assert_eq!(labels, ["conservative", "base", "optimistic"]);
        assert!(outcomes[0].results.benefit_cost_ratio <= outcomes[1].results.benefit_cost_ratio);
        assert!(outcomes[1].results.benefit_cost_ratio <= outcomes[2].results.benefit_cost_ratio);
    }

    #[test]
    fn base_scenario_is_identity() {
        let inputs = ModelInputs::default();
        assert_eq!(Scenario::Base.adjust(&inputs), inputs);
    }
}
