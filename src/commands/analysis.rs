use crate::cli::{Cli, Commands};
use crate::domain::models::{AnalysisArtifact, AnalysisResult, JsonOut, ModelInputs};
use crate::services::export::export_results;
use crate::services::model::{compute, scenario_analysis};
use crate::services::output::{fmt_usd, print_out};
use std::path::Path;

pub fn handle_analysis_commands(cli: &Cli, inputs: &ModelInputs) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Analyze { out, skip_export } => {
            let results = compute(inputs);

            if cli.json {
                let artifact = AnalysisArtifact {
                    inputs: inputs.clone(),
                    results: results.clone(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: artifact
                    })?
                );
            } else {
                print_summary(&results);
            }

            // Export failure must not take the report down with it.
            if !skip_export {
                match export_results(Path::new(out), inputs, &results) {
                    Ok(()) => {
                        if !cli.json {
                            println!("\nresults exported to {out}");
                        }
                    }
                    Err(e) => eprintln!("warning: could not export results to {out}: {e}"),
                }
            }
            Ok(true)
        }
        Commands::Scenarios => {
            let outcomes = scenario_analysis(inputs);
            print_out(cli.json, &outcomes, |o| {
                format!(
                    "{}\tbcr={:.1}\troi={:.1}%\tnet={}\tusers={}",
                    o.scenario,
                    o.results.benefit_cost_ratio,
                    o.results.roi_percentage,
                    fmt_usd(o.results.net_benefit_first_year),
                    o.results.annual_users
                )
            })?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn print_summary(r: &AnalysisResult) {
    println!("AFairHome cost-benefit analysis");
    println!("===============================");
    println!("annual users: {}", r.annual_users);
    println!(
        "total benefit (year 1): {}",
        fmt_usd(r.total_benefit_first_year)
    );
    println!("total cost (year 1): {}", fmt_usd(r.total_cost_first_year));
    println!(
        "net benefit (year 1): {}",
        fmt_usd(r.net_benefit_first_year)
    );
    println!("benefit-cost ratio: {:.1}", r.benefit_cost_ratio);
    println!("roi: {:.1}%", r.roi_percentage);
    println!("5-year npv: {}", fmt_usd(r.five_year_net_present_value));
    match r.payback_period_months {
        Some(months) => println!("payback period: {months:.1} months"),
        None => println!("payback period: not reached"),
    }
}
