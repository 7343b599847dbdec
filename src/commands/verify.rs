use crate::cli::{Cli, Commands, VerifyCommands};
use crate::domain::constants::{
    total_estimated_operations, CLEANUP_FREQUENCY, COST_COMPONENTS, RESEARCH_URLS,
    VERIFICATION_CHECKLIST,
};
use crate::domain::models::{FrequencyEntry, ReferenceEntry, VerificationSummary};
use crate::services::output::{print_one, print_out};
use crate::services::verification::CostVerifier;

pub fn handle_verify_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Verify { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        VerifyCommands::Report { assume_verified } => {
            let mut verifier = CostVerifier::with_default_sources();
            for name in assume_verified {
                if !verifier.mark_verified(name) {
                    anyhow::bail!("unknown budget source: {name}");
                }
            }

            let status = if verifier.any_verified() {
                "VERIFIED"
            } else {
                "PENDING VERIFICATION"
            };
            let summary = VerificationSummary {
                estimated_annual_cost: verifier.estimated_cost(),
                status: status.to_string(),
                sources: verifier.sources().to_vec(),
            };

            let mut text = verifier.generate_report();
            text.push_str("\nresearch urls:\n");
            for (name, url) in RESEARCH_URLS {
                text.push_str(&format!("  {name}: {url}\n"));
            }
            print_one(cli.json, summary, |_| text.clone())?;
        }
        VerifyCommands::Checklist => {
            let items: Vec<String> = VERIFICATION_CHECKLIST.iter().map(|s| s.to_string()).collect();
            print_out(cli.json, &items, |i| format!("[ ] {i}"))?;
        }
        VerifyCommands::Urls => {
            let items: Vec<ReferenceEntry> = RESEARCH_URLS
                .iter()
                .map(|(name, url)| ReferenceEntry {
                    name: name.to_string(),
                    detail: url.to_string(),
                })
                .collect();
            print_out(cli.json, &items, |e| format!("{}\t{}", e.name, e.detail))?;
        }
        VerifyCommands::Components => {
            let items: Vec<ReferenceEntry> = COST_COMPONENTS
                .iter()
                .map(|(component, description)| ReferenceEntry {
                    name: component.to_string(),
                    detail: description.to_string(),
                })
                .collect();
            print_out(cli.json, &items, |e| format!("{}\t{}", e.name, e.detail))?;
        }
        VerifyCommands::Frequency => {
            let mut items: Vec<FrequencyEntry> = CLEANUP_FREQUENCY
                .iter()
                .map(|(operation, per_year)| FrequencyEntry {
                    operation: operation.to_string(),
                    per_year: *per_year,
                })
                .collect();
            items.push(FrequencyEntry {
                operation: "total estimated operations".to_string(),
                per_year: total_estimated_operations(),
            });
            print_out(cli.json, &items, |e| {
                format!("{}\t{} times/year", e.operation, e.per_year)
            })?;
        }
    }

    Ok(true)
}
