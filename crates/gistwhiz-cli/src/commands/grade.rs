//! The `gistwhiz grade` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use gistwhiz_core::engine::{grade_answer_set, ProgressReporter};
use gistwhiz_core::parser;
use gistwhiz_core::report::{CaseOutcome, GradeReport, GradeSummary};

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_case_complete(&self, outcome: &CaseOutcome) {
        let status = if outcome.agrees() { "OK" } else { "MISMATCH" };
        eprintln!(
            "  {status}: {} (expected {}, got {} via {})",
            outcome.case_id, outcome.expected, outcome.actual, outcome.stage
        );
    }

    fn on_set_complete(&self, summary: &GradeSummary, elapsed: Duration) {
        eprintln!(
            "\nComplete: {}/{} agreed ({:.1}s)",
            summary.agreed,
            summary.total,
            elapsed.as_secs_f64()
        );
    }
}

pub fn execute(
    answer_set_path: PathBuf,
    output: Option<PathBuf>,
    fail_on_mismatch: bool,
    filter: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let comparator = super::comparator_from(config_path)?;

    let mut answer_sets = parser::load_answer_sets(&answer_set_path)?;
    anyhow::ensure!(
        !answer_sets.is_empty(),
        "no answer sets found in {}",
        answer_set_path.display()
    );

    if let Some(filter_tags) = &filter {
        let tags: Vec<&str> = filter_tags.split(',').map(|s| s.trim()).collect();
        for set in &mut answer_sets {
            set.retain_tags(&tags);
            if set.cases.is_empty() {
                tracing::warn!("no cases in {} carry tags {:?}", set.name, tags);
            }
        }
    }

    let reporter = ConsoleReporter;
    let mut reports = Vec::with_capacity(answer_sets.len());

    for answer_set in &answer_sets {
        eprintln!(
            "gistwhiz v{}: grading {} ({} cases)",
            env!("CARGO_PKG_VERSION"),
            answer_set.name,
            answer_set.cases.len()
        );
        reports.push(grade_answer_set(&comparator, answer_set, &reporter));
    }

    print_summary(&reports);
    print_disagreements(&reports);

    if let Some(path) = &output {
        if reports.len() == 1 {
            reports[0].save_json(path)?;
            eprintln!("Report saved to: {}", path.display());
        } else {
            std::fs::create_dir_all(path)?;
            for report in &reports {
                let file = path.join(format!("{}.json", report.answer_set.id));
                report.save_json(&file)?;
                eprintln!("Report saved to: {}", file.display());
            }
        }
    }

    let disagreed: usize = reports.iter().map(|r| r.summary.disagreed).sum();
    if fail_on_mismatch && disagreed > 0 {
        anyhow::bail!("{disagreed} case(s) disagree with their expected verdict");
    }

    Ok(())
}

fn print_summary(reports: &[GradeReport]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Answer set",
        "Cases",
        "Agreed",
        "Accuracy",
        "Exact",
        "Quantity",
        "Fuzzy",
    ]);

    for report in reports {
        let stage_count = |stage| report.summary.per_stage.get(&stage).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(&report.answer_set.name),
            Cell::new(report.summary.total),
            Cell::new(report.summary.agreed),
            Cell::new(format!("{:.1}%", report.summary.accuracy * 100.0)),
            Cell::new(stage_count(gistwhiz_core::Stage::Exact)),
            Cell::new(stage_count(gistwhiz_core::Stage::Quantity)),
            Cell::new(stage_count(gistwhiz_core::Stage::Fuzzy)),
        ]);
    }

    println!("{table}");
}

fn print_disagreements(reports: &[GradeReport]) {
    let mut header_printed = false;
    for report in reports {
        for o in report.disagreements() {
            if !header_printed {
                println!("\nDisagreements:");
                header_printed = true;
            }
            println!(
                "  [{}] {:?} vs {:?}: expected {}, got {} ({})",
                o.case_id, o.reference, o.answer, o.expected, o.actual, o.stage
            );
        }
    }
}
