//! Grading engine: runs the comparator over an answer set and collects a
//! report.

use std::time::{Duration, Instant};

use chrono::Utc;
use uuid::Uuid;

use crate::compare::Comparator;
use crate::model::AnswerSet;
use crate::report::{AnswerSetSummary, CaseOutcome, GradeReport, GradeSummary};

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_case_complete(&self, outcome: &CaseOutcome);
    fn on_set_complete(&self, summary: &GradeSummary, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_case_complete(&self, _: &CaseOutcome) {}
    fn on_set_complete(&self, _: &GradeSummary, _: Duration) {}
}

/// Grade every case of `set` and compare against the expected verdicts.
pub fn grade_answer_set(
    comparator: &Comparator,
    set: &AnswerSet,
    progress: &dyn ProgressReporter,
) -> GradeReport {
    let start = Instant::now();
    tracing::info!("grading {} ({} cases)", set.name, set.cases.len());

    let outcomes: Vec<CaseOutcome> = set
        .cases
        .iter()
        .map(|case| {
            let comparison = comparator.explain(&case.reference, &case.answer);
            let outcome = CaseOutcome {
                case_id: case.id.clone(),
                reference: case.reference.clone(),
                answer: case.answer.clone(),
                expected: case.expected,
                actual: comparison.matched,
                stage: comparison.stage,
            };
            if !outcome.agrees() {
                tracing::debug!(
                    case = %case.id,
                    expected = case.expected,
                    stage = %comparison.stage,
                    "verdict disagrees with expectation"
                );
            }
            progress.on_case_complete(&outcome);
            outcome
        })
        .collect();

    let summary = GradeSummary::from_outcomes(&outcomes);
    let elapsed = start.elapsed();
    progress.on_set_complete(&summary, elapsed);

    GradeReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        answer_set: AnswerSetSummary {
            id: set.id.clone(),
            name: set.name.clone(),
            case_count: set.cases.len(),
        },
        tolerances: comparator.tolerances().clone(),
        outcomes,
        summary,
        duration_ms: elapsed.as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::compare::Stage;
    use crate::model::AnswerCase;

    fn case(id: &str, reference: &str, answer: &str, expected: bool) -> AnswerCase {
        AnswerCase {
            id: id.into(),
            reference: reference.into(),
            answer: answer.into(),
            expected,
            tags: vec![],
            description: String::new(),
        }
    }

    fn sample_set() -> AnswerSet {
        AnswerSet {
            id: "sample".into(),
            name: "Sample".into(),
            description: String::new(),
            cases: vec![
                case("exact", "Heart", "heart", true),
                case("units", "5000 mg", "5 g", true),
                case("typo", "stomach", "stomoch", true),
                case("short", "ear", "eat", false),
                // Deliberately wrong expectation.
                case("wrong", "lung", "liver", true),
            ],
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
        finished: RefCell<Option<usize>>,
    }

    impl ProgressReporter for Recorder {
        fn on_case_complete(&self, outcome: &CaseOutcome) {
            self.seen.borrow_mut().push(outcome.case_id.clone());
        }

        fn on_set_complete(&self, summary: &GradeSummary, _: Duration) {
            *self.finished.borrow_mut() = Some(summary.total);
        }
    }

    #[test]
    fn grades_every_case_in_order() {
        let report = grade_answer_set(&Comparator::default(), &sample_set(), &NoopReporter);
        let ids: Vec<_> = report.outcomes.iter().map(|o| o.case_id.as_str()).collect();
        assert_eq!(ids, vec!["exact", "units", "typo", "short", "wrong"]);
        assert_eq!(report.answer_set.case_count, 5);
    }

    #[test]
    fn summary_reflects_disagreement() {
        let report = grade_answer_set(&Comparator::default(), &sample_set(), &NoopReporter);
        assert_eq!(report.summary.agreed, 4);
        assert_eq!(report.summary.disagreed, 1);
        let wrong: Vec<_> = report.disagreements().collect();
        assert_eq!(wrong.len(), 1);
        assert_eq!(wrong[0].case_id, "wrong");
        assert_eq!(wrong[0].stage, Stage::Fuzzy);
    }

    #[test]
    fn stages_are_recorded() {
        let report = grade_answer_set(&Comparator::default(), &sample_set(), &NoopReporter);
        assert_eq!(report.outcomes[0].stage, Stage::Exact);
        assert_eq!(report.outcomes[1].stage, Stage::Quantity);
        assert_eq!(report.outcomes[2].stage, Stage::Fuzzy);
    }

    #[test]
    fn reporter_sees_each_case() {
        let recorder = Recorder::default();
        grade_answer_set(&Comparator::default(), &sample_set(), &recorder);
        assert_eq!(recorder.seen.borrow().len(), 5);
        assert_eq!(*recorder.finished.borrow(), Some(5));
    }
}
