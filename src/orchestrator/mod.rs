//! Owns the baseline and the published analysis, and runs what-ifs against them.
//!
//! Every submission goes through two steps: `begin_*` updates state and hands
//! back a [`Submission`] to send to the analyzer, and [`ScenarioOrchestrator::complete`]
//! records the answer. Only the most recently issued submission may publish;
//! answers to older ones are dropped.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analyzer::{Analyzer, AnalyzerError};
use crate::models::{AnalysisResult, Budget};
use crate::scenario::{self, ParseError};

pub(crate) type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmissionKind {
    Baseline,
    Scenario,
}

impl SubmissionKind {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::Baseline => "Failed to analyze budget",
            Self::Scenario => "Failed to analyze scenario",
        }
    }
}

/// A budget waiting for the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Submission {
    pub(crate) id: RequestId,
    pub(crate) kind: SubmissionKind,
    pub(crate) budget: Budget,
    /// Caption to publish with the result; `None` for baselines.
    pub(crate) label: Option<String>,
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    Published,
    /// A newer submission was issued before this one came back.
    Superseded,
    /// There was no baseline to run a scenario against.
    NoBaseline,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum SubmitError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

pub(crate) struct ScenarioOrchestrator {
    analyzer: Arc<dyn Analyzer>,
    baseline: Option<Budget>,
    scenario_label: Option<String>,
    result: Option<AnalysisResult>,
    /// The budget `result` was computed for.
    published_budget: Option<Budget>,
    error: Option<String>,
    last_issued: RequestId,
    in_flight: usize,
}

impl ScenarioOrchestrator {
    pub(crate) fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            baseline: None,
            scenario_label: None,
            result: None,
            published_budget: None,
            error: None,
            last_issued: 0,
            in_flight: 0,
        }
    }

    pub(crate) fn baseline(&self) -> Option<&Budget> {
        self.baseline.as_ref()
    }

    /// Caption of the what-if behind the published result, if it came from one.
    pub(crate) fn scenario_label(&self) -> Option<&str> {
        self.scenario_label.as_deref()
    }

    pub(crate) fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// The budget behind [`Self::result`]: the baseline or a derived what-if.
    pub(crate) fn published_budget(&self) -> Option<&Budget> {
        self.published_budget.as_ref()
    }

    /// User-facing message for the last failure, cleared by the next submission.
    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub(crate) fn analyzer_name(&self) -> &'static str {
        self.analyzer.name()
    }

    /// Make `budget` the new baseline and prepare it for analysis.
    pub(crate) fn begin_baseline(&mut self, budget: Budget) -> Submission {
        self.baseline = Some(budget.clone());
        self.scenario_label = None;
        self.error = None;
        self.issue(SubmissionKind::Baseline, budget, None)
    }

    /// Apply `text` to the baseline and prepare the derived budget for analysis.
    ///
    /// `None` when there is no baseline yet. A parse failure records the error
    /// and leaves everything else as it was.
    pub(crate) fn begin_scenario(&mut self, text: &str) -> Option<Result<Submission, ParseError>> {
        let baseline = self.baseline.as_ref()?;
        match scenario::evaluate(text, baseline) {
            Ok(outcome) => {
                self.error = None;
                Some(Ok(self.issue(
                    SubmissionKind::Scenario,
                    outcome.derived_budget,
                    Some(outcome.label),
                )))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Some(Err(err))
            }
        }
    }

    fn issue(&mut self, kind: SubmissionKind, budget: Budget, label: Option<String>) -> Submission {
        self.last_issued += 1;
        self.in_flight += 1;
        debug!(id = self.last_issued, ?kind, "issuing submission");
        Submission {
            id: self.last_issued,
            kind,
            budget,
            label,
        }
    }

    /// Record the analyzer's answer to `submission`.
    ///
    /// Answers to anything but the latest submission are dropped. A failure
    /// keeps the previously published result.
    pub(crate) fn complete(
        &mut self,
        submission: Submission,
        response: Result<AnalysisResult, AnalyzerError>,
    ) -> Result<Completion, AnalyzerError> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if submission.id != self.last_issued {
            debug!(
                id = submission.id,
                latest = self.last_issued,
                "dropping response to superseded submission"
            );
            return Ok(Completion::Superseded);
        }

        match response {
            Ok(result) => {
                info!(id = submission.id, kind = ?submission.kind, "analysis published");
                self.result = Some(result);
                self.published_budget = Some(submission.budget);
                self.scenario_label = submission.label;
                self.error = None;
                Ok(Completion::Published)
            }
            Err(err) => {
                warn!(id = submission.id, error = %err, "analysis failed");
                self.error = Some(err.user_message(submission.kind.fallback_message()));
                Err(err)
            }
        }
    }

    /// Replace the baseline and analyze it.
    pub(crate) async fn submit_baseline(
        &mut self,
        budget: Budget,
    ) -> Result<Completion, SubmitError> {
        let submission = self.begin_baseline(budget);
        self.dispatch(submission).await
    }

    /// Run a what-if against the baseline and analyze the derived budget.
    /// The baseline stays as it was.
    pub(crate) async fn submit_scenario(&mut self, text: &str) -> Result<Completion, SubmitError> {
        let submission = match self.begin_scenario(text) {
            Some(submission) => submission?,
            None => return Ok(Completion::NoBaseline),
        };
        self.dispatch(submission).await
    }

    async fn dispatch(&mut self, submission: Submission) -> Result<Completion, SubmitError> {
        let analyzer = Arc::clone(&self.analyzer);
        let response = analyzer.analyze(&submission.budget).await;
        Ok(self.complete(submission, response)?)
    }
}
