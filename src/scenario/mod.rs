//! Turning a free-text what-if into a derived budget and a caption.

mod label;
mod mutator;
mod parser;

pub(crate) use label::describe;
pub(crate) use mutator::apply;
pub(crate) use parser::{parse, ParseError, EXAMPLE_PHRASINGS};
#[cfg(test)]
pub(crate) use parser::ParseFailure;

use crate::models::Budget;

/// A scenario applied to a baseline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScenarioOutcome {
    pub(crate) derived_budget: Budget,
    pub(crate) label: String,
}

/// Parse `text` against `baseline`, apply it, and caption the result.
pub(crate) fn evaluate(text: &str, baseline: &Budget) -> Result<ScenarioOutcome, ParseError> {
    let intent = parse(text, baseline)?;
    Ok(ScenarioOutcome {
        derived_budget: apply(baseline, &intent),
        label: describe(text, &intent),
    })
}

#[cfg(test)]
mod tests;
