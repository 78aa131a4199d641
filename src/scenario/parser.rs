use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Budget, Category, Direction, Intent};

/// Phrasings shown back to the user when a scenario can't be understood.
pub(crate) const EXAMPLE_PHRASINGS: [&str; 2] = ["Save 5% more", "Cut entertainment by $50"];

/// Aliases scanned in this order; the first one contained in the text wins.
const CATEGORY_ALIASES: &[(&str, Category)] = &[
    ("rent", Category::Rent),
    ("housing", Category::Rent),
    ("food", Category::Food),
    ("groceries", Category::Food),
    ("entertainment", Category::Entertainment),
    ("transportation", Category::Transportation),
    ("utilities", Category::Utilities),
    ("savings", Category::Savings),
    ("other", Category::Other),
];

const DECREASE_WORDS: &[&str] = &["cut", "reduce", "lower", "decrease", "less"];
const INCREASE_WORDS: &[&str] = &["increase", "add", "raise", "more"];

#[allow(clippy::expect_used)]
static PERCENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)%").expect("percent pattern compiles"));

#[allow(clippy::expect_used)]
static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]+(?:\.[0-9]+)?)").expect("dollar pattern compiles"));

/// Why a scenario was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseFailure {
    /// No matcher's trigger words were present.
    NoPattern,
    /// "save" and "%" were present but no number sat right before the `%`.
    MissingPercent,
    NonPositivePercent,
    /// A number too large to represent.
    InvalidNumber,
    UnknownCategory,
    /// The explicit or defaulted adjustment came out as zero.
    NonPositiveAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Couldn't parse scenario: \"{input}\". Try: \"Save 5% more\" or \"Cut entertainment by $50\"")]
pub(crate) struct ParseError {
    /// The text exactly as the user typed it.
    pub(crate) input: String,
    pub(crate) reason: ParseFailure,
}

/// One branch of the scenario grammar.
///
/// Matchers are tried in priority order. The first whose trigger fires owns
/// the input: if its extraction fails, the parse fails and later matchers are
/// not consulted.
pub(crate) trait ScenarioMatcher: Sync {
    fn name(&self) -> &'static str;

    fn triggers(&self, text: &str) -> bool;

    fn extract(&self, text: &str, baseline: &Budget) -> Result<Intent, ParseFailure>;

    /// `None` when the trigger doesn't fire, otherwise the committed result.
    fn try_match(&self, text: &str, baseline: &Budget) -> Option<Result<Intent, ParseFailure>> {
        self.triggers(text).then(|| self.extract(text, baseline))
    }
}

struct SavePercentMatcher;

impl ScenarioMatcher for SavePercentMatcher {
    fn name(&self) -> &'static str {
        "save-percent"
    }

    fn triggers(&self, text: &str) -> bool {
        text.contains("save") && text.contains('%')
    }

    fn extract(&self, text: &str, _baseline: &Budget) -> Result<Intent, ParseFailure> {
        let token = percent_token(text).ok_or(ParseFailure::MissingPercent)?;
        let percent = parse_number(token)?;
        if percent <= Decimal::ZERO {
            return Err(ParseFailure::NonPositivePercent);
        }
        Ok(Intent::SavePercent { percent })
    }
}

struct AdjustMatcher {
    name: &'static str,
    direction: Direction,
    keywords: &'static [&'static str],
}

impl ScenarioMatcher for AdjustMatcher {
    fn name(&self) -> &'static str {
        self.name
    }

    fn triggers(&self, text: &str) -> bool {
        self.keywords.iter().any(|word| text.contains(word))
    }

    fn extract(&self, text: &str, baseline: &Budget) -> Result<Intent, ParseFailure> {
        let explicit = dollar_amount(text).map(parse_number).transpose()?;
        let category = resolve_category(text).ok_or(ParseFailure::UnknownCategory)?;
        let amount = explicit.unwrap_or_else(|| default_adjustment(baseline, category));
        if amount <= Decimal::ZERO {
            return Err(ParseFailure::NonPositiveAmount);
        }
        Ok(Intent::AdjustCategory {
            category,
            direction: self.direction,
            amount,
        })
    }
}

/// The grammar, highest priority first.
pub(crate) static MATCHERS: &[&dyn ScenarioMatcher] = &[
    &SavePercentMatcher,
    &AdjustMatcher {
        name: "decrease",
        direction: Direction::Decrease,
        keywords: DECREASE_WORDS,
    },
    &AdjustMatcher {
        name: "increase",
        direction: Direction::Increase,
        keywords: INCREASE_WORDS,
    },
];

pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Turn a what-if command into an [`Intent`], using `baseline` for defaults.
pub(crate) fn parse(text: &str, baseline: &Budget) -> Result<Intent, ParseError> {
    let normalized = normalize(text);
    let fail = |reason: ParseFailure| {
        debug!(input = text, ?reason, "scenario rejected");
        ParseError {
            input: text.to_string(),
            reason,
        }
    };

    for matcher in MATCHERS {
        if let Some(result) = matcher.try_match(&normalized, baseline) {
            debug!(matcher = matcher.name(), input = text, "scenario matched");
            return result.map_err(fail);
        }
    }

    Err(fail(ParseFailure::NoPattern))
}

/// The first number written directly before a `%`, as typed.
pub(crate) fn percent_token(text: &str) -> Option<&str> {
    PERCENT_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn dollar_amount(text: &str) -> Option<&str> {
    DOLLAR_AMOUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub(crate) fn resolve_category(text: &str) -> Option<Category> {
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| text.contains(alias))
        .map(|(_, category)| *category)
}

/// Ten percent of what the baseline currently spends on `category`.
fn default_adjustment(baseline: &Budget, category: Category) -> Decimal {
    baseline.expenses.get(category) * Decimal::new(1, 1)
}

fn parse_number(token: &str) -> Result<Decimal, ParseFailure> {
    Decimal::from_str(token).map_err(|_| ParseFailure::InvalidNumber)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
