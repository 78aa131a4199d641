use super::parser::{normalize, percent_token};
use crate::models::{Direction, Intent};
use crate::util::round_to;

/// Caption for an applied scenario, e.g. "What if you cut entertainment by $50.00?".
///
/// `text` is the command the intent was parsed from. Percentages are echoed
/// exactly as typed; dollar amounts are shown to the cent.
pub(crate) fn describe(text: &str, intent: &Intent) -> String {
    let normalized = normalize(text);
    match intent {
        Intent::SavePercent { percent } => {
            let shown = percent_token(&normalized)
                .map(str::to_string)
                .unwrap_or_else(|| percent.normalize().to_string());
            format!("What if you saved {shown}% more?")
        }
        Intent::AdjustCategory {
            category,
            direction,
            amount,
        } => {
            let verb = match direction {
                Direction::Decrease => decrease_verb(&normalized),
                Direction::Increase => "increased",
            };
            format!(
                "What if you {verb} {} by ${:.2}?",
                category.label(),
                round_to(*amount, 2)
            )
        }
    }
}

/// Past tense of the decrease word the user actually wrote.
fn decrease_verb(text: &str) -> &'static str {
    if text.contains("cut") {
        "cut"
    } else if text.contains("reduce") {
        "reduced"
    } else if text.contains("lower") || text.contains("less") {
        "lowered"
    } else {
        "decreased"
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
