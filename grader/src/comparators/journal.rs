//! Comparator for journal-entry requirements (debit or credit side).
//!
//! A journal answer has two parts, the account and the amount, and each part
//! carries credit on its own. The credit ladder is data: ordered rules
//! evaluated top-down, first match wins. A correct account with a wrong
//! amount outranks a correct amount with a wrong account.

use crate::comparators::numeric::within_tolerance;
use crate::types::{GradingDetail, Response};
use util::rounding::round_points;
use util::sim_catalog::{AnswerKey, Requirement};

/// Credit ladder for a journal entry, evaluated top-down.
/// Rules are `(predicate(account_correct, amount_correct), fraction, feedback)`.
const ENTRY_LADDER: &[(fn(bool, bool) -> bool, f64, &str)] = &[
    (|account, amount| account && amount, 1.0, "Correct entry"),
    (
        |account, amount| account && !amount,
        0.5,
        "Partial credit: account correct, amount incorrect",
    ),
    (
        |account, amount| !account && amount,
        0.25,
        "Partial credit: amount correct, account incorrect",
    ),
];

/// Grade a journal requirement. Both the debit and credit sides dispatch
/// here; the side is carried by the requirement kind and does not change
/// the comparison.
pub fn grade(req: &Requirement, response: Option<&Response>) -> GradingDetail {
    let Some(AnswerKey::Journal {
        account_id,
        account_name,
        amount,
        tolerance,
    }) = req.answer_key.as_ref()
    else {
        return GradingDetail::zero(
            req,
            "Not graded",
            "Not available",
            "Answer key unavailable for this requirement",
        );
    };
    let correct_display = format!("{account_name} ({account_id}) - {amount}");

    let (user_account, user_amount) = match response {
        Some(Response::Journal { account_id, amount }) => (account_id.as_deref(), *amount),
        _ => (None, None),
    };
    if user_account.is_none() && user_amount.is_none() {
        return GradingDetail::zero(req, "No answer", &correct_display, "No answer provided");
    }

    let user_display = format!(
        "{} - {}",
        user_account.unwrap_or("No account"),
        user_amount.map_or_else(|| "No amount".to_string(), |a| a.to_string()),
    );

    let account_correct = user_account == Some(account_id.as_str());
    let amount_correct = user_amount
        .map(|a| within_tolerance(a, *amount, *tolerance, None))
        .unwrap_or(false);

    for (rule, fraction, feedback) in ENTRY_LADDER {
        if rule(account_correct, amount_correct) {
            return if *fraction >= 1.0 {
                GradingDetail::full(req, &user_display, &correct_display, feedback)
            } else {
                GradingDetail::partial(
                    req,
                    round_points(req.points * fraction),
                    &user_display,
                    &correct_display,
                    feedback,
                )
            };
        }
    }

    GradingDetail::zero(
        req,
        &user_display,
        &correct_display,
        &format!("Incorrect - expected {account_name} ({account_id}) with amount {amount}"),
    )
}
