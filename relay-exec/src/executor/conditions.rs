use relay_core::expressions::{extract, value_text};
use relay_core::types::{ConditionOperator, ConditionalRule, Request, RequestResult, RuleAction};

/// Whether a request may run, given the latest accumulated result.
///
/// Every rule must hold (AND semantics). Requests without rules always
/// run; rules with no prior result to inspect evaluate to false.
pub fn should_execute(request: &Request, latest: Option<&RequestResult>) -> bool {
    if request.conditional_rules.is_empty() {
        return true;
    }
    let Some(latest) = latest else {
        return false;
    };
    request
        .conditional_rules
        .iter()
        .all(|rule| evaluate_rule(rule, latest))
}

/// The action to take after a request produced `result`: the first rule
/// that matches decides; no match means continue.
pub fn decide_action(request: &Request, result: &RequestResult) -> RuleAction {
    request
        .conditional_rules
        .iter()
        .find(|rule| evaluate_rule(rule, result))
        .map(|rule| rule.action)
        .unwrap_or(RuleAction::Continue)
}

fn evaluate_rule(rule: &ConditionalRule, result: &RequestResult) -> bool {
    let Some(body) = result.response.as_deref() else {
        return false;
    };
    // A missing value fails every operator, including not_equals.
    let Some(actual) = extract(body, &rule.condition) else {
        return false;
    };
    let actual = value_text(&actual);
    let expected = rule.expected_value.as_str();

    match rule.operator {
        ConditionOperator::Equals => actual == expected,
        ConditionOperator::NotEquals => actual != expected,
        ConditionOperator::Contains => actual.contains(expected),
        ConditionOperator::GreaterThan => match (actual.parse::<f64>(), expected.parse::<f64>()) {
            (Ok(a), Ok(e)) => a > e,
            _ => false,
        },
        ConditionOperator::LessThan => match (actual.parse::<f64>(), expected.parse::<f64>()) {
            (Ok(a), Ok(e)) => a < e,
            _ => false,
        },
    }
}
