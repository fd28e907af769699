/// A gate evaluated against the most recent result before (or after) a
/// request runs in Conditional mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalRule {
    /// Path expression into the latest response body, e.g. `$.data[0].status`.
    pub condition: String,

    #[serde(default)]
    pub operator: ConditionOperator,

    /// Compared as a string; numeric operators parse both sides as floats.
    #[serde(rename = "expectedValue")]
    pub expected_value: String,

    #[serde(default)]
    pub action: RuleAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    #[default]
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    #[default]
    Continue,
    Skip,
    Stop,
}

impl RuleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleAction::Continue => "continue",
            RuleAction::Skip => "skip",
            RuleAction::Stop => "stop",
        }
    }
}
