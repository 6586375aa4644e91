//! Rule Engine.
//!
//! Evaluates every rule in the catalog against a fixed signal set, then threads
//! a fresh baseline intent through the matching rules in ascending priority
//! (ties keep catalog order). All matching rules fire; priority only orders
//! application and the trace.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::{baseline_intent, YIntent};
use super::ruleset::{RuleDefinition, RuleStatus, RULES, RULESET_VERSION};
use super::signals::XSignals;

/// Trace entry for one rule that fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFired {
    pub id: String,
    pub name: String,
    pub status: RuleStatus,
    pub priority: u8,
    pub because: String,
    pub prevents: String,
    pub tradeoff: String,
}

impl From<&RuleDefinition> for RuleFired {
    fn from(rule: &RuleDefinition) -> Self {
        Self {
            id: rule.id.to_string(),
            name: rule.name.to_string(),
            status: rule.status,
            priority: rule.priority,
            because: rule.because.to_string(),
            prevents: rule.prevents.to_string(),
            tradeoff: rule.tradeoff.to_string(),
        }
    }
}

/// Output bundle of one interpretation.
///
/// Field names on the wire (`x`, `y`, `rules`, `version`) match stored results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EkkoResult {
    #[serde(rename = "x")]
    pub signals: XSignals,
    #[serde(rename = "y")]
    pub intent: YIntent,
    pub rules: Vec<RuleFired>,
    pub version: String,
}

impl EkkoResult {
    /// Whether a rule with this id fired
    pub fn fired(&self, id: &str) -> bool {
        self.rules.iter().any(|r| r.id == id)
    }
}

/// Run a rule catalog against `signals`.
pub fn apply_ruleset(signals: XSignals, rules: &[RuleDefinition]) -> EkkoResult {
    let mut matching: Vec<&RuleDefinition> =
        rules.iter().filter(|rule| rule.matches(&signals)).collect();
    // Stable sort: equal priorities keep declaration order.
    matching.sort_by_key(|rule| rule.priority);

    let mut intent = baseline_intent();
    let mut fired = Vec::with_capacity(matching.len());
    for rule in matching {
        debug!(rule = rule.id, priority = rule.priority, status = %rule.status, "rule fired");
        intent = rule.apply(intent);
        fired.push(RuleFired::from(rule));
    }

    EkkoResult {
        signals,
        intent,
        rules: fired,
        version: RULESET_VERSION.to_string(),
    }
}

/// Run the built-in catalog against `signals`
pub fn apply_rules(signals: XSignals) -> EkkoResult {
    apply_ruleset(signals, RULES)
}
