//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores lint rules in registration order. Rules run
//! in that order, so findings come out ordered by rule and then by
//! discovery within a rule.

use super::policy::RulePolicy;
use super::rule::{LintRule, RuleId};
use super::rules::{
    CalmDesignRule, DecodableTextRule, GraphemeConstraintsRule, RequiredFieldsRule,
    StepSequenceRule, WordListRule,
};

/// Ordered collection of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules and the default policy.
    pub fn with_builtins() -> Self {
        Self::with_policy(&RulePolicy::default())
    }

    /// Create a registry with all built-in rules configured from `policy`.
    pub fn with_policy(policy: &RulePolicy) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequiredFieldsRule::new(
            policy.required_fields.clone(),
        )));
        registry.register(Box::new(GraphemeConstraintsRule));
        registry.register(Box::new(WordListRule));
        registry.register(Box::new(DecodableTextRule));
        registry.register(Box::new(CalmDesignRule::new(
            policy.forbidden_keywords.clone(),
        )));
        registry.register(Box::new(StepSequenceRule::new(
            policy.opening_step_types.clone(),
            policy.completion_step_type.clone(),
        )));
        registry
    }

    /// Register a lint rule. A rule with the same ID is replaced in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
