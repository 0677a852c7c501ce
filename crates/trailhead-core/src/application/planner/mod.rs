//! Artifact planner: the fixed rule sequence run against a project model.

pub mod rules;

use tracing::{debug, instrument};

use crate::{
    application::ports::ProjectModel,
    domain::ResolvedConfiguration,
    error::TrailheadResult,
};

pub use rules::{
    CSpellRule, CommitlintRule, DocgenRule, HuskyRule, JsdocRule, PrettierRule, Rule, UnicornRule,
    VscodeExtensionsRule, apply_contributors,
};

/// Which rules fired on one planner run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl PlanReport {
    pub fn was_applied(&self, rule: &str) -> bool {
        self.applied.iter().any(|applied| *applied == rule)
    }
}

pub struct ArtifactPlanner {
    rules: Vec<Box<dyn Rule>>,
}

impl ArtifactPlanner {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The standard sequence. `PrettierRule` closes the lint rules.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(DocgenRule),
            Box::new(VscodeExtensionsRule),
            Box::new(CSpellRule),
            Box::new(HuskyRule),
            Box::new(CommitlintRule),
            Box::new(JsdocRule),
            Box::new(UnicornRule),
            Box::new(PrettierRule),
        ])
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule in order. A rule either fully applies or is skipped.
    #[instrument(skip_all, fields(project = %config.name()))]
    pub fn plan(
        &self,
        config: &ResolvedConfiguration,
        project: &mut dyn ProjectModel,
    ) -> TrailheadResult<PlanReport> {
        let mut report = PlanReport::default();
        for rule in &self.rules {
            if rule.is_triggered(config, &*project) {
                rule.apply(config, project)?;
                debug!(rule = rule.name(), "Rule applied");
                report.applied.push(rule.name());
            } else {
                debug!(rule = rule.name(), "Rule skipped");
                report.skipped.push(rule.name());
            }
        }
        Ok(report)
    }
}

impl Default for ArtifactPlanner {
    fn default() -> Self {
        Self::standard()
    }
}
