//! The module catalog: a validated, immutable registry of learning
//! modules and their ordered scenario lists.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::{LabError, LabResult};
use crate::scenario::{OptionDefinition, ScenarioDefinition, ScenarioKind};

/// A named collection of ordered scenarios sharing one evaluation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Stable identifier (e.g. `"cause-effect"`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description shown on the home screen.
    pub description: String,
    /// The interaction shape of every scenario in this module.
    pub kind: ScenarioKind,
    /// Score delta awarded per correct verdict (per reveal for
    /// pair-connect, per step for pipelines).
    pub points: u32,
    /// Scenarios in play order.
    pub scenarios: Vec<ScenarioDefinition>,
}

/// The registry of all modules available to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    modules: Vec<ModuleDefinition>,
}

impl Catalog {
    /// Build a catalog from module definitions, validating them.
    pub fn new(modules: Vec<ModuleDefinition>) -> LabResult<Self> {
        let catalog = Self { modules };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in Analysis Lab catalog: four critical-thinking modules.
    pub fn builtin() -> Self {
        Self {
            modules: content::builtin_modules(),
        }
    }

    /// All modules in display order.
    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    /// Look up a module by id.
    pub fn get(&self, id: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Position of a module in display order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.id == id)
    }

    /// Check every structural invariant of the catalog.
    pub fn validate(&self) -> LabResult<()> {
        let mut seen = BTreeSet::new();
        for module in &self.modules {
            if !seen.insert(module.id.as_str()) {
                return Err(LabError::DuplicateModule(module.id.clone()));
            }
            if module.scenarios.is_empty() {
                return Err(LabError::EmptyModule(module.id.clone()));
            }
            for (index, scenario) in module.scenarios.iter().enumerate() {
                if scenario.kind() != module.kind {
                    return Err(LabError::KindMismatch {
                        module: module.id.clone(),
                        scenario: index,
                        expected: module.kind,
                        found: scenario.kind(),
                    });
                }
                validate_scenario(&module.id, index, scenario)?;
            }
        }
        Ok(())
    }
}

fn validate_scenario(
    module: &str,
    index: usize,
    scenario: &ScenarioDefinition,
) -> LabResult<()> {
    match scenario {
        ScenarioDefinition::MultiSelect(s) => {
            validate_options(module, index, &s.options)?;
            if !s.options.iter().any(|o| o.correct) {
                return Err(LabError::NoCorrectOption {
                    module: module.to_string(),
                    scenario: index,
                });
            }
        }
        ScenarioDefinition::SingleChoice(s) => {
            validate_options(module, index, &s.options)?;
            validate_single_correct(module, index, &s.options)?;
        }
        ScenarioDefinition::PairConnect(s) => {
            let mut ids = BTreeSet::new();
            for component in &s.components {
                if !ids.insert(component.id.as_str()) {
                    return Err(LabError::DuplicateId {
                        module: module.to_string(),
                        scenario: index,
                        id: component.id.clone(),
                    });
                }
            }
            for component in &s.components {
                for target in &component.affects {
                    if !ids.contains(target.as_str()) {
                        return Err(LabError::UnknownComponent {
                            module: module.to_string(),
                            scenario: index,
                            component: target.clone(),
                        });
                    }
                }
            }
        }
        ScenarioDefinition::Pipeline(s) => {
            for step in &s.steps {
                validate_options(module, index, &step.options)?;
                validate_single_correct(module, index, &step.options)?;
            }
        }
    }
    Ok(())
}

fn validate_options(module: &str, index: usize, options: &[OptionDefinition]) -> LabResult<()> {
    let mut ids = BTreeSet::new();
    for option in options {
        if !ids.insert(option.id) {
            return Err(LabError::DuplicateId {
                module: module.to_string(),
                scenario: index,
                id: option.id.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_single_correct(
    module: &str,
    index: usize,
    options: &[OptionDefinition],
) -> LabResult<()> {
    let found = options.iter().filter(|o| o.correct).count();
    if found != 1 {
        return Err(LabError::WrongCorrectCount {
            module: module.to_string(),
            scenario: index,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{MultiSelectScenario, SingleChoiceScenario};

    fn multi_module(id: &str, options: Vec<OptionDefinition>) -> ModuleDefinition {
        ModuleDefinition {
            id: id.to_string(),
            title: "Test".to_string(),
            description: "Test module".to_string(),
            kind: ScenarioKind::MultiSelect,
            points: 10,
            scenarios: vec![ScenarioDefinition::MultiSelect(MultiSelectScenario {
                situation: "Why?".to_string(),
                options,
                explanation: "Because.".to_string(),
            })],
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("systems").map(|m| m.points), Some(20));
        assert!(catalog.get("nonsense").is_none());
        assert_eq!(catalog.index_of("cause-effect"), Some(0));
    }

    #[test]
    fn rejects_duplicate_module_ids() {
        let options = vec![OptionDefinition::new(1, "a", true)];
        let result = Catalog::new(vec![
            multi_module("m", options.clone()),
            multi_module("m", options),
        ]);
        assert!(matches!(result, Err(LabError::DuplicateModule(_))));
    }

    #[test]
    fn rejects_empty_module() {
        let mut module = multi_module("m", vec![OptionDefinition::new(1, "a", true)]);
        module.scenarios.clear();
        assert!(matches!(
            Catalog::new(vec![module]),
            Err(LabError::EmptyModule(_))
        ));
    }

    #[test]
    fn rejects_kind_mismatch() {
        let mut module = multi_module("m", vec![OptionDefinition::new(1, "a", true)]);
        module.kind = ScenarioKind::SingleChoice;
        assert!(matches!(
            Catalog::new(vec![module]),
            Err(LabError::KindMismatch { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_option_ids() {
        let module = multi_module(
            "m",
            vec![
                OptionDefinition::new(1, "a", true),
                OptionDefinition::new(1, "b", false),
            ],
        );
        assert!(matches!(
            Catalog::new(vec![module]),
            Err(LabError::DuplicateId { .. })
        ));
    }

    #[test]
    fn rejects_multi_select_without_correct_options() {
        let module = multi_module("m", vec![OptionDefinition::new(1, "a", false)]);
        assert!(matches!(
            Catalog::new(vec![module]),
            Err(LabError::NoCorrectOption { .. })
        ));
    }

    #[test]
    fn rejects_ambiguous_single_choice() {
        let module = ModuleDefinition {
            id: "s".to_string(),
            title: "Test".to_string(),
            description: "Test module".to_string(),
            kind: ScenarioKind::SingleChoice,
            points: 15,
            scenarios: vec![ScenarioDefinition::SingleChoice(SingleChoiceScenario {
                context: "Claim.".to_string(),
                prompt: "Flaw?".to_string(),
                options: vec![
                    OptionDefinition::new(1, "a", true),
                    OptionDefinition::new(2, "b", true),
                ],
            })],
        };
        assert!(matches!(
            Catalog::new(vec![module]),
            Err(LabError::WrongCorrectCount { found: 2, .. })
        ));
    }
}
