use anyhow::Result;
use shelf_engine::{Product, TileAction, TileState};

pub mod catalog;
pub mod fixtures;

use catalog::catalog_scenarios;

/// Check run against the tile after a step.
pub type Expectation = fn(&TileState) -> Result<()>;

#[derive(Debug, Clone)]
pub struct Step {
    pub action: TileAction,
    pub expect: Option<Expectation>,
}

impl Step {
    pub const fn act(action: TileAction) -> Self {
        Self {
            action,
            expect: None,
        }
    }

    pub const fn then(action: TileAction, expect: Expectation) -> Self {
        Self {
            action,
            expect: Some(expect),
        }
    }
}

/// Which product(s) a script runs against.
#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    /// A single purpose-built product.
    Product(fn() -> Product),
    /// Every product of the loaded catalog; the script must be product-agnostic.
    Catalog,
}

#[derive(Debug, Clone)]
pub struct TileScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub fixture: Fixture,
    pub steps: Vec<Step>,
    /// Checked on the fresh tile before any step and after every step.
    pub invariants: Vec<Expectation>,
}

impl TileScenario {
    pub const fn new(key: &'static str, name: &'static str, fixture: Fixture) -> Self {
        Self {
            key,
            name,
            fixture,
            steps: Vec::new(),
            invariants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_invariant(mut self, invariant: Expectation) -> Self {
        self.invariants.push(invariant);
        self
    }
}

pub fn get_scenario(name: &str) -> Option<TileScenario> {
    let wanted = name.to_lowercase();
    catalog_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == wanted)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog_scenarios()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn scenario_keys_are_unique_and_resolvable() {
        let keys: Vec<_> = list_scenarios().into_iter().map(|(key, _)| key).collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        for key in keys {
            assert!(get_scenario(key).is_some(), "{key} should resolve");
        }
        assert!(get_scenario("OUTSIDE-DISMISS").is_some());
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn every_scenario_has_steps() {
        for scenario in catalog::catalog_scenarios() {
            assert!(!scenario.steps.is_empty(), "{} has no steps", scenario.key);
        }
    }
}
