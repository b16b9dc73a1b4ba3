use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::{Duration, Instant};

use shelf_engine::{CatalogLoader, Product, Shelf, TileConfig, TileState, Transition};

use crate::common::scenario::{Expectation, Fixture, TileScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    /// Tiles the script was replayed against.
    pub tiles_run: usize,
    pub steps_run: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// Replays scenario scripts against fresh tiles.
pub struct ScenarioRunner {
    verbose: bool,
    catalog: Vec<Rc<Product>>,
    config: Rc<TileConfig>,
}

impl ScenarioRunner {
    pub fn new(catalog: Vec<Rc<Product>>, config: Rc<TileConfig>, verbose: bool) -> Self {
        Self {
            verbose,
            catalog,
            config,
        }
    }

    /// Build a runner over everything `loader` provides.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the catalog or config cannot be read.
    pub fn load<L: CatalogLoader>(loader: L, verbose: bool) -> Result<Self, L::Error> {
        let shelf = Shelf::new(loader);
        let config = Rc::new(shelf.config()?);
        let catalog = shelf
            .tiles()?
            .iter()
            .map(|tile| Rc::clone(tile.product()))
            .collect();
        Ok(Self::new(catalog, config, verbose))
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn run_scenario(&self, scenario: &TileScenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }
        let start = Instant::now();
        let products = match scenario.fixture {
            Fixture::Product(build) => vec![Rc::new(build())],
            Fixture::Catalog => self.catalog.clone(),
        };

        let mut steps_run = 0;
        let mut failures = Vec::new();
        for product in &products {
            let mut tile = TileState::new(Rc::clone(product), Rc::clone(&self.config));
            match self.replay(scenario, &mut tile, &mut steps_run) {
                Ok(()) => {
                    if self.verbose {
                        println!("  ✅ {} passed", product.id);
                    }
                }
                Err(failure) => {
                    let failure = format!("product {}: {failure}", product.id);
                    if self.verbose {
                        println!("  ❌ {}", failure.clone().red());
                    }
                    failures.push(failure);
                }
            }
        }
        if products.is_empty() {
            failures.push("no products to run against".to_string());
        }

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            tiles_run: products.len(),
            steps_run,
            failures,
            duration: start.elapsed(),
        }
    }

    fn replay(
        &self,
        scenario: &TileScenario,
        tile: &mut TileState,
        steps_run: &mut usize,
    ) -> Result<(), String> {
        check_all(&scenario.invariants, tile).map_err(|err| format!("initial state: {err}"))?;

        for (index, step) in scenario.steps.iter().enumerate() {
            let transition = tile.apply(step.action.clone());
            *steps_run += 1;
            log::debug!("{} step {}: {:?} -> {transition:?}", scenario.key, index + 1, step.action);
            if self.verbose {
                if let Transition::Rejected(reason) = &transition {
                    println!("     ↳ step {} rejected: {reason}", index + 1);
                }
            }

            let context = |err: anyhow::Error| {
                format!("step {} ({:?}): {err}", index + 1, step.action)
            };
            if let Some(expect) = step.expect {
                expect(tile).map_err(context)?;
            }
            check_all(&scenario.invariants, tile).map_err(context)?;
        }
        Ok(())
    }
}

fn check_all(checks: &[Expectation], tile: &TileState) -> anyhow::Result<()> {
    checks.iter().try_for_each(|check| check(tile))
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
