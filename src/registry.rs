//! Scenario Registry
//!
//! Maps a (principle, variant) key to the demonstration that runs it.
//! The standard registry is built once at startup and only read afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ScenarioError, ScenarioResult};
use crate::narrative::Narrative;

/// The five SOLID principles, in acronym order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        }
    }

    pub fn acronym(&self) -> &'static str {
        match self {
            Principle::Srp => "SRP",
            Principle::Ocp => "OCP",
            Principle::Lsp => "LSP",
            Principle::Isp => "ISP",
            Principle::Dip => "DIP",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open/Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Principle {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Principle::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScenarioError::UnknownScenario(format!("no principle named '{}'", s)))
    }
}

/// Whether a demonstration violates or respects its principle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Bad,
    Good,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Bad, Variant::Good];

    pub fn slug(&self) -> &'static str {
        match self {
            Variant::Bad => "bad",
            Variant::Good => "good",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Bad => "Bad",
            Variant::Good => "Good",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Variant {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScenarioError::UnknownScenario(format!("no variant named '{}'", s)))
    }
}

/// Lookup key for a scenario, rendered as `principle/variant`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ScenarioKey {
    pub principle: Principle,
    pub variant: Variant,
}

impl ScenarioKey {
    pub const fn new(principle: Principle, variant: Variant) -> Self {
        Self { principle, variant }
    }

    /// Every key the standard registry serves
    pub fn all() -> impl Iterator<Item = ScenarioKey> {
        Principle::ALL
            .into_iter()
            .flat_map(|p| Variant::ALL.into_iter().map(move |v| ScenarioKey::new(p, v)))
    }

    /// Heading used by the narrative, e.g. "Open/Closed Principle (OCP) – Bad example"
    pub fn title(&self) -> String {
        format!(
            "{} ({}) – {} example",
            self.principle.name(),
            self.principle.acronym(),
            self.variant.label()
        )
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.principle, self.variant)
    }
}

impl FromStr for ScenarioKey {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (principle, variant) = s
            .split_once('/')
            .ok_or_else(|| ScenarioError::UnknownScenario(s.to_string()))?;
        Ok(ScenarioKey::new(principle.parse()?, variant.parse()?))
    }
}

/// A zero-argument demonstration producing a narrative
#[derive(Clone)]
pub struct Scenario {
    key: ScenarioKey,
    run: fn() -> ScenarioResult<Narrative>,
}

impl Scenario {
    pub fn new(key: ScenarioKey, run: fn() -> ScenarioResult<Narrative>) -> Self {
        Self { key, run }
    }

    pub fn key(&self) -> ScenarioKey {
        self.key
    }

    pub fn title(&self) -> String {
        self.key.title()
    }

    /// Execute the scenario body without any error narration
    pub fn execute(&self) -> ScenarioResult<Narrative> {
        (self.run)()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario").field("key", &self.key).finish()
    }
}

/// Catalog of runnable scenarios
#[derive(Debug, Default)]
pub struct ScenarioRegistry {
    scenarios: BTreeMap<ScenarioKey, Scenario>,
}

impl ScenarioRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The ten demonstrations: five principles, a bad and a good variant each
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for scenario in crate::principles::scenarios() {
            registry.register(scenario);
        }
        registry
    }

    /// Register a scenario, replacing any previous one under the same key
    pub fn register(&mut self, scenario: Scenario) {
        self.scenarios.insert(scenario.key(), scenario);
    }

    pub fn get(&self, key: ScenarioKey) -> ScenarioResult<&Scenario> {
        self.scenarios
            .get(&key)
            .ok_or_else(|| ScenarioError::UnknownScenario(key.to_string()))
    }

    /// Look up a scenario from raw path segments
    pub fn resolve(&self, principle: &str, variant: &str) -> ScenarioResult<&Scenario> {
        let key = ScenarioKey::new(principle.parse()?, variant.parse()?);
        self.get(key)
    }

    /// Registered scenarios in principle order, bad before good
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run a scenario. Only an unregistered key is an error; failures raised
    /// inside the scenario body are narrated instead.
    pub fn run(&self, key: ScenarioKey) -> ScenarioResult<Narrative> {
        let scenario = self.get(key)?;
        info!(scenario = %key, "Running scenario");

        match scenario.execute() {
            Ok(narrative) if !narrative.is_empty() => Ok(narrative),
            Ok(_) => {
                warn!(scenario = %key, "Scenario produced an empty narrative");
                Ok(Narrative::titled(scenario.title())
                    .line("This demonstration produced no explanation."))
            }
            Err(e) => {
                warn!(scenario = %key, error = %e, "Scenario failed, narrating the failure");
                Ok(Narrative::titled(scenario.title())
                    .line("The demonstration stopped before it could finish.")
                    .blank()
                    .line(format!("Result: {}", e)))
            }
        }
    }
}
