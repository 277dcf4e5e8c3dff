use std::fs;
use std::io::Read;
use std::path::Path;
use serde::Deserialize;
use crate::error::{BoxedErrorTrait, ProofError};
use crate::prover::{AutoClose, Resolver, StepId, Vocabulary, parse_prop};

/// One rule application of a script
#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    pub step: usize,
    pub rule: String,
    #[serde(default)]
    pub witness: Option<String>,
}

/// A proof written down as TOML:
/// the premises, the goal, and the rules to apply in order
#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub logic: Vocabulary,
    #[serde(default)]
    pub auto_close: AutoClose,
    #[serde(default)]
    pub context: Vec<String>,
    pub goal: String,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn load(path: impl AsRef<Path>) -> Result<Script, BoxedErrorTrait> {
        let mut file = fs::File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        let script = Script::from_toml(buf.as_str())?;
        Ok(script)
    }
    pub fn from_toml(source: &str) -> Result<Script, toml::de::Error> {
        let script = toml::from_str(source)?;
        Ok(script)
    }

    /// Parse the context and goal, and start a derivation from them
    pub fn start(&self) -> Result<Resolver, ProofError> {
        let context = self.context
            .iter()
            .map(|source| parse_prop(source))
            .collect::<Result<Vec<_>, _>>()?;
        let goal = parse_prop(&self.goal)?;
        Ok(Resolver::new(context, goal, self.logic).with_auto_close(self.auto_close))
    }

    /// Replay every step of the script, stopping at the first failure
    pub fn run(&self) -> Result<Resolver, ProofError> {
        let mut resolver = self.start()?;
        for (n, entry) in self.steps.iter().enumerate() {
            let witness = match &entry.witness {
                Some(source) => Some(parse_prop(source)?),
                None => None,
            };
            debug!("script step {}: {} at step {}", n, entry.rule, entry.step);
            resolver.apply_named(StepId::from(entry.step), &entry.rule, witness.as_ref())?;
        }
        Ok(resolver)
    }
}
