use std::fmt;
use crate::prover::{Rule, StepId, Vocabulary};

/// Everything that can go wrong while building or extending a derivation.
/// A failed rule application leaves the derivation untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// a context entry or goal that is not a well formed proposition
    InvalidConstruction(String),
    /// the step does not exist, or it is not open anymore
    InvalidStepReference(StepId),
    RuleNotApplicable {
        rule: Rule,
        step: StepId,
    },
    /// the rule needs a witness, and none (or the wrong one) was given
    MissingWitness {
        rule: Rule,
        reason: String,
    },
    UnrecognizedRule {
        name: String,
        vocabulary: Option<Vocabulary>,
    },
}

impl ProofError {
    pub(crate) fn missing_witness(rule: Rule, reason: impl Into<String>) -> ProofError {
        ProofError::MissingWitness { rule, reason: reason.into() }
    }
    pub(crate) fn unrecognized(name: impl Into<String>) -> ProofError {
        ProofError::UnrecognizedRule { name: name.into(), vocabulary: None }
    }
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofError::InvalidConstruction(why) => {
                write!(f, "invalid construction: {}", why)
            }
            ProofError::InvalidStepReference(step) => {
                write!(f, "step {} does not exist or is already resolved", step)
            }
            ProofError::RuleNotApplicable { rule, step } => {
                write!(f, "rule {} can not be applied to step {}", rule, step)
            }
            ProofError::MissingWitness { rule, reason } => {
                write!(f, "rule {} needs a witness: {}", rule, reason)
            }
            ProofError::UnrecognizedRule { name, vocabulary: None } => {
                write!(f, "unrecognized rule `{}`", name)
            }
            ProofError::UnrecognizedRule { name, vocabulary: Some(vocabulary) } => {
                write!(f, "rule `{}` is not part of the {} vocabulary", name, vocabulary)
            }
        }
    }
}

impl std::error::Error for ProofError {

}

pub type BoxedErrorTrait = Box<(dyn std::error::Error + 'static)>;
