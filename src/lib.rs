#[macro_use] extern crate log;

mod error;
mod ast;
mod prover;

pub use ast::{Prop, PropKind, parse, Rule as SyntaxRule};
pub use error::{BoxedErrorTrait, ProofError};
pub use prover::{
    AutoClose, Resolution, Resolver, Rule, Script, ScriptStep, Step, StepId, Vocabulary, start_proof,
};
