mod rule;
pub use rule::*;

mod step;
pub use step::*;

mod resolver;
pub use resolver::*;

mod script;
pub use script::*;

use crate::ast;
use crate::error::ProofError;

/// Parse the givens and the goal,
/// and start a derivation of the goal from the givens
pub fn start_proof(givens: &[&str], goal: &str, vocabulary: Vocabulary) -> Result<Resolver, ProofError> {
    let givens = givens
        .iter()
        .map(|&source| parse_prop(source))
        .collect::<Result<Vec<_>, _>>()?;
    let goal = parse_prop(goal)?;
    Ok(Resolver::new(givens, goal, vocabulary))
}

/// Parse errors mean the proposition could not be constructed
pub(crate) fn parse_prop(source: &str) -> Result<ast::Prop, ProofError> {
    ast::parse(source)
        .map_err(|why| ProofError::InvalidConstruction(format!("`{}`: {}", source, why)))
}
