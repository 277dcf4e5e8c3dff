use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::error::{Error, ErrorVariant, InputLocation};

use pest_derive::*;
use crate::ast::Prop;

#[derive(Parser)]
#[grammar = "../grammar.pest"]
struct Grammar;

pub fn parse(source: &str) -> Result<Prop, Error<Rule>> {
    // pest (essentially) tokenizes it for us,
    // all we have to do is deal with operator chains
    // and converting into Prop trees
    let pairs = Grammar::parse(Rule::source, source).map_err(|e| explain_reserved(source, e))?;
    parse_expr(pairs)
}

fn parse_expr(pairs: Pairs<'_, Rule>) -> Result<Prop, Error<Rule>> {
    let mut operator: Option<Pair<'_, Rule>> = None; // we don't have an operator yet
    let mut terms = vec![];
    for pair in pairs {
        match pair.as_rule() {
            Rule::EOI => { break; }
            Rule::operator => {
                let new_operator = match pair.clone().into_inner().next() {
                    Some(op) => op,
                    None => return Err(unexpected(&pair)),
                };
                match operator.as_ref().map(|old| old.as_rule()) {
                    // if this is the first operator we've seen, update the operator
                    None => operator = Some(new_operator),
                    // we can not chain implications, and we can not chain different operators together
                    Some(old_rule)
                        if old_rule == Rule::implies
                        || old_rule != new_operator.as_rule() => {
                        let variant = ErrorVariant::CustomError {
                            message: format!("unexpected {:?} after {:?}; try adding parenthesis to disambiguate",
                                              new_operator.as_rule(), old_rule
                            )
                        };
                        return Err(Error::new_from_span(variant, new_operator.as_span()));
                    }
                    Some(_) => {}
                }
            }
            _ => {
                // not an operator, it is a term
                terms.push(parse_term(pair)?);
            }
        }
    }
    let mut terms = terms.into_iter();
    // the grammar puts a term before every operator
    let first = match terms.next() {
        Some(first) => first,
        None => {
            let variant = ErrorVariant::CustomError { message: "expected a proposition".to_string() };
            return Err(Error::new_from_pos(variant, pest::Position::from_start("")));
        }
    };
    let prop = match operator {
        None => first,
        Some(op) => {
            // `a and b and c` becomes `(a and b) and c`
            let combine: fn(Prop, Prop) -> Prop = match op.as_rule() {
                Rule::and => Prop::and,
                Rule::or => Prop::or,
                Rule::implies => Prop::implies,
                _ => return Err(unexpected(&op)),
            };
            terms.fold(first, combine)
        }
    };
    Ok(prop)
}

fn parse_term(pair: Pair<'_, Rule>) -> Result<Prop, Error<Rule>> {
    let prop = match pair.as_rule() {
        Rule::literal => {
            Prop::var(pair.as_str())
        }
        Rule::bottom => {
            Prop::bottom()
        }
        Rule::negation => {
            let mut inner = pair.clone().into_inner()
                .filter(|p| p.as_rule() != Rule::not);
            match inner.next() {
                Some(negated) => Prop::not(parse_term(negated)?),
                None => return Err(unexpected(&pair)),
            }
        }
        Rule::parenthetical => {
            parse_expr(pair.into_inner())?
        }
        // operators, EOI and silent rules never reach a term position
        _ => return Err(unexpected(&pair)),
    };
    Ok(prop)
}

/// an error for a token the grammar should never have put here
fn unexpected(pair: &Pair<'_, Rule>) -> Error<Rule> {
    let variant = ErrorVariant::CustomError {
        message: format!("unexpected {:?} `{}`", pair.as_rule(), pair.as_str())
    };
    Error::new_from_span(variant, pair.as_span())
}

/// updates the error so that reserved words are mentioned in the error message
fn explain_reserved(source: &str, mut error: Error<Rule>) -> Error<Rule> {
    let start_idx = match error.location {
        InputLocation::Pos(idx) => idx,
        InputLocation::Span((idx, _)) => idx,
    };
    // check if reserved word would parse starting here
    let pair = match source.get(start_idx..).map(|rest| Grammar::parse(Rule::reserved, rest)) {
        Some(Ok(pair)) => pair,
        // not a reserved word, it did not fail because of that
        _ => return error,
    };
    error.variant = ErrorVariant::CustomError {
        message: format!("unexpected reserved word `{}`; expected literal, negation, or parenthetical",
                           pair.as_str().trim()
        )
    };
    error
}
