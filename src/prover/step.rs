use std::fmt;
use indexmap::IndexSet;
use itertools::Itertools;
use crate::ast::{Prop, PropKind};
use crate::prover::Rule;

/// A goal: derive the `resolvent` from the propositions in the `context`.
/// The context is a set, so duplicates collapse and order only matters for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    context: IndexSet<Prop>,
    resolvent: Prop,
}

impl Step {
    pub fn new<I>(context: I, resolvent: Prop) -> Step
        where I: IntoIterator<Item = Prop>
    {
        Step {
            context: context.into_iter().collect(),
            resolvent,
        }
    }
    pub fn context(&self) -> &IndexSet<Prop> {
        &self.context
    }
    pub fn resolvent(&self) -> &Prop {
        &self.resolvent
    }
    /// Membership by structure, not by identity
    pub fn in_context(&self, prop: &Prop) -> bool {
        self.context.contains(prop)
    }
    /// The resolvent is literally one of the premises
    pub fn is_axiom(&self) -> bool {
        self.in_context(&self.resolvent)
    }

    /// A new goal under the same context
    pub(crate) fn derive(&self, resolvent: Prop) -> Step {
        Step { context: self.context.clone(), resolvent }
    }
    /// A new goal under the same context, extended with `hypothesis`
    pub(crate) fn assume(&self, hypothesis: Prop, resolvent: Prop) -> Step {
        let mut context = self.context.clone();
        context.insert(hypothesis);
        Step { context, resolvent }
    }

    /// Can `rule` be applied to this goal, judging only by the goal itself.
    /// Rules that need a witness are checked against it when they are applied
    pub fn is_applicable(&self, rule: Rule) -> bool {
        use Rule::*;
        match rule {
            Axiom => self.is_axiom(),
            AndIntroduction => matches!(self.resolvent.kind(), PropKind::And(_, _)),
            ImplicationIntroduction => matches!(self.resolvent.kind(), PropKind::Implies(_, _)),
            OrIntroduction1 | OrIntroduction2 => matches!(self.resolvent.kind(), PropKind::Or(_, _)),
            NegationIntroduction | ModusTollens => matches!(self.resolvent.kind(), PropKind::Not(_)),
            // ¬¬R is already a premise
            DoubleNegationIntroduction => self.context.iter()
                .filter_map(Prop::negated)
                .filter_map(Prop::negated)
                .any(|inner| inner == &self.resolvent),
            ExcludedMiddle => self.resolvent.is_excluded_middle(),
            // these conclude anything, what matters is the witness
            AndElimination1 | AndElimination2 | ImplicationElimination
            | OrElimination | NegationElimination
            | DoubleNegationElimination | ProofByContradiction => true,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "⊢ {}", self.resolvent)
        } else {
            write!(f, "{} ⊢ {}", self.context.iter().join(", "), self.resolvent)
        }
    }
}
