use std::fmt;
use std::rc::Rc;

/// An immutable propositional formula.
/// Sub-formulas are shared, so cloning a `Prop` never copies the tree
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Prop {
    kind: Rc<PropKind>
}

/// Represents what type of proposition it is, and any associated data
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    Var(String),
    Not(Prop),
    And(Prop, Prop),
    Or(Prop, Prop),
    Implies(Prop, Prop),
    Bottom,
}

impl PropKind {
    pub fn into(self) -> Prop {
        Prop { kind: Rc::new(self) }
    }
}

impl Prop {
    pub fn var(name: impl Into<String>) -> Prop {
        PropKind::Var(name.into()).into()
    }
    /// The falsum, `⊥`
    pub fn bottom() -> Prop {
        PropKind::Bottom.into()
    }
    pub fn not(inner: Prop) -> Prop {
        PropKind::Not(inner).into()
    }
    pub fn and(left: Prop, right: Prop) -> Prop {
        PropKind::And(left, right).into()
    }
    pub fn or(left: Prop, right: Prop) -> Prop {
        PropKind::Or(left, right).into()
    }
    pub fn implies(antecedent: Prop, consequent: Prop) -> Prop {
        PropKind::Implies(antecedent, consequent).into()
    }

    /// What this proposition is made of
    pub fn kind(&self) -> &PropKind {
        &self.kind
    }
    /// Wrap `self` in a negation, leaving `self` untouched
    pub fn negate(&self) -> Prop {
        Prop::not(self.clone())
    }
    /// The proposition under a negation, if this is one
    pub fn negated(&self) -> Option<&Prop> {
        match self.kind() {
            PropKind::Not(inner) => Some(inner),
            _ => None,
        }
    }
    pub fn is_bottom(&self) -> bool {
        matches!(self.kind(), PropKind::Bottom)
    }
    /// Recognizes the shape `P or not P`
    pub fn is_excluded_middle(&self) -> bool {
        match self.kind() {
            PropKind::Or(left, right) => right.negated() == Some(left),
            _ => false,
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PropKind::Var(name) => write!(f, "{}", name),
            PropKind::Not(inner) => write!(f, "(¬{})", inner),
            PropKind::And(left, right) => write!(f, "({} ∧ {})", left, right),
            PropKind::Or(left, right) => write!(f, "({} ∨ {})", left, right),
            PropKind::Implies(left, right) => write!(f, "({} → {})", left, right),
            PropKind::Bottom => write!(f, "⊥"),
        }
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
