use std::fmt;
use std::str::FromStr;
use serde::Deserialize;
use crate::error::ProofError;

/// An inference rule of natural deduction, read backwards:
/// applying it to a goal replaces the goal with the premises the rule needs
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Axiom,
    AndIntroduction,
    AndElimination1,
    AndElimination2,
    ImplicationIntroduction,
    ImplicationElimination,
    OrIntroduction1,
    OrIntroduction2,
    OrElimination,
    NegationIntroduction,
    NegationElimination,
    ModusTollens,
    DoubleNegationIntroduction,
    // classical only
    DoubleNegationElimination,
    ExcludedMiddle,
    ProofByContradiction,
}

/// older spellings that are still accepted
const RULE_ALIASES: &[(Rule, &str)] = &[
    (Rule::DoubleNegationIntroduction, "NEGATION_NEGATION_INTRODUCTION"),
    (Rule::DoubleNegationElimination, "NEGATION_NEGATION_ELIMINATION"),
];

const INTUITIONISTIC: &[Rule] = &[
    Rule::Axiom,
    Rule::AndIntroduction,
    Rule::AndElimination1,
    Rule::AndElimination2,
    Rule::ImplicationIntroduction,
    Rule::ImplicationElimination,
    Rule::OrIntroduction1,
    Rule::OrIntroduction2,
    Rule::OrElimination,
    Rule::NegationIntroduction,
    Rule::NegationElimination,
    Rule::ModusTollens,
    Rule::DoubleNegationIntroduction,
];

const CLASSICAL: &[Rule] = &[
    Rule::Axiom,
    Rule::AndIntroduction,
    Rule::AndElimination1,
    Rule::AndElimination2,
    Rule::ImplicationIntroduction,
    Rule::ImplicationElimination,
    Rule::OrIntroduction1,
    Rule::OrIntroduction2,
    Rule::OrElimination,
    Rule::NegationIntroduction,
    Rule::NegationElimination,
    Rule::ModusTollens,
    Rule::DoubleNegationIntroduction,
    Rule::DoubleNegationElimination,
    Rule::ExcludedMiddle,
    Rule::ProofByContradiction,
];

impl Rule {
    /// Every rule, in display order
    pub fn all() -> &'static [Rule] {
        CLASSICAL
    }
    /// The short symbol and the long name of the rule
    fn spellings(self) -> (&'static str, &'static str) {
        use Rule::*;
        match self {
            Axiom => ("Axiom", "AXIOM"),
            AndIntroduction => ("∧I", "AND_INTRODUCTION"),
            AndElimination1 => ("∧E1", "AND_ELIMINATION_1"),
            AndElimination2 => ("∧E2", "AND_ELIMINATION_2"),
            ImplicationIntroduction => ("→I", "IMPLICATION_INTRODUCTION"),
            ImplicationElimination => ("→E", "IMPLICATION_ELIMINATION"),
            OrIntroduction1 => ("∨I1", "OR_INTRODUCTION_1"),
            OrIntroduction2 => ("∨I2", "OR_INTRODUCTION_2"),
            OrElimination => ("∨E", "OR_ELIMINATION"),
            NegationIntroduction => ("¬I", "NEGATION_INTRODUCTION"),
            NegationElimination => ("¬E", "NEGATION_ELIMINATION"),
            ModusTollens => ("MT", "MODUS_TOLLENS"),
            DoubleNegationIntroduction => ("¬¬I", "DOUBLE_NEGATION_INTRODUCTION"),
            DoubleNegationElimination => ("¬¬E", "DOUBLE_NEGATION_ELIMINATION"),
            ExcludedMiddle => ("LEM", "EXCLUDED_MIDDLE"),
            ProofByContradiction => ("PBC", "PROOF_BY_CONTRADICTION"),
        }
    }
    /// The short symbol, such as `∧E1` or `LEM`
    pub fn symbol(self) -> &'static str {
        self.spellings().0
    }
    /// The long name, such as `AND_ELIMINATION_1`
    pub fn name(self) -> &'static str {
        self.spellings().1
    }
    /// Does applying this rule need the caller to point at a witness
    pub fn requires_witness(self) -> bool {
        use Rule::*;
        match self {
            AndElimination1 | AndElimination2 | ImplicationElimination
            | OrElimination | NegationElimination | ModusTollens => true,
            Axiom | AndIntroduction | ImplicationIntroduction | OrIntroduction1 | OrIntroduction2
            | NegationIntroduction | DoubleNegationIntroduction | DoubleNegationElimination
            | ExcludedMiddle | ProofByContradiction => false,
        }
    }
    /// Rules that only hold in classical logic
    pub fn is_classical(self) -> bool {
        matches!(self, Rule::DoubleNegationElimination | Rule::ExcludedMiddle | Rule::ProofByContradiction)
    }
}

impl FromStr for Rule {
    type Err = ProofError;

    /// Accepts either the symbol or the long name, ignoring case,
    /// and treating `-` and spaces in long names as `_`
    fn from_str(source: &str) -> Result<Rule, ProofError> {
        let wanted = source.trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect::<String>()
            .to_uppercase();
        let found = Rule::all().iter()
            .flat_map(|&rule| vec![(rule, rule.symbol()), (rule, rule.name())])
            .chain(RULE_ALIASES.iter().copied())
            .find(|(_, spelling)| spelling.to_uppercase() == wanted)
            .map(|(rule, _)| rule);
        found.ok_or_else(|| ProofError::unrecognized(source))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A named set of rules that a proof may use
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Intuitionistic,
    Classical,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::Intuitionistic
    }
}

impl Vocabulary {
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Vocabulary::Intuitionistic => INTUITIONISTIC,
            Vocabulary::Classical => CLASSICAL,
        }
    }
    pub fn contains(self, rule: Rule) -> bool {
        self.rules().contains(&rule)
    }
    /// Parse a rule identifier, rejecting rules outside this vocabulary
    pub fn rule(self, source: &str) -> Result<Rule, ProofError> {
        let rule = source.parse::<Rule>()?;
        if self.contains(rule) {
            Ok(rule)
        } else {
            Err(ProofError::UnrecognizedRule { name: source.to_string(), vocabulary: Some(self) })
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vocabulary::Intuitionistic => write!(f, "intuitionistic"),
            Vocabulary::Classical => write!(f, "classical"),
        }
    }
}
