use std::fmt;
use indexmap::IndexSet;
use serde::Deserialize;
use crate::ast::{Prop, PropKind};
use crate::error::ProofError;
use crate::prover::{Rule, Step, Vocabulary};

/// An opaque handle to a step of a derivation,
/// only meaningful for the resolver that handed it out
#[derive(Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct StepId(usize);

impl StepId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StepId {
    fn from(index: usize) -> Self {
        StepId(index)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a step of the derivation has been dealt with
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// still waiting for a rule
    Open,
    /// a rule was applied, its premises are the step's children
    Rule(Rule),
    /// the resolvent is one of the premises
    Axiom,
}

impl Resolution {
    pub fn is_open(self) -> bool {
        self == Resolution::Open
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Open => write!(f, "❌ needs a rule"),
            Resolution::Rule(rule) => write!(f, "by {}", rule),
            Resolution::Axiom => write!(f, "✅ axiom"),
        }
    }
}

/// Which freshly created steps are closed on the spot when they are axioms
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoClose {
    /// only the obligations that re-establish a witness,
    /// everything else waits for an explicit `Axiom`
    Premises,
    /// every axiom
    All,
}

impl Default for AutoClose {
    fn default() -> Self {
        AutoClose::Premises
    }
}

#[derive(Debug)]
struct Node {
    step: Step,
    parent: Option<StepId>,
    status: Resolution,
}

/// A step produced by a rule, before it joins the derivation
struct Child {
    step: Step,
    /// the step only re-establishes the witness
    premise: bool,
}

impl Child {
    fn subgoal(step: Step) -> Child {
        Child { step, premise: false }
    }
    fn premise(step: Step) -> Child {
        Child { step, premise: true }
    }
    fn closes(&self, policy: AutoClose) -> bool {
        self.step.is_axiom() && (self.premise || policy == AutoClose::All)
    }
}

/// Owns a derivation: every step ever created, linked to the step it came from,
/// and the frontier of steps that still need a rule
#[derive(Debug)]
pub struct Resolver {
    nodes: Vec<Node>,
    open: IndexSet<StepId>,
    vocabulary: Vocabulary,
    auto_close: AutoClose,
}

impl Resolver {
    /// Start a derivation of `goal` from `context`.
    /// The root is open even if it is already an axiom
    pub fn new<I>(context: I, goal: Prop, vocabulary: Vocabulary) -> Resolver
        where I: IntoIterator<Item = Prop>
    {
        let root = Node {
            step: Step::new(context, goal),
            parent: None,
            status: Resolution::Open,
        };
        debug!("new {} derivation: {}", vocabulary, root.step);
        let mut open = IndexSet::new();
        open.insert(StepId(0));
        Resolver {
            nodes: vec![root],
            open,
            vocabulary,
            auto_close: AutoClose::default(),
        }
    }
    pub fn with_auto_close(mut self, auto_close: AutoClose) -> Resolver {
        self.auto_close = auto_close;
        self
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }
    pub fn auto_close(&self) -> AutoClose {
        self.auto_close
    }
    pub fn root(&self) -> StepId {
        StepId(0)
    }
    /// How many steps the derivation has, open or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.nodes.get(id.0).map(|node| &node.step)
    }
    pub fn parent(&self, id: StepId) -> Option<StepId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }
    pub fn status(&self, id: StepId) -> Option<Resolution> {
        self.nodes.get(id.0).map(|node| node.status)
    }
    pub fn children(&self, id: StepId) -> Vec<StepId> {
        self.nodes.iter()
            .enumerate()
            .filter(|(_, node)| node.parent == Some(id))
            .map(|(index, _)| StepId(index))
            .collect()
    }
    /// The steps still waiting for a rule, oldest first
    pub fn open_steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.open.iter().copied()
    }
    pub fn is_open(&self, id: StepId) -> bool {
        self.open.contains(&id)
    }
    /// Every leaf has been closed
    pub fn is_complete(&self) -> bool {
        self.open.is_empty()
    }

    fn open_step(&self, id: StepId) -> Result<&Step, ProofError> {
        if !self.is_open(id) {
            return Err(ProofError::InvalidStepReference(id));
        }
        self.step(id).ok_or(ProofError::InvalidStepReference(id))
    }
    fn check_vocabulary(&self, rule: Rule) -> Result<(), ProofError> {
        if self.vocabulary.contains(rule) {
            Ok(())
        } else {
            Err(ProofError::UnrecognizedRule {
                name: rule.symbol().to_string(),
                vocabulary: Some(self.vocabulary),
            })
        }
    }

    /// Would `rule` be accepted for the open step `id`, leaving witnesses aside
    pub fn is_applicable(&self, id: StepId, rule: Rule) -> Result<bool, ProofError> {
        let step = self.open_step(id)?;
        self.check_vocabulary(rule)?;
        Ok(step.is_applicable(rule))
    }
    /// Every rule of the vocabulary whose precondition holds at the open step `id`
    pub fn applicable_rules(&self, id: StepId) -> Result<Vec<Rule>, ProofError> {
        let step = self.open_step(id)?;
        Ok(self.vocabulary.rules()
            .iter()
            .copied()
            .filter(|&rule| step.is_applicable(rule))
            .collect())
    }

    /// Like `apply`, but the rule is given by its symbol or name
    pub fn apply_named(&mut self, id: StepId, rule: &str, witness: Option<&Prop>) -> Result<Vec<StepId>, ProofError> {
        let rule = self.vocabulary.rule(rule)?;
        self.apply(id, rule, witness)
    }

    /// Apply `rule` to the open step `id`, returning the steps it opened.
    /// On error nothing changes
    pub fn apply(&mut self, id: StepId, rule: Rule, witness: Option<&Prop>) -> Result<Vec<StepId>, ProofError> {
        let step = self.open_step(id)?;
        self.check_vocabulary(rule)?;
        if !step.is_applicable(rule) {
            debug!("rejected {} at step {}: {}", rule, id, step);
            return Err(ProofError::RuleNotApplicable { rule, step: id });
        }
        if witness.is_some() && !rule.requires_witness() {
            debug!("ignoring the witness given to {}", rule);
        }
        let children = expand(step, id, rule, witness)?;
        debug!("applying {} to step {}: {}", rule, id, step);

        // nothing has failed, commit
        self.nodes[id.0].status = match rule {
            Rule::Axiom => Resolution::Axiom,
            _ => Resolution::Rule(rule),
        };
        self.open.shift_remove(&id);

        let mut opened = vec![];
        for child in children {
            let child_id = StepId(self.nodes.len());
            let status = if child.closes(self.auto_close) {
                trace!("step {} closed on creation: {}", child_id, child.step);
                Resolution::Axiom
            } else {
                trace!("step {} opened: {}", child_id, child.step);
                self.open.insert(child_id);
                opened.push(child_id);
                Resolution::Open
            };
            self.nodes.push(Node { step: child.step, parent: Some(id), status });
        }
        if self.is_complete() {
            debug!("derivation complete after {} steps", self.nodes.len());
        }
        Ok(opened)
    }

    /// All steps, newest first, with where they came from and how they were resolved
    pub fn render(&self) -> String {
        self.to_string()
    }
    /// All steps, parents before their children, indented by depth
    pub fn tree(&self) -> impl fmt::Display + '_ {
        TreeView(self)
    }
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.nodes.iter().enumerate().rev() {
            match node.parent {
                Some(parent) => writeln!(f, "{}: {} (from: {}) - {}", index, node.step, parent, node.status)?,
                None => writeln!(f, "{}: {} (goal) - {}", index, node.step, node.status)?,
            }
        }
        Ok(())
    }
}

struct TreeView<'a>(&'a Resolver);

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolver = self.0;
        // depth first, keeping children in creation order
        let mut stack = vec![(resolver.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = &resolver.nodes[id.0];
            writeln!(f, "{:indent$}{}: {}  [{}]", "", id, node.step, node.status, indent = depth * 2)?;
            for child in resolver.children(id).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}

/// The witness, or an error explaining what kind of witness `rule` wanted
fn require<'w>(rule: Rule, witness: Option<&'w Prop>, wanted: &str) -> Result<&'w Prop, ProofError> {
    witness.ok_or_else(|| ProofError::missing_witness(rule, format!("expected {}", wanted)))
}

fn mismatch(rule: Rule, witness: &Prop, wanted: &str) -> ProofError {
    ProofError::missing_witness(rule, format!("expected {}, found {}", wanted, witness))
}

/// The steps that `rule` reduces `step` to.
/// Assumes `step.is_applicable(rule)` holds
fn expand(step: &Step, id: StepId, rule: Rule, witness: Option<&Prop>) -> Result<Vec<Child>, ProofError> {
    use Rule::*;
    let goal = step.resolvent();
    let children = match (rule, goal.kind()) {
        // closing rules
        (Axiom, _) | (DoubleNegationIntroduction, _) | (ExcludedMiddle, _) => vec![],

        (AndIntroduction, PropKind::And(left, right)) => vec![
            Child::subgoal(step.derive(left.clone())),
            Child::subgoal(step.derive(right.clone())),
        ],
        (AndElimination1, _) => {
            let wanted = format!("a conjunction with {} on the left", goal);
            let conj = require(rule, witness, &wanted)?;
            match conj.kind() {
                PropKind::And(left, _) if left == goal => vec![Child::premise(step.derive(conj.clone()))],
                _ => return Err(mismatch(rule, conj, &wanted)),
            }
        }
        (AndElimination2, _) => {
            let wanted = format!("a conjunction with {} on the right", goal);
            let conj = require(rule, witness, &wanted)?;
            match conj.kind() {
                PropKind::And(_, right) if right == goal => vec![Child::premise(step.derive(conj.clone()))],
                _ => return Err(mismatch(rule, conj, &wanted)),
            }
        }

        (ImplicationIntroduction, PropKind::Implies(antecedent, consequent)) => vec![
            Child::subgoal(step.assume(antecedent.clone(), consequent.clone())),
        ],
        (ImplicationElimination, _) => {
            let wanted = format!("an implication concluding {}", goal);
            let implication = require(rule, witness, &wanted)?;
            match implication.kind() {
                PropKind::Implies(antecedent, consequent) if consequent == goal => vec![
                    Child::subgoal(step.derive(antecedent.clone())),
                    Child::premise(step.derive(implication.clone())),
                ],
                _ => return Err(mismatch(rule, implication, &wanted)),
            }
        }

        (OrIntroduction1, PropKind::Or(left, _)) => vec![Child::subgoal(step.derive(left.clone()))],
        (OrIntroduction2, PropKind::Or(_, right)) => vec![Child::subgoal(step.derive(right.clone()))],
        (OrElimination, _) => {
            let wanted = "a disjunction";
            let disj = require(rule, witness, wanted)?;
            match disj.kind() {
                PropKind::Or(left, right) => vec![
                    Child::premise(step.derive(disj.clone())),
                    Child::subgoal(step.assume(left.clone(), goal.clone())),
                    Child::subgoal(step.assume(right.clone(), goal.clone())),
                ],
                _ => return Err(mismatch(rule, disj, wanted)),
            }
        }

        (NegationIntroduction, PropKind::Not(negated)) => vec![
            Child::subgoal(step.assume(negated.clone(), Prop::bottom())),
        ],
        // P and ¬P, anything follows
        (NegationElimination, _) => {
            let prop = require(rule, witness, "a proposition whose negation also holds")?;
            vec![
                Child::premise(step.derive(prop.clone())),
                Child::premise(step.derive(prop.negate())),
            ]
        }
        (ModusTollens, PropKind::Not(negated)) => {
            let wanted = format!("an implication from {} in the context", negated);
            let implication = require(rule, witness, &wanted)?;
            match implication.kind() {
                PropKind::Implies(antecedent, consequent)
                    if antecedent == negated && step.in_context(implication) => vec![
                    Child::subgoal(step.derive(consequent.negate())),
                ],
                _ => return Err(mismatch(rule, implication, &wanted)),
            }
        }

        (DoubleNegationElimination, _) => vec![
            Child::subgoal(step.derive(goal.negate().negate())),
        ],
        (ProofByContradiction, _) => vec![
            Child::subgoal(step.assume(goal.negate(), Prop::bottom())),
        ],

        // the goal has the wrong shape, which `Step::is_applicable` already rules out
        (AndIntroduction, _) | (ImplicationIntroduction, _) | (OrIntroduction1, _)
        | (OrIntroduction2, _) | (NegationIntroduction, _) | (ModusTollens, _) => {
            return Err(ProofError::RuleNotApplicable { rule, step: id });
        }
    };
    Ok(children)
}
