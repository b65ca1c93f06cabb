//! The `SAME` predicate.
//!
//! Evaluation is a fixed pipeline: too few operands gives `Unknown`, any
//! absent operand anywhere in the list gives `Unknown`, a kind disagreement
//! gives `False`, an identifier disagreement gives `False`, otherwise `True`.
//! Absence is checked over the whole list before anything is classified, so a
//! missing operand dominates mismatches elsewhere in the same list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    classify::{Classify, Element, Kind, classify_json},
    config::FieldConfig,
    element::{EdgeLike, VertexLike},
    identity::{equal_edges, equal_vertices, identity_equal},
};

/// Three-valued predicate result. Surfaces as a nullable boolean at the
/// query-engine boundary (`Unknown` is `None` / JSON `null`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    True,
    False,
    Unknown,
}

/// The terminal state an evaluation stopped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Fewer than two operands.
    InsufficientOperands,
    /// At least one operand slot was absent.
    MissingOperand,
    /// Operands are not all vertices or all edges.
    KindMismatch,
    /// Same kind, different identifiers.
    ValueMismatch,
    Same,
}

impl TriState {
    pub fn from_bool(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }

    pub fn to_nullable(self) -> Option<bool> {
        match self {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Unknown => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == TriState::True
    }

    pub fn is_unknown(self) -> bool {
        self == TriState::Unknown
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::Unknown, TriState::from_bool)
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.to_nullable()
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TriState::True => "TRUE",
            TriState::False => "FALSE",
            TriState::Unknown => "UNKNOWN",
        };
        f.write_str(text)
    }
}

impl Verdict {
    pub fn tri_state(self) -> TriState {
        match self {
            Verdict::InsufficientOperands | Verdict::MissingOperand => TriState::Unknown,
            Verdict::KindMismatch | Verdict::ValueMismatch => TriState::False,
            Verdict::Same => TriState::True,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::InsufficientOperands => "insufficient_operands",
            Verdict::MissingOperand => "missing_operand",
            Verdict::KindMismatch => "kind_mismatch",
            Verdict::ValueMismatch => "value_mismatch",
            Verdict::Same => "same",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-operand form; identical to `same_all` over `[a, b]`.
///
/// ```rust
/// use graphsame::{Edge, TriState, Vertex, same};
///
/// let alice = Vertex::new(1);
/// let knows = Edge::new(1, 2);
/// assert_eq!(same(Some(&alice), Some(&Vertex::new(1))), TriState::True);
/// assert_eq!(same(Some(&alice), Some(&knows)), TriState::False);
/// assert_eq!(same(None, Some(&alice)), TriState::Unknown);
/// ```
pub fn same(a: Option<&dyn Classify>, b: Option<&dyn Classify>) -> TriState {
    evaluate(a, b).tri_state()
}

pub fn evaluate(a: Option<&dyn Classify>, b: Option<&dyn Classify>) -> Verdict {
    match (a, b) {
        (Some(a), Some(b)) => run(2, false, [a.classify(), b.classify()].into_iter()),
        _ => run(2, true, std::iter::empty::<Element<'_>>()),
    }
}

pub fn same_all<T: Classify>(elements: &[Option<T>]) -> TriState {
    evaluate_all(elements).tri_state()
}

pub fn evaluate_all<T: Classify>(elements: &[Option<T>]) -> Verdict {
    let any_absent = elements.iter().any(Option::is_none);
    run(
        elements.len(),
        any_absent,
        elements.iter().flatten().map(|element| element.classify()),
    )
}

/// JSON boundary form with the default capability field names. JSON `null`
/// is an absent operand.
pub fn same_json(args: &[serde_json::Value]) -> TriState {
    evaluate_json(args, &FieldConfig::default()).tri_state()
}

pub fn same_json_with(args: &[serde_json::Value], fields: &FieldConfig) -> TriState {
    evaluate_json(args, fields).tri_state()
}

pub fn evaluate_json(args: &[serde_json::Value], fields: &FieldConfig) -> Verdict {
    let any_absent = args.iter().any(serde_json::Value::is_null);
    run(
        args.len(),
        any_absent,
        args.iter().map(|arg| classify_json(arg, fields)),
    )
}

pub fn same_vertices<V: VertexLike + ?Sized>(a: Option<&V>, b: Option<&V>) -> TriState {
    let verdict = match (a, b) {
        (Some(a), Some(b)) if equal_vertices(a, b) => Verdict::Same,
        (Some(_), Some(_)) => Verdict::ValueMismatch,
        _ => Verdict::MissingOperand,
    };
    settle(2, verdict).tri_state()
}

pub fn same_edges<E: EdgeLike + ?Sized>(a: Option<&E>, b: Option<&E>) -> TriState {
    let verdict = match (a, b) {
        (Some(a), Some(b)) if equal_edges(a, b) => Verdict::Same,
        (Some(_), Some(_)) => Verdict::ValueMismatch,
        _ => Verdict::MissingOperand,
    };
    settle(2, verdict).tri_state()
}

fn run<'a, I>(operands: usize, any_absent: bool, elements: I) -> Verdict
where
    I: Iterator<Item = Element<'a>> + Clone,
{
    if operands < 2 {
        return settle(operands, Verdict::InsufficientOperands);
    }
    if any_absent {
        return settle(operands, Verdict::MissingOperand);
    }
    settle(operands, reduce(elements))
}

// Every operand is compared against the first one only; this relies on
// identifier equality being transitive.
fn reduce<'a, I>(elements: I) -> Verdict
where
    I: Iterator<Item = Element<'a>> + Clone,
{
    let mut rest = elements;
    let Some(anchor) = rest.next() else {
        return Verdict::InsufficientOperands;
    };
    if anchor.kind() == Kind::Other || rest.clone().any(|e| e.kind() != anchor.kind()) {
        return Verdict::KindMismatch;
    }
    if rest.all(|e| identity_equal(&anchor, &e)) {
        Verdict::Same
    } else {
        Verdict::ValueMismatch
    }
}

fn settle(operands: usize, verdict: Verdict) -> Verdict {
    tracing::trace!(operands, verdict = verdict.as_str(), "same evaluated");
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Edge, Value, Vertex};
    use serde_json::json;

    #[test]
    fn test_tristate_nullable_boundary() {
        assert_eq!(TriState::True.to_nullable(), Some(true));
        assert_eq!(TriState::False.to_nullable(), Some(false));
        assert_eq!(TriState::Unknown.to_nullable(), None);
        assert_eq!(TriState::from(None), TriState::Unknown);
        assert_eq!(TriState::from(Some(false)), TriState::False);
        let encoded = serde_json::to_value([TriState::True, TriState::Unknown]).expect("encode");
        assert_eq!(encoded, json!([true, null]));
        let decoded: TriState = serde_json::from_value(json!(false)).expect("decode");
        assert_eq!(decoded, TriState::False);
        assert_eq!(TriState::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_verdict_collapses_to_tristate() {
        assert_eq!(Verdict::InsufficientOperands.tri_state(), TriState::Unknown);
        assert_eq!(Verdict::MissingOperand.tri_state(), TriState::Unknown);
        assert_eq!(Verdict::KindMismatch.tri_state(), TriState::False);
        assert_eq!(Verdict::ValueMismatch.tri_state(), TriState::False);
        assert_eq!(Verdict::Same.tri_state(), TriState::True);
    }

    #[test]
    fn test_evaluate_reports_terminal_state() {
        let v1 = Vertex::new(1);
        let v2 = Vertex::new(2);
        let e = Edge::new(1, 2);
        assert_eq!(evaluate(Some(&v1), Some(&v1)), Verdict::Same);
        assert_eq!(evaluate(Some(&v1), Some(&v2)), Verdict::ValueMismatch);
        assert_eq!(evaluate(Some(&v1), Some(&e)), Verdict::KindMismatch);
        assert_eq!(evaluate(Some(&v1), None), Verdict::MissingOperand);
        assert_eq!(
            evaluate_all::<&Vertex>(&[Some(&v1)]),
            Verdict::InsufficientOperands
        );
    }

    #[test]
    fn test_absence_dominates_kind_mismatch() {
        let args = [
            Some(Value::from(Vertex::new(1))),
            Some(Value::from(Edge::new(1, 2))),
            None,
        ];
        assert_eq!(evaluate_all(&args), Verdict::MissingOperand);
    }

    #[test]
    fn test_kind_gate_precedes_value_gate() {
        let args = [
            Some(Value::from(Vertex::new(1))),
            Some(Value::from(Vertex::new(2))),
            Some(Value::from(Edge::new(1, 2))),
        ];
        assert_eq!(evaluate_all(&args), Verdict::KindMismatch);
    }

    #[test]
    fn test_unrelated_values_are_kind_mismatch() {
        let args = [
            Some(Value::Json(json!("test"))),
            Some(Value::Json(json!("test"))),
        ];
        assert_eq!(evaluate_all(&args), Verdict::KindMismatch);
    }

    #[test]
    fn test_typed_forms_agree_with_generic_form() {
        let e1 = Edge::new(10, 20).with_label("knows");
        let e2 = Edge::new(10, 20).with_label("likes");
        let v1 = Vertex::new(100);
        let v2 = Vertex::new(100);
        assert_eq!(same_edges(Some(&e1), Some(&e2)), same(Some(&e1), Some(&e2)));
        assert_eq!(same_vertices(Some(&v1), Some(&v2)), TriState::True);
        assert_eq!(same_vertices(Some(&v1), None), TriState::Unknown);
        assert_eq!(same_edges(Some(&e1), Some(&Edge::new(20, 10))), TriState::False);
    }

    #[test]
    fn test_json_null_is_absent() {
        assert_eq!(same_json(&[json!({"id": 1}), json!(null)]), TriState::Unknown);
        assert_eq!(same_json(&[json!({"id": 1}), json!({"id": 1})]), TriState::True);
        assert_eq!(same_json(&[json!({"id": 1}), json!({"id": "1"})]), TriState::False);
        assert_eq!(same_json(&[json!({"id": 1})]), TriState::Unknown);
    }
}
