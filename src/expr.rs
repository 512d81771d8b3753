//! Structural identity for expression objects.
//!
//! An expression is fully defined by its kind and its inputs. Two expressions
//! with the same kind and structurally equal inputs compare equal and hash
//! identically, so they can key caches and deduplicate work. Array inputs are
//! compared by their raw bytes, never by identity.

use ndarray::{ArrayBase, Data, Dimension};
use std::hash::{Hash, Hasher};

/// One input of an expression
#[derive(Debug, Clone)]
pub enum ExprInput {
    None,
    Bool(bool),
    Int(i64),
    /// Compared by bit pattern, so `NaN == NaN` and `0.0 != -0.0`
    Float(f64),
    Text(String),
    List(Vec<ExprInput>),
    /// Native-endian bytes of the elements in row-major order
    Array(Vec<u8>),
}

impl ExprInput {
    /// Capture an `f64` array by value
    pub fn array<S, D>(array: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        ExprInput::Array(array.iter().flat_map(|v| v.to_ne_bytes()).collect())
    }
}

impl PartialEq for ExprInput {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExprInput::None, ExprInput::None) => true,
            (ExprInput::Bool(a), ExprInput::Bool(b)) => a == b,
            (ExprInput::Int(a), ExprInput::Int(b)) => a == b,
            (ExprInput::Float(a), ExprInput::Float(b)) => a.to_bits() == b.to_bits(),
            (ExprInput::Text(a), ExprInput::Text(b)) => a == b,
            (ExprInput::List(a), ExprInput::List(b)) => a == b,
            (ExprInput::Array(a), ExprInput::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ExprInput {}

impl Hash for ExprInput {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ExprInput::None => {}
            ExprInput::Bool(v) => v.hash(state),
            ExprInput::Int(v) => v.hash(state),
            ExprInput::Float(v) => v.to_bits().hash(state),
            ExprInput::Text(v) => v.hash(state),
            ExprInput::List(v) => v.hash(state),
            ExprInput::Array(v) => v.hash(state),
        }
    }
}

impl From<bool> for ExprInput {
    fn from(v: bool) -> Self {
        ExprInput::Bool(v)
    }
}

impl From<i64> for ExprInput {
    fn from(v: i64) -> Self {
        ExprInput::Int(v)
    }
}

impl From<f64> for ExprInput {
    fn from(v: f64) -> Self {
        ExprInput::Float(v)
    }
}

impl From<&str> for ExprInput {
    fn from(v: &str) -> Self {
        ExprInput::Text(v.to_string())
    }
}

impl From<String> for ExprInput {
    fn from(v: String) -> Self {
        ExprInput::Text(v)
    }
}

impl<T: Into<ExprInput>> From<Option<T>> for ExprInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(ExprInput::None, Into::into)
    }
}

impl<T: Into<ExprInput>> From<Vec<T>> for ExprInput {
    fn from(v: Vec<T>) -> Self {
        ExprInput::List(v.into_iter().map(Into::into).collect())
    }
}

/// Hashable identity of an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprKey {
    pub kind: &'static str,
    pub inputs: Vec<ExprInput>,
}

/// Implemented by expression types to expose everything that defines them
pub trait Expr {
    /// Name distinguishing this expression type from others
    fn kind(&self) -> &'static str;

    /// Everything that fully defines the expression
    fn inputs(&self) -> Vec<ExprInput>;

    fn key(&self) -> ExprKey {
        ExprKey {
            kind: self.kind(),
            inputs: self.inputs(),
        }
    }
}
