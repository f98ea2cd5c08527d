use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::function::{Builtin, ThoughtFunction},
    },
    util::num::{MAX_SAFE_INT, format_number},
};

/// Represents a runtime value in the interpreter.
///
/// Every AST node evaluates to one of these. Operators and builtins
/// pattern-match on the variant; there is no implicit coercion except the
/// string rendering used by `+` and the truthiness used by conditions.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Statements without a result produce it.
    Null,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A number (double precision floating-point).
    Number(f64),
    /// A string of characters.
    Str(String),
    /// An ordered sequence of values, as returned by `show memories`.
    List(Rc<Vec<Self>>),
    /// A snapshot of the memories visible from a scope, in insertion order.
    Memories(Rc<IndexMap<String, Self>>),
    /// A user-defined intention together with its closure.
    Function(Rc<ThoughtFunction>),
    /// A native function from the builtin table.
    Builtin(Builtin),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(x) | LiteralValue::Real(x) => Self::Number(*x),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Gets the canonical type name reported by the `type` builtin.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Null.type_name(), "null");
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::from(vec![Value::Null]).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::List(_) => "array",
            Self::Memories(_) => "object",
            Self::Function(_) | Self::Builtin(_) => "function",
        }
    }

    /// Converts the value to an `f64`, or returns a type error naming `what`
    /// needed the number.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number("isEven", 1).unwrap(), 2.5);
    /// assert!(Value::from("2").as_number("isEven", 1).is_err());
    /// ```
    pub fn as_number(&self, what: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("{what} requires a number, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Borrows the value as a string slice, or returns a type error naming
    /// `what` needed the string.
    pub fn as_str(&self, what: &str, line: usize) -> EvalResult<&str> {
        match self {
            Self::Str(s) => Ok(s.as_str()),
            other => Err(RuntimeError::TypeError { details: format!("{what} requires a string, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts the value into a JSON tree for structural rendering.
    ///
    /// Integral numbers become JSON integers so they print without a fraction;
    /// non-finite numbers become `null`; callables become their display
    /// string.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INT as f64 => {
                serde_json::Value::from(*n as i64)
            },
            Self::Number(n) => serde_json::Number::from_f64(*n).map_or(serde_json::Value::Null,
                                                                       serde_json::Value::Number),
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => items.iter().map(Self::to_json).collect(),
            Self::Memories(entries) => {
                serde_json::Value::Object(entries.iter()
                                                 .map(|(key, value)| (key.clone(), value.to_json()))
                                                 .collect())
            },
            Self::Function(_) | Self::Builtin(_) => serde_json::Value::String(self.to_string()),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality, used by tests and hosts.
    ///
    /// The language's own `==` is stricter for lists and maps; see
    /// `evaluator::utils::values_equal`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Memories(a), Self::Memories(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Writes the canonical display string used by `express`, `show`, memory
    /// keys and string concatenation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Memories(_) => write!(f, "{}", self.to_json()),
            Self::Function(function) => write!(f, "<intention {}>", function.name),
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
        }
    }
}
