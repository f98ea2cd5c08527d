/// Represents a literal value in the language.
///
/// The variant records the kind the literal was written as; every numeric
/// kind evaluates to the same number type.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A number written without a decimal point. Digit runs beyond `2^53`
    /// round to the nearest number.
    Integer(f64),
    /// A number written with a decimal point.
    Real(f64),
    /// A quoted string, escapes already resolved.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A lexically scoped sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Node>,
    /// Line of the statement that opened the block.
    pub line:       usize,
}

/// An abstract syntax tree node.
///
/// Statements and expressions share one type: every node evaluates to a value.
/// Nodes own their children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A whole unit of source.
    Program {
        /// Top-level statements in source order.
        statements: Vec<Self>,
    },
    /// `think <expr> [as <name>]`
    Think {
        /// The value being thought about.
        expr: Box<Self>,
        /// Variable to bind the value to, if any.
        name: Option<String>,
        /// Line number in the source code.
        line: usize,
    },
    /// `express <expr>`
    Express {
        /// The value to print.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `consider <var> from <start> to <end>: <block>`
    Consider {
        /// The loop variable name.
        var:   String,
        /// Lower bound, inclusive.
        start: Box<Self>,
        /// Upper bound, inclusive.
        end:   Box<Self>,
        /// Loop body.
        body:  Block,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if <condition>: <block> [otherwise: <block>]`
    If {
        /// The branch condition, coerced by truthiness.
        condition:  Box<Self>,
        /// Block run when the condition holds.
        then_block: Block,
        /// Block run otherwise, if present.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `remember <value> as <key>`
    Remember {
        /// The value to store.
        value: Box<Self>,
        /// The key; any value, stored under its display string.
        key:   Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `show <target>`
    Show {
        /// The value to display, or the `memories` identifier.
        target: Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A constant.
    Literal {
        /// The constant value and its declared kind.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name, or to `memories`.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Invocation of a builtin or an intention, e.g. `greet("World")`.
    Call {
        /// Name the callee is bound to.
        name:      String,
        /// Arguments in order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `define intention <name> [with <param>, ...]: <block>`
    Intention {
        /// Name the intention is bound to.
        name:   String,
        /// Parameter names, bound positionally.
        params: Vec<String>,
        /// The intention body.
        body:   Block,
        /// Line number in the source code.
        line:   usize,
    },
    /// A nested block evaluated in its own scope.
    Block(Block),
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==` or `is`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x` or `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}
