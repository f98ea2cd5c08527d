use std::rc::Rc;

use crate::{
    ast::{Block, Node},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::function::core::install_builtins,
        lexer::{Token, tokenize},
        parser::parse_program,
        value::{
            core::Value,
            environment::{EnvRef, Environment},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How many intention calls may be active at once.
pub const MAX_CALL_DEPTH: usize = 1000;

/// Runs ThoughtScript programs and keeps their state between runs.
///
/// ## Usage
///
/// An `Interpreter` is created once and reused: variables, intentions and
/// memories defined by one `interpret` call are visible to the next. Build a
/// new one to start from a clean slate.
///
/// ```
/// use thoughtscript::{Interpreter, Value};
///
/// let mut interpreter = Interpreter::new();
/// interpreter.interpret("think \"Alice\" as name").unwrap();
/// let result = interpreter.interpret("express \"Hello, \" + name").unwrap();
///
/// assert_eq!(result, Value::from("Hello, Alice"));
/// assert_eq!(interpreter.output(), ["Hello, Alice"]);
/// ```
pub struct Interpreter {
    /// The root scope holding the builtins.
    globals:                EnvRef,
    /// The scope statements are currently evaluated in.
    pub(crate) environment: EnvRef,
    /// Lines produced by `express` and `show` during the latest run.
    output:                 Vec<String>,
    /// Mirror every output line to stdout.
    echo:                   bool,
    /// Number of intention calls currently running.
    pub(crate) call_depth:  usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter whose global scope holds only the builtins.
    /// Output is collected but not echoed.
    #[must_use]
    pub fn new() -> Self {
        let globals = Environment::new_global();
        install_builtins(&mut globals.borrow_mut());

        Self { environment: Rc::clone(&globals),
               globals,
               output: Vec::new(),
               echo: false,
               call_depth: 0 }
    }

    /// Turns mirroring of output lines to stdout on or off.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Tokenizes, parses and evaluates `source`.
    ///
    /// The output buffer is emptied once the source has parsed, before
    /// evaluation starts. Evaluation happens in the global scope, so bindings
    /// persist across calls.
    ///
    /// # Errors
    /// The first lexical, syntax or runtime error. Output produced before a
    /// runtime error stays in the buffer.
    pub fn interpret(&mut self, source: &str) -> Result<Value, Error> {
        let program = Self::parse(source)?;

        self.output.clear();
        self.environment = Rc::clone(&self.globals);
        self.call_depth = 0;

        Ok(self.eval(&program)?)
    }

    /// Gets the lines produced by the most recent `interpret` call.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Empties the output buffer without touching variables or memories.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Converts source text into tokens without evaluating it.
    ///
    /// # Errors
    /// A lexical error for a character that starts no token.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
        tokenize(source)
    }

    /// Converts source text into a `Node::Program` without evaluating it.
    ///
    /// # Errors
    /// The first lexical or syntax error.
    pub fn parse(source: &str) -> Result<Node, ParseError> {
        let tokens = tokenize(source)?;
        parse_program(&tokens)
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the single dispatcher over node kinds. Statements produce a
    /// value too: usually the value they worked on, or `null`.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating `node` or its children.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Program { statements } => self.eval_statements(statements),
            Node::Think { expr, name, .. } => self.eval_think(expr, name.as_deref()),
            Node::Express { expr, .. } => self.eval_express(expr),
            Node::Consider { var,
                             start,
                             end,
                             body,
                             line, } => self.eval_consider(var, start, end, body, *line),
            Node::If { condition,
                       then_block,
                       else_block,
                       .. } => self.eval_if(condition, then_block, else_block.as_ref()),
            Node::Remember { value, key, .. } => self.eval_remember(value, key),
            Node::Show { target, .. } => self.eval_show(target),
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Node::UnaryOp { op, operand, line } => self.eval_unary_op(*op, operand, *line),
            Node::Literal { value, .. } => Ok(Value::from(value)),
            Node::Identifier { name, line } => self.eval_identifier(name, *line),
            Node::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line),
            Node::Intention { name, params, body, .. } => Ok(self.eval_intention(name, params, body)),
            Node::Block(block) => self.eval_block(block),
        }
    }

    /// Evaluates statements in order in the current scope and returns the
    /// value of the last one, or `null` if there are none.
    pub(crate) fn eval_statements(&mut self, statements: &[Node]) -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in statements {
            result = self.eval(statement)?;
        }
        Ok(result)
    }

    /// Evaluates a block in a fresh scope nested in the current one.
    pub(crate) fn eval_block(&mut self, block: &Block) -> EvalResult<Value> {
        let scope = Environment::child_of(&self.environment);
        self.in_scope(scope, |this| this.eval_statements(&block.statements))
    }

    /// Runs `f` with `scope` as the current scope.
    ///
    /// The previous scope is restored even when `f` fails, so an interpreter
    /// stays usable after a runtime error. When `f` returns, `scope` hands its
    /// memories to its parent.
    pub(crate) fn in_scope<T>(&mut self,
                              scope: EnvRef,
                              f: impl FnOnce(&mut Self) -> EvalResult<T>)
                              -> EvalResult<T> {
        let previous = std::mem::replace(&mut self.environment, Rc::clone(&scope));
        let result = f(self);
        self.environment = previous;

        scope.borrow_mut().promote_memories();
        result
    }

    /// Appends a line to the output buffer, echoing it if enabled.
    pub(crate) fn emit(&mut self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.output.push(line);
    }
}
