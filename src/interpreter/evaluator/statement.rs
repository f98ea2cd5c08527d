use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    ast::{Block, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, function::ThoughtFunction},
    },
};

/// Name under which the merged memories can be read.
pub const MEMORIES: &str = "memories";

impl Interpreter {
    /// Evaluates `think <expr> [as <name>]`.
    ///
    /// With a name, the value is defined in the current scope, shadowing any
    /// binding of the same name in an enclosing scope.
    pub(crate) fn eval_think(&mut self, expr: &Node, name: Option<&str>) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        if let Some(name) = name {
            self.environment
                .borrow_mut()
                .define(name, value.clone());
        }
        Ok(value)
    }

    /// Evaluates `express <expr>`: writes the display string of the value as
    /// one output line and returns the value.
    pub(crate) fn eval_express(&mut self, expr: &Node) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        self.emit(value.to_string());
        Ok(value)
    }

    /// Evaluates `remember <value> as <key>`.
    ///
    /// The key may be any value; it is stored under its display string.
    pub(crate) fn eval_remember(&mut self, value: &Node, key: &Node) -> EvalResult<Value> {
        let value = self.eval(value)?;
        let key = self.eval(key)?.to_string();

        self.environment
            .borrow_mut()
            .remember(key, value.clone());
        Ok(value)
    }

    /// Evaluates `show <target>`.
    ///
    /// `show memories` lists every visible memory, one `key: value` line per
    /// entry under a `Memories:` header, and returns the entries as
    /// `[key, value]` pairs. Any other target is shown like `express` shows it.
    /// The target is evaluated once.
    pub(crate) fn eval_show(&mut self, target: &Node) -> EvalResult<Value> {
        let value = self.eval(target)?;

        if let Node::Identifier { name, .. } = target
           && name == MEMORIES
           && let Value::Memories(memories) = &value
        {
            self.emit(format_memories(memories));

            let entries = memories.iter()
                                  .map(|(key, value)| {
                                      Value::from(vec![Value::from(key.as_str()), value.clone()])
                                  })
                                  .collect::<Vec<_>>();
            return Ok(Value::from(entries));
        }

        self.emit(value.to_string());
        Ok(value)
    }

    /// Resolves a name, or the merged memories for `memories`.
    pub(crate) fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        if name == MEMORIES {
            let memories = self.environment.borrow().memories();
            return Ok(Value::Memories(Rc::new(memories)));
        }
        self.lookup(name, line)
    }

    /// Looks a variable up through the scope chain.
    ///
    /// # Errors
    /// `UnknownVariable` if no enclosing scope binds `name`.
    pub(crate) fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .borrow()
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates `define intention`: binds a new intention that closes over
    /// the current scope and returns it.
    pub(crate) fn eval_intention(&mut self, name: &str, params: &[String], body: &Block) -> Value {
        let function = ThoughtFunction { name:    name.to_string(),
                                         params:  params.to_vec(),
                                         body:    body.clone(),
                                         closure: Rc::clone(&self.environment), };
        let value = Value::Function(Rc::new(function));

        self.environment
            .borrow_mut()
            .define(name, value.clone());
        value
    }
}

/// Renders the `show memories` listing.
///
/// # Example
/// ```
/// use indexmap::IndexMap;
/// use thoughtscript::interpreter::{
///     evaluator::statement::format_memories, value::core::Value,
/// };
///
/// assert_eq!(format_memories(&IndexMap::new()), "No memories stored");
///
/// let mut memories = IndexMap::new();
/// memories.insert("mood".to_string(), Value::from("curious"));
/// memories.insert("age".to_string(), Value::Number(25.0));
/// assert_eq!(format_memories(&memories), "Memories:\nmood: curious\nage: 25");
/// ```
#[must_use]
pub fn format_memories(memories: &IndexMap<String, Value>) -> String {
    if memories.is_empty() {
        return "No memories stored".to_string();
    }

    let lines = memories.iter()
                        .map(|(key, value)| format!("{key}: {value}"))
                        .collect::<Vec<_>>();
    format!("Memories:\n{}", lines.join("\n"))
}
