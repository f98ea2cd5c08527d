use std::{cell::RefCell, collections::HashMap, rc::Rc};

use indexmap::IndexMap;

use crate::interpreter::value::core::Value;

/// Shared handle to an environment.
///
/// Scopes are shared between the interpreter, the scopes nested in them and
/// any intention that closed over them.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexical scope.
///
/// Holds the variables defined in the scope, the memories remembered in it,
/// and the enclosing scope (none for the global scope).
#[derive(Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
    memories:  IndexMap<String, Value>,
    parent:    Option<EnvRef>,
}

impl Environment {
    /// Creates an empty root scope.
    #[must_use]
    pub fn new_global() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope nested in `parent`.
    #[must_use]
    pub fn child_of(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { parent: Some(Rc::clone(parent)),
                                    ..Self::default() }))
    }

    /// Creates or overwrites a variable in this scope, never in an ancestor.
    pub fn define(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks a variable up in this scope, then in each enclosing scope.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::new_global();
    /// global.borrow_mut().define("x", Value::Number(1.0));
    ///
    /// let inner = Environment::child_of(&global);
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Number(1.0)));
    /// assert_eq!(inner.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.variables.get(name) {
            return Some(value.clone());
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().get(name))
    }

    /// Stores a memory under `key` in this scope.
    pub fn remember(&mut self, key: String, value: Value) {
        self.memories.insert(key, value);
    }

    /// Merges the memories of every enclosing scope with this one.
    ///
    /// Outer scopes come first; an inner entry replaces the value of an outer
    /// entry with the same key but keeps its position.
    #[must_use]
    pub fn memories(&self) -> IndexMap<String, Value> {
        let mut merged = self.parent
                             .as_ref()
                             .map(|parent| parent.borrow().memories())
                             .unwrap_or_default();

        for (key, value) in &self.memories {
            merged.insert(key.clone(), value.clone());
        }

        merged
    }

    /// Hands this scope's memories to the enclosing scope, which keeps them
    /// after this one ends. Entries from this scope win on key collision.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::new_global();
    /// let block = Environment::child_of(&global);
    /// block.borrow_mut().remember("mood".into(), Value::from("curious"));
    /// block.borrow_mut().promote_memories();
    ///
    /// assert_eq!(global.borrow().memories().get("mood"),
    ///            Some(&Value::from("curious")));
    /// ```
    pub fn promote_memories(&mut self) {
        let Some(parent) = &self.parent else {
            return;
        };
        let memories = std::mem::take(&mut self.memories);
        parent.borrow_mut().memories.extend(memories);
    }
}
