/// Environments (lexical scopes).
///
/// Defines `Environment`, the scope record holding variable bindings, the
/// keyed memory store and the link to the enclosing scope.
pub mod environment;
/// Callable values.
///
/// Defines user-defined intentions, which close over their defining scope,
/// and builtins, which are plain native functions with a fixed arity.
pub mod function;

pub mod core;
