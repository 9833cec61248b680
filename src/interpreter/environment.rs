use std::collections::HashMap;

use num_bigint::BigInt;

/// Stores the variable bindings of one calculator session.
///
/// A mutable mapping from identifier name to arbitrary-precision value.
/// Bindings are created and replaced by assignment and only read during
/// evaluation; nothing is ever removed. The environment is created once per
/// session and passed explicitly to every call that needs it.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, BigInt>,
}

impl Environment {
    /// Creates an empty environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: BigInt) {
        self.variables.insert(name.to_string(), value);
    }
}
