// Bound Call Domain Model

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key under which positional arguments travel on the wire
pub const POSITIONAL_KEY: &str = "args";

/// Arguments for one remote call
///
/// The remote service accepts either a positional list (sent as `args`)
/// or named parameters, so both are kept side by side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub named: BTreeMap<String, Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positional(values: Vec<Value>) -> Self {
        Self {
            positional: values,
            named: BTreeMap::new(),
        }
    }

    /// Append one positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set one named argument
    pub fn named(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// Set one named argument from any serializable value
    pub fn try_named(
        mut self,
        key: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self, serde_json::Error> {
        self.named.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Total number of supplied arguments
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Flatten into wire parameters
    ///
    /// Positional values are merged under `args` (replacing a named `args`),
    /// then every value is JSON-encoded on its own. Order follows key order.
    pub fn into_wire_params(self) -> Vec<(String, String)> {
        let CallArgs {
            positional,
            mut named,
        } = self;

        if !positional.is_empty() {
            named.insert(POSITIONAL_KEY.to_string(), Value::Array(positional));
        }

        named
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    }
}

/// A method name and its arguments, captured together
///
/// This is the whole dispatch state of a call: nothing on the client is
/// mutated between resolving a method and invoking it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundCall {
    pub method: String,
    pub args: CallArgs,
}

impl BoundCall {
    pub fn new(method: impl Into<String>, args: CallArgs) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}
