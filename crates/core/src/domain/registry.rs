// Endpoint Registry
// Static table of method names to declared parameter names

use crate::domain::call::CallArgs;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Method name -> ordered parameter names
///
/// Read-only once handed to a client. Used for call-shape validation and
/// for rendering human-readable signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, Vec<String>>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one endpoint
    pub fn with_endpoint<I, S>(mut self, method: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints
            .insert(method.into(), params.into_iter().map(Into::into).collect());
        self
    }

    pub fn contains(&self, method: &str) -> bool {
        self.endpoints.contains_key(method)
    }

    pub fn parameters(&self, method: &str) -> Option<&[String]> {
        self.endpoints.get(method).map(Vec::as_slice)
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Render `method(p1, p2)` for a registered method
    pub fn describe(&self, method: &str) -> Option<String> {
        self.parameters(method)
            .map(|params| format!("{}({})", method, params.join(", ")))
    }

    /// Check a call's shape against the declared parameters
    ///
    /// # Errors
    /// - UnknownMethod if `method` is not registered
    /// - UnexpectedArgument if a named argument is not declared
    /// - ArgumentCountMismatch if the argument count differs from the declaration
    pub fn validate(&self, method: &str, args: &CallArgs) -> Result<(), ClientError> {
        let params = self
            .parameters(method)
            .ok_or_else(|| ClientError::UnknownMethod(method.to_string()))?;

        if let Some(unexpected) = args
            .named
            .keys()
            .find(|key| !params.iter().any(|p| p == *key))
        {
            return Err(ClientError::UnexpectedArgument {
                method: method.to_string(),
                argument: unexpected.clone(),
            });
        }

        if args.len() != params.len() {
            return Err(ClientError::ArgumentCountMismatch {
                method: method.to_string(),
                expected: params.len(),
                actual: args.len(),
            });
        }

        Ok(())
    }
}

impl<M, I, S> FromIterator<(M, I)> for EndpointRegistry
where
    M: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (M, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |registry, (method, params)| {
                registry.with_endpoint(method, params)
            })
    }
}
