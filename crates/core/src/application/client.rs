// Service Client - dynamic endpoint dispatch
//
// resolve -> validate -> encode -> sign -> frame -> send -> unwrap envelope

use crate::application::signing::{sign, SIGNATURE_PARAM};
use crate::config::ClientConfig;
use crate::domain::{BoundCall, CallArgs, EndpointRegistry, Framing, PreparedRequest, ResponseEnvelope};
use crate::error::{ClientError, Result, ServiceError};
use crate::port::{SystemTimeProvider, TimeProvider, Transport};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, debug_span, trace};

/// Client for one service/version/credential combination
///
/// Immutable after construction. Each call carries its own method name and
/// arguments (see [`BoundCall`]), so one client can be shared across threads
/// behind an `Arc`.
///
/// # Example
/// ```text
/// let client = ServiceClient::new(
///     ClientConfig::new("ratereview", "v1", "", "secret"),
///     Arc::new(HttpTransport::new(HttpTransportConfig::default())?),
/// );
/// let avg = client.call("getAverageRating", CallArgs::new().arg(json!(["book:1"])).arg(json!({})))?;
/// ```
pub struct ServiceClient {
    url_prefix: String,
    url_suffix: String,
    query_separator: char,
    api_key: String,
    secret: String,
    registry: Option<Arc<EndpointRegistry>>,
    transport: Arc<dyn Transport>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ServiceClient {
    /// Create a client without a registry (any method, any arguments)
    ///
    /// # Arguments
    /// * `config` - Host, service, version and credentials
    /// * `transport` - Collaborator that performs the HTTP round trip
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let url_prefix = format!(
            "http://{}/services/{}/{}/",
            config.host, config.service, config.version
        );

        // An embedded api_key already opens the query string
        let (url_suffix, query_separator) = if config.has_api_key() {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("api_key", &config.api_key)
                .finish();
            (format!("?{query}"), '&')
        } else {
            (String::new(), '?')
        };

        Self {
            url_prefix,
            url_suffix,
            query_separator,
            api_key: config.api_key,
            secret: config.secret,
            registry: None,
            transport,
            time_provider: Arc::new(SystemTimeProvider),
        }
    }

    /// Restrict calls to the registry's methods and argument shapes
    ///
    /// An empty registry counts as no registry.
    pub fn with_registry(mut self, registry: impl Into<Arc<EndpointRegistry>>) -> Self {
        let registry = registry.into();
        self.registry = (!registry.is_empty()).then_some(registry);
        self
    }

    pub fn with_time_provider(mut self, time_provider: Arc<dyn TimeProvider>) -> Self {
        self.time_provider = time_provider;
        self
    }

    pub fn registry(&self) -> Option<&EndpointRegistry> {
        self.registry.as_deref()
    }

    /// Bind a method name to this client
    ///
    /// No request is sent until [`MethodHandle::invoke`].
    ///
    /// # Errors
    /// - ClientError::UnknownMethod if a registry is configured and lacks `method`
    pub fn resolve(&self, method: &str) -> Result<MethodHandle<'_>> {
        if let Some(registry) = &self.registry {
            if !registry.contains(method) {
                return Err(ClientError::UnknownMethod(method.to_string()));
            }
        }

        Ok(MethodHandle {
            client: self,
            method: method.to_string(),
        })
    }

    /// Resolve and invoke in one step
    pub fn call(&self, method: &str, args: CallArgs) -> Result<Value> {
        self.resolve(method)?.invoke(args)
    }

    /// Human-readable signature of a method, for help output
    ///
    /// Never fails: unknown methods and a missing registry yield a
    /// descriptive string instead.
    pub fn signature(&self, method: &str) -> String {
        match &self.registry {
            None => "No signatures available".to_string(),
            Some(registry) => registry
                .describe(method)
                .unwrap_or_else(|| format!("{method} is not a valid method for this service")),
        }
    }

    /// Build the request for a call without sending it
    ///
    /// # Errors
    /// - Call-shape errors from the registry, when one is configured
    pub fn prepare(&self, call: BoundCall) -> Result<PreparedRequest> {
        let BoundCall { method, args } = call;

        if let Some(registry) = &self.registry {
            registry.validate(&method, &args)?;
        }

        // The computed signature replaces any caller-supplied one
        let mut params = args.into_wire_params();
        params.retain(|(key, _)| key != SIGNATURE_PARAM);
        let timestamp = self.time_provider.now_secs();
        params.push((
            SIGNATURE_PARAM.to_string(),
            sign(&self.api_key, &self.secret, timestamp),
        ));

        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();

        let base_url = format!("{}{}{}", self.url_prefix, method, self.url_suffix);
        let framing = Framing::classify(&method);

        let (url, body) = match framing {
            Framing::Mutating => (base_url, Some(encoded)),
            Framing::Read => (
                format!("{}{}{}", base_url, self.query_separator, encoded),
                None,
            ),
        };

        Ok(PreparedRequest {
            method,
            framing,
            url,
            body,
        })
    }

    /// Send a prepared request and unwrap its envelope
    ///
    /// # Errors
    /// - ServiceError on transport failure, undecodable response, or a
    ///   non-"success" processing status
    /// - InvalidInput when the server's input check did not pass
    pub fn execute(&self, request: &PreparedRequest) -> Result<Value> {
        let _span = debug_span!(
            "wrservices_call",
            method = %request.method,
            framing = %request.framing
        )
        .entered();

        debug!(url = %redacted(&request.url), "Sending request");

        let raw = self
            .transport
            .send(&request.url, request.body.as_deref())
            .map_err(ServiceError::from)?;

        let envelope = ResponseEnvelope::decode(&raw)?;

        trace!(
            input_check = %envelope.input_check,
            processing_status = %envelope.processing_status,
            "Decoded response envelope"
        );

        envelope.into_result()
    }

    fn invoke_bound(&self, call: BoundCall) -> Result<Value> {
        let request = self.prepare(call)?;
        self.execute(&request)
    }
}

// Strip the query (api_key, sig) before logging
fn redacted(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// A method name bound to a client
///
/// Owns its method name, so concurrent handles on one client never
/// interfere with each other.
#[derive(Clone)]
pub struct MethodHandle<'a> {
    client: &'a ServiceClient,
    method: String,
}

impl<'a> MethodHandle<'a> {
    pub fn name(&self) -> &str {
        &self.method
    }

    /// Declared parameter names, when the client has a registry
    pub fn parameters(&self) -> Option<&'a [String]> {
        self.client
            .registry
            .as_deref()
            .and_then(|registry| registry.parameters(&self.method))
    }

    pub fn signature(&self) -> String {
        self.client.signature(&self.method)
    }

    /// Issue exactly one round trip for this method
    pub fn invoke(&self, args: CallArgs) -> Result<Value> {
        self.client
            .invoke_bound(BoundCall::new(self.method.clone(), args))
    }

    /// Build the request without sending it
    pub fn prepare(&self, args: CallArgs) -> Result<PreparedRequest> {
        self.client
            .prepare(BoundCall::new(self.method.clone(), args))
    }
}
