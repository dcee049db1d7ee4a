//! Ratings & Reviews Client Implementation

use crate::endpoints::{self, SERVICE, VERSION};
use crate::error::{Result, SdkError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use wrservices_core::{CallArgs, ClientConfig, ClientError, ServiceClient, Transport};
use wrservices_infra_http::{HttpTransport, HttpTransportConfig};

/// Ratings & Reviews Client
///
/// One typed method per endpoint; every method issues exactly one request
/// and returns the unwrapped `result` value.
///
/// # Example
///
/// ```no_run
/// use wrservices_sdk::RatereviewClient;
/// use serde_json::json;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RatereviewClient::new("", "secret")?;
/// let average = client.get_average_rating(vec!["book:1"], json!({}))?;
/// println!("{}", average);
/// # Ok(())
/// # }
/// ```
pub struct RatereviewClient {
    client: ServiceClient,
}

impl RatereviewClient {
    /// Connect over HTTP with default transport settings
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key (may be empty)
    /// * `secret` - Shared secret used for request signatures
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::new(HttpTransportConfig::default())?;
        Ok(Self::with_transport(
            ClientConfig::new(SERVICE, VERSION, api_key, secret),
            Arc::new(transport),
        ))
    }

    /// Build from an explicit config and transport
    ///
    /// The config's service and version are forced to `ratereview`/`v1`;
    /// host and credentials are kept.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let config = ClientConfig {
            service: SERVICE.to_string(),
            version: VERSION.to_string(),
            ..config
        };

        Self {
            client: ServiceClient::new(config, transport).with_registry(endpoints::registry()),
        }
    }

    /// Underlying generic client
    pub fn service_client(&self) -> &ServiceClient {
        &self.client
    }

    /// Call any registered endpoint by name
    pub fn call(&self, method: &str, args: CallArgs) -> Result<Value> {
        Ok(self.client.call(method, args)?)
    }

    /// Call an endpoint and decode its result into `T`
    pub fn call_as<T: DeserializeOwned>(&self, method: &str, args: CallArgs) -> Result<T> {
        let value = self.call(method, args)?;
        serde_json::from_value(value).map_err(|e| SdkError::Decode(e.to_string()))
    }

    /// Parameter list of an endpoint, for help output
    pub fn signature(&self, method: &str) -> String {
        self.client.signature(method)
    }

    pub fn get_average_rating(
        &self,
        entities: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_AVERAGE_RATING,
            CallArgs::new()
                .named("entities", entities)
                .named("options", options),
        )
    }

    pub fn get_top_entities(
        &self,
        entity_type: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_TOP_ENTITIES,
            CallArgs::new()
                .named("entity_type", entity_type)
                .named("options", options),
        )
    }

    pub fn get_ratings_for_entity(
        &self,
        entities: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_RATINGS_FOR_ENTITY,
            CallArgs::new()
                .named("entities", entities)
                .named("options", options),
        )
    }

    pub fn get_ratings_by_user(
        &self,
        users: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_RATINGS_BY_USER,
            CallArgs::new().named("users", users).named("options", options),
        )
    }

    pub fn set_rating(
        &self,
        entity: impl Into<Value>,
        userid: impl Into<Value>,
        rating: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::SET_RATING,
            CallArgs::new()
                .named("entity", entity)
                .named("userid", userid)
                .named("rating", rating),
        )
    }

    pub fn delete_rating(&self, entity: impl Into<Value>, userid: impl Into<Value>) -> Result<Value> {
        self.call(
            endpoints::DELETE_RATING,
            CallArgs::new().named("entity", entity).named("userid", userid),
        )
    }

    pub fn get_review_count(
        &self,
        entities: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_REVIEW_COUNT,
            CallArgs::new()
                .named("entities", entities)
                .named("options", options),
        )
    }

    pub fn get_reviews_for_entity(
        &self,
        entities: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_REVIEWS_FOR_ENTITY,
            CallArgs::new()
                .named("entities", entities)
                .named("options", options),
        )
    }

    pub fn get_reviews_by_user(
        &self,
        users: impl Into<Value>,
        options: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_REVIEWS_BY_USER,
            CallArgs::new().named("users", users).named("options", options),
        )
    }

    /// Submit a review; any serializable review body is accepted
    pub fn submit_review(&self, in_review: impl Serialize) -> Result<Value> {
        let args = CallArgs::new()
            .try_named("in_review", in_review)
            .map_err(ClientError::from)?;
        self.call(endpoints::SUBMIT_REVIEW, args)
    }

    pub fn delete_review(&self, entity: impl Into<Value>, userid: impl Into<Value>) -> Result<Value> {
        self.call(
            endpoints::DELETE_REVIEW,
            CallArgs::new().named("entity", entity).named("userid", userid),
        )
    }

    pub fn delete_review_by_id(&self, reviewid: impl Into<Value>) -> Result<Value> {
        self.call(
            endpoints::DELETE_REVIEW_BY_ID,
            CallArgs::new().named("reviewid", reviewid),
        )
    }

    pub fn get_rating_distribution(
        &self,
        entities: impl Into<Value>,
        reviews_only: impl Into<Value>,
        locale: impl Into<Value>,
    ) -> Result<Value> {
        self.call(
            endpoints::GET_RATING_DISTRIBUTION,
            CallArgs::new()
                .named("entities", entities)
                .named("reviews_only", reviews_only)
                .named("locale", locale),
        )
    }
}
