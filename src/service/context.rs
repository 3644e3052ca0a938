//! Per-request context and query parameters
//!
//! The transport layer turns a concrete DICOMweb URL such as
//! `/studies/1.2.3/series?includefield=all` into a [`DicomRequest`]: an
//! accessor, literal path segments, a query-parameter map, and an opaque
//! domain context. All of these are passed unchanged to whichever resource
//! handler the adaptor invokes.

use serde::Serialize;
use std::collections::HashMap;

/// A query parameter value: a single value or a repeated parameter
///
/// DICOMweb query parameters may repeat (`includefield=a&includefield=b`),
/// so the value side of the map is a string-or-strings union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Parameter appeared once
    Single(String),
    /// Parameter appeared multiple times, in request order
    Multi(Vec<String>),
}

impl QueryValue {
    /// The first value, regardless of multiplicity
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multi(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multi(values)
    }
}

/// Mapping of query parameter names to values
///
/// # Examples
///
/// ```
/// use dicomweb_rust::service::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("includefield", "all");
/// assert_eq!(params.first("includefield"), Some("all"));
/// assert!(params.get("limit").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    params: HashMap<String, QueryValue>,
}

impl QueryParams {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(name.into(), value.into());
    }

    /// Get a parameter value by name
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params.get(name)
    }

    /// Get the first value of a parameter by name
    pub fn first(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(QueryValue::first)
    }

    /// Number of distinct parameter names
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the map holds no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over name/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Opaque per-request domain context
///
/// Created by the transport layer, handed unchanged to the invoked handler,
/// and discarded when the invocation completes. Carries transport-provided
/// string properties (e.g. the original request URI or a correlation id).
#[derive(Debug, Clone, Default)]
pub struct DicomContext {
    properties: HashMap<String, String>,
}

impl DicomContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a property, builder-style
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// Inbound request descriptor produced by the transport layer
///
/// # Examples
///
/// ```
/// use dicomweb_rust::service::DicomRequest;
///
/// let request = DicomRequest::new("get", ["studies", "1.2.3"]);
/// assert_eq!(request.accessor, "get");
/// assert_eq!(request.path.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DicomRequest {
    /// Accessor (verb) distinguishing operations on the same path
    pub accessor: String,
    /// Literal path segments extracted from the request URL
    pub path: Vec<String>,
    /// Query parameters
    pub query: QueryParams,
    /// Opaque domain context
    pub context: DicomContext,
}

impl DicomRequest {
    /// Create a request with an empty query map and context
    pub fn new<S: Into<String>>(
        accessor: impl Into<String>,
        path: impl IntoIterator<Item = S>,
    ) -> Self {
        DicomRequest {
            accessor: accessor.into(),
            path: path.into_iter().map(Into::into).collect(),
            query: QueryParams::new(),
            context: DicomContext::new(),
        }
    }

    /// Replace the query parameters, builder-style
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Replace the domain context, builder-style
    pub fn with_context(mut self, context: DicomContext) -> Self {
        self.context = context;
        self
    }
}
