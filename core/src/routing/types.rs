use crate::errors::{error_codes, RouteError};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Methods the route table discriminates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl FromStr for HttpMethod {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::GET),
            "POST" => Ok(Self::POST),
            "PUT" => Ok(Self::PUT),
            "PATCH" => Ok(Self::PATCH),
            "DELETE" => Ok(Self::DELETE),
            _ => Err(RouteError::InvalidSpecification {
                code: error_codes::INVALID_HTTP_METHOD.to_string(),
                message: format!("Invalid HTTP method: {s}"),
            }),
        }
    }
}

/// One classified unit of a path specification.
///
/// `Group` carries its label for traceability but is elided from the
/// canonical pattern and from matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Dynamic(String),
    CatchAll(String),
    Group(String),
}

impl Segment {
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Parameter name for `Dynamic`/`CatchAll` segments.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Dynamic(name) | Self::CatchAll(name) => Some(name),
            Self::Static(_) | Self::Group(_) => None,
        }
    }
}

/// A candidate route declaration handed over by the discovery
/// collaborator: where the route came from, how it is reached, and
/// which (opaque) handler and middleware it names.
#[derive(Debug, Clone)]
pub struct RouteDeclaration {
    pub spec: String,
    pub method: HttpMethod,
    pub handler_ref: String,
    pub middleware: Vec<String>,
}

impl RouteDeclaration {
    pub fn new(
        spec: impl Into<String>,
        method: HttpMethod,
        handler_ref: impl Into<String>,
    ) -> Self {
        Self {
            spec: spec.into(),
            method,
            handler_ref: handler_ref.into(),
            middleware: Vec::new(),
        }
    }

    pub fn with_middleware(mut self, middleware: Vec<String>) -> Self {
        self.middleware = middleware;
        self
    }
}

/// A fully compiled route. Identity key is `(method, canonical)`.
///
/// `param_names` order matches the left-to-right occurrence of
/// `Dynamic`/`CatchAll` segments in `segments`.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub method: HttpMethod,
    pub canonical: String,
    pub segments: Vec<Segment>,
    pub param_names: Vec<String>,
    pub priority: i32,
    pub handler_ref: String,
    pub middleware: Vec<String>,
    pub path_regex: Regex,
}

/// Associates an ordered middleware list with a canonical-pattern prefix.
#[derive(Debug, Clone, Default)]
pub struct MiddlewareBinding {
    pub path_prefix: String,
    pub middleware: Vec<String>,
}

impl MiddlewareBinding {
    pub fn new(path_prefix: impl Into<String>, middleware: Vec<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            middleware,
        }
    }
}

/// An extracted parameter binding: one segment for dynamic parameters,
/// an ordered list of segments for catch-alls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

/// Positive match result returned to the serving collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMatch {
    pub handler_ref: String,
    pub params: HashMap<String, ParamValue>,
    pub middleware: Vec<String>,
}
