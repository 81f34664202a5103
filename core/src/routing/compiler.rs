use crate::errors::{error_codes, RouteError};
use crate::routing::types::{ParamValue, Segment};
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

/// Output of compiling one parsed specification: the URL-facing
/// canonical pattern, the ordered parameter names, and an anchored
/// regex that tests a concrete path and captures bindings.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub canonical: String,
    pub param_names: Vec<String>,
    /// Group-free segments, in pattern order.
    pub segments: Vec<Segment>,
    pub regex: Regex,
}

/// Compile parsed segments into a canonical pattern and matcher.
///
/// Group segments are elided. Static segments render as their literal,
/// dynamic as `:name`, catch-alls as `*name`. An empty pattern
/// canonicalizes to `/`; no trailing separator is emitted otherwise.
pub fn compile_segments(segments: &[Segment]) -> Result<CompiledPattern, RouteError> {
    let mut canonical = String::new();
    let mut regex_pattern = String::from("^");
    let mut param_names = Vec::new();

    for segment in segments {
        match segment {
            Segment::Group(_) => {}
            Segment::Static(literal) => {
                canonical.push('/');
                canonical.push_str(literal);
                regex_pattern.push('/');
                regex_pattern.push_str(&regex::escape(literal));
            }
            Segment::Dynamic(name) => {
                canonical.push_str("/:");
                canonical.push_str(name);
                regex_pattern.push_str("/([^/]+)");
                param_names.push(name.clone());
            }
            Segment::CatchAll(name) => {
                canonical.push_str("/*");
                canonical.push_str(name);
                regex_pattern.push_str("/(.+)");
                param_names.push(name.clone());
            }
        }
    }

    if canonical.is_empty() {
        canonical.push('/');
        regex_pattern.push('/');
    }
    regex_pattern.push('$');

    let regex = Regex::new(&regex_pattern).map_err(|e| RouteError::InvalidSpecification {
        code: error_codes::INVALID_PATTERN.to_string(),
        message: format!("Invalid route pattern: {e}"),
    })?;

    Ok(CompiledPattern {
        canonical,
        param_names,
        segments: segments.iter().filter(|s| !s.is_group()).cloned().collect(),
        regex,
    })
}

/// Normalize a concrete request path for matching: leading `/`
/// enforced, trailing `/` stripped except for the root itself.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Test a concrete request path against a compiled matcher and extract
/// percent-decoded parameter bindings. `None` means no match.
///
/// Dynamic captures bind exactly one non-empty segment; a catch-all
/// capture binds the remaining segments, one or more, as an ordered
/// list under its parameter name.
pub fn match_path(
    regex: &Regex,
    segments: &[Segment],
    path: &str,
) -> Option<HashMap<String, ParamValue>> {
    let normalized = normalize_path(path);
    let captures = regex.captures(&normalized)?;

    let mut params = HashMap::new();
    let mut index = 0;
    for segment in segments {
        match segment {
            Segment::Dynamic(name) => {
                index += 1;
                let raw = captures.get(index)?.as_str();
                params.insert(name.clone(), ParamValue::Single(decode_segment(raw)));
            }
            Segment::CatchAll(name) => {
                index += 1;
                let raw = captures.get(index)?.as_str();
                let parts = raw
                    .split('/')
                    .filter(|p| !p.is_empty())
                    .map(decode_segment)
                    .collect();
                params.insert(name.clone(), ParamValue::Multi(parts));
            }
            Segment::Static(_) | Segment::Group(_) => {}
        }
    }
    Some(params)
}

/// Percent-decode one captured segment, falling back to the raw text
/// when the encoding is not valid UTF-8.
fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Cow::into_owned)
}
