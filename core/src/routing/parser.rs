use crate::errors::{error_codes, RouteError};
use crate::routing::types::Segment;

/// Reserved trailing tokens denoting a file's role. Stripped before
/// classification; they are a discovery convention, not routing logic.
const ROLE_TOKENS: &[&str] = &["page", "route", "index"];

/// Parse one path specification into typed segments.
///
/// Splits on `/`, strips the trailing role token if present, and
/// classifies each remaining token: `(label)` is a group, `[...name]`
/// a catch-all, `[name]` a dynamic parameter, anything else a static
/// literal. Failure rejects only this specification.
pub fn parse_specification(spec: &str) -> Result<Vec<Segment>, RouteError> {
    let mut tokens: Vec<&str> = spec.split('/').filter(|t| !t.is_empty()).collect();
    if tokens.last().is_some_and(|t| ROLE_TOKENS.contains(t)) {
        tokens.pop();
    }

    let mut segments = Vec::with_capacity(tokens.len());
    let mut param_names: Vec<String> = Vec::new();
    for token in tokens {
        let segment = classify_token(token, spec)?;
        if let Some(name) = segment.param_name() {
            if param_names.iter().any(|n| n == name) {
                return Err(invalid(
                    error_codes::DUPLICATE_PARAM,
                    format!("Duplicate parameter '{name}' in specification '{spec}'"),
                ));
            }
            param_names.push(name.to_string());
        }
        segments.push(segment);
    }

    check_catch_all_placement(&segments, spec)?;
    Ok(segments)
}

fn classify_token(token: &str, spec: &str) -> Result<Segment, RouteError> {
    if let Some(label) = token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return Ok(Segment::Group(label.to_string()));
    }

    match token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        Some(inner) => {
            if let Some(name) = inner.strip_prefix("...") {
                if name.is_empty() {
                    return Err(invalid(
                        error_codes::EMPTY_PARAM_NAME,
                        format!("Catch-all segment without a name in specification '{spec}'"),
                    ));
                }
                Ok(Segment::CatchAll(name.to_string()))
            } else if inner.is_empty() {
                Err(invalid(
                    error_codes::EMPTY_PARAM_NAME,
                    format!("Dynamic segment without a name in specification '{spec}'"),
                ))
            } else {
                Ok(Segment::Dynamic(inner.to_string()))
            }
        }
        None => Ok(Segment::Static(token.to_string())),
    }
}

/// At most one catch-all, and it must be the last non-group segment.
fn check_catch_all_placement(segments: &[Segment], spec: &str) -> Result<(), RouteError> {
    let mut seen_catch_all = false;
    for segment in segments {
        match segment {
            Segment::Group(_) => {}
            Segment::CatchAll(_) => {
                if seen_catch_all {
                    return Err(invalid(
                        error_codes::MISPLACED_CATCH_ALL,
                        format!("More than one catch-all in specification '{spec}'"),
                    ));
                }
                seen_catch_all = true;
            }
            Segment::Static(_) | Segment::Dynamic(_) => {
                if seen_catch_all {
                    return Err(invalid(
                        error_codes::MISPLACED_CATCH_ALL,
                        format!(
                            "Catch-all must be the last non-group segment in specification '{spec}'"
                        ),
                    ));
                }
            }
        }
    }
    Ok(())
}

fn invalid(code: &str, message: String) -> RouteError {
    RouteError::InvalidSpecification {
        code: code.to_string(),
        message,
    }
}
