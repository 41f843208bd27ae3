use garde::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Path reported when a violation cannot be pinned to a single field.
pub const BODY_PATH: &str = "body";

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

/// Inbound payload does not match the expected record shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation {
                path: path.into(),
                message: message.into(),
            }],
        }
    }

    /// Whether any violation was reported against `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.path, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<garde::Report> for ValidationError {
    fn from(report: garde::Report) -> Self {
        let violations = report
            .iter()
            .map(|(path, error)| {
                let path = path.to_string();
                Violation {
                    path: if path.is_empty() { BODY_PATH.to_string() } else { path },
                    message: error.to_string(),
                }
            })
            .collect();
        Self { violations }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let message = err.inner().to_string();
        let parent = err
            .path()
            .iter()
            .next()
            .map(|_| err.path().to_string());

        // A missing field fails on the enclosing struct, so its name only
        // shows up in the message.
        let path = match (parent, missing_field(&message)) {
            (Some(parent), Some(field)) => format!("{parent}.{field}"),
            (None, Some(field)) => field.to_string(),
            (Some(parent), None) => parent,
            (None, None) => BODY_PATH.to_string(),
        };
        Self::single(path, message)
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
        .filter(|name| !name.is_empty())
}

/// Validate an untyped payload against record shape `T`.
///
/// Deserialization catches missing fields, type mismatches and enum values
/// outside their set; garde rules then check bounds and URLs. Nothing is
/// persisted here.
pub fn validate<T>(payload: Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
{
    if !payload.is_object() {
        return Err(ValidationError::single(BODY_PATH, "expected a JSON object"));
    }
    let record: T = serde_path_to_error::deserialize(payload)?;
    check(&record)?;
    Ok(record)
}

/// Run the garde rules of an already typed record.
pub fn check<T>(record: &T) -> Result<(), ValidationError>
where
    T: Validate,
    T::Context: Default,
{
    record.validate().map_err(ValidationError::from)
}

/// Absolute `http`/`https` URL.
pub fn http_url(value: &str, _context: &()) -> garde::Result {
    let parsed = url::Url::parse(value)
        .map_err(|e| garde::Error::new(format!("not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(garde::Error::new(format!(
            "URL scheme `{scheme}` is not http or https"
        ))),
    }
}

pub fn optional_http_url(value: &Option<String>, context: &()) -> garde::Result {
    match value {
        Some(url) => http_url(url, context),
        None => Ok(()),
    }
}
