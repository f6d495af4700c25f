use std::fmt::Display;

/// Dotted path of a field inside the decoded document, e.g.
/// `trx.transaction.actions`. The empty path is the document itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn join(&self, field: &str) -> Self {
        if self.0.is_empty() {
            Self(field.to_string())
        } else {
            Self(format!("{}.{}", self.0, field))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Why a payload could not be normalized.
///
/// Line and column in the parser error are relative to the start of the
/// offending field's value, or of the document for root errors.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("Malformed payload at {field}: {source}")]
    MalformedPayload {
        field: FieldPath,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required field {field}")]
    MissingField { field: FieldPath },
}

impl DecodeError {
    pub(crate) fn malformed(field: &FieldPath, source: serde_json::Error) -> Self {
        DecodeError::MalformedPayload { field: field.clone(), source }
    }

    pub fn field(&self) -> &FieldPath {
        match self {
            DecodeError::MalformedPayload { field, .. } | DecodeError::MissingField { field } => {
                field
            }
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedPayload { source, .. } => Some(source.line()),
            DecodeError::MissingField { .. } => None,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedPayload { source, .. } => Some(source.column()),
            DecodeError::MissingField { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_join() {
        let path = FieldPath::root().join("trx").join("transaction").join("actions");
        assert_eq!(path, "trx.transaction.actions");
        assert_eq!(FieldPath::root().to_string(), "(root)");
    }
}
