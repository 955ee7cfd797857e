use thiserror::Error;

/// Catalog load failures.
///
/// Only whole-document failures are represented here. Records without a name
/// are dropped during normalization and never surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure, non-success status or a payload that is not JSON.
    #[error("{0}")]
    SourceUnavailable(String),

    /// Valid JSON that matches none of the recognized catalog shapes.
    #[error("{0}")]
    MalformedSource(String),
}

impl CatalogError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSource(message.into())
    }

    /// Message shown in place of the listing when a load cycle fails.
    pub fn user_message(&self) -> String {
        format!("Error: {}. Recarga la página.", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = CatalogError::unavailable("No se encontró el catálogo de productos");
        assert_eq!(
            err.user_message(),
            "Error: No se encontró el catálogo de productos. Recarga la página."
        );
    }
}
