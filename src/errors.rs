use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    Failure {
        description: String,
        cause: String,
    },
}

impl CatalogError {
    pub fn failure(description: String,
                   cause: String) -> Self {
        CatalogError::Failure {
            description,
            cause,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CatalogError::Failure {
                ref description,
                ref cause,
            } => write!(f, "{}: cause {}", description, cause),
        }
    }
}

impl Error for CatalogError {}

#[cfg(test)]
mod tests {
    use crate::errors::CatalogError;

    #[test]
    fn test_failure_display() {
        let error = CatalogError::failure("reading dataset".to_string(), "not found".to_string());
        assert_eq!(error.to_string(), "reading dataset: cause not found");
    }
}
