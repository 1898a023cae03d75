use thiserror::Error;

/// Why a property tuple could not be turned into a configuration entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CraftingError {
    #[error("Property subject has no name: '{0}'")]
    MissingKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crafting_error_messages() {
        let err = CraftingError::MissingKey(" property".to_string());
        assert_eq!(err.to_string(), "Property subject has no name: ' property'");
    }
}
