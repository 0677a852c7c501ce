use crate::domain::{
    entities::{ProjectStructure, ResolvedConfiguration},
    error::DomainError,
};

/// Checks run at the boundaries between resolution, synthesis and writing.
pub struct DomainValidator;

impl DomainValidator {
    /// `name` must be non-empty before anything is registered.
    pub fn validate_configuration(config: &ResolvedConfiguration) -> Result<(), DomainError> {
        if config.name().trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{common::RelativePath, project_structure::FileToWrite},
        layers::{OptionLayer, builtin_defaults, keys},
        resolver::resolve,
    };

    #[test]
    fn resolved_configuration_passes() {
        let config = resolve(
            &builtin_defaults(),
            &OptionLayer::new(),
            &OptionLayer::new().with(keys::NAME, "widget"),
        )
        .unwrap();
        assert!(DomainValidator::validate_configuration(&config).is_ok());
    }

    #[test]
    fn blank_name_fails() {
        let mut config = resolve(
            &builtin_defaults(),
            &OptionLayer::new(),
            &OptionLayer::new().with(keys::NAME, "widget"),
        )
        .unwrap();
        config.name = " ".into();
        assert!(DomainValidator::validate_configuration(&config).is_err());
    }

    #[test]
    fn structure_check_delegates() {
        let structure = ProjectStructure::new("/tmp/widget").with_file(FileToWrite::new(
            RelativePath::new("README.md"),
            "# widget\n".into(),
        ));
        assert!(DomainValidator::validate_project_structure(&structure).is_ok());
    }
}
