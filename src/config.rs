//! Field-name configuration for classifying JSON arguments by capability.

use crate::errors::SameError;

pub const DEFAULT_ID_FIELD: &str = "id";
pub const DEFAULT_SOURCE_FIELD: &str = "from_id";
pub const DEFAULT_TARGET_FIELD: &str = "to_id";

/// Names of the JSON object fields that expose the vertex-id capability and
/// the edge source/target capability.
///
/// # Examples
///
/// ```rust
/// use graphsame::FieldConfig;
///
/// let fields = FieldConfig::default().source_field("src").target_field("dst");
/// assert_eq!(fields.id_field, "id");
/// assert!(fields.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub id_field: String,
    pub source_field: String,
    pub target_field: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
            source_field: DEFAULT_SOURCE_FIELD.to_string(),
            target_field: DEFAULT_TARGET_FIELD.to_string(),
        }
    }
}

impl FieldConfig {
    pub fn id_field(mut self, name: &str) -> Self {
        self.id_field = name.to_string();
        self
    }

    pub fn source_field(mut self, name: &str) -> Self {
        self.source_field = name.to_string();
        self
    }

    pub fn target_field(mut self, name: &str) -> Self {
        self.target_field = name.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), SameError> {
        for (what, name) in [
            ("id", &self.id_field),
            ("source", &self.source_field),
            ("target", &self.target_field),
        ] {
            if name.trim().is_empty() {
                return Err(SameError::invalid_input(format!(
                    "{what} field name must be set"
                )));
            }
        }
        if self.source_field == self.target_field {
            return Err(SameError::invalid_input(
                "source and target field names must differ",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_row_naming() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.id_field, "id");
        assert_eq!(cfg.source_field, "from_id");
        assert_eq!(cfg.target_field, "to_id");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_and_colliding_names() {
        assert!(FieldConfig::default().id_field(" ").validate().is_err());
        assert!(
            FieldConfig::default()
                .source_field("end")
                .target_field("end")
                .validate()
                .is_err()
        );
    }
}
