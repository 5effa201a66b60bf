//! The tutor persona's display name.

use std::fmt;

use crate::domain::foundation::ValidationError;

/// Name the model speaks as, used for agent role labels and the reply cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona(String);

impl Persona {
    /// Creates a persona from a configured name.
    ///
    /// The name is trimmed, its first letter upper-cased and the rest
    /// lower-cased, so `"ada"`, `"ADA"` and `"Ada"` render the same label.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("persona"));
        }
        if name.contains(&['\n', '\r', ':'][..]) {
            return Err(ValidationError::invalid_format(
                "persona",
                "must be a single line without ':'",
            ));
        }

        let mut chars = name.chars();
        let label = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        Ok(Self(label))
    }

    /// The rendered role label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self("Ada".to_string())
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_is_capitalized() {
        assert_eq!(Persona::new("ada").unwrap().label(), "Ada");
        assert_eq!(Persona::new("  Ada ").unwrap().label(), "Ada");
        assert_eq!(Persona::new("élodie").unwrap().label(), "Élodie");
    }

    #[test]
    fn persona_lowercases_after_first_letter() {
        assert_eq!(Persona::new("mAX").unwrap().label(), "Max");
        assert_eq!(Persona::new("ADA").unwrap().label(), "Ada");
    }

    #[test]
    fn persona_rejects_blank_names() {
        assert!(Persona::new("   ").is_err());
    }

    #[test]
    fn persona_rejects_label_breaking_characters() {
        assert!(Persona::new("Ada:").is_err());
        assert!(Persona::new("A\nda").is_err());
    }

    #[test]
    fn default_persona_is_ada() {
        assert_eq!(Persona::default().to_string(), "Ada");
    }
}
