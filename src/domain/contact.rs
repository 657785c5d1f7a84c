use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,

    // Absent in files written by the basic variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Lowercases a caller-supplied name into the key used by the store.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str, group: Option<&str>) -> Self {
        Contact {
            name: normalize_name(name),
            phone: phone.to_string(),
            email: email.to_string(),
            group: group.map(str::to_string),
        }
    }

    /// Group compared lowercased; ungrouped contacts compare as "".
    pub fn in_group(&self, group: &str) -> bool {
        self.group.as_deref().unwrap_or_default().to_lowercase() == group.to_lowercase()
    }

    /// `term` must already be lowercased.
    pub fn matches_term(&self, term: &str) -> bool {
        self.name.contains(term)
            || self.phone.to_lowercase().contains(term)
            || self.email.to_lowercase().contains(term)
            || self
                .group
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_lowercases_name() {
        let contact = Contact::new("Uche Johnson", "08123456789", "uche@example.com", None);

        assert_eq!(contact.name, "uche johnson");
        assert_eq!(contact.phone, "08123456789");
        assert_eq!(contact.group, None);
    }

    #[test]
    fn group_matching_ignores_case() {
        let contact = Contact::new("Alice", "555-1234", "", Some("Friends"));

        assert!(contact.in_group("friends"));
        assert!(contact.in_group("FRIENDS"));
        assert!(!contact.in_group("work"));

        let ungrouped = Contact::new("Bob", "555-5678", "", None);
        assert!(ungrouped.in_group(""));
        assert!(!ungrouped.in_group("friends"));
    }

    #[test]
    fn term_matches_any_field() {
        let contact = Contact::new("Alice", "555-1234", "Alice@Example.com", Some("Work"));

        assert!(contact.matches_term("ali"));
        assert!(contact.matches_term("555"));
        assert!(contact.matches_term("example.com"));
        assert!(contact.matches_term("work"));
        assert!(!contact.matches_term("gym"));
    }

    #[test]
    fn missing_group_key_deserializes_as_none() {
        let contact: Contact =
            serde_json::from_str(r#"{"name":"mom","phone":"98765432109","email":""}"#).unwrap();

        assert_eq!(contact.group, None);

        let json = serde_json::to_string(&contact).unwrap();
        assert!(!json.contains("group"));
    }
}
