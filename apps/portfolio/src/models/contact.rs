pub const DEFAULT_NAME: &str = "Friend";
pub const DEFAULT_EMAIL: &str = "unknown";

/// Raw fields as posted by the contact form. Every field may be missing.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Builds the form from decoded key/value pairs. The first value of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "message" => &mut form.message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

/// A contact message after defaults are applied. Lives for one request only.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactForm> for ContactSubmission {
    // Only a missing field is defaulted. A field posted empty stays empty.
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            email: form.email.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            message: form.message.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_placeholders() {
        let submission = ContactSubmission::from(ContactForm::default());
        assert_eq!(submission.name, "Friend");
        assert_eq!(submission.email, "unknown");
        assert_eq!(submission.message, "");
    }

    #[test]
    fn test_posted_fields_are_kept_verbatim() {
        let submission = ContactSubmission::from(ContactForm {
            name: Some("Alice".to_string()),
            email: Some("not-an-email".to_string()),
            message: Some(String::new()),
        });
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "not-an-email");
        assert_eq!(submission.message, "");
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_of_repeated_key_wins() {
        let form = ContactForm::from_pairs(pairs(&[
            ("name", "Alice"),
            ("name", "Bob"),
            ("email", "a@x.com"),
        ]));
        assert_eq!(form.name.as_deref(), Some("Alice"));
        assert_eq!(form.email.as_deref(), Some("a@x.com"));
        assert!(form.message.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let form = ContactForm::from_pairs(pairs(&[("subject", "x"), ("message", "Hi")]));
        assert!(form.name.is_none());
        assert_eq!(form.message.as_deref(), Some("Hi"));
    }
}
