use std::fmt;

use crate::error::SiteError;
use crate::state::demo_form::FormFields;

/// A `mailto:` compose target. Handing it to the browser opens the user's
/// mail client with the fields pre-filled; nothing is sent by us.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    subject: Option<String>,
    body: Option<String>,
}

impl MailtoLink {
    pub fn new(recipient: &str) -> Result<Self, SiteError> {
        validate_recipient(recipient)?;
        Ok(Self {
            recipient: recipient.to_string(),
            subject: None,
            body: None,
        })
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the demo request email for the given form fields.
    pub fn demo_request(recipient: &str, site: &str, fields: &FormFields) -> Result<Self, SiteError> {
        let body = format!(
            "New demo request from {}:\n\n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Role: {}\n\
             Message: {}\n\n\
             Please follow up with this request.",
            site,
            fields.name,
            fields.email,
            fields.company,
            fields.role_value(),
            fields.message,
        );
        Ok(Self::new(recipient)?
            .subject(format!("Demo Request from {}", fields.name))
            .body(body))
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject_text(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn to_uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mailto:{}", self.recipient)?;
        let mut sep = '?';
        if let Some(subject) = &self.subject {
            write!(f, "{}subject={}", sep, urlencoding::encode(subject))?;
            sep = '&';
        }
        if let Some(body) = &self.body {
            write!(f, "{}body={}", sep, urlencoding::encode(body))?;
        }
        Ok(())
    }
}

fn validate_recipient(recipient: &str) -> Result<(), SiteError> {
    if recipient.is_empty() {
        return Err(SiteError::CompositionFailure("no recipient configured".to_string()));
    }
    if !recipient.contains('@') {
        return Err(SiteError::CompositionFailure(format!(
            "recipient {:?} is not an email address",
            recipient
        )));
    }
    if recipient
        .chars()
        .any(|c| c.is_whitespace() || c == '?' || c == '&')
    {
        return Err(SiteError::CompositionFailure(format!(
            "recipient {:?} contains characters not allowed in a mailto address",
            recipient
        )));
    }
    Ok(())
}

/// Plain `mailto:` link with an optional subject, for static "email us" links.
pub fn format_email_link(email: &str, subject: Option<&str>) -> Result<String, SiteError> {
    let link = MailtoLink::new(email)?;
    Ok(match subject {
        Some(subject) => link.subject(subject).to_uri(),
        None => link.to_uri(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::demo_form::Role;

    fn query_param<'a>(uri: &'a str, key: &str) -> Option<&'a str> {
        let query = uri.split_once('?')?.1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
    }

    fn sample_fields() -> FormFields {
        FormFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines & Co".to_string(),
            role: Some(Role::Cmo),
            message: "Line one\nline two?".to_string(),
        }
    }

    #[test]
    fn demo_request_uri_has_encoded_subject_and_body() {
        let link = MailtoLink::demo_request("sales@example.com", "Example site", &sample_fields()).unwrap();
        assert_eq!(link.recipient(), "sales@example.com");
        assert_eq!(link.subject_text(), Some("Demo Request from Ada Lovelace"));
        let uri = link.to_uri();

        assert!(uri.starts_with("mailto:sales@example.com?subject="));
        assert_eq!(query_param(&uri, "subject"), Some("Demo%20Request%20from%20Ada%20Lovelace"));

        let body = urlencoding::decode(query_param(&uri, "body").unwrap()).unwrap();
        assert_eq!(
            body,
            "New demo request from Example site:\n\n\
             Name: Ada Lovelace\n\
             Email: ada@example.com\n\
             Company: Analytical Engines & Co\n\
             Role: cmo\n\
             Message: Line one\nline two?\n\n\
             Please follow up with this request."
        );
    }

    #[test]
    fn reserved_characters_in_fields_do_not_split_the_query() {
        let uri = MailtoLink::demo_request("sales@example.com", "Example site", &sample_fields())
            .unwrap()
            .to_uri();
        // only the separator between subject and body survives unencoded
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('?').count(), 1);
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn empty_role_renders_blank() {
        let fields = FormFields {
            role: None,
            ..sample_fields()
        };
        let link = MailtoLink::demo_request("sales@example.com", "Example site", &fields).unwrap();
        assert!(link.body_text().unwrap().contains("Role: \n"));
    }

    #[test]
    fn bad_recipients_are_composition_failures() {
        for recipient in ["", "not-an-address", "a b@example.com", "a@example.com?cc=x"] {
            let result = MailtoLink::demo_request(recipient, "Example site", &sample_fields());
            assert!(
                matches!(result, Err(SiteError::CompositionFailure(_))),
                "recipient {:?} should be rejected",
                recipient
            );
        }
    }

    #[test]
    fn format_email_link_with_and_without_subject() {
        assert_eq!(
            format_email_link("hello@example.com", None).unwrap(),
            "mailto:hello@example.com"
        );
        assert_eq!(
            format_email_link("hello@example.com", Some("BrandStudios Demo")).unwrap(),
            "mailto:hello@example.com?subject=BrandStudios%20Demo"
        );
    }
}
