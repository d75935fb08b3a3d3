use thiserror::Error;

use crate::content::Testimonial;

pub const SERVICE_OPTIONS: [&str; 5] = [
    "Portfolio Website",
    "Landing Page",
    "Business Website",
    "E-commerce Store",
    "Other",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill all fields & rating.")]
    IncompleteReview,
}

/// `local@label.label`: a single `@`, no whitespace, and a dotted domain
/// without empty labels.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            // the select shows its first option before any change event
            service: SERVICE_OPTIONS[0].to_string(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if !is_email_shaped(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("New Inquiry for {} from {}", self.service, self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nService of Interest: {}\n\nMessage:\n{}",
            self.name, self.email, self.service, self.message
        )
    }

    /// Validated `mailto:` link that hands the inquiry to the visitor's mail client.
    pub fn mailto_href(&self, recipient: &str) -> Result<String, FormError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub name: String,
    pub review: String,
    // 0 = not rated yet
    pub rating: u8,
}

impl ReviewDraft {
    pub fn into_testimonial(self) -> Result<Testimonial, FormError> {
        if self.name.trim().is_empty() || self.review.trim().is_empty() || !(1..=5).contains(&self.rating) {
            return Err(FormError::IncompleteReview);
        }
        Ok(Testimonial {
            quote: self.review.trim().to_string(),
            name: self.name.trim().to_string(),
            company: "Valued Client".to_string(),
            image: String::new(),
            rating: self.rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ravi Verma".to_string(),
            email: "ravi@example.com".to_string(),
            service: "Landing Page".to_string(),
            message: "Need a landing page\nby Friday".to_string(),
        }
    }

    #[test]
    fn default_service_is_first_option() {
        assert_eq!(ContactForm::default().service, "Portfolio Website");
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = filled_form().mailto_href("me@example.com").unwrap();
        assert_eq!(
            href,
            "mailto:me@example.com?subject=New%20Inquiry%20for%20Landing%20Page%20from%20Ravi%20Verma\
             &body=Name%3A%20Ravi%20Verma%0AEmail%3A%20ravi%40example.com%0AService%20of%20Interest%3A%20Landing%20Page\
             %0A%0AMessage%3A%0ANeed%20a%20landing%20page%0Aby%20Friday"
        );
    }

    #[test]
    fn body_layout() {
        assert_eq!(
            filled_form().body(),
            "Name: Ravi Verma\nEmail: ravi@example.com\nService of Interest: Landing Page\n\nMessage:\nNeed a landing page\nby Friday"
        );
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = filled_form();
        form.message = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingField("message")));
        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut form = filled_form();
        form.email = "ravi.example.com".to_string();
        assert_eq!(form.mailto_href("me@example.com"), Err(FormError::InvalidEmail));
        form.email = "@example.com".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        for email in ["a@b.", "a@.com", "a@b@c.com", "a b@c.com", "a@b..com"] {
            form.email = email.to_string();
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn accepts_subdomains_and_surrounding_spaces() {
        let mut form = filled_form();
        for email in ["ravi@mail.example.co.in", "  ravi.verma@example.com  "] {
            form.email = email.to_string();
            assert_eq!(form.validate(), Ok(()), "{}", email);
        }
    }

    #[test]
    fn review_requires_rating() {
        let draft = ReviewDraft {
            name: "Ravi".to_string(),
            review: "Lovely work".to_string(),
            rating: 0,
        };
        assert_eq!(draft.into_testimonial(), Err(FormError::IncompleteReview));
        assert_eq!(FormError::IncompleteReview.to_string(), "Please fill all fields & rating.");
    }

    #[test]
    fn review_becomes_valued_client_testimonial() {
        let draft = ReviewDraft {
            name: " Ravi ".to_string(),
            review: "Lovely work".to_string(),
            rating: 4,
        };
        let testimonial = draft.into_testimonial().unwrap();
        assert_eq!(testimonial.name, "Ravi");
        assert_eq!(testimonial.company, "Valued Client");
        assert_eq!(testimonial.rating, 4);
        assert!(testimonial.image.is_empty());
    }
}
