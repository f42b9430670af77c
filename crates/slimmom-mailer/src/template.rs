//! Email body templates.
//!
//! Kept as pure functions so the rendered HTML can be tested without a
//! transport.

/// Renders the HTML body for the address-verification email.
pub fn verification_body(name: &str, verification_link: &str) -> String {
    format!(
        "<div style=\"font-family: sans-serif; max-width: 480px;\">\
         <h2>Welcome to Slim Mom, {name}!</h2>\
         <p>Please confirm your email address to activate your account.</p>\
         <p><a href=\"{link}\" style=\"display: inline-block; padding: 12px 24px; \
         background-color: #fc842d; color: #ffffff; text-decoration: none; \
         border-radius: 24px;\">Verify email</a></p>\
         <p>Or open this link in your browser:<br><a href=\"{link}\">{link}</a></p>\
         <p>If you did not create an account, you can ignore this message.</p>\
         </div>",
        name = name,
        link = verification_link,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_contains_link_and_name() {
        let body = verification_body("Alice", "http://localhost:3000/api/auth/verify/tok-1");
        assert!(body.contains("Alice"));
        assert!(body.contains("http://localhost:3000/api/auth/verify/tok-1"));
    }

    #[test]
    fn test_body_is_html() {
        let body = verification_body("Bob", "http://example.com/v/t");
        assert!(body.starts_with("<div"));
        assert!(body.contains("</div>"));
    }
}
