//! Form validation for the login and seller signup pages
//!
//! Rules match what the forms enforce before anything is sent over the wire.

use crate::auth::{LoginRequest, SignupForm};
use crate::entity::ProductDraft;
use std::fmt;

pub const LOGIN_PASSWORD_MIN: usize = 6;
pub const SIGNUP_PASSWORD_MIN: usize = 8;
pub const COMPANY_NAME_MIN: usize = 3;
pub const PHONE_DIGITS: usize = 10;

/// One failed rule, keyed by the form field it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// All failed rules of a form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    /// First message for `field`, for inline display under an input.
    pub fn for_field(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError::new(field, message));
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

// =========================================================
// Field rules
// =========================================================

/// Accepts `local@domain.tld` where the TLD is at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email.trim()) {
        errors.push("email", "Invalid email address");
    }
}

// =========================================================
// Forms
// =========================================================

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, &request.email);
    if request.password.is_empty() {
        errors.push("password", "Password is required");
    } else if request.password.chars().count() < LOGIN_PASSWORD_MIN {
        errors.push("password", "Password must be at least 6 characters");
    }
    errors.into_result()
}

pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let request = &form.request;

    let company = request.company_name.trim();
    if company.is_empty() {
        errors.push("company_name", "Store name is required");
    } else if company.chars().count() < COMPANY_NAME_MIN {
        errors.push("company_name", "Store name must be at least 3 characters");
    }
    if request.company_address.trim().is_empty() {
        errors.push("company_address", "Company address is required");
    }
    if request.company_pan_number.trim().is_empty() {
        errors.push("company_pan_number", "PAN number is required");
    }
    check_email(&mut errors, &request.email);
    if request.password.is_empty() {
        errors.push("password", "Password is required");
    } else if request.password.chars().count() < SIGNUP_PASSWORD_MIN {
        errors.push("password", "Password must be at least 8 characters");
    }
    if request.confirm_password.is_empty() {
        errors.push("confirm_password", "Please confirm your password");
    } else if request.confirm_password != request.password {
        errors.push("confirm_password", "Passwords do not match");
    }
    if request.phone_number.trim().is_empty() {
        errors.push("phone_number", "Phone number is required");
    } else if !is_valid_phone(request.phone_number.trim()) {
        errors.push("phone_number", "Enter a valid 10-digit phone number");
    }
    if !form.agree_terms {
        errors.push("agree_terms", "You must agree to the terms");
    }
    errors.into_result()
}

/// Seller product form: a name and category, a positive price, and an
/// original price no lower than the selling price.
pub fn validate_product(draft: &ProductDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if draft.name.trim().is_empty() {
        errors.push("name", "Product name is required");
    }
    if draft.category.trim().is_empty() {
        errors.push("category", "Category is required");
    }
    if !draft.price.is_finite() || draft.price <= 0.0 {
        errors.push("price", "Price must be greater than 0");
    }
    if draft.original_price.is_finite() && draft.original_price > 0.0 && draft.original_price < draft.price {
        errors.push("original_price", "Original price cannot be below the price");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SignupRequest;
    use rstest::rstest;

    #[rstest]
    #[case("jane@example.com", true)]
    #[case("john.doe+shop@blinkbuy.co.in", true)]
    #[case("no-at-sign.com", false)]
    #[case("two@@example.com", false)]
    #[case("user@example.c", false)]
    #[case("user@example.c0m", false)]
    #[case("@example.com", false)]
    #[case("user@.com", false)]
    fn email_rule(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid, "{email}");
    }

    #[rstest]
    #[case("9800000000", true)]
    #[case("980000000", false)]
    #[case("98000000001", false)]
    #[case("98000-0000", false)]
    fn phone_rule(#[case] phone: &str, #[case] valid: bool) {
        assert_eq!(is_valid_phone(phone), valid);
    }

    #[test]
    fn login_reports_every_failed_field() {
        let request = LoginRequest {
            email: "bad".into(),
            password: "123".into(),
        };
        let errors = validate_login(&request).unwrap_err();
        assert_eq!(errors.for_field("email"), Some("Invalid email address"));
        assert_eq!(
            errors.for_field("password"),
            Some("Password must be at least 6 characters")
        );
    }

    fn valid_signup() -> SignupForm {
        SignupForm {
            request: SignupRequest {
                company_name: "TechTrendz".into(),
                company_address: "456 Tech Park".into(),
                company_pan_number: "ABCDE1234F".into(),
                email: "owner@techtrendz.com".into(),
                password: "s3cretpass".into(),
                confirm_password: "s3cretpass".into(),
                phone_number: "9800000000".into(),
            },
            agree_terms: true,
        }
    }

    #[test]
    fn accepts_complete_signup() {
        assert!(validate_signup(&valid_signup()).is_ok());
    }

    #[test]
    fn signup_requires_matching_confirmation_and_terms() {
        let mut form = valid_signup();
        form.request.confirm_password = "different".into();
        form.agree_terms = false;
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(
            errors.for_field("confirm_password"),
            Some("Passwords do not match")
        );
        assert_eq!(
            errors.for_field("agree_terms"),
            Some("You must agree to the terms")
        );
        assert!(errors.for_field("email").is_none());
    }

    #[rstest]
    #[case("", "Phones", 10.0, 0.0, Some("name"))]
    #[case("Case", "", 10.0, 0.0, Some("category"))]
    #[case("Case", "Phones", 0.0, 0.0, Some("price"))]
    #[case("Case", "Phones", 10.0, 8.0, Some("original_price"))]
    #[case("Case", "Phones", 10.0, 12.0, None)]
    fn product_rules(
        #[case] name: &str,
        #[case] category: &str,
        #[case] price: f64,
        #[case] original_price: f64,
        #[case] failing: Option<&str>,
    ) {
        let draft = ProductDraft {
            name: name.into(),
            category: category.into(),
            price,
            original_price,
            stock: 3,
        };
        match failing {
            None => assert!(validate_product(&draft).is_ok()),
            Some(field) => {
                let errors = validate_product(&draft).unwrap_err();
                assert!(errors.for_field(field).is_some(), "{field}: {errors}");
            }
        }
    }
}
