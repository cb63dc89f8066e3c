/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a submission amount entered as text.
///
/// Returns the parsed amount on success. Rejecting here keeps malformed
/// amounts from ever reaching the gateway.
pub fn validate_amount(amount: &str) -> Result<f64, String> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err("Amount is required".to_string());
    }

    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| format!("Amount must be a number, got '{}'", trimmed))?;

    if !parsed.is_finite() {
        return Err("Amount must be a finite number".to_string());
    }

    if parsed <= 0.0 {
        return Err("Amount must be greater than 0".to_string());
    }

    Ok(parsed)
}

/// Validate a merchant name.
pub fn validate_merchant(merchant: &str) -> ValidationResult {
    if merchant.trim().is_empty() {
        return ValidationResult::err("Merchant is required");
    }

    if merchant.len() > 120 {
        return ValidationResult::err("Merchant must be less than 120 characters");
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}
