use crate::domain::{ContactEnquiry, PropertyEnquiry};

/// Validation failures reported back to the form before anything is relayed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnquiryValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("{}", phone_validation_message())]
    InvalidPhone,
}

/// Check a contact enquiry before relaying it.
pub fn validate_contact(enquiry: &ContactEnquiry) -> Result<(), EnquiryValidationError> {
    require(&enquiry.name, "name")?;
    require(&enquiry.email, "email")?;
    require(&enquiry.message, "message")?;
    require(&enquiry.enquiry_type, "enquiry_type")?;

    if !validate_email(&enquiry.email) {
        return Err(EnquiryValidationError::InvalidEmail);
    }
    if let Some(phone) = &enquiry.phone {
        if !phone.trim().is_empty() && !validate_phone(phone) {
            return Err(EnquiryValidationError::InvalidPhone);
        }
    }
    Ok(())
}

/// Check a property enquiry before relaying it.
pub fn validate_property(enquiry: &PropertyEnquiry) -> Result<(), EnquiryValidationError> {
    require(&enquiry.property_slug, "property_slug")?;
    require(&enquiry.name, "name")?;
    require(&enquiry.email, "email")?;

    if !validate_email(&enquiry.email) {
        return Err(EnquiryValidationError::InvalidEmail);
    }
    if let Some(phone) = &enquiry.phone {
        if !phone.trim().is_empty() && !validate_phone(phone) {
            return Err(EnquiryValidationError::InvalidPhone);
        }
    }
    Ok(())
}

fn require(value: &str, field: &'static str) -> Result<(), EnquiryValidationError> {
    if value.trim().is_empty() {
        Err(EnquiryValidationError::MissingField { field })
    } else {
        Ok(())
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Australian phone validation: `+61`/`61`/`0` prefix, a 2-4, 7, or 8 area
/// lead, then eight digits with optional single separators.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();

    let rest = if let Some(rest) = cleaned.strip_prefix("+61") {
        rest
    } else if let Some(rest) = cleaned.strip_prefix("61") {
        rest
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        rest
    } else {
        return false;
    };

    let mut chars = rest.chars();
    let Some(lead) = chars.next() else {
        return false;
    };
    if !matches!(lead, '2'..='4' | '7' | '8') {
        return false;
    }

    let mut digits = 0usize;
    let mut pending_separator = false;
    for c in chars {
        match c {
            '-' => {
                if pending_separator {
                    return false;
                }
                pending_separator = true;
            }
            '0'..='9' => {
                digits += 1;
                pending_separator = false;
            }
            _ => return false,
        }
    }

    digits == 8 && !pending_separator
}

/// Strip everything except digits and a leading `+`.
pub fn clean_phone(phone: &str) -> String {
    phone
        .chars()
        .enumerate()
        .filter(|&(index, c)| c.is_ascii_digit() || (index == 0 && c == '+'))
        .map(|(_, c)| c)
        .collect()
}

/// Format a phone number for display, leaving anything unrecognized as-is.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if let Some(rest) = digits.strip_prefix("61") {
        if rest.len() == 9 {
            return format!("+61 {} {} {}", &rest[..1], &rest[1..5], &rest[5..]);
        }
    }
    if digits.starts_with('0') && digits.len() == 10 {
        return format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..]);
    }
    phone.to_string()
}

pub fn phone_validation_message() -> &'static str {
    "Please enter a valid Australian phone number (e.g., 0412 345 678 or +61 412 345 678)"
}
