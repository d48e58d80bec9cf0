use crate::error::{AddrBookError, Result};

pub const PHONE_LENGTH: usize = 10;
pub const PHONE_FORMAT_MESSAGE: &str = "Phone number should contain exactly 10 digits.";

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_phones<S: AsRef<str>>(phones: &[S]) -> Result<()> {
    if phones.iter().all(|p| is_valid_phone(p.as_ref())) {
        Ok(())
    } else {
        Err(AddrBookError::validation(PHONE_FORMAT_MESSAGE))
    }
}

/// Fails with `usage` unless at least `min` arguments were given.
pub fn require_args(args: &[String], min: usize, usage: &str) -> Result<()> {
    if args.len() < min {
        Err(AddrBookError::validation(usage))
    } else {
        Ok(())
    }
}

/// Splits `name, phone+` after checking the shape and every phone.
pub fn name_and_phones<'a>(args: &'a [String], usage: &str) -> Result<(&'a str, &'a [String])> {
    require_args(args, 2, usage)?;
    let (name, phones) = args.split_at(1);
    validate_phones(phones)?;
    Ok((name[0].as_str(), phones))
}
