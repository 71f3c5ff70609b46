//! Display masking for advisor PII.
//!
//! Pure transforms used on the read path only. Stored records keep the
//! clear values; a masked projection is built fresh for every query and
//! never written back.

/// Reveal window for a SIN: the trailing 3 digits stay in clear text.
const SIN_REVEAL: usize = 3;

/// Reveal window for a phone number: the trailing 4 characters.
const PHONE_REVEAL: usize = 4;

/// Masks a SIN, keeping only the trailing 3 characters.
///
/// Output length always equals input length. Inputs shorter than the
/// reveal window pass through unmasked (the window clamps to the value
/// length).
pub fn mask_sin(sin: &str) -> String {
    mask_trailing(sin, SIN_REVEAL)
}

/// Masks a phone number, keeping only the trailing 4 characters.
///
/// Absent or empty input propagates as absent, matching the read model
/// of the registry: a record with no phone has no masked phone either.
pub fn mask_phone(phone: Option<&str>) -> Option<String> {
    match phone {
        None => None,
        Some(p) if p.is_empty() => None,
        Some(p) => Some(mask_trailing(p, PHONE_REVEAL)),
    }
}

fn mask_trailing(value: &str, window: usize) -> String {
    let len = value.chars().count();
    let masked = len.saturating_sub(window);
    let mut out = String::with_capacity(value.len());
    out.extend(std::iter::repeat('*').take(masked));
    out.extend(value.chars().skip(masked));
    out
}
