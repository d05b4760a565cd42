use log::Level;

/// Number used when `WHATSAPP_NUMBER` is missing or malformed at build time.
pub const PLACEHOLDER_WHATSAPP_NUMBER: &str = "5500000000000";

/// Header switches to its opaque style past this vertical offset.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Simulated send time before the WhatsApp handoff.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Destination number for lead messages, baked in at compile time:
/// `WHATSAPP_NUMBER=+55 11 91234-5678 trunk build --release`
pub fn whatsapp_number() -> String {
    option_env!("WHATSAPP_NUMBER")
        .and_then(normalize_phone)
        .unwrap_or_else(|| PLACEHOLDER_WHATSAPP_NUMBER.to_string())
}

pub fn whatsapp_number_configured() -> bool {
    option_env!("WHATSAPP_NUMBER")
        .and_then(normalize_phone)
        .is_some()
}

/// wa.me wants the bare international number: digits only, no `+`.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let mut digits = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        match c {
            '0'..='9' => digits.push(c),
            '+' | ' ' | '-' | '(' | ')' | '.' => {}
            _ => return None,
        }
    }

    if (8..=15).contains(&digits.len()) {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_formatting() {
        assert_eq!(
            normalize_phone("+55 (11) 91234-5678"),
            Some("5511912345678".to_string())
        );
        assert_eq!(normalize_phone("351.912.345.678"), Some("351912345678".to_string()));
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("call me"), None);
        assert_eq!(normalize_phone("+55 11 9123x"), None);
        assert_eq!(normalize_phone("1234"), None);
        assert_eq!(normalize_phone("1234567890123456"), None);
    }

    #[test]
    fn whatsapp_number_is_always_usable() {
        let number = whatsapp_number();
        assert!(normalize_phone(&number).is_some());
    }
}
