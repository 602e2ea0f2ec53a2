//! Build-time site configuration.
//!
//! Every value can be overridden by setting the matching environment variable
//! when the bundle is built (`XWEB_CONTACT_EMAIL=... trunk build`).

const DEFAULT_CONTACT_EMAIL: &str = "xweblabs@gmail.com";
const DEFAULT_CONTACT_PHONE: &str = "+26377735003";
const DEFAULT_SUBMIT_DELAY_MS: u32 = 1000;
const DEFAULT_STATUS_CLEAR_MS: u32 = 3000;
const DEFAULT_LOADING_MS: u32 = 3500;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 50;
const DEFAULT_POINTER_THROTTLE_MS: u32 = 32;

fn millis(value: Option<&'static str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

pub fn get_contact_email() -> &'static str {
    option_env!("XWEB_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL)
}

pub fn get_contact_phone() -> &'static str {
    option_env!("XWEB_CONTACT_PHONE").unwrap_or(DEFAULT_CONTACT_PHONE)
}

/// How long the simulated contact form submission takes.
pub fn get_submit_delay_ms() -> u32 {
    millis(option_env!("XWEB_SUBMIT_DELAY_MS"), DEFAULT_SUBMIT_DELAY_MS)
}

/// How long the success message stays visible after a submission.
pub fn get_status_clear_ms() -> u32 {
    millis(option_env!("XWEB_STATUS_CLEAR_MS"), DEFAULT_STATUS_CLEAR_MS)
}

pub fn get_loading_ms() -> u32 {
    millis(option_env!("XWEB_LOADING_MS"), DEFAULT_LOADING_MS)
}

pub fn get_scroll_throttle_ms() -> u32 {
    millis(option_env!("XWEB_SCROLL_THROTTLE_MS"), DEFAULT_SCROLL_THROTTLE_MS)
}

pub fn get_pointer_throttle_ms() -> u32 {
    millis(option_env!("XWEB_POINTER_THROTTLE_MS"), DEFAULT_POINTER_THROTTLE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_parses_override() {
        assert_eq!(millis(Some("250"), 1000), 250);
        assert_eq!(millis(Some(" 75 "), 1000), 75);
    }

    #[test]
    fn millis_falls_back_on_garbage() {
        assert_eq!(millis(Some("soon"), 1000), 1000);
        assert_eq!(millis(Some("-5"), 1000), 1000);
        assert_eq!(millis(None, 3500), 3500);
    }
}
