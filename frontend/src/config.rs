#[cfg(debug_assertions)]
pub fn get_contact_email() -> &'static str {
    "youremail@example.com"  // Local testing inbox
}

#[cfg(not(debug_assertions))]
pub fn get_contact_email() -> &'static str {
    "samraateeque12@gmail.com"
}

#[cfg(debug_assertions)]
pub fn get_auto_advance_ms() -> u32 {
    4000
}

#[cfg(not(debug_assertions))]
pub fn get_auto_advance_ms() -> u32 {
    7000
}

pub const CONTACT_PHONE: &str = "+91 7755845557";
pub const CONTACT_LOCATION: &str = "Azamgarh, Uttar Pradesh, India";

// "Added!" badge on package cards
pub const ADDED_BADGE_MS: u32 = 2000;

// Review modal: show the thank-you panel, close, then reset the form
pub const REVIEW_CLOSE_MS: u32 = 2000;
pub const REVIEW_RESET_MS: u32 = 300;
