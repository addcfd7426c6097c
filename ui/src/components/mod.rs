pub mod app;
pub mod commodity_dropdown;
pub mod effects;
pub mod footer;
pub mod home_screen;
pub mod language_selector;
pub mod negotiation_screen;
pub mod platform;
pub mod price_card;
pub mod vendor_dashboard;
pub mod vision;
pub mod voice_button;
