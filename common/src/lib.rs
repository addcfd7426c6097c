pub mod advisory;
pub mod commodity;
pub mod conversation;
pub mod dashboard;
pub mod home;
pub mod i18n;
pub mod language;
pub mod navigation;
pub mod negotiation;
pub mod price;
pub mod timeline;
pub mod voice;
