pub mod core;
pub mod history;
pub mod format;
pub mod app;

rust_i18n::i18n!("locales", fallback = "zh-CN");
