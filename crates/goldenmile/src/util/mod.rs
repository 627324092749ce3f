#[cfg(feature = "native")]
pub mod files;
pub mod format;
pub mod styles;
