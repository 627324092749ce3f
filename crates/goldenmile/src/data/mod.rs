pub mod config_data;
pub mod keybindings_data;
#[cfg(feature = "native")]
pub mod storage;
