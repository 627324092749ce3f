//! Web platform implementations using browser fetch and navigation.

mod worker;

pub use worker::WebWorker;
