//! Platform abstraction layer for native/web compatibility.
//!
//! [`ReportWorker`] runs report requests off the UI loop. The native
//! implementation uses a thread and a blocking HTTP client; the web one uses
//! browser fetch futures and page navigation.

mod worker;

#[cfg(feature = "native")]
pub mod native;

#[cfg(all(feature = "web", not(feature = "native")))]
pub mod web;

pub use worker::{ReportWorker, WorkerNavigator, WorkerRequest, WorkerResponse};

#[cfg(feature = "native")]
pub use native::{HttpClient, NativeWorker, TransportError};

#[cfg(all(feature = "web", not(feature = "native")))]
pub use web::WebWorker;
