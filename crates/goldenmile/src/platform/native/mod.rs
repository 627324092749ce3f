//! Native platform implementations using reqwest and threads.

mod http;
mod worker;

pub use http::{HttpClient, TransportError};
pub use worker::NativeWorker;
