//! Background request abstraction.
//!
//! The UI never waits on the network. Requests go to a [`ReportWorker`] and
//! the app drains its responses once per frame: a `std::thread` on native,
//! browser futures on the web.

use goldenmile_core::{Navigator, ReportRequest, SubmitOutcome, Ticket};

/// Request sent to the background worker
#[derive(Debug)]
pub enum WorkerRequest {
    /// POST a report request to `path`
    Generate {
        ticket: Ticket,
        path: String,
        request: ReportRequest,
    },
    /// Fetch (native) or navigate to (web) the report at `path`
    Download { path: String },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum WorkerResponse {
    Generated {
        ticket: Ticket,
        outcome: SubmitOutcome,
    },
    /// The report was saved; `location` is where
    Downloaded { location: String },
    DownloadFailed(String),
}

pub trait ReportWorker {
    /// Returns true if the request was queued
    fn send(&self, request: WorkerRequest) -> bool;

    /// Try to receive a response (non-blocking)
    fn try_recv(&self) -> Option<WorkerResponse>;

    fn shutdown(&self);
}

/// Navigation port that hands the download to a worker.
pub struct WorkerNavigator<'a, W: ReportWorker + ?Sized> {
    worker: &'a W,
    /// Whether the worker accepted the request
    pub sent: bool,
}

impl<'a, W: ReportWorker + ?Sized> WorkerNavigator<'a, W> {
    pub fn new(worker: &'a W) -> Self {
        Self {
            worker,
            sent: false,
        }
    }
}

impl<W: ReportWorker + ?Sized> Navigator for WorkerNavigator<'_, W> {
    fn navigate(&mut self, path: &str) {
        self.sent = self.worker.send(WorkerRequest::Download {
            path: path.to_string(),
        });
    }
}
