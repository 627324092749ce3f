//! Background worker that runs report requests on a separate thread.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use goldenmile_core::ReportTransport;

use super::http::HttpClient;
use crate::platform::worker::{ReportWorker, WorkerRequest, WorkerResponse};

pub struct NativeWorker {
    request_tx: Sender<WorkerRequest>,
    response_rx: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl NativeWorker {
    /// Start the worker thread. Downloads are saved into `reports_dir`.
    pub fn new(client: HttpClient, reports_dir: PathBuf) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let ctx = WorkerContext {
            client,
            reports_dir,
            response_tx,
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }
}

impl ReportWorker for NativeWorker {
    fn send(&self, request: WorkerRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    fn try_recv(&self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    fn shutdown(&self) {
        let _ = self.request_tx.send(WorkerRequest::Shutdown);
    }
}

impl Drop for NativeWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

struct WorkerContext {
    client: HttpClient,
    reports_dir: PathBuf,
    response_tx: Sender<WorkerResponse>,
}

impl WorkerContext {
    fn run(&self, request_rx: Receiver<WorkerRequest>) {
        while let Ok(request) = request_rx.recv() {
            let response = match request {
                WorkerRequest::Shutdown => break,

                WorkerRequest::Generate {
                    ticket,
                    path,
                    request,
                } => {
                    tracing::info!(ticket = ticket.value(), path = %path, "Sending report request");
                    let outcome = self.client.generate(&path, &request);
                    WorkerResponse::Generated { ticket, outcome }
                }

                WorkerRequest::Download { path } => {
                    match self.client.download_to(&path, &self.reports_dir) {
                        Ok(saved) => WorkerResponse::Downloaded {
                            location: saved.display().to_string(),
                        },
                        Err(e) => {
                            tracing::warn!(error = %e, "Report download failed");
                            WorkerResponse::DownloadFailed(e.to_string())
                        }
                    }
                }
            };

            if self.response_tx.send(response).is_err() {
                break;
            }
        }
        tracing::debug!("Report worker stopped");
    }
}
