//! Browser worker: report requests run as local futures on the page's event
//! loop and their results are queued for the next frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use goldenmile_core::{
    FailureReason, ReportRequest, SubmitOutcome, decode_generate_response, join_url,
};
use reqwest::header::CONTENT_TYPE;
use wasm_bindgen_futures::spawn_local;

use crate::platform::worker::{ReportWorker, WorkerRequest, WorkerResponse};

pub struct WebWorker {
    /// Page origin, e.g. `http://127.0.0.1:5001`
    origin: String,
    client: reqwest::Client,
    responses: Rc<RefCell<VecDeque<WorkerResponse>>>,
}

impl WebWorker {
    /// Worker talking to the server that served the page.
    pub fn new() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::with_origin(origin)
    }

    pub fn with_origin(origin: String) -> Self {
        Self {
            origin,
            client: reqwest::Client::new(),
            responses: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    fn navigate(&self, path: &str) -> WorkerResponse {
        let url = join_url(&self.origin, path);
        let result = web_sys::window()
            .ok_or_else(|| "no browser window".to_string())
            .and_then(|w| {
                w.location()
                    .set_href(&url)
                    .map_err(|e| format!("{:?}", e))
            });

        match result {
            Ok(()) => {
                tracing::info!(url = %url, "Navigated to report download");
                WorkerResponse::Downloaded { location: url }
            }
            Err(e) => WorkerResponse::DownloadFailed(e),
        }
    }
}

impl Default for WebWorker {
    fn default() -> Self {
        Self::new()
    }
}

async fn post_generate(client: reqwest::Client, url: String, request: ReportRequest) -> SubmitOutcome {
    let body = match request.to_json() {
        Ok(body) => body,
        Err(e) => return SubmitOutcome::Failure(FailureReason::Encode(e.to_string())),
    };

    let response = match client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return SubmitOutcome::Failure(FailureReason::Network(e.to_string())),
    };

    let status = response.status().as_u16();
    match response.text().await {
        Ok(text) => decode_generate_response(status, &text),
        Err(e) => SubmitOutcome::Failure(FailureReason::Network(e.to_string())),
    }
}

impl ReportWorker for WebWorker {
    fn send(&self, request: WorkerRequest) -> bool {
        match request {
            WorkerRequest::Generate {
                ticket,
                path,
                request,
            } => {
                let url = join_url(&self.origin, &path);
                let client = self.client.clone();
                let responses = Rc::clone(&self.responses);
                spawn_local(async move {
                    let outcome = post_generate(client, url, request).await;
                    responses
                        .borrow_mut()
                        .push_back(WorkerResponse::Generated { ticket, outcome });
                });
                true
            }
            WorkerRequest::Download { path } => {
                let response = self.navigate(&path);
                self.responses.borrow_mut().push_back(response);
                true
            }
            WorkerRequest::Shutdown => true,
        }
    }

    fn try_recv(&self) -> Option<WorkerResponse> {
        self.responses.borrow_mut().pop_front()
    }

    fn shutdown(&self) {}
}
