//! One-shot command-line mode: fill the form from arguments, print the
//! analysis and optionally save the PDF.
//!
//! Uses the same controller as the TUI. stdout carries only the analysis;
//! progress goes to stderr and the log file.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail, eyre};
use goldenmile_core::{
    Alerter, DownloadControl, FormController, FormInputs, MetroFlag, Navigator, OutputSink,
    StatusSink, SubmitOutcome,
};

use crate::data::config_data::AppConfig;
use crate::platform::{HttpClient, TransportError};

/// Form values given on the command line.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub city: String,
    pub budget: String,
    pub size: String,
    pub intent: String,
    pub metro: Option<MetroFlag>,
    /// `Some(None)`: download into the reports directory.
    /// `Some(Some(path))`: download to `path` (a file or a directory).
    pub download: Option<Option<PathBuf>>,
}

/// View over the command-line values.
#[derive(Debug, Default)]
struct ConsoleView {
    budget: String,
    size: String,
    intent: String,
    output: String,
    download_enabled: bool,
}

impl FormInputs for ConsoleView {
    fn budget(&self) -> &str {
        &self.budget
    }

    fn size(&self) -> &str {
        &self.size
    }

    fn intent(&self) -> &str {
        &self.intent
    }
}

impl StatusSink for ConsoleView {
    fn set_status(&mut self, status: &str) {
        if !status.is_empty() {
            eprintln!("{}", status);
        }
    }
}

impl OutputSink for ConsoleView {
    fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
    }
}

impl DownloadControl for ConsoleView {
    fn set_download_enabled(&mut self, enabled: bool) {
        self.download_enabled = enabled;
    }
}

impl Alerter for ConsoleView {
    fn alert(&mut self, message: &str) {
        tracing::warn!(message, "Form rejected");
    }

    fn show_error(&mut self, message: &str) {
        tracing::error!(message, "Report request failed");
    }
}

/// Navigation on the command line means fetching the document.
struct SaveNavigator<'a> {
    client: &'a HttpClient,
    target: &'a Path,
    result: Option<Result<PathBuf, TransportError>>,
}

impl Navigator for SaveNavigator<'_> {
    fn navigate(&mut self, path: &str) {
        self.result = Some(self.client.download_to(path, self.target));
    }
}

fn save_report(controller: &FormController, client: &HttpClient, target: &Path) -> Result<PathBuf> {
    let mut navigator = SaveNavigator {
        client,
        target,
        result: None,
    };
    controller.download_report(&mut navigator);

    match navigator.result {
        Some(Ok(path)) => Ok(path),
        Some(Err(e)) => Err(eyre!("Download failed: {}", e)),
        None => Err(eyre!("Download failed: no download endpoint configured")),
    }
}

pub fn run_generate(
    config: &AppConfig,
    client: &HttpClient,
    args: GenerateArgs,
    reports_dir: &Path,
) -> Result<()> {
    let mut controller = FormController::new(config.form_config());

    if controller.select_city_named(&args.city).is_none() {
        bail!(
            "Unknown city '{}'. Choose one of: {}",
            args.city,
            config.cities.join(", ")
        );
    }
    if let Some(flag) = args.metro
        && !controller.set_metro(flag)
    {
        eprintln!("Warning: the metro toggle is disabled in config.yaml; ignoring --metro");
    }

    let mut view = ConsoleView {
        budget: args.budget,
        size: args.size,
        intent: args.intent,
        ..ConsoleView::default()
    };

    let outcome = controller.generate_report(&mut view, client)?;
    if let SubmitOutcome::Failure(reason) = outcome {
        bail!("Report generation failed: {}", reason);
    }
    println!("{}", view.output);

    if let Some(target) = args.download {
        let target = target.unwrap_or_else(|| reports_dir.to_path_buf());
        let saved = save_report(&controller, client, &target)?;
        eprintln!("Report saved to {}", saved.display());
    }
    Ok(())
}

pub fn run_download(
    config: &AppConfig,
    client: &HttpClient,
    output: Option<PathBuf>,
    reports_dir: &Path,
) -> Result<()> {
    let controller = FormController::new(config.form_config());
    let target = output.unwrap_or_else(|| reports_dir.to_path_buf());
    let saved = save_report(&controller, client, &target)?;
    eprintln!("Report saved to {}", saved.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_client() -> HttpClient {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        HttpClient::new(&format!("http://127.0.0.1:{port}"), Some(Duration::from_secs(5))).unwrap()
    }

    fn args(city: &str, budget: &str) -> GenerateArgs {
        GenerateArgs {
            city: city.into(),
            budget: budget.into(),
            size: "1200".into(),
            intent: "rent".into(),
            metro: None,
            download: None,
        }
    }

    #[test]
    fn test_unknown_city_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_generate(
            &AppConfig::default(),
            &unreachable_client(),
            args("Austin", "1.5"),
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown city 'Austin'"));
    }

    #[test]
    fn test_validation_error_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_generate(
            &AppConfig::default(),
            &unreachable_client(),
            args("pune", "  "),
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Please fill all fields and select a city"));
    }

    #[test]
    fn test_network_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_generate(
            &AppConfig::default(),
            &unreachable_client(),
            args("Pune", "1.5"),
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Report generation failed"));
    }

    #[test]
    fn test_download_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_download(
            &AppConfig::default(),
            &unreachable_client(),
            None,
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Download failed"));
    }
}
