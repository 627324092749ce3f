//! Ports the form controller talks to.
//!
//! Front-ends implement these on whatever holds their UI state. The
//! controller never looks anything up by itself; every input and every
//! visible side effect passes through one of these traits.

/// The three free-text inputs of the form.
pub trait FormInputs {
    fn budget(&self) -> &str;
    fn size(&self) -> &str;
    fn intent(&self) -> &str;
}

/// Short progress text shown next to the form.
pub trait StatusSink {
    fn set_status(&mut self, status: &str);
}

/// Area where the analysis text is displayed verbatim.
pub trait OutputSink {
    fn set_output(&mut self, text: &str);
}

/// Enables or disables the download control.
pub trait DownloadControl {
    fn set_download_enabled(&mut self, enabled: bool);
}

/// User-visible messages that interrupt the flow.
pub trait Alerter {
    /// Blocking notice, e.g. a validation failure.
    fn alert(&mut self, message: &str);

    /// Persistent error after a failed request.
    fn show_error(&mut self, message: &str);
}

/// Sends the user to another location (a page navigation in a browser).
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Everything the submit operation needs from a front-end.
pub trait FormView: FormInputs + StatusSink + OutputSink + DownloadControl + Alerter {}

impl<T> FormView for T where
    T: FormInputs + StatusSink + OutputSink + DownloadControl + Alerter + ?Sized
{
}
