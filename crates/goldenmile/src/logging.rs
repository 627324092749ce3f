//! Log setup for the native app (rotating file) and the browser (console).

#[cfg(feature = "native")]
pub use native::init_logging;

#[cfg(feature = "native")]
mod native {
    use std::fs::{self, File, OpenOptions};
    use std::io::{Read, Seek, SeekFrom, Write};
    use std::path::Path;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    /// Log file size that triggers a trim (5 MB)
    const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
    /// Tail kept after a trim (1 MB)
    const KEEP_SIZE: u64 = 1024 * 1024;

    const LOG_FILE_NAME: &str = "goldenmile.log";

    /// Cut the log down to its newest `KEEP_SIZE` bytes once it grows past
    /// `MAX_LOG_SIZE`. The cut starts on a line boundary.
    pub(super) fn trim_log(log_path: &Path, max_size: u64, keep: u64) -> std::io::Result<bool> {
        let len = match fs::metadata(log_path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if len <= max_size {
            return Ok(false);
        }

        let mut tail = Vec::new();
        {
            let mut file = File::open(log_path)?;
            file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
            file.read_to_end(&mut tail)?;
        }

        let first_line = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        let mut file = File::create(log_path)?;
        file.write_all(b"--- log trimmed, older entries dropped ---\n")?;
        file.write_all(&tail[first_line..])?;
        Ok(true)
    }

    /// Hands out writers that all append to the one shared log file.
    #[derive(Clone)]
    struct SharedFile(Arc<Mutex<File>>);

    struct SharedFileWriter(Arc<Mutex<File>>);

    impl Write for SharedFileWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush()
        }
    }

    impl<'a> MakeWriter<'a> for SharedFile {
        type Writer = SharedFileWriter;

        fn make_writer(&'a self) -> Self::Writer {
            SharedFileWriter(Arc::clone(&self.0))
        }
    }

    /// Send all tracing output to `{data_dir}/goldenmile.log`.
    ///
    /// Nothing is written to the terminal, which belongs to the TUI (or to
    /// the analysis text in headless mode). `RUST_LOG` takes precedence over
    /// `level`.
    pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
        fs::create_dir_all(data_dir)?;
        let log_path = data_dir.join(LOG_FILE_NAME);

        if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
            eprintln!("Warning: could not trim {}: {e}", log_path.display());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("goldenmile={level},goldenmile_core={level}"))
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(SharedFile(Arc::new(Mutex::new(file))))
                    .with_ansi(false)
                    .with_target(true),
            )
            .init();

        tracing::info!(log_path = %log_path.display(), "Logging initialized");
        Ok(())
    }
}

/// Route tracing output to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
