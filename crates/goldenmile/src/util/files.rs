//! Report file naming and writing.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::Zoned;

/// Name used when the server does not suggest one.
pub const DEFAULT_REPORT_NAME: &str = "Golden_Mile_Advisory_Report.pdf";

/// Extract the file name from a `Content-Disposition` header.
///
/// `filename*` (RFC 5987) wins over `filename`. Directory components are
/// stripped so the result is always a bare name.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in header.split(';').map(str::trim) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let value = value.trim();
                let encoded = value.split_once("''").map_or(value, |(_, v)| v);
                extended = Some(percent_decode(encoded));
            }
            "filename" => {
                plain = Some(value.trim().trim_matches('"').to_string());
            }
            _ => {}
        }
    }

    extended.or(plain).and_then(|name| sanitize_filename(&name))
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(b) = decoded {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Keep only the last path component and drop characters that are unsafe in
/// file names.
fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ' | '(' | ')') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim_matches('.') {
        "" => None,
        _ => Some(cleaned),
    }
}

/// A path in `dir` for `name` that does not exist yet.
///
/// Taken names get a local timestamp suffix (`report_20250101-093000.pdf`),
/// then a counter if the stamped name is taken too.
pub fn unique_path(dir: &Path, name: &str, now: &Zoned) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let as_path = Path::new(name);
    let stem = as_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let ext = as_path.extension().and_then(|s| s.to_str());
    let with_suffix = |suffix: &str| match ext {
        Some(ext) => dir.join(format!("{stem}_{suffix}.{ext}")),
        None => dir.join(format!("{stem}_{suffix}")),
    };

    let stamp = now.strftime("%Y%m%d-%H%M%S").to_string();
    let stamped = with_suffix(&stamp);
    if !stamped.exists() {
        return stamped;
    }

    let mut n = 2u32;
    loop {
        let numbered = with_suffix(&format!("{stamp}-{n}"));
        if !numbered.exists() {
            return numbered;
        }
        n += 1;
    }
}

/// Write bytes to a file atomically using write-then-rename pattern.
pub fn atomic_write_bytes(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut temp: OsString = path.as_os_str().to_owned();
    temp.push(".part");
    let temp_path = PathBuf::from(temp);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
