//! Best-effort text recovery from an uploaded PDF.
//!
//! Real extraction via `pdf-extract` first; if that errors or yields nothing,
//! printable ASCII runs are scraped straight out of the bytes. The result is
//! only ever fed to the parse prompt, so noise is acceptable.

use std::fmt::Display;
use std::sync::Arc;

use tokio::task::JoinError;
use tracing::{debug, warn};

/// Upper bound on characters forwarded to the model.
pub const MAX_UPLOAD_TEXT_CHARS: usize = 5000;

/// Shortest byte run kept by the raw scan.
const MIN_PRINTABLE_RUN: usize = 4;

pub async fn extract_upload_text(bytes: Vec<u8>) -> String {
    let bytes: Arc<[u8]> = bytes.into();

    // CPU-bound parse: spawn_blocking keeps it off the async executor and turns
    // a panic inside pdf-extract into a JoinError.
    let worker_bytes = Arc::clone(&bytes);
    let extracted =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&worker_bytes))
            .await;

    recover_text(extracted, &bytes)
}

fn recover_text<E: Display>(extracted: Result<Result<String, E>, JoinError>, bytes: &[u8]) -> String {
    let text = match extracted {
        Ok(Ok(text)) if !text.trim().is_empty() => {
            debug!("pdf-extract recovered {} chars", text.len());
            text
        }
        Ok(Ok(_)) => {
            debug!("pdf-extract returned no text; scanning raw bytes");
            scan_printable_runs(bytes)
        }
        Ok(Err(e)) => {
            warn!("pdf-extract failed ({e}); scanning raw bytes");
            scan_printable_runs(bytes)
        }
        Err(e) => {
            warn!("pdf-extract worker aborted ({e}); scanning raw bytes");
            scan_printable_runs(bytes)
        }
    };
    truncate_chars(&text, MAX_UPLOAD_TEXT_CHARS)
}

/// Runs of printable ASCII (space through `~`) at least `MIN_PRINTABLE_RUN`
/// long, joined by single spaces.
pub fn scan_printable_runs(bytes: &[u8]) -> String {
    bytes
        .split(|b| !(0x20..=0x7e).contains(b))
        .filter(|run| run.len() >= MIN_PRINTABLE_RUN)
        .map(|run| String::from_utf8_lossy(run))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_keeps_long_printable_runs() {
        let bytes = b"\x00\x01Jane Roe\xff\xfeok\x00Rust Engineer\n";
        assert_eq!(scan_printable_runs(bytes), "Jane Roe Rust Engineer");
    }

    #[test]
    fn test_scan_of_binary_noise_is_empty() {
        assert_eq!(scan_printable_runs(&[0u8, 1, 2, 200, 250, b'a', b'b']), "");
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_fall_back_to_scan() {
        let text = extract_upload_text(b"plain text resume body\x00\x00".to_vec()).await;
        assert_eq!(text, "plain text resume body");
    }

    #[tokio::test]
    async fn test_output_is_truncated() {
        let bytes = vec![b'a'; MAX_UPLOAD_TEXT_CHARS * 2];
        assert_eq!(extract_upload_text(bytes).await.len(), MAX_UPLOAD_TEXT_CHARS);
    }

    #[tokio::test]
    async fn test_panicking_extractor_falls_back_to_scan() {
        let extracted = tokio::task::spawn_blocking(|| -> Result<String, String> {
            panic!("extractor blew up")
        })
        .await;
        assert!(extracted.is_err());

        let text = recover_text(extracted, b"\x00Jane Roe\x01Baker\xff");
        assert_eq!(text, "Jane Roe Baker");
    }

    #[test]
    fn test_whitespace_only_extraction_falls_back_to_scan() {
        let text = recover_text::<String>(Ok(Ok("  \n ".to_string())), b"Rust Engineer\x00");
        assert_eq!(text, "Rust Engineer");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 10), "hi");
    }
}
