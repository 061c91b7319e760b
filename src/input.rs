use crate::error::InputError;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads the raw envelope from `path`, or from stdin when no path is given.
pub async fn read_envelope(path: Option<&Path>) -> Result<Vec<u8>, InputError> {
    match path {
        Some(path) => {
            let raw = tokio::fs::read(path).await.map_err(|source| InputError::File {
                path: path.display().to_string(),
                source,
            })?;
            reject_empty(raw)
        }
        None => read_from(tokio::io::stdin()).await,
    }
}

/// Drains `reader` and rejects whitespace-only input.
pub async fn read_from<R>(mut reader: R) -> Result<Vec<u8>, InputError>
where
    R: AsyncRead + Unpin,
{
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .await
        .map_err(InputError::Stdin)?;
    reject_empty(raw)
}

fn reject_empty(raw: Vec<u8>) -> Result<Vec<u8>, InputError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(InputError::Empty);
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_envelope_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("envelope.json");
        std::fs::write(&path, r#"{"body": "{}", "httpMethod": "POST"}"#).unwrap();

        let raw = read_envelope(Some(&path)).await.unwrap();
        assert_eq!(raw, br#"{"body": "{}", "httpMethod": "POST"}"#);
    }

    #[tokio::test]
    async fn whitespace_only_file_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blank.json");
        std::fs::write(&path, " \n\t\n").unwrap();

        let err = read_envelope(Some(&path)).await.unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.json");

        let err = read_envelope(Some(&path)).await.unwrap_err();
        assert!(matches!(err, InputError::File { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[tokio::test]
    async fn empty_reader_rejected() {
        let err = read_from(&b""[..]).await.unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }

    #[tokio::test]
    async fn whitespace_reader_rejected() {
        let err = read_from(&b"  \r\n "[..]).await.unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }

    #[tokio::test]
    async fn reader_content_returned_verbatim() {
        let raw = read_from(&b"  {\"body\": \"{}\"}\n"[..]).await.unwrap();
        assert_eq!(raw, b"  {\"body\": \"{}\"}\n");
    }
}
