use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use civicedge_types::errors::{ApplicationError, QueueError};

/// Read a JSON state file, treating a missing file as the default state.
/// A file that exists but does not parse is surfaced as corruption rather
/// than silently replaced.
pub(crate) async fn read_json<T>(path: &Path) -> Result<T, ApplicationError>
where
    T: DeserializeOwned + Default,
{
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(QueueError::Io(e).into()),
    };

    serde_json::from_slice(&bytes)
        .map_err(|e| QueueError::Corrupt(format!("{}: {e}", path.display())).into())
}

/// Rewrite the whole state file atomically: write a sibling temp file,
/// then rename over the target so a crash never leaves a half-written
/// file behind.
pub(crate) async fn write_json_atomic<T>(path: &Path, value: &T) -> Result<(), ApplicationError>
where
    T: Serialize,
{
    let bytes = serde_json::to_vec_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    tokio::fs::write(&tmp, &bytes)
        .await
        .map_err(QueueError::Io)?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(QueueError::Io)?;

    Ok(())
}
