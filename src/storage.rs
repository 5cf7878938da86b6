use crate::models::AppState;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Where the serialized state record lives. One slot, one key.
pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Loads the persisted record, merging it over defaults. A missing file,
/// unreadable file, or unparseable payload all fall back to the default
/// record; startup never fails on bad state.
pub async fn load_state(path: &Path) -> AppState {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(err) => {
                error!("failed to parse state file: {err}");
                AppState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppState::default(),
        Err(err) => {
            error!("failed to read state file: {err}");
            AppState::default()
        }
    }
}

pub async fn persist_state(path: &Path, state: &AppState) -> Result<(), std::io::Error> {
    let payload = serde_json::to_vec_pretty(state).map_err(std::io::Error::other)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "life_hack_os_{tag}_{}_{}.json",
            std::process::id(),
            nanos
        ));
        path
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let state = load_state(&scratch_path("missing")).await;
        assert_eq!(state, AppState::default());
    }

    #[tokio::test]
    async fn garbage_payload_yields_defaults() {
        let path = scratch_path("garbage");
        fs::write(&path, b"{not json").await.unwrap();
        let state = load_state(&path).await;
        assert_eq!(state, AppState::default());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn partial_payload_merges_over_defaults() {
        let path = scratch_path("partial");
        fs::write(&path, br#"{ "health": { "hydration": { "glasses": 7 } } }"#)
            .await
            .unwrap();
        let state = load_state(&path).await;
        assert_eq!(state.health.hydration.glasses, 7);
        assert_eq!(state.user.name, AppState::default().user.name);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_state_round_trips() {
        let path = scratch_path("roundtrip");
        let mut state = AppState::default();
        state.health.hydration.glasses = 11;
        persist_state(&path, &state).await.unwrap();
        let loaded = load_state(&path).await;
        assert_eq!(loaded, state);
        let _ = fs::remove_file(&path).await;
    }
}
