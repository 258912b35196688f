//! Persists a run's match records as one dated JSON file

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::data_fetcher::api::output_file_name;
use crate::data_fetcher::models::MatchRecord;
use crate::error::AppError;

/// Pretty-prints records as a JSON array with four-space indentation.
pub fn render_records(records: &[MatchRecord]) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes `records` to `<output_dir>/<YYYYMMDD>.json`, replacing any previous
/// file for the same date. Missing directories are created.
pub async fn write_match_records(
    output_dir: &Path,
    date: &str,
    records: &[MatchRecord],
) -> Result<PathBuf, AppError> {
    let path = output_dir.join(output_file_name(date));
    let display_path = path.display().to_string();

    fs::create_dir_all(output_dir)
        .await
        .map_err(|e| AppError::output_write(output_dir.display().to_string(), e.to_string()))?;

    let content = render_records(records)?;
    fs::write(&path, content)
        .await
        .map_err(|e| AppError::output_write(&display_path, e.to_string()))?;

    info!("Wrote {} records to {display_path}", records.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::CountryBroadcast;
    use tempfile::tempdir;

    fn sample_record() -> MatchRecord {
        MatchRecord {
            match_id: 1,
            kickoff: 1000,
            fixture: "A vs B".to_string(),
            league: "L".to_string(),
            tv_channels: vec![CountryBroadcast {
                country: "US".to_string(),
                channels: vec!["ESPN".to_string()],
            }],
        }
    }

    #[test]
    fn test_render_empty_array() {
        assert_eq!(render_records(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_render_uses_four_space_indent() {
        let rendered = String::from_utf8(render_records(&[sample_record()]).unwrap()).unwrap();
        assert!(rendered.starts_with("[\n    {\n        \"match_id\": 1,"));
    }

    #[tokio::test]
    async fn test_write_creates_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("public").join("date");

        let path = write_match_records(&output_dir, "2024-01-16", &[sample_record()])
            .await
            .unwrap();

        assert_eq!(path, output_dir.join("20240116.json"));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: Vec<MatchRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec![sample_record()]);
    }

    #[tokio::test]
    async fn test_write_replaces_previous_file() {
        let temp_dir = tempdir().unwrap();

        write_match_records(temp_dir.path(), "2024-01-16", &[sample_record()])
            .await
            .unwrap();
        let path = write_match_records(temp_dir.path(), "2024-01-16", &[])
            .await
            .unwrap();

        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("date");
        tokio::fs::write(&blocker, "not a directory").await.unwrap();

        let result = write_match_records(&blocker, "2024-01-16", &[]).await;
        assert!(matches!(result, Err(AppError::OutputWrite { .. })));
    }
}
