//! Loads character profiles from YAML files.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::character::CharacterProfile;
use crate::domain::foundation::ValidationError;

/// Errors that can occur while loading a character profile
#[derive(Debug, thiserror::Error)]
pub enum CharacterLoadError {
    #[error("Character file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse character file: {0}")]
    ParseFailed(String),

    #[error("Invalid character profile: {0}")]
    Invalid(#[from] ValidationError),
}

/// Reads a YAML character profile and validates it.
pub async fn load_character(path: impl AsRef<Path>) -> Result<CharacterProfile, CharacterLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CharacterLoadError::NotFound(path.to_path_buf()));
    }

    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| CharacterLoadError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_character(&yaml)
}

/// Parses and validates a YAML character profile.
pub fn parse_character(yaml: &str) -> Result<CharacterProfile, CharacterLoadError> {
    let profile: CharacterProfile =
        serde_yaml::from_str(yaml).map_err(|e| CharacterLoadError::ParseFailed(e.to_string()))?;
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::CharacterType;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
name: 佐藤花子
age: 45
company_name: 佐藤化成
company_size: 従業員80名
industry: 樹脂成形
personality:
  decision_style: 数字で判断する
  communication: 丁寧
  expertise: 設備投資に詳しい
  attitude: 中立
environment:
  setting: 応接室
  time_context: 午前中
  physical_state: メモを取りながら聞く
"#;

    #[test]
    fn parses_minimal_profile_with_defaults() {
        let profile = parse_character(MINIMAL).unwrap();
        assert_eq!(profile.name, "佐藤花子");
        assert!(profile.achievements.is_empty());
        assert!(profile.speech_patterns.is_empty());
        assert!(profile.personality.tone.is_none());
    }

    #[test]
    fn rejects_invalid_yaml() {
        let result = parse_character("name: [unterminated");
        assert!(matches!(result, Err(CharacterLoadError::ParseFailed(_))));
    }

    #[test]
    fn rejects_profile_failing_validation() {
        let yaml = MINIMAL.replace("age: 45", "age: 0");
        let result = parse_character(&yaml);
        assert!(matches!(result, Err(CharacterLoadError::Invalid(_))));
    }

    #[tokio::test]
    async fn loads_preset_written_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tanaka.yaml");
        let preset = CharacterType::CautiousCeo.profile();
        std::fs::write(&path, serde_yaml::to_string(&preset).unwrap()).unwrap();

        let loaded = load_character(&path).await.unwrap();

        assert_eq!(loaded, preset);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_character(temp_dir.path().join("nobody.yaml")).await;
        assert!(matches!(result, Err(CharacterLoadError::NotFound(_))));
    }
}
