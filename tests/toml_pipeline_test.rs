use conversation_keywords::core::ConfigProvider;
use conversation_keywords::utils::validation::Validate;
use conversation_keywords::{
    ErrorPolicy, ExtractionEngine, KeywordPipeline, LocalStorage, OutputFormat, TomlConfig,
};
use tempfile::TempDir;

fn toml_for(base: &TempDir, extra: &str) -> String {
    format!(
        r#"
[pipeline]
name = "standup"
description = "Daily standup transcripts"

[source]
input = "standup.txt"
base_dir = "{}"

[extraction]
window_size = 3
lambda = 0.1
keywords = 2

[load]
output_path = "standup.keywords"
{}
"#,
        base.path().to_str().unwrap().replace('\\', "/"),
        extra
    )
}

#[tokio::test]
async fn test_toml_configured_run() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("standup.txt"),
        "deploy pipeline broken deploy fix pipeline\nx y z\n",
    )
    .unwrap();

    let config = TomlConfig::from_toml_str(&toml_for(&temp_dir, "")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.keyword_count(), 2);

    let storage = LocalStorage::new(config.base_dir().to_string());
    let engine = ExtractionEngine::new(KeywordPipeline::new(storage, config));
    engine.run().await.unwrap();

    let output = std::fs::read_to_string(temp_dir.path().join("standup.keywords")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split(' ').count(), 2);
    assert_eq!(lines[1], "x y");
}

#[tokio::test]
async fn test_toml_overrides_apply_before_run() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("standup.txt"), "solo\nx y z\n").unwrap();

    let mut config = TomlConfig::from_toml_str(&toml_for(&temp_dir, "format = \"text\"")).unwrap();
    assert_eq!(config.error_policy(), ErrorPolicy::Fail);

    config.set_error_policy(ErrorPolicy::Skip);
    config.set_output_format(OutputFormat::Json);

    let storage = LocalStorage::new(config.base_dir().to_string());
    let engine = ExtractionEngine::new(KeywordPipeline::new(storage, config));
    engine.run().await.unwrap();

    let output = std::fs::read_to_string(temp_dir.path().join("standup.keywords")).unwrap();
    let records: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records[0]["status"], "skipped");
    assert_eq!(records[1]["status"], "complete");
}

#[test]
fn test_invalid_toml_is_rejected() {
    let err = TomlConfig::from_toml_str("[pipeline\nname = 1").unwrap_err();
    assert!(err.to_string().contains("TOML parsing error"));
}
