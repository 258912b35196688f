use clap::Parser;
use fixture_tv::cli::Args;
use fixture_tv::commands::{apply_arg_overrides, handle_fetch_command, validate_args};
use fixture_tv::config::Config;
use fixture_tv::constants::env_vars;
use serde_json::json;
use serial_test::serial;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config file values survive a save/load cycle
#[tokio::test]
async fn test_config_integration() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let test_config = Config {
        api_base_url: "https://api.test.com/api/v1".to_string(),
        output_dir: "/srv/fixtures".to_string(),
        log_file_path: Some("/test/log/path".to_string()),
        max_events: 10,
        ..Config::default()
    };

    let config_content = toml::to_string_pretty(&test_config).unwrap();
    tokio::fs::write(&config_path, config_content)
        .await
        .unwrap();

    let loaded_config = Config::load_from_path(&config_path.to_string_lossy())
        .await
        .unwrap();

    assert_eq!(loaded_config, test_config);
    assert_eq!(
        loaded_config.http_timeout_seconds,
        fixture_tv::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
    );
}

/// An out-of-range env value is fine when a command line flag replaces it
#[tokio::test]
#[serial]
async fn test_cli_flag_overrides_invalid_env_value() {
    unsafe {
        std::env::set_var(env_vars::MAX_EVENTS, "0");
    }
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::load_with_env(&config_path.to_string_lossy())
        .await
        .unwrap();
    unsafe {
        std::env::remove_var(env_vars::MAX_EVENTS);
    }
    assert_eq!(config.max_events, 0);

    let args = Args::try_parse_from(["fixture_tv", "--max-events", "5"]).unwrap();
    validate_args(&args).unwrap();
    apply_arg_overrides(&mut config, &args);

    assert_eq!(config.max_events, 5);
    assert!(config.validate().is_ok());
}

/// Command line flags drive a full run: explicit date, cap and output dir
#[tokio::test]
async fn test_fetch_command_with_cli_overrides() {
    let mock_server = MockServer::start().await;
    let output = tempdir().unwrap();
    let output_dir = output.path().join("out");

    Mock::given(method("GET"))
        .and(path("/sport/football/scheduled-events/2025-03-09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{"id": 1}, {"id": 2}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/event/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "event": {
                "id": 1,
                "startTimestamp": 1741530600,
                "homeTeam": {"name": "Liverpool"},
                "awayTeam": {"name": "Southampton"},
                "tournament": {"name": "Premier League"}
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tv/event/1/country-channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/event/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let args = Args::try_parse_from([
        "fixture_tv",
        "--date",
        "2025-03-09",
        "--max-events",
        "1",
        "--delay-ms",
        "0",
        "--output-dir",
        &output_dir.to_string_lossy(),
    ])
    .unwrap();
    validate_args(&args).unwrap();

    let mut config = Config {
        api_base_url: mock_server.uri(),
        ..Config::default()
    };
    apply_arg_overrides(&mut config, &args);
    config.validate().unwrap();

    handle_fetch_command(&args, &config).await.unwrap();

    let content = std::fs::read_to_string(output_dir.join("20250309.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        records,
        json!([{
            "match_id": 1,
            "kickoff": 1741530600,
            "fixture": "Liverpool vs Southampton",
            "league": "Premier League",
            "tv_channels": []
        }])
    );

    mock_server.verify().await;
}
