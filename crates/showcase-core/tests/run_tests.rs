//! Runner Tests
//!
//! End-to-end runs of the fixed-order showcase against captured output.
//!
use pretty_assertions::assert_eq;
use showcase_core::prelude::*;
use showcase_test_utils::{capture_run, expected_default_lines, setup_test_config, temp_path_in};

#[tokio::test]
async fn test_default_run_prints_steps_in_order() {
    let (dir, config) = setup_test_config();

    let (_, lines) = capture_run(config).await.unwrap();

    assert_eq!(lines, expected_default_lines(&temp_path_in(&dir)));
}

#[tokio::test]
async fn test_temp_file_gone_after_run() {
    let (dir, config) = setup_test_config();

    let (summary, _) = capture_run(config).await.unwrap();

    assert!(summary.temp_file_existed);
    assert!(summary.temp_file_removed);
    assert!(!temp_path_in(&dir).exists());
}

#[tokio::test]
async fn test_summary_matches_output() {
    let (_dir, config) = setup_test_config();

    let (summary, lines) = capture_run(config).await.unwrap();

    assert_eq!(summary.factorial, factorial(summary.factorial_input));
    assert_eq!(summary.render_message, lines[6]);
    assert_eq!(
        summary.colors.iter().map(|c| c.color).collect::<Vec<_>>(),
        Color::ALL.to_vec()
    );
    assert_eq!(summary.resource_releases, 1);
}

#[tokio::test]
async fn test_custom_config_changes_output() {
    let (_dir, config) = setup_test_config();
    let config = config
        .with_shape_name("Hexagon")
        .with_countdown_start(5)
        .with_factorial_input(10);

    let (summary, lines) = capture_run(config).await.unwrap();

    assert!(lines.contains(&"Rendering Hexagon of kind 2D".to_string()));
    assert!(lines.contains(&"Factorial of 10 is 3628800".to_string()));
    assert_eq!(summary.countdown, vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn test_empty_shape_name_renders_unknown() {
    let (_dir, config) = setup_test_config();

    let (summary, _) = capture_run(config.with_shape_name("")).await.unwrap();

    assert_eq!(summary.shape, "unknown of kind 2D");
}

#[tokio::test]
async fn test_zero_countdown_prints_nothing() {
    let (_dir, config) = setup_test_config();

    let (summary, lines) = capture_run(config.with_countdown_start(0)).await.unwrap();

    assert!(summary.countdown.is_empty());
    assert!(!lines.iter().any(|l| l.starts_with("Countdown")));
}

#[tokio::test]
async fn test_toml_config_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let temp = dir.path().join("scratch.txt");
    let source = format!(
        "radius = 1.0\nrender_delay_ms = 0\nresource_delay_ms = 0\ntemp_path = {:?}\n\n[numbers]\nthree = 3\n",
        temp.display().to_string()
    );
    let config = ShowcaseConfig::from_toml_str(&source).unwrap();

    let (summary, lines) = capture_run(config).await.unwrap();

    assert_eq!(lines[0], "Area is 3.14159");
    assert_eq!(lines[1], "three => 3");
    assert_eq!(summary.temp_path, temp);
    assert!(!temp.exists());
}

#[tokio::test]
async fn test_invalid_config_produces_no_output() {
    let (_dir, config) = setup_test_config();

    let err = capture_run(config.with_radius(f64::INFINITY)).await.unwrap_err();

    assert!(err.is_config());
}
