use std::io::Write;
use std::process::{Command, Output};

use anyhow::Result;

fn norm_config(args: &[&str]) -> Result<Output> {
    norm_config_with_log(args, "info")
}

fn norm_config_with_log(args: &[&str], rust_log: &str) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_norm-config"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()?)
}

#[test]
fn test_resolve_valid_literals() -> Result<()> {
    let output = norm_config(&["resolve", "--layernorm-type", "post_layernorm", "--norm-type", "rmsnorm"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("layernorm_type: post_layernorm"));
    assert!(stdout.contains("norm_type: rmsnorm"));
    Ok(())
}

#[test]
fn test_empty_layernorm_type_is_fatal() -> Result<()> {
    let output = norm_config(&["resolve", "--layernorm-type", ""])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Layernorm Type:  not supported"), "{stderr}");
    Ok(())
}

#[test]
fn test_case_flipped_norm_type_is_fatal() -> Result<()> {
    let output = norm_config(&["resolve", "--norm-type", "ALPHANORM"])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Norm Type: ALPHANORM not supported"), "{stderr}");
    Ok(())
}

#[test]
fn test_fatal_diagnostic_survives_disabled_logging() -> Result<()> {
    let output = norm_config_with_log(&["resolve", "--norm-type", "ALPHANORM"], "off")?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Norm Type: ALPHANORM not supported !"), "{stderr}");
    Ok(())
}

#[test]
fn test_add_bias_is_fatal() -> Result<()> {
    let output = norm_config(&["resolve", "--norm-type", "add_bias"])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Norm Type: add_bias not supported"), "{stderr}");
    Ok(())
}

#[test]
fn test_check_config_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"norm_type": "alphanorm", "layer_norm_eps": 1e-6}}"#)?;
    file.flush()?;

    let path = file.path().to_string_lossy().into_owned();
    let output = norm_config(&["check", &path])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["norm_type"], "alphanorm");
    assert_eq!(value["layernorm_type"], "pre_layernorm");
    Ok(())
}

#[test]
fn test_check_bad_config_file_is_fatal() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"layernorm_type": "sandwich_layernorm"}}"#)?;
    file.flush()?;

    let path = file.path().to_string_lossy().into_owned();
    let output = norm_config(&["check", &path])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Layernorm Type: sandwich_layernorm not supported"), "{stderr}");
    Ok(())
}

#[test]
fn test_resolve_requires_an_argument() -> Result<()> {
    let output = norm_config(&["resolve"])?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("--layernorm-type"), "{stderr}");
    assert!(stderr.contains("--norm-type"), "{stderr}");
    Ok(())
}
