use std::net::TcpListener;
use std::process::{Command, Output};

use serde_json::Value;

const TRACK: &str = "https://open.spotify.com/track/4Km5HrUvYTaSUfiSGPJeQR";

// Points the lookup at a closed local port and hides any user config, so no
// test ever reaches lucida.
fn run(args: &[&str]) -> Output {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let home = std::env::temp_dir().join(format!("spotidal-cli-home-{}", std::process::id()));
    Command::new(env!("CARGO_BIN_EXE_spotidal"))
        .args(args)
        .env("HOME", &home)
        .env("SPOTIDAL_LOOKUP_URL", format!("http://127.0.0.1:{port}/"))
        .env("SPOTIDAL_TIMEOUT_SECS", "2")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run spotidal")
}

fn result_line(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one JSON line, got {stdout:?}");
    serde_json::from_str(lines[0]).unwrap()
}

#[test]
fn no_arguments_is_missing_url() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        result_line(&output),
        serde_json::json!({
            "spotify_url": null,
            "tidal_url": null,
            "status": "fail",
            "message": "Missing Spotify URL",
        })
    );
}

#[test]
fn two_arguments_is_missing_url() {
    let output = run(&[TRACK, TRACK]);
    assert_eq!(output.status.code(), Some(1));
    let result = result_line(&output);
    assert_eq!(result["message"], "Missing Spotify URL");
    assert_eq!(result["spotify_url"], Value::Null);
}

#[test]
fn invalid_url_fails_without_lookup() {
    let output = run(&["https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"]);
    assert_eq!(output.status.code(), Some(1));
    let result = result_line(&output);
    assert_eq!(result["status"], "fail");
    assert_eq!(result["message"], "Invalid Spotify track URL");
    assert_eq!(
        result["spotify_url"],
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"
    );
    assert_eq!(result["tidal_url"], Value::Null);
}

#[test]
fn unreachable_service_exits_with_error_code() {
    let output = run(&[TRACK]);
    assert_eq!(output.status.code(), Some(2));
    let result = result_line(&output);
    assert_eq!(result["status"], "error");
    assert_eq!(result["message"], "Service unavailable");
    assert_eq!(result["spotify_url"], TRACK);
}

#[test]
fn flag_before_url_counts_as_second_argument() {
    // A lookup would hit the closed port and exit with 2.
    let output = run(&["-v", TRACK]);
    assert_eq!(output.status.code(), Some(1));
    let result = result_line(&output);
    assert_eq!(result["status"], "fail");
    assert_eq!(result["message"], "Missing Spotify URL");
    assert_eq!(result["spotify_url"], Value::Null);
}

#[test]
fn flag_shaped_single_argument_is_validated() {
    for arg in ["--help", "-h", "-V", "--version", "-v", "-x"] {
        let output = run(&[arg]);
        assert_eq!(output.status.code(), Some(1), "{arg}");
        let result = result_line(&output);
        assert_eq!(result["status"], "fail", "{arg}");
        assert_eq!(result["message"], "Invalid Spotify track URL", "{arg}");
        assert_eq!(result["spotify_url"], arg, "{arg}");
    }
}
