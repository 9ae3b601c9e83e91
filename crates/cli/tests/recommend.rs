use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("track-advisor").expect("binary");
    cmd.env_remove("TRACK_ADVISOR_KEYWORDS").arg("--quiet");
    cmd
}

fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn assert_fallback(body: &Value) {
    assert_eq!(body["recommended_track"], "BSIT");
    assert_eq!(body["track_specialization"], "Data Analytics");
    assert_eq!(body["scores"]["BSCS"], 0.0);
    assert_eq!(body["scores"]["BSIT"], 1.0);
    assert_eq!(body["scores"]["BSCPE"], 0.0);
}

#[test]
fn recommends_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("answers.json");
    fs::write(
        &path,
        r#"{
            "Full Name": "Ana Reyes",
            "I enjoy working with numbers and statistics.": "5",
            "I like solving math-related challenges.": "5",
            "I like drawing, sketching, or illustrating.": "3",
            "I enjoy creating and editing videos.": "3"
        }"#,
    )
    .unwrap();

    let body = run_json(cli().arg("recommend").arg(&path));
    assert_eq!(body["recommended_track"], "BSCS");
    assert_eq!(body["track_specialization"], "Data Analytics");
    let bscs = body["scores"]["BSCS"].as_f64().expect("BSCS score");
    assert!((bscs - 6.7).abs() < 1e-9, "BSCS score {bscs}");
    assert!(body.get("analysis").is_none());
}

#[test]
fn recommends_from_stdin() {
    let body = run_json(
        cli()
            .arg("recommend")
            .write_stdin(r#"{"I set up home network routers": "5", "I like fixing hardware": "4"}"#),
    );
    assert_eq!(body["recommended_track"], "BSCPE");
    assert_eq!(body["track_specialization"], "Networking");
    assert_eq!(body["scores"]["BSCPE"], 4.5);
}

#[test]
fn empty_object_uses_general_rule() {
    let body = run_json(cli().args(["recommend", "--json", "{}"]));
    assert_eq!(body["recommended_track"], "BSIT");
    assert_eq!(body["scores"]["BSIT"], 3.0);
    assert_eq!(body["track_specialization"], "Data Analytics");
}

#[test]
fn missing_file_prints_fallback() {
    let temp = tempdir().unwrap();
    let body = run_json(
        cli()
            .arg("recommend")
            .arg(temp.path().join("does-not-exist.json")),
    );
    assert_fallback(&body);
}

#[test]
fn malformed_json_prints_fallback() {
    let body = run_json(cli().args(["recommend", "--json", "{not json"]));
    assert_fallback(&body);
}

#[test]
fn non_object_json_prints_fallback() {
    let body = run_json(cli().args(["recommend", "--json", "[1, 2, 3]"]));
    assert_fallback(&body);
}

#[test]
fn explain_adds_analysis() {
    let body = run_json(cli().args([
        "recommend",
        "--explain",
        "--json",
        r#"{"I enjoy data visual design": "4"}"#,
    ]));
    let categories = &body["analysis"]["categories"];
    assert_eq!(categories["creative"]["count"], 1);
    assert_eq!(categories["analytical"]["count"], 1);
    assert_eq!(categories["networking"]["count"], 0);
    assert_eq!(body["analysis"]["branch"], "general");
    assert_eq!(body["recommended_track"], "BSIT");
}

#[test]
fn keyword_table_override_from_flag_and_env() {
    let temp = tempdir().unwrap();
    let table = temp.path().join("keywords.toml");
    fs::write(&table, "networking = [\"wifi\"]\n").unwrap();
    let answers = r#"{"I fix the wifi at home": "5"}"#;

    let body = run_json(
        cli()
            .arg("--keywords")
            .arg(&table)
            .args(["recommend", "--json", answers]),
    );
    assert_eq!(body["recommended_track"], "BSCPE");

    let body = run_json(
        cli()
            .env("TRACK_ADVISOR_KEYWORDS", &table)
            .args(["recommend", "--json", answers]),
    );
    assert_eq!(body["recommended_track"], "BSCPE");
}

#[test]
fn invalid_keyword_table_is_an_error() {
    let temp = tempdir().unwrap();
    let table = temp.path().join("keywords.toml");
    fs::write(&table, "creative = []\n").unwrap();

    cli()
        .arg("--keywords")
        .arg(&table)
        .args(["recommend", "--json", "{}"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Keyword set `creative` is empty"));
}

#[test]
fn keywords_command_lists_table() {
    let body = run_json(cli().arg("keywords"));
    let networking: Vec<&str> = body["networking"]
        .as_array()
        .expect("networking keywords")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(networking.contains(&"routers"));
    assert_eq!(body["creative"].as_array().map(Vec::len), Some(9));
}
