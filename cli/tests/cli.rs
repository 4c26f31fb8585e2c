use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn pseubench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pseubench"))
        .args(args)
        .env_remove("PSEUBENCH_LOG")
        .output()
        .expect("run pseubench")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn git(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args([
            "-c",
            "user.name=pseubench",
            "-c",
            "user.email=pseubench@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .expect("git is installed");
    assert!(output.status.success(), "git {args:?} failed: {output:?}");
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn generates_valid_json() {
    for seed in 0..20 {
        let output = pseubench(&[".", "--seed", &seed.to_string(), "--max-sizes", "4"]);
        assert!(output.status.success());
        assert!(output.stderr.is_empty());
        let text = stdout(&output);
        assert!(text.ends_with('\n'));
        let value: Value = serde_json::from_str(text.trim_end()).expect("valid JSON");
        let object = value.as_object().unwrap();
        if object.contains_key("error") {
            assert_eq!(object.len(), 1);
        } else {
            assert!((1..=4).contains(&object.len()));
        }
    }
}

#[test]
fn same_seed_same_document() {
    let first = pseubench(&[".", "--seed", "1234"]);
    let second = pseubench(&[".", "--seed", "1234"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn rejects_zero_max_sizes() {
    let output = pseubench(&[".", "--max-sizes", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn custom_dictionary_names_everything() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.dict");
    fs::write(&words, "teapot\n").unwrap();
    let output = pseubench(&[".", "--seed", "5", "--dictionary", words.to_str().unwrap()]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    match value.get("error") {
        Some(error) => assert!(error.as_str().unwrap().split(' ').all(|w| w == "teapot")),
        None => assert!(value.as_object().unwrap().keys().all(|k| k == "teapot")),
    }
}

#[test]
fn default_dictionary_is_embedded() {
    let words: Vec<&str> = include_str!("../../generate/resources/british.dict")
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();
    for seed in 0..10 {
        let output = pseubench(&[".", "--seed", &seed.to_string()]);
        assert!(output.status.success());
        let value: Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
        let object = value.as_object().unwrap();
        if object.contains_key("error") {
            continue;
        }
        for (benchmark, properties) in object {
            assert!(words.contains(&benchmark.as_str()), "{benchmark}");
            for property in properties.as_object().unwrap().keys() {
                assert!(words.contains(&property.as_str()), "{property}");
            }
        }
    }
}

#[test]
fn missing_dictionary_fails() {
    let output = pseubench(&[".", "--dictionary", "/nonexistent/words.dict"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn no_benchmark_and_no_error_fault() {
    let output = pseubench(&[".", "--fault", "no-benchmark-and-no-error"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "{}\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn invalid_syntax_fault() {
    let output = pseubench(&[".", "--fault", "invalid-syntax"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(serde_json::from_str::<Value>(stdout(&output).trim_end()).is_err());
}

#[test]
fn random_exit_codes_are_non_zero() {
    for seed in 0..25 {
        let output = pseubench(&[
            ".",
            "--fault",
            "random-non-zero-exit",
            "--seed",
            &seed.to_string(),
        ]);
        let code = output.status.code().expect("normal exit");
        assert!((1..=254).contains(&code), "exit code {code}");
        assert!(output.stdout.is_empty());
    }
}

#[cfg(unix)]
#[test]
fn abrupt_termination_is_killed_by_signal() {
    use std::os::unix::process::ExitStatusExt;

    let output = pseubench(&[".", "--fault", "abrupt-termination"]);
    assert_eq!(output.status.code(), None);
    assert_eq!(output.status.signal(), Some(11));
    assert!(output.stdout.is_empty());
}

#[test]
fn crash_takes_priority_over_replay() {
    let output = pseubench(&[
        ".",
        "--fault",
        "no-benchmark-and-no-error",
        "--real-data",
        "/nonexistent/data.json",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "{}\n");
}

#[test]
fn random_crash_takes_priority_over_replay() {
    for seed in 0..24 {
        let output = pseubench(&[
            ".",
            "--crash",
            "--real-data",
            "/nonexistent/data.json",
            "--seed",
            &seed.to_string(),
        ]);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.is_empty(), "seed {seed}: {stderr}");
        if output.status.success() {
            assert!(stdout(&output).ends_with('\n'));
        }
    }
}

#[test]
fn replays_recorded_output() {
    let repo = tempfile::tempdir().unwrap();
    git(repo.path(), &["init", "-q"]);
    git(repo.path(), &["commit", "-q", "--allow-empty", "-m", "initial"]);
    let head = git(repo.path(), &["rev-parse", "HEAD"]);

    let data = tempfile::tempdir().unwrap();
    let dataset = data.path().join("data.json");
    fs::write(
        &dataset,
        format!(r#"[{{"commits": {{"{head}": {{"x": 1}}}}, "name": "demo", "url": ""}}]"#),
    )
    .unwrap();

    let output = pseubench(&[
        repo.path().to_str().unwrap(),
        "--real-data",
        dataset.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{\"x\":1}\n");
}

#[test]
fn replay_of_unrecorded_revision_fails() {
    let repo = tempfile::tempdir().unwrap();
    git(repo.path(), &["init", "-q"]);
    git(repo.path(), &["commit", "-q", "--allow-empty", "-m", "initial"]);

    let data = tempfile::tempdir().unwrap();
    let dataset = data.path().join("data.json");
    fs::write(&dataset, r#"[{"commits": {"abc123": {"x": 1}}}]"#).unwrap();

    let output = pseubench(&[
        repo.path().to_str().unwrap(),
        "--real-data",
        dataset.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no recorded output"));
}
