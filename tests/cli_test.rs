use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn mpace(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mpace").unwrap();
    // Isolate config, prefs, and share token under a throwaway home
    cmd.env("HOME", home.path());
    cmd.env_remove("LANG");
    cmd
}

#[test]
fn test_chart_defaults_to_four_hours() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Time: 4:00:00"))
        .stdout(predicate::str::contains("Pace per km: 5:41"))
        .stdout(predicate::str::contains("Finish"));
}

#[test]
fn test_configured_default_minutes_is_used() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".marathon-pace");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[chart]\ndefault_minutes = 200\n",
    )
    .unwrap();

    // Nothing persisted, no override: the configured default applies
    mpace(&home)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Time: 3:20:00"));
}

#[test]
fn test_set_persists_target_across_invocations() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("set")
        .arg("3:30:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target time set to 3:30:00"))
        .stdout(predicate::str::contains("target_time=3-30-00"));

    mpace(&home)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Time: 3:30:00"))
        .stdout(predicate::str::contains("1:45:00"));
}

#[test]
fn test_time_override_wins_but_is_not_saved() {
    let home = TempDir::new().unwrap();

    mpace(&home).arg("set").arg("4:00:00").assert().success();

    mpace(&home)
        .arg("chart")
        .arg("--time")
        .arg("2-30-00")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Time: 2:30:00"));

    // The override was read-only; the saved target is untouched
    mpace(&home)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Time: 4:00:00"));
}

#[test]
fn test_malformed_override_falls_back_to_default() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("chart")
        .arg("--time")
        .arg("banana")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Time: 4:00:00"));
}

#[test]
fn test_chart_json_contract() {
    let home = TempDir::new().unwrap();

    let assert = mpace(&home)
        .arg("chart")
        .arg("--time")
        .arg("3-30-00")
        .arg("--format")
        .arg("json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let out: Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(out["minutes"], 210.0);
    assert_eq!(out["target_time"], "3:30:00");
    assert_eq!(out["unit"], "km");

    let splits = out["splits"].as_array().unwrap();
    assert_eq!(splits.len(), 10);
    assert_eq!(splits.last().unwrap()["is_finish"], true);
    assert_eq!(splits.last().unwrap()["time"], "3:30:00");
    assert_eq!(splits.iter().filter(|s| s["is_half"] == true).count(), 1);
}

#[test]
fn test_unit_preference_is_sticky() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("chart")
        .arg("--unit")
        .arg("mi")
        .assert()
        .success()
        .stdout(predicate::str::contains("26.2 mi"))
        .stdout(predicate::str::contains("Pace per mile"));

    // Next run without the flag keeps miles
    mpace(&home)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("26.2 mi"));
}

#[test]
fn test_lang_flag_localizes_chart() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("chart")
        .arg("--lang")
        .arg("ja")
        .assert()
        .success()
        .stdout(predicate::str::contains("マラソンペース表"))
        .stdout(predicate::str::contains("ゴール"));
}

#[test]
fn test_set_clamps_to_configured_range() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("set")
        .arg("--minutes")
        .arg("1000")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target time set to 7:00:00"))
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn test_set_preset() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("set")
        .arg("--preset")
        .arg("2:50")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target time set to 2:50:00"));

    mpace(&home)
        .arg("set")
        .arg("--preset")
        .arg("9:99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn test_share_reflects_current_target() {
    let home = TempDir::new().unwrap();

    mpace(&home).arg("set").arg("2-50-00").assert().success();

    let assert = mpace(&home)
        .arg("share")
        .arg("--format")
        .arg("json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let out: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(out["token"], "2-50-00");
    assert_eq!(out["minutes"], 170.0);
    assert!(
        out["url"]
            .as_str()
            .unwrap()
            .ends_with("?target_time=2-50-00")
    );
}

#[test]
fn test_presets_table() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("3:30"))
        .stdout(predicate::str::contains("5:41"));
}

#[test]
fn test_config_list_and_get() {
    let home = TempDir::new().unwrap();

    mpace(&home)
        .arg("config")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_minutes"));

    mpace(&home)
        .arg("config")
        .arg("get")
        .arg("chart.max_minutes")
        .assert()
        .success()
        .stdout(predicate::str::contains("420"));
}
