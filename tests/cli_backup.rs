mod common;

use common::*;

fn backup_artifacts(env: &TestEnv, dir: &str, original: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(env.programs_path(dir))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with(&format!("{original}.bak.")))
        .collect();
    names.sort();
    names
}

#[test]
fn backup_preserves_existing_file_before_overwrite() {
    let env = TestEnv::new();
    env.write_source("prometheus/prometheus-config.yaml", "new\n");
    env.add_install_dir("prometheus-3.6.0");
    env.write_file("Programs/prometheus-3.6.0/prometheus-config.yaml", "old\n");

    let result = env.run(&["deploy", "--backup"]);

    assert!(result.success, "{}", result.combined_output());
    let artifacts = backup_artifacts(&env, "prometheus-3.6.0", "prometheus-config.yaml");
    assert_eq!(artifacts.len(), 1);
    let backup = env.programs_path(&format!("prometheus-3.6.0/{}", artifacts[0]));
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "old\n");
    assert_eq!(
        std::fs::read_to_string(env.programs_path("prometheus-3.6.0/prometheus-config.yaml"))
            .unwrap(),
        "new\n"
    );
}

#[test]
fn backup_suffix_is_fixed_width_utc_timestamp() {
    let env = TestEnv::new();
    env.write_source("prometheus/prometheus-config.yaml", "new\n");
    env.add_install_dir("prometheus-3.6.0");
    env.write_file("Programs/prometheus-3.6.0/prometheus-config.yaml", "old\n");

    assert!(env.run(&["deploy", "--backup"]).success);

    let artifacts = backup_artifacts(&env, "prometheus-3.6.0", "prometheus-config.yaml");
    let suffix = artifacts[0]
        .strip_prefix("prometheus-config.yaml.bak.")
        .unwrap();
    assert_eq!(suffix.len(), 14);
    assert!(suffix.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn repeated_backup_runs_accumulate_sorted_artifacts() {
    let env = TestEnv::new();
    env.write_source("prometheus/prometheus-config.yaml", "new\n");
    env.add_install_dir("prometheus-3.6.0");
    env.write_file("Programs/prometheus-3.6.0/prometheus-config.yaml", "old\n");

    assert!(env.run(&["deploy", "--backup"]).success);
    // Backup names resolve to the second; step past it so the next run
    // gets a distinct suffix.
    std::thread::sleep(std::time::Duration::from_millis(1100));
    assert!(env.run(&["deploy", "--backup"]).success);

    let artifacts = backup_artifacts(&env, "prometheus-3.6.0", "prometheus-config.yaml");
    assert_eq!(artifacts.len(), 2);
    assert!(artifacts[0] < artifacts[1]);
}

#[test]
fn no_backup_is_taken_for_a_new_destination() {
    let env = TestEnv::new();
    env.write_source("prometheus/prometheus-config.yaml", "new\n");
    env.add_install_dir("prometheus-3.6.0");

    assert!(env.run(&["deploy", "--backup"]).success);

    let artifacts = backup_artifacts(&env, "prometheus-3.6.0", "prometheus-config.yaml");
    assert!(artifacts.is_empty());
}

#[test]
fn without_backup_flag_no_artifacts_appear() {
    let env = TestEnv::new();
    env.write_source("prometheus/prometheus-config.yaml", "new\n");
    env.add_install_dir("prometheus-3.6.0");
    env.write_file("Programs/prometheus-3.6.0/prometheus-config.yaml", "old\n");

    assert!(env.run(&["deploy"]).success);

    let artifacts = backup_artifacts(&env, "prometheus-3.6.0", "prometheus-config.yaml");
    assert!(artifacts.is_empty());
}
