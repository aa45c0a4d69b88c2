//! Exit status of the `fake-db-seed` binary.

use std::process::{Command, Output};

const SEED_ENV: &[&str] = &[
    "MYSQL_HOST",
    "MYSQL_PORT",
    "MYSQL_USER",
    "MYSQL_PASSWORD",
    "MYSQL_DATABASE",
    "SEED_CONFIG",
    "SEED_TOTAL_USERS",
    "SEED_TOTAL_POSTS",
    "SEED_BATCH_SIZE",
    "SEED_RANDOM_SEED",
];

fn seed_command(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fake-db-seed"));
    for var in SEED_ENV {
        command.env_remove(var);
    }
    command.args(args).output().unwrap()
}

#[test]
fn test_invalid_batch_size_exits_with_one() {
    let output = seed_command(&["--dry-run", "--batch-size", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("batch size"), "{stderr}");
}

#[test]
fn test_missing_config_file_exits_with_one() {
    let output = seed_command(&["--dry-run", "--config", "/nonexistent/seed.toml"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "{stderr}");
}

#[test]
fn test_valid_dry_run_exits_with_zero() {
    let output = seed_command(&[
        "--dry-run",
        "--total-users",
        "20",
        "--total-posts",
        "20",
        "--batch-size",
        "10",
        "--seed",
        "42",
    ]);

    assert!(output.status.success(), "{output:?}");
}
