use console_log_provider::config::ProviderConfig;
use console_log_provider::fields;
use console_log_provider::provider::ConsoleProvider;
use std::process::Command;

const CHILD_ENV: &str = "CONSOLE_LOG_PROVIDER_FATAL_CHILD";

/// Runs only inside the child process spawned below.
#[test]
fn fatal_child() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }
    let provider = ConsoleProvider::new(&ProviderConfig::new("info"));
    let _ = provider.fatal("cannot continue", &fields! { "code" => 7 });

    // Only reached if the fatal write returned.
    std::process::exit(0);
}

#[test]
fn fatal_writes_to_stdout_then_exits_nonzero() {
    let exe = std::env::current_exe().unwrap();
    let output = Command::new(exe)
        .args(["fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("cannot continue"))
        .unwrap_or_else(|| panic!("no fatal line in {stdout:?}"));
    assert!(line.contains("[\x1b[31mFATAL\x1b[0m]"), "{line:?}");
    assert!(line.contains("] fatal.rs("), "{line:?}");
    assert!(line.ends_with(" - cannot continue code=7"), "{line:?}");
}
