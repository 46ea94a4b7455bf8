use std::env;
use std::process::Command;

fn run(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn main() {
    // Re-run if Cargo.toml changes (version change)
    println!("cargo:rerun-if-changed=Cargo.toml");
    // Re-run if source code changes (to refresh the build date)
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=EMBERLOG_BUILD_NUMBER");

    let commit = run("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=EMBERLOG_GIT_COMMIT={commit}");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let compiler = run(&rustc, &["--version"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=EMBERLOG_RUSTC_VERSION={compiler}");

    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let build_system = run(&cargo, &["--version"]).unwrap_or_else(|| "cargo".to_string());
    println!("cargo:rustc-env=EMBERLOG_BUILD_SYSTEM={build_system}");

    let host = env::var("HOSTNAME")
        .ok()
        .or_else(|| run("hostname", &[]))
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=EMBERLOG_BUILD_HOST={host}");

    let date = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=EMBERLOG_BUILD_DATE={date}");

    // CI sets EMBERLOG_BUILD_NUMBER; local builds report 0
    let build_number = env::var("EMBERLOG_BUILD_NUMBER").unwrap_or_else(|_| "0".to_string());
    println!("cargo:rustc-env=EMBERLOG_BUILD_NUMBER={build_number}");
}
