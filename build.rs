use std::process::Command;

/// Run `git rev-parse` with the given extra arguments, falling back to "unknown"
/// when git is unavailable or the crate is built outside a checkout.
fn git_rev(extra_args: &[&str]) -> String {
    let mut args = vec!["rev-parse"];
    args.extend_from_slice(extra_args);
    args.push("HEAD");

    match Command::new("git").args(&args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&[]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
