use std::process::Command;

/// Bake the toolchain version into the binary so /api/info can report it
/// without shelling out at runtime.
fn main() {
    let version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        // "rustc 1.80.0 (051478957 2024-07-21)" -> "1.80.0"
        .and_then(|banner| banner.split_whitespace().nth(1).map(str::to_owned))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=RUSTC_VERSION={version}");
}
