/// Get the version string for quay and libquay
pub fn get_version_string() -> String {
    format!(
        "quay {}\nlibquay {}",
        env!("CARGO_PKG_VERSION"),
        libquay::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
