/// Get the version string for tagfetch and libtagfetch
pub fn get_version_string() -> String {
    format!(
        "tagfetch {}\nlibtagfetch {}",
        env!("CARGO_PKG_VERSION"),
        libtagfetch::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
