//! Build information, populated at build time by `build.rs`.

/// Build date in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or "unknown" outside a git checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Package version from the crate manifest.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format version info as a single display string, e.g. `0.1.0 (abc1234)`.
pub fn format_version() -> String {
    format!("{} ({})", build_version(), build_commit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_version_matches_manifest() {
        assert_eq!(build_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn format_version_contains_commit() {
        let formatted = format_version();
        assert!(formatted.contains(build_commit()));
    }
}
