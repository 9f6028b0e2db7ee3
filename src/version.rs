//! Version string assembly.
//!
//! The build script stamps `TERMSTYLE_BUILD_DATE` always and
//! `VERGEN_GIT_SHA` for dev builds; official builds set the `release`
//! feature and get a clean version without the git hash.

/// Full version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TERMSTYLE_BUILD_DATE"),
    ")"
);

/// Full version string shown by `--version` (clean release form).
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TERMSTYLE_BUILD_DATE"),
    ")"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_embeds_package_version() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    }
}
