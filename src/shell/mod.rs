//! Shell command-string generators.
//!
//! One module per target, each emitting a single line (or here-string block)
//! that reproduces the styled output when pasted into that shell:
//!
//! - [`bash`] - `echo -e` with `\033` escape literals
//! - [`python`] - `print(...)` with the same escaping rule
//! - [`powershell`] - `Write-Host` with native console color flags
//!
//! Every generator returns an empty string for blank input.

pub mod bash;
pub mod powershell;
pub mod python;

/// Render escape bytes as the four-character `\033` literal for embedding
/// in shell/script source text.
pub(crate) fn escape_bytes_to_literals(sequence: &str) -> String {
    sequence.replace('\x1b', "\\033")
}

/// Escape multi-line banner art for a double-quoted `echo -e`/`print`
/// argument: double the backslashes, then turn real newlines into `\n`
/// literals, then escape the quotes.
pub(crate) fn escape_banner_art(art: &str) -> String {
    art.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}
