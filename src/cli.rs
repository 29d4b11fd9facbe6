//! Command-line front matter.
//!
//! A deliberately small, hand-rolled flag parser: the binary only
//! recognizes informational flags (`-h`/`--help`, `--usage`,
//! `-V`/`--version`); anything else is an error, and no flags at all
//! launches the windowed application. Parsing and message formatting
//! are pure so the binary owns all printing and process exits.

/// What the binary should do for a given argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Print the full help text and exit successfully.
    Help,
    /// Print the one-line usage synopsis and exit successfully.
    Usage,
    /// Print version information and exit successfully.
    Version,
    /// Launch the windowed application.
    Run,
    /// Unrecognized arguments: print a short usage message to stderr
    /// and exit with a failure code.
    Unknown(Vec<String>),
}

/// Parse the argument list (without the executable name).
///
/// Unrecognized arguments win over any informational flag; among the
/// informational flags, help takes precedence over usage, and usage
/// over version.
#[must_use]
pub fn parse(args: &[String]) -> CliAction {
    let mut show_help = false;
    let mut print_usage = false;
    let mut show_version = false;
    let mut unknown = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => show_help = true,
            "--usage" => print_usage = true,
            "-V" | "--version" => show_version = true,
            other => unknown.push(other.to_owned()),
        }
    }

    if !unknown.is_empty() {
        return CliAction::Unknown(unknown);
    }
    if show_help {
        return CliAction::Help;
    }
    if print_usage {
        return CliAction::Usage;
    }
    if show_version {
        return CliAction::Version;
    }
    CliAction::Run
}

/// One-line usage synopsis.
#[must_use]
pub fn usage_text(exec_name: &str) -> String {
    format!("Usage: {exec_name} [-h] [--usage] [-V]")
}

/// Full help text: synopsis, description, and option list.
#[must_use]
pub fn help_text(exec_name: &str) -> String {
    format!(
        "{}\n\n\
         Lightweight scaffold for building 3D visualization desktop\n\
         applications using wgpu for rendering and winit for windowing.\n\
         Run without arguments to open the demo scene: drag to orbit,\n\
         shift-drag to pan, scroll to zoom.\n\n\
         Mandatory arguments to long options are mandatory for short\n\
         options too.\n\n\
         general options:\n\
         \x20 -h, --help     show this help message and exit\n\
         \x20 --usage        give a short usage message\n\
         \x20 -V, --version  print program version",
        usage_text(exec_name)
    )
}

/// Version banner with copyright and license notice.
#[must_use]
pub fn version_text(exec_name: &str) -> String {
    format!(
        "{exec_name} {} Copyright (C) 2026 the visiframe developers\n\
         License GPLv3+: GNU GPL version 3 or later \
         <http://gnu.org/licenses/gpl.html>\n\
         This is free software: you are free to change and redistribute \
         it.\n\
         There is NO WARRANTY, to the extent permitted by law.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Short pointer to `--help`, used after a parse failure.
#[must_use]
pub fn short_help_text(exec_name: &str) -> String {
    format!(
        "{}\nTry '{exec_name} --help' for more information.",
        usage_text(exec_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn no_arguments_launches_the_app() {
        assert_eq!(parse(&[]), CliAction::Run);
    }

    #[test]
    fn help_flags() {
        assert_eq!(parse(&args(&["-h"])), CliAction::Help);
        assert_eq!(parse(&args(&["--help"])), CliAction::Help);
    }

    #[test]
    fn usage_flag() {
        assert_eq!(parse(&args(&["--usage"])), CliAction::Usage);
    }

    #[test]
    fn version_flags() {
        assert_eq!(parse(&args(&["-V"])), CliAction::Version);
        assert_eq!(parse(&args(&["--version"])), CliAction::Version);
    }

    #[test]
    fn help_wins_over_usage_and_version() {
        assert_eq!(
            parse(&args(&["--version", "--usage", "-h"])),
            CliAction::Help
        );
        assert_eq!(
            parse(&args(&["--version", "--usage"])),
            CliAction::Usage
        );
    }

    #[test]
    fn unknown_flags_are_an_error_even_with_help() {
        assert_eq!(
            parse(&args(&["--frobnicate", "-h"])),
            CliAction::Unknown(vec!["--frobnicate".to_owned()])
        );
    }

    #[test]
    fn positional_arguments_are_unknown() {
        assert_eq!(
            parse(&args(&["scene.toml"])),
            CliAction::Unknown(vec!["scene.toml".to_owned()])
        );
    }

    #[test]
    fn texts_mention_the_executable_name() {
        assert!(usage_text("visiframe").starts_with("Usage: visiframe"));
        assert!(help_text("visiframe").contains("--usage"));
        assert!(short_help_text("visiframe").contains("--help"));
        assert!(version_text("visiframe")
            .contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn version_banner_carries_the_copyright_line() {
        let text = version_text("visiframe");
        let first_line = text.lines().next().unwrap_or("");
        assert!(first_line.contains("Copyright (C)"));
        assert!(text.contains("License GPLv3+"));
    }
}
