//! MSBuild detection by probing well-known Visual Studio install paths

use std::path::Path;

/// One probe group: if any listed path exists, `version` becomes the result.
struct Probe {
    version: &'static str,
    paths: &'static [&'static str],
}

const VS2019_EDITIONS: &[&str] = &[
    r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Community\MSBuild\Microsoft\VisualStudio\v16.0\WebApplications\Microsoft.WebApplication.targets",
    r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Professional\MSBuild\Microsoft\VisualStudio\v16.0\WebApplications\Microsoft.WebApplication.targets",
    r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Enterprise\MSBuild\Microsoft\VisualStudio\v16.0\WebApplications\Microsoft.WebApplication.targets",
    r"C:\Program Files (x86)\Microsoft Visual Studio\2019\BuildTools\MSBuild\Microsoft\VisualStudio\v16.0\WebApplications\Microsoft.WebApplication.targets",
];

/// Evaluated in listed order; every matching group overwrites the result, so
/// with several Visual Studio versions installed the LAST match wins.
const PROBES: &[Probe] = &[
    Probe {
        version: "16",
        paths: VS2019_EDITIONS,
    },
    Probe {
        version: "14",
        paths: &[
            r"C:\Program Files (x86)\MSBuild\Microsoft\VisualStudio\v14.0\WebApplications\Microsoft.WebApplication.targets",
        ],
    },
    Probe {
        version: "13",
        paths: &[
            r"C:\Program Files (x86)\MSBuild\Microsoft\VisualStudio\v12.0\WebApplications\Microsoft.WebApplication.targets",
        ],
    },
    Probe {
        version: "11",
        paths: &[
            r"C:\Program Files (x86)\MSBuild\Microsoft\VisualStudio\v11.0\WebApplications\Microsoft.WebApplication.targets",
        ],
    },
];

/// Detect the installed MSBuild major version.
///
/// Returns an empty string when no known install location exists; callers
/// treat that as "could not detect" and warn, never abort.
pub fn detect_version() -> String {
    detect_version_with(|path| Path::new(path).exists())
}

/// Probe with a caller-supplied existence check.
pub fn detect_version_with(exists: impl Fn(&str) -> bool) -> String {
    let mut version = String::new();
    for probe in PROBES {
        if probe.paths.iter().any(|path| exists(path)) {
            version = probe.version.to_string();
        }
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_install_detected() {
        assert_eq!(detect_version_with(|_| false), "");
    }

    #[test]
    fn test_single_vs2019_edition_detected() {
        let version = detect_version_with(|path| path.contains(r"2019\Enterprise"));
        assert_eq!(version, "16");
    }

    #[test]
    fn test_vs2015_detected() {
        let version = detect_version_with(|path| path.contains(r"v14.0"));
        assert_eq!(version, "14");
    }

    #[test]
    fn test_v12_targets_map_to_13() {
        let version = detect_version_with(|path| path.contains(r"v12.0"));
        assert_eq!(version, "13");
    }

    // With several versions installed the probes keep overwriting the
    // result, so the last listed match wins rather than the newest install.
    #[test]
    fn test_last_match_wins_when_multiple_installed() {
        let version =
            detect_version_with(|path| path.contains(r"2019\Community") || path.contains(r"v14.0"));
        assert_eq!(version, "14");

        let version = detect_version_with(|_| true);
        assert_eq!(version, "11");
    }
}
