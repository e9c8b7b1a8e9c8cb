use regex::Regex;
use once_cell::sync::Lazy;
use tracing::debug;
use crate::dependency::Dependency;

/// Library directories that are stripped from entry names, in the order they are tried
pub const LIBRARY_PREFIXES: [&str; 3] = ["BOOT-INF/lib/", "WEB-INF/lib/", "WEB-INF/lib-provided/"];

const JAR_SUFFIX: &str = ".jar";

// Example: dom4j-2.1.3
static PLAIN_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*)(?:-)([0-9]+\.[0-9]+(\.[0-9]+)?(\.[0-9]+)?)$").unwrap()
});

// Examples: hibernate-core-5.4.32.Final, javassist-3.27.0-GA
static QUALIFIED_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*)(?:-)([0-9]+\.[0-9]+(\.[0-9]+)?)(\.|-)+[a-zA-Z]+$").unwrap()
});

/// Remove the known library directories from the start of an entry name
pub fn strip_library_prefix(path: &str) -> &str {
    let mut stripped = path;
    for prefix in LIBRARY_PREFIXES {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            stripped = rest;
        }
    }
    stripped
}

/// Split a library entry name (e.g. "BOOT-INF/lib/dom4j-2.1.3.jar") into name and version.
/// Never fails: names that match neither version pattern keep an empty version.
pub fn parse_dependency_filename(path: &str) -> Dependency {
    let full_name = strip_library_prefix(path);

    let mut package_name = full_name.strip_suffix(JAR_SUFFIX).unwrap_or(full_name);
    let mut version = "";

    // The qualified pattern runs second, on the already split name, and wins if it matches
    for pattern in [&*PLAIN_VERSION, &*QUALIFIED_VERSION] {
        if let Some(captures) = pattern.captures(package_name) {
            if let (Some(name), Some(matched_version)) = (captures.get(1), captures.get(2)) {
                package_name = name.as_str();
                version = matched_version.as_str();
            }
        }
    }

    let dependency = Dependency::new(
        package_name.to_string(),
        version.to_string(),
        full_name.to_string()
    );
    debug!(entry = path, dependency = %dependency.display_name(), "parsed library entry");
    dependency
}
