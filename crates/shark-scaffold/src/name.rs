//! Project name validation against npm package-naming rules
//!
//! The project directory name becomes the scaffolded package's name, so
//! it has to be publishable: lowercase, URL-friendly, no leading dot or
//! underscore, at most 214 characters, and not shadowing a dependency
//! the generated project itself pulls in.

/// Dependencies of the scaffolded app; a project may not take their name
pub const RESERVED_DEPENDENCIES: [&str; 3] = ["@sharkR/react-scripts", "react", "react-dom"];

/// Node core modules, reserved by npm for new packages
const CORE_MODULES: [&str; 26] = [
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "https",
    "module",
    "net",
    "os",
    "path",
    "punycode",
    "querystring",
    "readline",
    "stream",
    "tls",
    "tty",
    "url",
    "util",
];

/// Maximum length npm accepts for a package name
const MAX_NAME_LENGTH: usize = 214;

/// Characters that never need URL-encoding in a package name
fn is_url_friendly(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '!' | '\'' | '(' | ')' | '*')
}

/// Characters npm tolerates in legacy names but rejects for new packages
fn is_legacy_special(c: char) -> bool {
    matches!(c, '~' | '!' | '\'' | '(' | ')' | '*')
}

/// Outcome of validating a proposed project name
#[derive(Debug, Clone, Default)]
pub struct NameValidation {
    /// Hard rule violations
    pub errors: Vec<String>,
    /// Violations npm only tolerates for pre-existing packages
    pub warnings: Vec<String>,
}

impl NameValidation {
    /// Whether the name is acceptable for a newly created package.
    /// New packages must clear warnings as well as errors.
    pub fn valid_for_new_packages(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate a proposed project name against npm naming rules
pub fn validate_app_name(name: &str) -> NameValidation {
    let mut result = NameValidation::default();

    if name.is_empty() {
        result.errors.push("name length must be greater than zero".to_string());
        return result;
    }
    if name.trim() != name {
        result
            .errors
            .push("name cannot contain leading or trailing spaces".to_string());
    }
    if name.starts_with('.') {
        result.errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        result
            .errors
            .push("name cannot start with an underscore".to_string());
    }
    if !name.chars().all(is_url_friendly) {
        result
            .errors
            .push("name can only contain URL-friendly characters".to_string());
    }

    if name.len() > MAX_NAME_LENGTH {
        result
            .warnings
            .push("name can no longer contain more than 214 characters".to_string());
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        result
            .warnings
            .push("name can no longer contain capital letters".to_string());
    }
    if name.chars().any(is_legacy_special) {
        result
            .warnings
            .push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if CORE_MODULES.contains(&name) {
        result.warnings.push(format!("{name} is a core module name"));
    }

    result
}

/// Check the name against the generated project's own dependencies.
/// Returns the sorted dependency list when the name collides.
pub fn dependency_collision(name: &str) -> Option<Vec<&'static str>> {
    if RESERVED_DEPENDENCIES.contains(&name) {
        let mut deps = RESERVED_DEPENDENCIES.to_vec();
        deps.sort_unstable();
        Some(deps)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["my-app", "my.app", "my_app2", "a"] {
            let v = validate_app_name(name);
            assert!(v.valid_for_new_packages(), "{name}: {:?}", v);
        }
    }

    #[test]
    fn test_empty_name() {
        let v = validate_app_name("");
        assert!(!v.valid_for_new_packages());
        assert_eq!(v.errors.len(), 1);
    }

    #[test]
    fn test_leading_period_and_underscore() {
        assert!(!validate_app_name(".myapp").errors.is_empty());
        assert!(!validate_app_name("_myapp").errors.is_empty());
    }

    #[test]
    fn test_uppercase_is_warning() {
        let v = validate_app_name("MyApp");
        assert!(v.errors.is_empty());
        assert!(!v.warnings.is_empty());
        assert!(!v.valid_for_new_packages());
    }

    #[test]
    fn test_url_unfriendly_characters() {
        for name in ["my app", "my/app", "my:app", "我的应用"] {
            let v = validate_app_name(name);
            assert!(!v.errors.is_empty(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_legacy_special_characters() {
        let v = validate_app_name("excited!");
        assert!(v.errors.is_empty());
        assert!(!v.valid_for_new_packages());
    }

    #[test]
    fn test_length_limit() {
        let long = "a".repeat(215);
        assert!(!validate_app_name(&long).valid_for_new_packages());
        let ok = "a".repeat(214);
        assert!(validate_app_name(&ok).valid_for_new_packages());
    }

    #[test]
    fn test_core_module_name() {
        let v = validate_app_name("http");
        assert!(v.errors.is_empty());
        assert!(!v.valid_for_new_packages());
    }

    #[test]
    fn test_dependency_collision() {
        assert!(dependency_collision("react").is_some());
        assert!(dependency_collision("react-dom").is_some());
        assert!(dependency_collision("my-app").is_none());
    }

    #[test]
    fn test_dependency_collision_list_is_sorted() {
        let deps = dependency_collision("react").unwrap();
        let mut sorted = deps.clone();
        sorted.sort_unstable();
        assert_eq!(deps, sorted);
    }
}
