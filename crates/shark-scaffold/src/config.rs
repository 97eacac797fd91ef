//! Generated config files and placeholder substitution
//!
//! Two files are produced in the scaffolded project: the application
//! config (`shark-conf.js`) and the CI pipeline config (`.gitlab-ci.yml`).
//! Both start from bodies embedded in the binary and receive the
//! collected answers through literal substitution against known anchor
//! tokens; the upstream files are fixed-format, so nothing here is a
//! general template engine.

use std::sync::LazyLock;

use camino::{Utf8Path, Utf8PathBuf};
use regex::{NoExpand, Regex};
use rust_embed::RustEmbed;
use shark_core::{ConfigAnswers, TemplateType};
use tracing::debug;

use crate::error::{Error, Result};

/// Bundled config file bodies
#[derive(RustEmbed)]
#[folder = "templates/"]
struct ConfigTemplates;

static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const group = .*;").expect("group regex is valid"));
static PRODUCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const product = .*;").expect("product regex is valid"));
static CONTEXT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const contextPath = .*;").expect("contextPath regex is valid"));

fn load_template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name).ok_or_else(|| Error::template_not_found(name))?;
    Ok(String::from_utf8_lossy(file.data.as_ref()).into_owned())
}

/// Absolute path of the application config file for this template type
pub fn conf_path(root: &Utf8Path, template_type: TemplateType) -> Utf8PathBuf {
    root.join(template_type.conf_relative_path())
}

/// Absolute path of the CI pipeline config file
pub fn ci_path(root: &Utf8Path) -> Utf8PathBuf {
    root.join(".gitlab-ci.yml")
}

/// Rewrite the three assignment lines in a `shark-conf.js` body with the
/// collected answers. Unset answers become empty string literals.
pub fn substitute_shark_conf(source: &str, answers: &ConfigAnswers) -> String {
    let group = format!("const group = '{}';", answers.group);
    let product = format!("const product = '{}';", answers.product);
    let context_path = format!("const contextPath = '{}';", answers.context_path);

    let out = GROUP_RE.replace(source, NoExpand(&group));
    let out = PRODUCT_RE.replace(&out, NoExpand(&product));
    CONTEXT_PATH_RE
        .replace(&out, NoExpand(&context_path))
        .into_owned()
}

/// Replace every `${group}`, `${product}` and `${serviceCode}` token in
/// a `.gitlab-ci.yml` body with the collected answers.
pub fn substitute_gitlab_ci(source: &str, answers: &ConfigAnswers) -> String {
    source
        .replace("${group}", &answers.group)
        .replace("${product}", &answers.product)
        .replace("${serviceCode}", &answers.service_code)
}

/// Write the application config into the scaffolded project.
/// Returns the path written.
pub fn write_app_config(
    root: &Utf8Path,
    template_type: TemplateType,
    answers: &ConfigAnswers,
) -> Result<Utf8PathBuf> {
    let body = substitute_shark_conf(&load_template("shark-conf.js")?, answers);
    let path = conf_path(root, template_type);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    debug!("Writing application config: {}", path);
    std::fs::write(&path, body)?;
    Ok(path)
}

/// Write the CI pipeline config into the scaffolded project.
/// Returns the path written.
pub fn write_ci_config(root: &Utf8Path, answers: &ConfigAnswers) -> Result<Utf8PathBuf> {
    let body = substitute_gitlab_ci(&load_template("gitlab-ci.yml")?, answers);
    let path = ci_path(root);
    debug!("Writing CI config: {}", path);
    std::fs::write(&path, body)?;
    Ok(path)
}
