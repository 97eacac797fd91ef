//! Template acquisition and repository setup
//!
//! The template is cloned straight into the target directory, its
//! history is stripped, and a fresh repository is initialized pointing
//! at the remote derived from the collected group/product answers.

use camino::Utf8Path;
use shark_core::{ProcessRunner, TemplateType};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Clone the template repository for `template_type` into `root`.
/// Clone failure is fatal and carries the child's stderr.
pub async fn clone_template(
    runner: &dyn ProcessRunner,
    template_type: TemplateType,
    root: &Utf8Path,
) -> Result<()> {
    let url = template_type.clone_url();
    info!("Cloning template: {} -> {}", url, root);

    let output = runner
        .run("git", &["clone", &url, root.as_str()], None)
        .await?;

    if !output.success {
        return Err(Error::clone_failed(output.stderr.trim()));
    }

    Ok(())
}

/// Remove the clone's version-control metadata so the scaffolded
/// project starts with no history.
pub fn strip_history(root: &Utf8Path) -> Result<()> {
    let git_dir = root.join(".git");
    if git_dir.exists() {
        debug!("Removing {}", git_dir);
        std::fs::remove_dir_all(git_dir)?;
    }
    Ok(())
}

/// Initialize a fresh git repository in `root`
pub async fn init_repository(runner: &dyn ProcessRunner, root: &Utf8Path) -> Result<()> {
    let output = runner.run("git", &["init"], Some(root)).await?;

    if !output.success {
        return Err(Error::git_operation(format!(
            "git init failed: {}",
            output.stderr.trim()
        )));
    }

    info!("Repository initialized at {}", root);
    Ok(())
}

/// Point `origin` at the repository derived from the group/product
/// answers.
pub async fn add_origin_remote(
    runner: &dyn ProcessRunner,
    root: &Utf8Path,
    url: &str,
) -> Result<()> {
    let output = runner
        .run("git", &["remote", "add", "origin", url], Some(root))
        .await?;

    if !output.success {
        return Err(Error::git_operation(format!(
            "git remote add failed: {}",
            output.stderr.trim()
        )));
    }

    info!("Remote origin set to {}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use camino::Utf8PathBuf;
    use shark_core::ProcessOutput;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records invocations instead of spawning real binaries
    struct FakeRunner {
        calls: Mutex<Vec<(String, Vec<String>, Option<Utf8PathBuf>)>>,
        fail_with: Option<String>,
    }

    impl FakeRunner {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(stderr: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(stderr.to_string()),
            }
        }

        fn calls(&self) -> Vec<(String, Vec<String>, Option<Utf8PathBuf>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeRunner {
        async fn run(
            &self,
            program: &str,
            args: &[&str],
            cwd: Option<&Utf8Path>,
        ) -> shark_core::Result<ProcessOutput> {
            self.calls.lock().unwrap().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
                cwd.map(|p| p.to_path_buf()),
            ));
            Ok(ProcessOutput {
                success: self.fail_with.is_none(),
                stdout: String::new(),
                stderr: self.fail_with.clone().unwrap_or_default(),
            })
        }

        async fn run_inherited(
            &self,
            program: &str,
            args: &[&str],
            cwd: Option<&Utf8Path>,
        ) -> shark_core::Result<bool> {
            self.run(program, args, cwd).await.map(|o| o.success)
        }
    }

    #[tokio::test]
    async fn test_clone_template_argv() {
        let runner = FakeRunner::ok();
        let root = Utf8Path::new("/tmp/my-app");
        clone_template(&runner, TemplateType::Full, root)
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "git");
        assert_eq!(
            calls[0].1,
            vec![
                "clone",
                "git@git.yx.netease.com:sharkR/react-template-full.git",
                "/tmp/my-app"
            ]
        );
    }

    #[tokio::test]
    async fn test_clone_failure_is_fatal_with_stderr() {
        let runner = FakeRunner::failing("fatal: repository not found\n");
        let err = clone_template(&runner, TemplateType::Web, Utf8Path::new("/tmp/x"))
            .await
            .unwrap_err();
        match err {
            Error::CloneFailed { stderr } => {
                assert_eq!(stderr, "fatal: repository not found")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_init_and_remote_run_in_root() {
        let runner = FakeRunner::ok();
        let root = Utf8Path::new("/tmp/my-app");
        init_repository(&runner, root).await.unwrap();
        add_origin_remote(&runner, root, "git@git.yx.netease.com:g/p.git")
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].1, vec!["init"]);
        assert_eq!(calls[0].2.as_deref(), Some(root));
        assert_eq!(
            calls[1].1,
            vec!["remote", "add", "origin", "git@git.yx.netease.com:g/p.git"]
        );
        assert_eq!(calls[1].2.as_deref(), Some(root));
    }

    #[test]
    fn test_strip_history_removes_git_dir() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        std::fs::create_dir(root.join(".git")).unwrap();
        std::fs::write(root.join(".git").join("HEAD"), "ref: refs/heads/master\n").unwrap();
        std::fs::write(root.join("package.json"), "{}\n").unwrap();

        strip_history(&root).unwrap();
        assert!(!root.join(".git").exists());
        assert!(root.join("package.json").exists());
    }

    #[test]
    fn test_strip_history_tolerates_missing_git_dir() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        strip_history(&root).unwrap();
    }
}
