//! Preflight checks for host tools.
//!
//! Builders that shell out declare the tools they need; checking them
//! up front turns a cryptic spawn failure mid-build into an actionable
//! error before anything touches the workspace.

use anyhow::{bail, Result};

/// Check if a command exists on the host system.
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

/// Verify that every (command, package) pair resolves on the host.
///
/// Fails listing each missing command alongside the package that
/// provides it.
pub fn check_required_tools(tools: &[(&str, &str)]) -> Result<()> {
    let missing: Vec<String> = tools
        .iter()
        .filter(|(tool, _)| !command_exists(tool))
        .map(|(tool, package)| format!("  {tool} (install {package})"))
        .collect();

    if !missing.is_empty() {
        bail!("missing host tools:\n{}", missing.join("\n"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("sh"));
        assert!(!command_exists("mkrootfs-no-such-tool"));
    }

    #[test]
    fn test_all_tools_present() {
        assert!(check_required_tools(&[("sh", "busybox"), ("env", "coreutils")]).is_ok());
    }

    #[test]
    fn test_missing_tools_are_listed_with_packages() {
        let tools = &[
            ("sh", "busybox"),
            ("mkrootfs-no-such-tool", "no-such-package"),
        ];

        let err = check_required_tools(tools).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("mkrootfs-no-such-tool"));
        assert!(msg.contains("no-such-package"));
        // Tools that resolved are not reported.
        assert!(!msg.contains("busybox"));
    }
}
