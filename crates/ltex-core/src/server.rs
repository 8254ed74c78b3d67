//! Location and release naming of the LTeX+ server
//!
//! Downloading and extracting releases is left to the host; this module
//! answers where a release lives, whether it is installed, and which
//! archive fits the current platform.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::settings::{PLUGIN_NAMESPACE, PluginSettings};

/// Release used when the settings do not pin one.
pub const LATEST_TESTED_RELEASE: &str = "18.6.1";

const DOWNLOAD_URL_BASE: &str = "https://github.com/ltex-plus/ltex-ls-plus/releases/download";

/// Archive suffix of the release without a bundled Java runtime.
pub const PLATFORM_INDEPENDENT_SUFFIX: &str = ".tar.gz";

/// Where a server release lives and how it is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLayout {
    storage_root: PathBuf,
    version: String,
}

impl ServerLayout {
    /// Layout for the release selected by `settings` under `storage_root`.
    pub fn new(storage_root: impl Into<PathBuf>, settings: &PluginSettings) -> Self {
        Self {
            storage_root: storage_root.into(),
            version: server_version(settings).to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Directory owned by the plugin, holding installed releases.
    pub fn base_directory(&self) -> PathBuf {
        self.storage_root.join(PLUGIN_NAMESPACE)
    }

    /// Directory of the selected release (contains `bin` and `lib`).
    pub fn server_directory(&self) -> PathBuf {
        self.base_directory()
            .join(format!("ltex-ls-plus-{}", self.version))
    }

    /// Whether the selected release is present.
    pub fn is_installed(&self) -> bool {
        self.server_directory().is_dir()
    }

    /// Archive URL for the selected release on the given platform.
    pub fn download_url(&self, os: &str, arch: &str) -> String {
        format!(
            "{base}/{v}/ltex-ls-plus-{v}{suffix}",
            base = DOWNLOAD_URL_BASE,
            v = self.version,
            suffix = platform_suffix(os, arch)
        )
    }

    /// Variables substituted into the server launch command.
    pub fn launch_variables(&self, os: &str) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("serverdir", path_string(&self.server_directory())),
            ("script", launcher_script(os).to_string()),
        ])
    }
}

/// Release pinned in the settings, or the latest tested one.
pub fn server_version(settings: &PluginSettings) -> &str {
    settings.server_version().unwrap_or(LATEST_TESTED_RELEASE)
}

/// Launcher script name in the release's `bin` directory.
pub fn launcher_script(os: &str) -> &'static str {
    if normalize_os(os) == Some(Os::Windows) {
        "ltex-ls-plus.bat"
    } else {
        "ltex-ls-plus"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Os {
    Windows,
    Mac,
    Linux,
}

fn normalize_os(os: &str) -> Option<Os> {
    match os.to_lowercase().as_str() {
        "windows" | "win32" | "cygwin" => Some(Os::Windows),
        "darwin" | "macos" => Some(Os::Mac),
        "linux" | "linux2" => Some(Os::Linux),
        _ => None,
    }
}

/// `x64` or `arm64`, or `None` when no bundled release exists.
fn normalize_arch(arch: &str) -> Option<&'static str> {
    let arch = arch.to_lowercase();
    match arch.as_str() {
        "amd64" | "x86_64" | "x64" | "em64t" => Some("x64"),
        "arm64" | "aarch64" | "armv8" | "arm64e" => Some("arm64"),
        "i386" | "i686" | "x86" | "i86pc" => None,
        other if (other.starts_with("arm") || other.starts_with("aarch")) && other.contains("64") => {
            Some("arm64")
        }
        _ => None,
    }
}

/// Archive suffix for a platform.
///
/// Unsupported systems and 32-bit CPUs get the platform-independent
/// archive, which needs a system Java.
pub fn platform_suffix(os: &str, arch: &str) -> String {
    let (Some(os_kind), Some(arch)) = (normalize_os(os), normalize_arch(arch)) else {
        tracing::info!(os, arch, "No bundled release for platform, using platform-independent archive");
        return PLATFORM_INDEPENDENT_SUFFIX.to_string();
    };

    match os_kind {
        Os::Windows => format!("-windows-{}.zip", arch),
        Os::Mac => format!("-mac-{}.tar.gz", arch),
        Os::Linux => format!("-linux-{}.tar.gz", arch),
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
