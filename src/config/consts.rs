// src/config/consts.rs

// Registry
pub const REGISTRY_URL: &str = "https://pub.dev";
pub const DEFAULT_PUBLISHER: &str = "gllb-apps.github.io";
pub const PACKAGE_PATH_PREFIX: &str = "/packages/";

/// Used when every live discovery strategy comes back empty.
pub const FALLBACK_PACKAGES: &[&str] = &["flux_wireframe_theme_cli", "wireframe_theme"];

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// README
pub const README_FILE: &str = "README.md";
pub const TITLE: &str = "# 📦 GLLB-Apps Dart Packages";
pub const INTRO: &str = "My published packages on pub.dev";
pub const FALLBACK_NOTICE: &str = "*Note: Using fallback package list (scraping unavailable)*";
pub const EMPTY_NOTICE: &str = "*No packages found.*";
pub const TABLE_HEADER: &str = "| Package | Version | Pub Points | Popularity | Link |";
pub const TABLE_SEPARATOR: &str = "|---------|---------|------------|------------|------|";
pub const BATCH_FOOTER_NOTICE: &str = "*Auto-updated daily via GitHub Actions*";
pub const EDITOR_FOOTER_NOTICE: &str = "*Auto-updated daily at 03:00 UTC via GitHub Actions*";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Git
pub const DEFAULT_COMMIT_MESSAGE: &str = "🤖 Update package list";

// Repo auto-detection: checked under $HOME, then next to the cwd
pub const REPO_DIR_NAME: &str = "dart-packages-handbook";
pub const REPO_HOME_SUBDIRS: &[&str] = &["Documents", "Projects"];

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const DEBUG_LOG_FILE: &str = "debug.log";

// Editor
pub const UNKNOWN_VERSION: &str = "Unknown";
