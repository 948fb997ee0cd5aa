//! Tool detection: search path lookup and version reporting.

pub mod detector;
pub mod path;
pub mod types;
pub mod version;

pub use detector::{ToolDetector, DEFAULT_VERSION_FLAGS};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use types::DetectionResult;
pub use version::{extract_version, VersionMatcher, VERSION_MATCHERS};
