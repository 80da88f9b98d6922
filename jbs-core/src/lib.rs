pub mod error;
pub mod logger;
pub mod settings;
pub mod version;

pub use error::{SettingsError, SettingsResult};
pub use settings::{BuildSettings, EnvSource, MapEnv, ProcessEnv, SettingExport, SettingValue, SettingsOverride};
pub use version::{VersionSuffix, VersionTriple, format_version, full_version};
