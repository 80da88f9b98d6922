pub mod constants;
mod entity;
pub mod env;
pub mod holder;
mod overrides;

pub use entity::{BuildSettings, SettingExport, SettingValue};
pub use env::{EnvSource, MapEnv, ProcessEnv, resolve_targets_lib_dir};
pub use overrides::SettingsOverride;
