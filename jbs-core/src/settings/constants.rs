use crate::version::VersionTriple;

// Node.js
// 如需使用其他 Node.js 版本构建 J2V8，可通过配置文件覆盖 node_version
pub const NODE_VERSION_MAJOR: u32 = 7;
pub const NODE_VERSION_MINOR: u32 = 9;
pub const NODE_VERSION_PATCH: u32 = 0;
pub const DEFAULT_NODE_VERSION: VersionTriple =
    VersionTriple::new(NODE_VERSION_MAJOR, NODE_VERSION_MINOR, NODE_VERSION_PATCH);

// J2V8
pub const LIBRARY_VERSION_MAJOR: u32 = 5;
pub const LIBRARY_VERSION_MINOR: u32 = 3;
pub const LIBRARY_VERSION_PATCH: u32 = 0;
pub const DEFAULT_LIBRARY_VERSION: VersionTriple =
    VersionTriple::new(LIBRARY_VERSION_MAJOR, LIBRARY_VERSION_MINOR, LIBRARY_VERSION_PATCH);
// 快照构建时改为 "-SNAPSHOT"
pub const LIBRARY_VERSION_SUFFIX: &str = "";

pub const HOME_ENV_VAR: &str = "HOME";
/// 其他平台的库构建产物所在目录（相对 home），最终会被打进 JAR
pub const TARGETS_DIR_SUFFIX: &str = "/src/j2v8_targets";
pub const SETTINGS_PATH_ENV_VAR: &str = "J2V8_BUILD_SETTINGS_PATH";

/// 构建脚本读取的名称，顺序即 `BuildSettings::exports` 的输出顺序。
pub mod keys {
    pub const NODE_VERSION_MAJOR: &str = "NODE_VERSION_MAJOR";
    pub const NODE_VERSION_MINOR: &str = "NODE_VERSION_MINOR";
    pub const NODE_VERSION_PATCH: &str = "NODE_VERSION_PATCH";
    pub const NODE_VERSION: &str = "NODE_VERSION";
    pub const LIBRARY_VERSION_MAJOR: &str = "LIBRARY_VERSION_MAJOR";
    pub const LIBRARY_VERSION_MINOR: &str = "LIBRARY_VERSION_MINOR";
    pub const LIBRARY_VERSION_PATCH: &str = "LIBRARY_VERSION_PATCH";
    pub const LIBRARY_VERSION_SUFFIX: &str = "LIBRARY_VERSION_SUFFIX";
    pub const LIBRARY_VERSION: &str = "LIBRARY_VERSION";
    pub const LIBRARY_FULL_VERSION: &str = "LIBRARY_FULL_VERSION";
    pub const TARGETS_LIB_DIR: &str = "TARGETS_LIB_DIR";

    pub const ALL: [&str; 11] = [
        NODE_VERSION_MAJOR,
        NODE_VERSION_MINOR,
        NODE_VERSION_PATCH,
        NODE_VERSION,
        LIBRARY_VERSION_MAJOR,
        LIBRARY_VERSION_MINOR,
        LIBRARY_VERSION_PATCH,
        LIBRARY_VERSION_SUFFIX,
        LIBRARY_VERSION,
        LIBRARY_FULL_VERSION,
        TARGETS_LIB_DIR,
    ];
}
