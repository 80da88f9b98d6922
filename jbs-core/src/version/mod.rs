mod suffix;
mod triple;

pub use suffix::{VersionSuffix, full_version};
pub use triple::{VersionTriple, format_version};
