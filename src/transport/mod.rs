/// Filesystem transport used by directory-backed stores.
pub mod fs;
