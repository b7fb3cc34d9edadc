pub mod allowlist;
pub mod converter;
pub mod validator;

pub use allowlist::*;
pub use converter::*;
pub use validator::*;

/// Path separator used by UNC paths
pub const UNC_SEPARATOR: char = '\\';

/// The two-separator lead every UNC path starts with
pub const UNC_LEAD: &str = "\\\\";
