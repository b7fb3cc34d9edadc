//! UNC path -> custom-scheme URL

use super::{UNC_LEAD, UNC_SEPARATOR};

/// Default URL scheme registered by the desktop handler
pub const DEFAULT_SCHEME: &str = "uncopener";

/// Convert an already-validated UNC path into `{scheme}://host/share/...`
///
/// Separators become `/`. A trailing separator stays a trailing `/`, the
/// handler uses it to tell directories from files. Input is not re-validated.
pub fn convert_unc_to_url(unc_path: &str, scheme: &str) -> String {
    let body = unc_path.strip_prefix(UNC_LEAD).unwrap_or(unc_path);
    format!("{}://{}", scheme, body.replace(UNC_SEPARATOR, "/"))
}
