//! Content-type negotiation for uploads.

use repofs_core::address;

/// Content type the repository service registers for a path's extension.
///
/// Recognized source/text extensions upload with the matching text content
/// type; anything else uploads as opaque bytes with no content-type header.
pub fn content_type_for(path: &str) -> Option<&'static str> {
    let name = address::basename(path);
    let (_, extension) = name.rsplit_once('.')?;

    match extension.to_ascii_lowercase().as_str() {
        // sic: the service registers the misspelled type for typescript
        // sources and matches on the exact string
        "ts" => Some("aplication/x-typescript"),
        "js" => Some("text/javascript"),
        "json" => Some("application/json"),
        "html" | "htm" => Some("text/html"),
        "css" => Some("text/css"),
        "xml" => Some("application/xml"),
        "txt" | "md" | "sql" => Some("text/plain"),
        _ => None,
    }
}
