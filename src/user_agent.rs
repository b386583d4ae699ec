//! Shared User-Agent string for API and download HTTP clients.
//!
//! Modrinth asks API consumers to send a uniquely identifying User-Agent,
//! so every request this tool makes carries the same one.

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/fierce/mod-downloader";

/// Default User-Agent for all requests (identifies the tool and its version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("mod-downloader/{version} (+{PROJECT_UA_URL})")
}
