//! Provider identifier generation.

use chrono::Utc;

const ID_PREFIX: &str = "doc";
const SUFFIX_LEN: usize = 5;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new provider id: `doc<unix millis>-<5 base36 chars>`.
///
/// Collisions are unlikely but not ruled out; callers that need a hard
/// guarantee check against the loaded collection.
pub fn generate_provider_id() -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[fastrand::usize(..BASE36.len())] as char)
        .collect();
    format!("{}{}-{}", ID_PREFIX, Utc::now().timestamp_millis(), suffix)
}
