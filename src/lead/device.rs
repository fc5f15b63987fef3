use wasm_bindgen::JsValue;
use web_sys::window;

use crate::lead::store::KeyValueStore;

pub const DEVICE_ID_KEY: &str = "eurolink_device_id";

/// Returns the persisted per-browser identity, minting and persisting one on
/// first use. The token is opaque, never rotated and never expires; repeated
/// calls against the same storage return the same value.
pub fn get_or_create_device_id<S, F>(store: &S, fresh_id: F) -> String
where
    S: KeyValueStore,
    F: FnOnce() -> String,
{
    if let Some(existing) = store.get(DEVICE_ID_KEY) {
        if !existing.is_empty() {
            return existing;
        }
    }
    let id = fresh_id();
    store.set(DEVICE_ID_KEY, &id);
    id
}

/// Identity generator backed by the browser: `crypto.randomUUID()` where the
/// function exists, otherwise a time-plus-random token so the form still
/// works without a secure random source.
pub fn browser_device_id() -> String {
    secure_device_id().unwrap_or_else(|| {
        fallback_device_id(chrono::Utc::now().timestamp_millis(), js_sys::Math::random)
    })
}

fn secure_device_id() -> Option<String> {
    let crypto = window()?.crypto().ok()?;
    let random_uuid = js_sys::Reflect::get(crypto.as_ref(), &JsValue::from_str("randomUUID")).ok()?;
    if !random_uuid.is_function() {
        return None;
    }
    Some(crypto.random_uuid())
}

fn fallback_device_id(now_ms: i64, mut random: impl FnMut() -> f64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut suffix = String::with_capacity(6);
    for _ in 0..6 {
        let idx = (random() * ALPHABET.len() as f64) as usize % ALPHABET.len();
        suffix.push(ALPHABET[idx] as char);
    }
    format!("dev-{}-{}", now_ms, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::store::MemoryStore;

    #[test]
    fn returns_existing_identity_without_regenerating() {
        let store = MemoryStore::new();
        store.set(DEVICE_ID_KEY, "stable-id");

        let id = get_or_create_device_id(&store, || panic!("generator must not run"));

        assert_eq!(id, "stable-id");
    }

    #[test]
    fn mints_and_persists_exactly_once() {
        let store = MemoryStore::new();

        let first = get_or_create_device_id(&store, || "fresh-id".to_string());
        let second = get_or_create_device_id(&store, || "other-id".to_string());

        assert_eq!(first, "fresh-id");
        assert_eq!(second, "fresh-id");
        assert_eq!(store.get(DEVICE_ID_KEY).as_deref(), Some("fresh-id"));
    }

    #[test]
    fn empty_stored_value_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(DEVICE_ID_KEY, "");

        let id = get_or_create_device_id(&store, || "fresh-id".to_string());

        assert_eq!(id, "fresh-id");
    }

    #[test]
    fn fallback_token_combines_time_and_random_digits() {
        assert_eq!(
            fallback_device_id(1_700_000_000_000, || 0.0),
            "dev-1700000000000-000000"
        );
        // 0.999... maps to the last alphabet entry, never out of range.
        assert_eq!(
            fallback_device_id(42, || 0.999_999),
            "dev-42-zzzzzz"
        );
    }

    #[test]
    fn fallback_suffix_stays_in_alphabet() {
        let mut seed = 0.05_f64;
        let id = fallback_device_id(7, move || {
            seed = (seed * 7.3) % 1.0;
            seed
        });
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
