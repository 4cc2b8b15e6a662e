//! Durable client-side storage. Backed by `localStorage` in the browser;
//! on targets without a `window` (SSR, host tests) a process-local map
//! stands in so session persistence behaves the same everywhere.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

// `web_sys::window()` panics off-wasm; headless runtimes have no storage.
#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

pub fn get_item(key: &str) -> Option<String> {
    match local_storage() {
        Some(storage) => storage.get_item(key).ok().flatten(),
        None => fallback_get(key),
    }
}

pub fn set_item(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            let _ = storage.set_item(key, value);
        }
        None => fallback_set(key, value),
    }
}

pub fn remove_item(key: &str) {
    match local_storage() {
        Some(storage) => {
            let _ = storage.remove_item(key);
        }
        None => fallback_remove(key),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        MEMORY.with(|map| map.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        MEMORY.with(|map| {
            map.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        MEMORY.with(|map| {
            map.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fallback_get(key: &str) -> Option<String> {
    fallback::get(key)
}

#[cfg(not(target_arch = "wasm32"))]
fn fallback_set(key: &str, value: &str) {
    fallback::set(key, value)
}

#[cfg(not(target_arch = "wasm32"))]
fn fallback_remove(key: &str) {
    fallback::remove(key)
}

#[cfg(target_arch = "wasm32")]
fn fallback_get(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn fallback_set(_key: &str, _value: &str) {}

#[cfg(target_arch = "wasm32")]
fn fallback_remove(_key: &str) {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        set_item("storage-test-key", "value");
        assert_eq!(get_item("storage-test-key").as_deref(), Some("value"));
        remove_item("storage-test-key");
        assert!(get_item("storage-test-key").is_none());
    }

    #[test]
    fn missing_key_reads_as_none() {
        assert!(get_item("storage-test-never-written").is_none());
    }
}
