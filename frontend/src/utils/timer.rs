use gloo_timers::future::TimeoutFuture;
use leptos::*;

/// How long success/error banners stay on screen.
pub const MESSAGE_DISPLAY_MILLIS: u32 = 5_000;
/// Delay before the post-success redirect of the password flows.
pub const REDIRECT_DELAY_MILLIS: u32 = 3_000;

/// Clears a banner signal once the display window elapses. The owning view
/// may have been disposed by then; `try_set` turns the late write into a
/// no-op instead of a panic.
pub fn clear_after(signal: RwSignal<Option<String>>, millis: u32) {
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        let _ = signal.try_set(None);
    });
}

pub fn redirect_after(path: &'static str, millis: u32) {
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(path);
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn banner_clears_after_display_window() {
        let runtime = create_runtime();
        let banner = create_rw_signal(Some("Utilisateur créé".to_string()));
        clear_after(banner, 20);
        TimeoutFuture::new(80).await;
        assert_eq!(banner.get_untracked(), None);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn late_clear_on_disposed_view_is_a_no_op() {
        let runtime = create_runtime();
        let banner = create_rw_signal(Some("Erreur".to_string()));
        runtime.dispose();
        // The write lands after disposal and must not panic.
        clear_after(banner, 20);
        TimeoutFuture::new(80).await;
    }
}
