//! One-shot device location acquisition for the check-in form.
//!
//! Permission denial (or a runtime without geolocation) blocks the whole
//! submission UI; a failed or timed-out fix only logs a warning and the
//! submission proceeds without coordinates.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const DENIED_MESSAGE: &str = "Vous devez activer votre localisation dans votre navigateur afin de pouvoir marquer votre présence ou absence. Rechargez la page si nécessaire après activation de la localisation";
pub const UNSUPPORTED_MESSAGE: &str = "La géolocalisation n'est pas supporté par votre navigateur";

const POSITION_TIMEOUT_MILLIS: u32 = 5_000;

#[cfg(target_arch = "wasm32")]
fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

// `web_sys::window()` panics off-wasm; headless runtimes have no window.
#[cfg(not(target_arch = "wasm32"))]
fn window() -> Option<web_sys::Window> {
    None
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Queries the permission state, then requests a single position fix when
/// granted or still undecided. `on_blocked` fires for denial or an
/// unsupported runtime; `on_fix` fires at most once with the coordinates.
pub fn acquire<F, B>(on_fix: F, on_blocked: B)
where
    F: Fn(GeoFix) + 'static,
    B: Fn(&'static str) + 'static,
{
    let window = match window() {
        Some(window) => window,
        None => {
            on_blocked(UNSUPPORTED_MESSAGE);
            return;
        }
    };
    let navigator = window.navigator();
    let geolocation = match navigator.geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            on_blocked(UNSUPPORTED_MESSAGE);
            return;
        }
    };
    match navigator.permissions() {
        Ok(permissions) => query_then_request(permissions, geolocation, on_fix, on_blocked),
        // No Permissions API: go straight for the fix.
        Err(_) => request_position(&geolocation, on_fix),
    }
}

fn query_then_request<F, B>(
    permissions: web_sys::Permissions,
    geolocation: web_sys::Geolocation,
    on_fix: F,
    on_blocked: B,
) where
    F: Fn(GeoFix) + 'static,
    B: Fn(&'static str) + 'static,
{
    let descriptor = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&descriptor, &"name".into(), &"geolocation".into());
    let promise = match permissions.query(&descriptor) {
        Ok(promise) => promise,
        Err(_) => {
            request_position(&geolocation, on_fix);
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        let state = JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| value.dyn_into::<web_sys::PermissionStatus>().ok())
            .map(|status| status.state());
        match state {
            Some(web_sys::PermissionState::Denied) => on_blocked(DENIED_MESSAGE),
            _ => request_position(&geolocation, on_fix),
        }
    });
}

fn request_position<F>(geolocation: &web_sys::Geolocation, on_fix: F)
where
    F: Fn(GeoFix) + 'static,
{
    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(POSITION_TIMEOUT_MILLIS);
    options.set_maximum_age(0);

    let success = Closure::once_into_js(move |position: web_sys::Position| {
        let coords = position.coords();
        on_fix(GeoFix {
            latitude: coords.latitude(),
            longitude: coords.longitude(),
        });
    });
    let failure = Closure::once_into_js(move |error: web_sys::PositionError| {
        // Timeouts degrade to a submission without coordinates.
        log::warn!(
            "échec de géolocalisation ({}): {}",
            error.code(),
            error.message()
        );
    });

    let _ = geolocation.get_current_position_with_error_callback_and_options(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
        &options,
    );
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runtime_without_window_reports_unsupported() {
        let blocked = Rc::new(RefCell::new(None::<&'static str>));
        let blocked_out = blocked.clone();
        acquire(
            |_fix| panic!("no fix expected without a window"),
            move |message| *blocked_out.borrow_mut() = Some(message),
        );
        assert_eq!(*blocked.borrow(), Some(UNSUPPORTED_MESSAGE));
    }
}
