//! Small crate-wide convenience macros.

/// `console.log` in debug wasm builds, nothing anywhere else.
///
/// Reducers log through this macro, so it must stay inert on native targets
/// where `web_sys::console` panics under `cargo test`.
///
/// ```rust,ignore
/// debug_log!("cart/add pid={} req={}", pid, request_id);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if cfg!(all(debug_assertions, target_arch = "wasm32")) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    }};
}

/// Console error that survives release builds.  Same native guard as
/// [`debug_log!`].
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        if cfg!(target_arch = "wasm32") {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
    }};
}
