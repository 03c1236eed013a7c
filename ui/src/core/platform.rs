//! Platform glue for spawning futures off the render path.

use std::future::Future;

/// Spawn a future on the UI event loop. Used for deferred recomputation and
/// other fire-and-forget work scheduled from component scope.
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(fut);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::spawn_forever(fut);
    }
}
