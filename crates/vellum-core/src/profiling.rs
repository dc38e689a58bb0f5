//! Profiling hooks based on the `puffin` crate.
//!
//! With the `profiling` feature enabled, [`profile_function!`] and
//! [`profile_scope!`] forward to puffin. Without it they expand to nothing,
//! so component render paths can be instrumented unconditionally.

#[cfg(feature = "profiling")]
pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    () => {};
    ($data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {};
    ($name:expr, $data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

/// Turn scope collection on or off.
///
/// # Example
/// ```no_run
/// vellum_core::profiling::set_enabled(true);
/// ```
#[inline]
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);
    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
}

/// Mark the end of one render pass.
///
/// Hosts that render many trees in a loop call this between passes so the
/// profiler groups scopes per pass.
#[inline]
pub fn finish_pass() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
