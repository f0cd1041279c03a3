//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every read site is also gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (login attempts, button clicks, screen changes).
    pub print_ui_interactions: bool,
    /// Emit every key written to or removed from a key-value store.
    pub print_storage_writes: bool,
    /// Emit webhook dispatch details (target URL, payload).
    pub print_webhook: bool,
    /// Emit particle collection rebuilds when the viewport crosses the mobile breakpoint.
    pub print_particle_resizes: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_storage_writes: false,
    print_webhook: false,
    print_particle_resizes: false,
};
