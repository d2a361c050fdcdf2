//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quillnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // The application itself is event-driven with no command surface; this
    // probe only validates core crate wiring.
    println!("quillnote_core ping={}", quillnote_core::ping());
    println!("quillnote_core version={}", quillnote_core::core_version());
}
