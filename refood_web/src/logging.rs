//! Tracing setup for the browser console.

/// Install the global subscriber. Call once, before mounting.
#[cfg(target_arch = "wasm32")]
pub fn init(max_level: tracing::Level) {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

/// Native builds (unit tests) run without a subscriber.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(_max_level: tracing::Level) {}
