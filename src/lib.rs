#![doc(test(attr(deny(warnings))))]

//! Finman Client offers the HTTP wrapper, resource APIs, and stateful stores
//! that power clients of the Finance Manager backend.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod notify;
pub mod session;
pub mod stores;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Finman Client tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("finman_client=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
