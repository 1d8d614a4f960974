// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryStore, base_time};
use kawaraban::application::services::ApplicationServices;
use kawaraban::presentation::http::{routes::build_router, state::HttpState};

pub fn services_with(store: Arc<InMemoryStore>) -> ApplicationServices {
    ApplicationServices::new(
        Arc::clone(&store) as _,
        Arc::clone(&store) as _,
        Arc::clone(&store) as _,
        Arc::clone(&store) as _,
        Arc::new(FixedClock(base_time())),
    )
}

pub fn make_test_router(store: Arc<InMemoryStore>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services_with(store)),
    };
    build_router(state)
}
