use axum::Router;

use crate::{
  domains::registration::rest::{function_routes, server_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .merge(function_routes())
    .merge(server_routes())
    .with_state(state)
}
