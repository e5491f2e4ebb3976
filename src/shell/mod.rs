// Composition root for the posts service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the post repository and wire it into the inbound adapters.
// - Own every transport concern: routes, CORS, tracing, listening address.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
