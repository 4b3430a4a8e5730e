//! Version 1 API handlers.

mod agents;

pub use agents::{facets, get_agent, list_agents};
