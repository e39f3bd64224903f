pub mod user_agent;

pub use user_agent::{build_headers, pick_user_agent};
