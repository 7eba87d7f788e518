// Infrastructure implementations shared across flows.
//
// Business logic (what to prompt for) lives in the flows layer; this module
// only knows how to talk to providers.

pub mod ai;
pub mod test_dependencies;

pub use ai::{BaseAI, GeminiAI};
