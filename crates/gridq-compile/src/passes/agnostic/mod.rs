//! Device-agnostic passes.

mod cleanup;
mod interaction;

pub use cleanup::{DropEmptyMoments, DropNegligible};
pub use interaction::RequireFullInteractions;
