//! Built-in optimization passes.
//!
//! Passes are organized into two categories:
//! - [`agnostic`]: Device-agnostic passes that rewrite gates and moments
//! - [`target`]: Passes that remap onto, pack for, or verify against a device

pub mod agnostic;
pub mod target;

pub use agnostic::{DropEmptyMoments, DropNegligible, RequireFullInteractions};
pub use target::{
    DeviceVerification, MomentPacking, QubitMapping, VerificationSummary, moment_durations,
};
