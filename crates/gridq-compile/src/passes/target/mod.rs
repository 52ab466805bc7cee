//! Device-targeted passes.

mod mapping;
mod packing;
mod verification;

pub use mapping::QubitMapping;
pub use packing::MomentPacking;
pub use verification::{DeviceVerification, VerificationSummary, moment_durations};
