//! Core types for keygate

mod output;
mod phase;
mod reason;

pub use output::{BootOutput, DetectorOutput};
pub use phase::BootPhase;
pub use reason::ReasonCode;
