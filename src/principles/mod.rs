//! Principle Demonstrations
//!
//! One module per SOLID principle. Each holds a `bad` and a `good` set of
//! collaborators and the two scenario bodies that narrate them.

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use crate::registry::Scenario;

/// Every demonstration, ready for registration
pub fn scenarios() -> Vec<Scenario> {
    [
        srp::scenarios(),
        ocp::scenarios(),
        lsp::scenarios(),
        isp::scenarios(),
        dip::scenarios(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
