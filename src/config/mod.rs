//! Configuration for TrustComply
//!
//! Path resolution for the policy file and the compliance policy itself.

pub mod paths;
pub mod policy;

pub use paths::TrustPaths;
pub use policy::CompliancePolicy;
