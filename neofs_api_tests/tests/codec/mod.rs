pub mod conformance;
pub mod determinism;
pub mod malformed;
pub mod signing;
