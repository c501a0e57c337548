//! Headless host shell: everything the first-run use cases need from the
//! outside world, assembled behind their ports.

pub mod adapters;
pub mod bootstrap;
pub mod screens;
