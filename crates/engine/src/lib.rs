//! Tick drivers for the game cores
//!
//! The cores never own a clock. This crate provides the two ways of driving
//! them at their fixed periods:
//!
//! - [`FixedStepper`]: synchronous accumulator for hosts with their own frame loop
//! - [`Session`]: a tokio task serializing ticks and input commands, publishing
//!   snapshots on a watch channel
//!
//! plus [`GameConfig`], the environment-driven configuration that builds
//! seeded engines.

pub mod config;
pub mod session;
pub mod stepper;

pub use config::GameConfig;
pub use session::{Session, SessionHandle};
pub use stepper::FixedStepper;
