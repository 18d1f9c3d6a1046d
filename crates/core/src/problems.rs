pub mod optimization;

pub use optimization::{Derivatives, Objective};
