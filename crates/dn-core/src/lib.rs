//! Day/Night Switch Core
//!
//! Toolkit-independent logic behind the day/night switch:
//! - Fraction: clamped 0..1 progress driving every visual
//! - Layout: aspect-preserving measurement of the switch bounds
//! - Gesture: tap vs. drag disambiguation
//! - Transition: frame-ticked interpolation towards a boundary
//! - Switch: the checked/fraction state machine with its callback slots
//! - Settings/Manager: persisted night-mode booleans and host theme glue
//! - Bindings: wiring a switch to the night-mode manager

pub mod bindings;
pub mod color;
pub mod constants;
pub mod fraction;
pub mod gesture;
pub mod layout;
pub mod manager;
pub mod settings;
pub mod switch;
pub mod transition;

pub use bindings::*;
pub use color::*;
pub use constants::*;
pub use fraction::*;
pub use gesture::*;
pub use layout::*;
pub use manager::*;
pub use settings::*;
pub use switch::*;
pub use transition::*;
