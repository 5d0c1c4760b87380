//! Day/Night Switch Renderer
//!
//! Builds the switch artwork as toolkit-neutral primitives.
//!
//! # Module Structure
//!
//! ```text
//! dn-renderer/
//! ├── config.rs    # Palette and scene quality settings
//! ├── path.rs      # Quadratic path flattening, x-monotone outlines
//! ├── region.rs    # Column-sampled regions clipped to the pill
//! └── scene.rs     # Scene construction from fraction and bounds
//! ```
//!
//! Every shape is clipped to the rounded switch body before it leaves this
//! crate, so a painter only needs triangles and filled circles.

pub mod config;
pub mod path;
pub mod region;
pub mod scene;

pub use config::{SceneConfig, SwitchPalette};
pub use region::{Region, Slab};
pub use scene::{Layer, Primitive, Scene, Shape, SunGeometry, build_scene};
