//! # Starfield
//!
//! An interactive perspective starfield: stars stream outward from a
//! vanishing point at the screen center, and clicking drops new stars
//! under the pointer.
//!
//! ## Features
//!
//! - **Depth-based projection**: each star stores one depth value; screen
//!   position and size come from a single perspective divide
//! - **Recycling**: stars that fly past the depth limit respawn in place,
//!   so the population only grows through user clicks
//! - **ECS frame loop**: input and physics run as `bevy_ecs` systems on a
//!   fixed timestep
//! - **Two renderers**: a wgpu instanced circle renderer and a CPU canvas
//!   that writes PNG frames
//!
//! ## Architecture
//!
//! - **State (Resource)**: `StarField`, `Time`, `Viewport`, `InputBuffer`
//! - **Logic**: `StarField` owns all field mutation
//! - **System**: ECS systems translate input into field commands and tick
//!   the field
//!
//! ### Example
//!
//! ```
//! use starfield::config::StarfieldConfig;
//! use starfield::render::{draw_field, CanvasRenderer};
//! use starfield::starfield::StarField;
//! use starfield::ecs::Viewport;
//!
//! let mut config = StarfieldConfig::default();
//! config.field.seed = Some(7);
//! let viewport = Viewport { width: 800, height: 600 };
//!
//! let mut field = StarField::from_config(config.field_for_window(), viewport.center());
//! field.tick();
//!
//! let mut canvas = CanvasRenderer::new(800, 600, config.window.background);
//! let drawn = draw_field(&field, &mut canvas, &viewport, &config.render);
//! assert!(drawn <= field.population_count());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Application loop and error types
//! - [`config`]: TOML/JSON configuration
//! - [`starfield`]: Stars, projection and the field simulation
//! - [`input`]: Input to field command mapping
//! - [`ecs`]: Frame loop resources and schedules
//! - [`render`]: Rendering backends
//! - [`diagnostics`]: Overlay text and statistics

/// Application loop, error types and shared macros
pub mod core;
/// Platform abstraction for windowing input
pub mod platform;
/// Rendering backends
pub mod render;
/// Frame loop resources and schedules
pub mod ecs;
/// Configuration system
pub mod config;
/// Star model and field simulation
pub mod starfield;
/// Input to field command mapping
pub mod input;
/// Overlay text and field statistics
pub mod diagnostics;
