// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-rendered diorama of a rainwater-harvesting car wash, built on wgpu.
//!
//! Pluvia draws a stylized installation — collecting canopy, gutters,
//! downspout, filter, pump, and buried tank, plus the wash bays it feeds —
//! with an orbit camera, animated water-flow lines, falling rain, and a
//! water-balance calculator for the harvesting economics.
//!
//! # Key entry points
//!
//! - [`engine::DioramaEngine`] — simulation, rendering, and command
//!   execution
//! - [`Viewer`] — standalone winit window (feature `viewer`)
//! - [`options::Options`] — runtime configuration (camera, display, rain,
//!   flow, calculator, keybindings)
//! - [`calc::evaluate`] — the water-balance calculator
//!
//! # Architecture
//!
//! The scene is static geometry built once at startup; all motion comes
//! from a per-frame scheduler that advances the rain field, slides the
//! dash pattern along the flow lines, and (optionally) turns the orbit
//! camera. Rendering is three passes over one depth buffer: lit solids,
//! dashed lines, instanced rain streaks.

pub mod calc;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{DioramaEngine, PluviaCommand};
pub use error::PluviaError;
pub use input::{InputEvent, KeyAction, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
