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
// Tests assert on known-good fixtures.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Four-slot camera rig controller for real-time 3D scenes.
//!
//! The rig switches between an orbital camera, a mid-shot camera with
//! hold-to-zoom, a first-person look camera and a waypoint path-follower,
//! blending the visible camera from one slot's pose to the next.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the state machine, ticked once per frame
//! - [`input::InputProcessor`] - folds window events into a
//!   [`input::FrameInput`] per frame
//! - [`options::Options`] - rig tuning, key bindings and scene setup, with
//!   TOML presets
//! - [`camera::RenderTargets`] - the seam through which the rig shows and
//!   hides each slot's render target
//!
//! # Frame loop
//!
//! ```
//! use camrig::camera::{CameraRig, RenderTargetSet, SlotId};
//! use camrig::input::InputProcessor;
//! use camrig::options::Options;
//!
//! let options = Options::default();
//! let mut targets = RenderTargetSet::default();
//! let mut rig = CameraRig::new(&options.scene, options.rig.clone(), &mut targets);
//! let mut input = InputProcessor::with_key_bindings(options.keybindings);
//!
//! let _ = input.handle_key("Digit3", true);
//! for _ in 0..10 {
//!     let frame = input.take_frame();
//!     rig.update(1.0 / 60.0, &frame, &mut targets);
//! }
//! assert!(rig.state().is_transitioning());
//! assert_eq!(targets.sole_enabled(), Some(SlotId::Orbital));
//! ```
//!
//! The rig is single-threaded and owns every camera pose; it never blocks
//! and keeps no global state.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{CameraRig, RenderTargets, SlotId};
pub use error::RigError;
pub use input::{FrameInput, InputEvent, InputProcessor};
pub use options::Options;
