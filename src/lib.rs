//! # Twine Ampacity
//!
//! Steady-state thermal rating of bare overhead conductors following
//! IEEE 738, built as a [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! ```
//! use twine_ampacity::models::thermal::conductor::ConductorState;
//! use uom::si::electric_current::ampere;
//!
//! let drake = ConductorState::with_defaults("Drake ACSR")?;
//! let rating = drake.ampacity()?;
//!
//! assert!((rating.current.get::<ampere>() - 1025.7).abs() < 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's `core` module and moves to [`support`]
//! once it is useful across models. Only [`support`] is public API; each
//! model exposes its own types through re-exports.

pub mod models;
pub mod support;
