// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast`] - Renders the manager's toast container as an overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;
