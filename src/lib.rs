#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types (and the element layer) in no_std
// - detect: enables the `Detect<T>` probe consts

//! # plot-caps
//!
//! Capability detection and borrowed data views for chart-building APIs.
//!
//! Chart APIs want to accept "some numbers" without caring whether the
//! caller holds an array, a `Vec`, a literal or a single value, and without
//! copying the caller's data just to look at it. They also need to ask
//! questions about argument types: is this a flat sequence, a
//! sequence of sequences, a map, a string?
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present / Absent, If, And, Not)               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Detection                                               |
//! |  - TypeCaps table, iterable / 1d / 2d / pair / string predicates  |
//! |  - is_detected! and Detect<T> probes (concrete types)             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Views                                                   |
//! |  - View<'a, T>, Proxyable<T>                                      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Elements (alloc)                                        |
//! |  - Circles -> gnuplot plot / data / legend text                   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use plot_caps::prelude::*;
//!
//! let radii = vec![0.5, 1.5];
//! let mut circles = Circles::new(&[0.0, 4.0], &[0.0, 1.0], &radii);
//!
//! let mut script = String::new();
//! circles.write_script(&mut script, &mut ColorCycle::default()).unwrap();
//! assert!(script.starts_with("plot '-' with circles"));
//! assert!(script.ends_with("e\n"));
//!
//! assert!(is_iterable_2d::<Vec<Vec<f64>>>());
//! assert!(is_detected!(Vec<f64>: Clone & !Copy));
//! ```

// Allow `::plot_caps` to work inside the crate itself
extern crate self as plot_caps;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Borrowed Views
// =============================================================================
pub mod view;

// =============================================================================
// Layer 3: Drawable Elements
// =============================================================================
#[cfg(feature = "alloc")]
pub mod element;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use detect::TypeCaps;
pub use primitives::{Absent, Bool, Present};
pub use view::{Proxyable, View};

// Re-export proc-macros. Derives share their name with the trait they
// implement, like `Debug`.
pub use macros::{is_detected, Proxyable, TypeCaps};

/// Common items for chart-building code.
pub mod prelude {
    pub use crate::detect::{
        is_iterable, is_iterable_1d, is_iterable_2d, is_iterable_pair, is_pair, is_string,
        IterableTraits, TypeCaps,
    };
    #[cfg(feature = "detect")]
    pub use crate::detect::{
        CloneFallback, DebugFallback, Detect, IterableFallback, StringLikeFallback,
        TypeCapsFallback,
    };
    pub use crate::primitives::{Absent, Bool, Present};
    pub use crate::view::{Proxyable, View};
    #[cfg(feature = "alloc")]
    pub use crate::element::{AxesObject, Circles, CirclesStyle, Color, ColorCycle, Palette, PlotError};
    pub use macros::is_detected;
}
