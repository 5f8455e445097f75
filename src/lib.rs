//! Overlap-only object tracker.
//!
//! The crate assigns persistent integer identities to the per-frame detections
//! produced by an external detector. Association between two consecutive frames
//! is performed only by the intersection-over-union of the boxes: there is no
//! motion model, no appearance features and no memory beyond the most recently
//! processed frame.
//!
//! ```
//! use iou_tracker::prelude::*;
//!
//! let mut tracker = IoUTracker::with_thresholds(0.3, 0.5).unwrap();
//! let tracks = tracker.process(&[Detection::new(0.0, 0.0, 10.0, 20.0, 0.9)]);
//! assert_eq!(tracks[0].id, 1);
//! let tracks = tracker.process(&[Detection::new(0.5, 0.5, 10.5, 20.5, 0.8)]);
//! assert_eq!(tracks[0].id, 1);
//! ```

/// Synthetic detection generators
pub mod examples;

/// Re-exports of the public API
pub mod prelude;

/// Tracker implementations
pub mod trackers;

/// Geometry primitives
pub mod utils;

#[cfg(feature = "python")]
mod py;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Errors {
    #[error("Confidence threshold (sigma_l) must be a finite non-negative number, got {0}.")]
    InvalidConfidenceThreshold(f32),
    #[error("IoU threshold (sigma_iou) must be a finite number within [0, 1], got {0}.")]
    InvalidIoUThreshold(f32),
    #[error("Unknown matching policy `{0}`, expected one of: greedy, exclusive, hungarian.")]
    UnknownMatchingPolicy(String),
}

pub(crate) const EPS: f32 = 0.00001;

/// Approximate comparison for float-based objects
///
pub trait EstimateClose {
    fn almost_same(&self, other: &Self, eps: f32) -> bool;
}

impl EstimateClose for f32 {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self - other).abs() < eps
    }
}
