use crate::trackers;
use crate::utils;

pub use trackers::iou::options::IoUTrackerOptions;
pub use trackers::iou::simple_iou::IoUTracker;
pub use trackers::iou::{
    Detection, IoUTrack, MatchingPolicy, DEFAULT_SIGMA_IOU, DEFAULT_SIGMA_L,
};
pub use utils::bbox::BoundingBox;

pub use crate::{Errors, EstimateClose};
