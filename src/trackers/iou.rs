use crate::utils::bbox::BoundingBox;
use crate::{Errors, EstimateClose, EPS};
use std::str::FromStr;

/// Tracker configuration
pub mod options;

/// Low-confidence detection filtering
pub mod filter;

/// Matching of the current detections against the previous frame tracks
///
pub mod voting;

/// Identity allocation for unmatched detections
pub mod allocator;

/// IoU tracker with a very tiny interface
pub mod simple_iou;

#[cfg(feature = "python")]
pub mod iou_py;

/// Default minimal overlap required to carry an identity into the next frame
pub const DEFAULT_SIGMA_IOU: f32 = 0.5;

/// Default confidence cutoff; detections with confidence `<= DEFAULT_SIGMA_L` are dropped
pub const DEFAULT_SIGMA_L: f32 = 0.0;

/// Detected object received from a detector for the current frame
///
#[derive(Debug, Clone, Copy, Default)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub confidence: f32,
}

impl Detection {
    /// Constructor
    ///
    /// # Parameters
    /// * `x1`, `y1` - top-left corner
    /// * `x2`, `y2` - bottom-right corner
    /// * `confidence` - detector score
    ///
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32) -> Self {
        Self {
            bbox: BoundingBox::new(x1, y1, x2, y2),
            confidence,
        }
    }

    pub fn from_bbox(bbox: BoundingBox, confidence: f32) -> Self {
        Self { bbox, confidence }
    }
}

/// Detector row in the format `[x1, y1, x2, y2, confidence]`
///
impl From<[f32; 5]> for Detection {
    fn from(row: [f32; 5]) -> Self {
        Detection::new(row[0], row[1], row[2], row[3], row[4])
    }
}

impl EstimateClose for Detection {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        self.bbox.almost_same(&other.bbox, eps) && self.confidence.almost_same(&other.confidence, eps)
    }
}

impl PartialEq<Self> for Detection {
    fn eq(&self, other: &Self) -> bool {
        self.almost_same(other, EPS)
    }
}

/// Online track structure that is returned for every processed frame
///
#[derive(Debug, Clone, PartialEq)]
pub struct IoUTrack {
    /// Track identity, unique within the tracker instance
    pub id: u64,
    /// The detection observed for the identity in the current frame
    pub detection: Detection,
    /// The number of consecutive frames the identity is carried through
    pub length: usize,
}

impl IoUTrack {
    pub fn bbox(&self) -> &BoundingBox {
        &self.detection.bbox
    }
}

/// How current detections compete for the identities of the previous frame
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingPolicy {
    /// Every detection independently takes the previous track with the maximal IoU.
    ///
    /// The matching is not exclusive: several detections may inherit the same identity
    /// when each of them has its best overlap with the same previous track.
    Greedy,
    /// Candidate pairs are committed in the order of decreasing IoU; every previous track
    /// and every detection participates in at most one match.
    #[default]
    Exclusive,
    /// Optimal one-to-one assignment maximizing the total IoU of the accepted pairs.
    Hungarian,
}

impl FromStr for MatchingPolicy {
    type Err = Errors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(MatchingPolicy::Greedy),
            "exclusive" => Ok(MatchingPolicy::Exclusive),
            "hungarian" => Ok(MatchingPolicy::Hungarian),
            _ => Err(Errors::UnknownMatchingPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::trackers::iou::{Detection, MatchingPolicy};
    use crate::utils::bbox::BoundingBox;
    use crate::Errors;

    #[test]
    fn detection_from_row() {
        let d = Detection::from([1.0, 0.9, 3.6, 3.0, 0.98]);
        assert_eq!(d, Detection::new(1.0, 0.9, 3.6, 3.0, 0.98));
        assert_eq!(d.bbox, BoundingBox::new(1.0, 0.9, 3.6, 3.0));
        assert_ne!(d, Detection::new(1.0, 0.9, 3.6, 3.0, 0.5));
    }

    #[test]
    fn default_policy() {
        assert_eq!(MatchingPolicy::default(), MatchingPolicy::Exclusive);
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("greedy".parse::<MatchingPolicy>().unwrap(), MatchingPolicy::Greedy);
        assert_eq!("Hungarian".parse::<MatchingPolicy>().unwrap(), MatchingPolicy::Hungarian);
        assert!(matches!(
            "best".parse::<MatchingPolicy>(),
            Err(Errors::UnknownMatchingPolicy(_))
        ));
    }
}
