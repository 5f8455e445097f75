use crate::trackers::iou::{MatchingPolicy, DEFAULT_SIGMA_IOU, DEFAULT_SIGMA_L};
use crate::Errors;
use anyhow::Result;

/// Class that is used to configure the IoU Tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IoUTrackerOptions {
    sigma_l: f32,
    sigma_iou: f32,
    matching: MatchingPolicy,
}

impl Default for IoUTrackerOptions {
    fn default() -> Self {
        Self {
            sigma_l: DEFAULT_SIGMA_L,
            sigma_iou: DEFAULT_SIGMA_IOU,
            matching: MatchingPolicy::default(),
        }
    }
}

impl IoUTrackerOptions {
    /// The confidence cutoff.
    ///
    /// Detections with the confidence less than or equal to `sigma_l` are discarded before the
    /// tracking happens. Must be finite and non-negative.
    ///
    pub fn sigma_l(mut self, sigma_l: f32) -> Self {
        self.sigma_l = sigma_l;
        self
    }

    /// The minimal IoU between a detection and a previous frame track required to carry the
    /// track's identity to the detection. The comparison is inclusive. Must be within `[0, 1]`.
    ///
    pub fn sigma_iou(mut self, sigma_iou: f32) -> Self {
        self.sigma_iou = sigma_iou;
        self
    }

    /// The policy resolving competition of the detections for the same previous track.
    ///
    pub fn matching(mut self, matching: MatchingPolicy) -> Self {
        self.matching = matching;
        self
    }

    pub fn get_sigma_l(&self) -> f32 {
        self.sigma_l
    }

    pub fn get_sigma_iou(&self) -> f32 {
        self.sigma_iou
    }

    pub fn get_matching(&self) -> MatchingPolicy {
        self.matching
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.sigma_l.is_finite() || self.sigma_l < 0.0 {
            return Err(Errors::InvalidConfidenceThreshold(self.sigma_l).into());
        }
        if !self.sigma_iou.is_finite() || !(0.0..=1.0).contains(&self.sigma_iou) {
            return Err(Errors::InvalidIoUThreshold(self.sigma_iou).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::trackers::iou::options::IoUTrackerOptions;
    use crate::trackers::iou::MatchingPolicy;
    use crate::Errors;

    #[test]
    fn defaults() {
        let opts = IoUTrackerOptions::default();
        assert_eq!(opts.get_sigma_l(), 0.0);
        assert_eq!(opts.get_sigma_iou(), 0.5);
        assert_eq!(opts.get_matching(), MatchingPolicy::Exclusive);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn builder() {
        let opts = IoUTrackerOptions::default()
            .sigma_l(0.3)
            .sigma_iou(0.7)
            .matching(MatchingPolicy::Hungarian);
        assert_eq!(opts.get_sigma_l(), 0.3);
        assert_eq!(opts.get_sigma_iou(), 0.7);
        assert_eq!(opts.get_matching(), MatchingPolicy::Hungarian);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn thresholds_bounds() {
        assert!(IoUTrackerOptions::default().sigma_iou(0.0).validate().is_ok());
        assert!(IoUTrackerOptions::default().sigma_iou(1.0).validate().is_ok());

        let err = IoUTrackerOptions::default().sigma_l(-0.1).validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::InvalidConfidenceThreshold(_))
        ));

        for sigma_iou in [-0.1, 1.1, f32::NAN, f32::INFINITY] {
            let err = IoUTrackerOptions::default()
                .sigma_iou(sigma_iou)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Errors>(),
                Some(Errors::InvalidIoUThreshold(_))
            ));
        }

        assert!(IoUTrackerOptions::default().sigma_l(f32::NAN).validate().is_err());
    }
}
