use crate::trackers::iou::Detection;

/// Removes the detections with low confidence scores, which are likely false positives.
///
/// Only detections with the confidence strictly greater than `sigma_l` are kept; the relative
/// order of the kept detections is preserved.
///
pub fn filter_low_confidence(detections: &[Detection], sigma_l: f32) -> Vec<Detection> {
    detections
        .iter()
        .filter(|d| d.confidence > sigma_l)
        .copied()
        .collect()
}
