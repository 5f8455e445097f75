use crate::trackers::iou::options::IoUTrackerOptions;
use crate::trackers::iou::simple_iou::IoUTracker;
use crate::trackers::iou::{Detection, MatchingPolicy};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PyDetection = (f32, f32, f32, f32, f32);

#[pyclass]
#[pyo3(name = "IoUTracker")]
pub struct PyIoUTracker(IoUTracker);

#[pymethods]
impl PyIoUTracker {
    #[new]
    #[pyo3(signature = (sigma_l, sigma_iou, matching = "exclusive"))]
    fn new_py(sigma_l: f32, sigma_iou: f32, matching: &str) -> PyResult<Self> {
        let matching = matching
            .parse::<MatchingPolicy>()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let opts = IoUTrackerOptions::default()
            .sigma_l(sigma_l)
            .sigma_iou(sigma_iou)
            .matching(matching);
        IoUTracker::new(opts)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Tracks for the detections `[(x1, y1, x2, y2, confidence), ...]` of the next frame
    ///
    #[pyo3(name = "process", text_signature = "($self, detections)")]
    fn process_py(&mut self, detections: Vec<PyDetection>) -> Vec<(u64, PyDetection)> {
        let detections = detections
            .into_iter()
            .map(|(x1, y1, x2, y2, confidence)| Detection::new(x1, y1, x2, y2, confidence))
            .collect::<Vec<_>>();
        self.0
            .process(&detections)
            .into_iter()
            .map(|t| {
                let [x1, y1, x2, y2] = t.detection.bbox.as_ltrb();
                (t.id, (x1, y1, x2, y2, t.detection.confidence))
            })
            .collect()
    }

    #[pyo3(name = "current_epoch", text_signature = "($self)")]
    fn current_epoch_py(&self) -> usize {
        self.0.current_epoch()
    }

    #[pyo3(name = "max_id", text_signature = "($self)")]
    fn max_id_py(&self) -> u64 {
        self.0.max_id()
    }
}
