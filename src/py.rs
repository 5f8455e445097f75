use crate::trackers::iou::iou_py::PyIoUTracker;
use pyo3::prelude::*;

#[pymodule]
#[pyo3(name = "iou_tracker")]
fn iou_tracker_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add_class::<PyIoUTracker>()?;
    Ok(())
}
