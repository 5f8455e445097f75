/// IoU tracker implementation (confidence filtering, overlap matching, identity allocation)
///
pub mod iou;
