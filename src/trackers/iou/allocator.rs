use crate::trackers::iou::{Detection, IoUTrack};

/// Monotonic identity source of a tracker instance.
///
/// Identities start from `1`; an identity handed out once is never produced again.
///
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    max_id: u64,
}

impl IdAllocator {
    /// The last allocated identity or `0` when nothing was allocated yet
    ///
    pub fn max_id(&self) -> u64 {
        self.max_id
    }

    /// Assigns fresh identities `max_id + 1, max_id + 2, ...` to the detections in their order.
    ///
    pub fn allocate(&mut self, detections: Vec<Detection>) -> Vec<IoUTrack> {
        detections
            .into_iter()
            .map(|detection| {
                self.max_id += 1;
                IoUTrack {
                    id: self.max_id,
                    detection,
                    length: 1,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::trackers::iou::allocator::IdAllocator;
    use crate::trackers::iou::Detection;

    #[test]
    fn sequential() {
        let mut allocator = IdAllocator::default();
        assert_eq!(allocator.max_id(), 0);

        let dets = vec![
            Detection::new(0.0, 0.0, 1.0, 1.0, 0.9),
            Detection::new(1.0, 1.0, 2.0, 2.0, 0.8),
        ];
        let tracks = allocator.allocate(dets.clone());
        assert_eq!(tracks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(tracks[0].detection, dets[0]);
        assert_eq!(tracks[1].detection, dets[1]);
        assert!(tracks.iter().all(|t| t.length == 1));
        assert_eq!(allocator.max_id(), 2);

        let tracks = allocator.allocate(vec![Detection::new(5.0, 5.0, 6.0, 6.0, 0.7)]);
        assert_eq!(tracks[0].id, 3);
        assert_eq!(allocator.max_id(), 3);
    }

    #[test]
    fn empty_keeps_max_id() {
        let mut allocator = IdAllocator::default();
        allocator.allocate(vec![Detection::default()]);
        assert!(allocator.allocate(Vec::default()).is_empty());
        assert_eq!(allocator.max_id(), 1);
    }
}
