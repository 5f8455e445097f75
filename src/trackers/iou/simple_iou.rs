use crate::trackers::iou::allocator::IdAllocator;
use crate::trackers::iou::filter::filter_low_confidence;
use crate::trackers::iou::options::IoUTrackerOptions;
use crate::trackers::iou::voting::IoUVoting;
use crate::trackers::iou::{Detection, IoUTrack};
use anyhow::Result;
use log::debug;

/// Easy to use IoU tracker implementation
///
/// The tracker remembers only the tracks produced for the most recently processed frame. Every
/// call to [`process`](IoUTracker::process) reads and replaces that state, so one instance must be
/// fed the frames of a single stream sequentially. Independent instances share nothing.
///
pub struct IoUTracker {
    opts: IoUTrackerOptions,
    voting: IoUVoting,
    allocator: IdAllocator,
    previous: Vec<IoUTrack>,
    initialized: bool,
    epoch: usize,
}

impl IoUTracker {
    /// Creates new tracker
    ///
    /// # Parameters
    /// * `opts` - tracker options; invalid thresholds are rejected with [`Errors`](crate::Errors)
    ///
    pub fn new(opts: IoUTrackerOptions) -> Result<Self> {
        opts.validate()?;
        Ok(Self {
            voting: IoUVoting::new(opts.get_sigma_iou(), opts.get_matching()),
            opts,
            allocator: IdAllocator::default(),
            previous: Vec::default(),
            initialized: false,
            epoch: 0,
        })
    }

    /// Creates new tracker with the default matching policy
    ///
    /// # Parameters
    /// * `sigma_l` - confidence cutoff, detections with confidence `<= sigma_l` are dropped
    /// * `sigma_iou` - minimal IoU required to carry an identity to the next frame
    ///
    pub fn with_thresholds(sigma_l: f32, sigma_iou: f32) -> Result<Self> {
        Self::new(
            IoUTrackerOptions::default()
                .sigma_l(sigma_l)
                .sigma_iou(sigma_iou),
        )
    }

    pub fn options(&self) -> &IoUTrackerOptions {
        &self.opts
    }

    /// The number of processed frames
    ///
    pub fn current_epoch(&self) -> usize {
        self.epoch
    }

    /// The highest identity ever assigned, `0` before any identity is assigned
    ///
    pub fn max_id(&self) -> u64 {
        self.allocator.max_id()
    }

    /// Whether at least one frame was processed
    ///
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The tracks of the most recently processed frame
    ///
    pub fn tracks(&self) -> &[IoUTrack] {
        &self.previous
    }

    /// Receive tracking information for the detections of the next frame
    ///
    /// # Parameters
    /// * `detections` - bounding boxes with confidences received from a detector
    ///
    /// Returns the tracks of the frame: detections that inherited an identity from the previous
    /// frame go first, then the detections with newly assigned identities; both groups keep the
    /// order of `detections`.
    ///
    pub fn process(&mut self, detections: &[Detection]) -> Vec<IoUTrack> {
        self.epoch += 1;
        let filtered = filter_low_confidence(detections, self.opts.get_sigma_l());

        let (mut tracks, remaining) = if self.initialized {
            self.voting.winners(&filtered, &self.previous)
        } else {
            self.initialized = true;
            (Vec::default(), filtered)
        };

        let matched = tracks.len();
        let new_tracks = self.allocator.allocate(remaining);
        debug!(
            "Epoch {}: received {}, kept {}, matched {}, new {}, max id {}",
            self.epoch,
            detections.len(),
            matched + new_tracks.len(),
            matched,
            new_tracks.len(),
            self.allocator.max_id()
        );

        tracks.extend(new_tracks);
        self.previous = tracks.clone();
        tracks
    }
}
