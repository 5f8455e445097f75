use crate::trackers::iou::{Detection, IoUTrack, MatchingPolicy};
use crate::utils::bbox::BoundingBox;
use itertools::Itertools;
use log::{debug, trace};
use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

const F32_I64_MULT: f32 = 1_000_000.0;

/// Candidate association between a current detection and a previous frame track
///
#[derive(Debug, Clone, Copy)]
struct Candidate {
    detection: usize,
    track: usize,
    iou: f32,
}

/// Voting engine that selects the previous frame track for every current detection
///
pub struct IoUVoting {
    sigma_iou: f32,
    policy: MatchingPolicy,
}

impl IoUVoting {
    /// Constructs new engine
    ///
    /// # Arguments
    /// * `sigma_iou` - minimal IoU (inclusive) to accept a match
    /// * `policy` - how detections compete for the same track
    ///
    pub fn new(sigma_iou: f32, policy: MatchingPolicy) -> Self {
        Self { sigma_iou, policy }
    }

    /// Matches the current detections against the previous frame tracks.
    ///
    /// Returns the detections that inherited an identity (in the order of the detections) and
    /// the detections left without an identity (in the order of the detections).
    ///
    pub fn winners(
        &self,
        detections: &[Detection],
        previous: &[IoUTrack],
    ) -> (Vec<IoUTrack>, Vec<Detection>) {
        if previous.is_empty() {
            return (Vec::default(), detections.to_vec());
        }

        let assignments = match self.policy {
            MatchingPolicy::Greedy => self.greedy(detections, previous),
            MatchingPolicy::Exclusive => self.exclusive(detections, previous),
            MatchingPolicy::Hungarian => self.hungarian(detections, previous),
        };

        let mut matched = Vec::with_capacity(detections.len());
        let mut unmatched = Vec::default();
        for (detection, assignment) in detections.iter().zip(assignments) {
            match assignment {
                Some(track) => {
                    let track = &previous[track];
                    matched.push(IoUTrack {
                        id: track.id,
                        detection: *detection,
                        length: track.length + 1,
                    })
                }
                None => unmatched.push(*detection),
            }
        }

        debug!(
            "Voting ({:?}): {} detections vs {} tracks, matched: {}, unmatched: {}",
            self.policy,
            detections.len(),
            previous.len(),
            matched.len(),
            unmatched.len()
        );

        (matched, unmatched)
    }

    fn candidates<'a>(
        &'a self,
        detections: &'a [Detection],
        previous: &'a [IoUTrack],
    ) -> impl Iterator<Item = Candidate> + 'a {
        detections
            .iter()
            .enumerate()
            .flat_map(move |(detection, d)| {
                previous
                    .iter()
                    .enumerate()
                    .map(move |(track, t)| Candidate {
                        detection,
                        track,
                        iou: BoundingBox::iou(&d.bbox, t.bbox()),
                    })
            })
            .filter(move |c| c.iou >= self.sigma_iou)
    }

    fn greedy(&self, detections: &[Detection], previous: &[IoUTrack]) -> Vec<Option<usize>> {
        detections
            .iter()
            .map(|d| {
                let mut best: Option<(usize, f32)> = None;
                for (track, t) in previous.iter().enumerate() {
                    let iou = BoundingBox::iou(&d.bbox, t.bbox());
                    // the first track wins on ties
                    if best.map_or(true, |(_, best_iou)| iou > best_iou) {
                        best = Some((track, iou));
                    }
                }
                best.filter(|(_, iou)| *iou >= self.sigma_iou)
                    .map(|(track, iou)| {
                        trace!("Greedy | Track: {}, IoU: {}", previous[track].id, iou);
                        track
                    })
            })
            .collect()
    }

    fn exclusive(&self, detections: &[Detection], previous: &[IoUTrack]) -> Vec<Option<usize>> {
        let candidates = self
            .candidates(detections, previous)
            .sorted_by(|l, r| r.iou.total_cmp(&l.iou))
            .collect::<Vec<_>>();

        let mut assignments = vec![None; detections.len()];
        let mut used_tracks = vec![false; previous.len()];

        for c in candidates {
            if assignments[c.detection].is_some() || used_tracks[c.track] {
                continue;
            }
            trace!(
                "Exclusive | Detection: {}, Track: {}, IoU: {}",
                c.detection,
                previous[c.track].id,
                c.iou
            );
            assignments[c.detection] = Some(c.track);
            used_tracks[c.track] = true;
        }

        assignments
    }

    fn hungarian(&self, detections: &[Detection], previous: &[IoUTrack]) -> Vec<Option<usize>> {
        if detections.is_empty() {
            return Vec::default();
        }

        // every detection has its own zero-weight column to stay unmatched,
        // so the matrix is always wide enough for the solver
        let mut weights = Matrix::new(
            detections.len(),
            previous.len() + detections.len(),
            0i64,
        );
        for c in self.candidates(detections, previous) {
            if let Some(w) = weights.get_mut((c.detection, c.track)) {
                *w = (c.iou * F32_I64_MULT) as i64 + 1;
            }
        }

        let (_, solution) = kuhn_munkres(&weights);

        solution
            .into_iter()
            .enumerate()
            .map(|(detection, track)| {
                let eligible = track < previous.len()
                    && weights
                        .get((detection, track))
                        .map_or(false, |w| *w > 0);
                if eligible {
                    trace!(
                        "Hungarian | Detection: {}, Track: {}",
                        detection,
                        previous[track].id
                    );
                    Some(track)
                } else {
                    None
                }
            })
            .collect()
    }
}
