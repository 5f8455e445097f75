use iou_tracker::examples::DetectionGen;
use iou_tracker::prelude::*;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matching = std::env::var("MATCHING")
        .ok()
        .map(|m| m.parse::<MatchingPolicy>())
        .transpose()?
        .unwrap_or_default();

    let mut tracker = IoUTracker::new(
        IoUTrackerOptions::default()
            .sigma_l(0.6)
            .sigma_iou(0.5)
            .matching(matching),
    )?;

    let pos_drift = 1.0;
    let box_drift = 1.0;
    let mut b1 = DetectionGen::new(100.0, 100.0, 10.0, 15.0, pos_drift, box_drift);
    let mut b2 = DetectionGen::new(10.0, 10.0, 12.0, 18.0, pos_drift, box_drift);

    for _ in 0..10 {
        let detections = [b1.next(), b2.next()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let tracks = tracker.process(&detections);
        info!(
            "Epoch: {}, detections: {}, tracks: {}",
            tracker.current_epoch(),
            detections.len(),
            tracks.len()
        );
        for t in tracks {
            eprintln!(
                "Epoch: {}, Track id: {}, length: {}, box: {:?}, confidence: {:.2}",
                tracker.current_epoch(),
                t.id,
                t.length,
                t.bbox().as_ltrb(),
                t.detection.confidence
            );
        }
    }

    eprintln!("Identities assigned: {}", tracker.max_id());
    Ok(())
}
