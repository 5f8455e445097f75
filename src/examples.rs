use crate::trackers::iou::Detection;
use rand::distributions::Uniform;
use rand::prelude::ThreadRng;
use rand::Rng;

/// Random walk of a single object as it is seen by a detector.
///
/// Every step the position drifts within `[-pos_drift, pos_drift)`, the dimensions drift within
/// `[-box_drift, box_drift)` and the confidence is drawn from `[0.5, 1.0)`.
///
pub struct DetectionGen {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    gen: ThreadRng,
    dist_pos: Uniform<f32>,
    dist_box: Uniform<f32>,
    dist_conf: Uniform<f32>,
}

impl DetectionGen {
    pub fn new(x: f32, y: f32, width: f32, height: f32, pos_drift: f32, box_drift: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            gen: rand::thread_rng(),
            dist_pos: Uniform::new(-pos_drift, pos_drift),
            dist_box: Uniform::new(-box_drift, box_drift),
            dist_conf: Uniform::new(0.5, 1.0),
        }
    }

    pub fn new_monotonous(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pos_drift: f32,
        box_drift: f32,
    ) -> Self {
        Self {
            dist_pos: Uniform::new(0.0, pos_drift),
            ..Self::new(x, y, width, height, pos_drift, box_drift)
        }
    }
}

impl Iterator for DetectionGen {
    type Item = Detection;

    fn next(&mut self) -> Option<Self::Item> {
        self.x += self.gen.sample(self.dist_pos);
        self.y += self.gen.sample(self.dist_pos);

        self.width += self.gen.sample(self.dist_box);
        self.height += self.gen.sample(self.dist_box);

        if self.width < 1.0 {
            self.width = 1.0;
        }
        if self.height < 1.0 {
            self.height = 1.0;
        }

        Some(Detection::new(
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height,
            self.gen.sample(self.dist_conf),
        ))
    }
}
