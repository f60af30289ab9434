use super::constants::{CAROUSEL_FALLBACK_SLIDE_WIDTH, CAROUSEL_SPACING_PX};

// Circular 3D carousel layout and autoplay state. Slides sit on a ring
// facing outward and the ring turns so the current slide faces the viewer.
// The index is unbounded and only wrapped when rendered.

/// Static geometry derived from slide count and measured slide width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub count: usize,
    pub slide_width: f64,
    pub angle_deg: f64,
    /// `None` when there are fewer than two slides; rotation is disabled.
    pub radius: Option<f64>,
}

impl RingGeometry {
    /// Measure the ring. A zero (or non-finite) width falls back to the
    /// default slide width.
    pub fn new(count: usize, measured_width: f64) -> Self {
        let slide_width = if measured_width.is_finite() && measured_width > 0.0 {
            measured_width
        } else {
            CAROUSEL_FALLBACK_SLIDE_WIDTH
        };
        Self {
            count,
            slide_width,
            angle_deg: angle_per_slide(count),
            radius: ring_radius(count, slide_width),
        }
    }

    /// Static transform of slide `i`.
    pub fn slide_transform(&self, i: usize) -> String {
        match self.radius {
            Some(r) => format!(
                "rotateY({}deg) translateZ({}px)",
                i as f64 * self.angle_deg,
                r
            ),
            None => "none".to_string(),
        }
    }

    /// Container rotation (degrees) that brings `index` to the front.
    pub fn rotation_deg(&self, index: i64) -> f64 {
        if self.radius.is_none() {
            return 0.0;
        }
        // `+ 0.0` folds -0 into 0 for index 0
        index as f64 * -self.angle_deg + 0.0
    }

    pub fn container_transform(&self, index: i64) -> String {
        match self.radius {
            Some(r) => format!(
                "translateZ({}px) rotateY({}deg)",
                -r,
                self.rotation_deg(index)
            ),
            None => "none".to_string(),
        }
    }
}

/// 360/N, or a full turn for an empty ring.
pub fn angle_per_slide(count: usize) -> f64 {
    360.0 / count.max(1) as f64
}

/// `round((W/2) / tan(π/N)) + spacing`; undefined below two slides.
pub fn ring_radius(count: usize, slide_width: f64) -> Option<f64> {
    if count < 2 {
        return None;
    }
    let half_angle = std::f64::consts::PI / count as f64;
    Some(((slide_width / 2.0) / half_angle.tan()).round() + CAROUSEL_SPACING_PX)
}

/// Wrap an unbounded index into `[0, count)`.
#[inline]
pub fn active_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let n = count as i64;
    (((index % n) + n) % n) as usize
}

/// Starts and cancels a repeating timer. Implemented over
/// `setInterval`/`clearInterval` in the browser.
pub trait IntervalScheduler {
    /// Start a repeating timer, returning its handle.
    fn start(&mut self, period_ms: u32) -> Option<i32>;
    fn cancel(&mut self, handle: i32);
}

/// What the DOM layer should apply after a state change.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselFrame {
    pub container_transform: String,
    pub active: usize,
}

/// Carousel state: unbounded index, ring geometry and the autoplay handle.
#[derive(Clone, Debug)]
pub struct Carousel {
    index: i64,
    geometry: RingGeometry,
    autoplay_ms: u32,
    timer: Option<i32>,
}

impl Carousel {
    pub fn new(count: usize, measured_width: f64, autoplay_ms: u32) -> Self {
        Self {
            index: 0,
            geometry: RingGeometry::new(count, measured_width),
            autoplay_ms,
            timer: None,
        }
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    pub fn timer(&self) -> Option<i32> {
        self.timer
    }

    /// Recompute the ring after the slide width may have changed.
    pub fn relayout(&mut self, measured_width: f64) {
        self.geometry = RingGeometry::new(self.geometry.count, measured_width);
    }

    pub fn frame(&self) -> CarouselFrame {
        CarouselFrame {
            container_transform: self.geometry.container_transform(self.index),
            active: active_index(self.index, self.geometry.count),
        }
    }

    pub fn next<S: IntervalScheduler>(&mut self, scheduler: &mut S) -> CarouselFrame {
        self.index += 1;
        self.restart_autoplay(scheduler);
        self.frame()
    }

    pub fn prev<S: IntervalScheduler>(&mut self, scheduler: &mut S) -> CarouselFrame {
        self.index -= 1;
        self.restart_autoplay(scheduler);
        self.frame()
    }

    /// Timer callback: advance without touching the timer.
    pub fn autoplay_tick(&mut self) -> CarouselFrame {
        self.index += 1;
        self.frame()
    }

    /// Cancel the live timer (if any) and start a fresh one, so exactly one
    /// handle is ever live.
    pub fn restart_autoplay<S: IntervalScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.timer = scheduler.start(self.autoplay_ms);
    }
}
