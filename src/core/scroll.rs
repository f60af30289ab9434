// Scroll offset to progress mapping and boundary triggers. Offsets are CSS
// pixels of document scroll (`window.scrollY`).

/// A point on a section paired with a point on the viewport, as fractions of
/// their heights. The anchor is reached when the two points line up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f32,
    pub viewport: f32,
}

impl Anchor {
    pub const TOP_BOTTOM: Anchor = Anchor::new(0.0, 1.0);
    pub const TOP_CENTER: Anchor = Anchor::new(0.0, 0.5);
    pub const CENTER_CENTER: Anchor = Anchor::new(0.5, 0.5);
    pub const BOTTOM_BOTTOM: Anchor = Anchor::new(1.0, 1.0);

    pub const fn new(element: f32, viewport: f32) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this anchor is reached.
    pub fn offset(&self, section: SectionBounds, viewport_height: f32) -> f32 {
        section.top + self.element * section.height - self.viewport * viewport_height
    }
}

/// Measured section geometry in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

/// Resolved scroll interval of a scrub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl ScrollRange {
    pub fn resolve(section: SectionBounds, start: Anchor, end: Anchor, viewport_height: f32) -> Self {
        Self {
            start: start.offset(section, viewport_height),
            end: end.offset(section, viewport_height),
        }
    }

    /// `clamp((scroll − start) / (end − start), 0, 1)`; an empty range is a
    /// step at `start`.
    pub fn progress(&self, scroll_y: f32) -> f32 {
        let span = self.end - self.start;
        if span <= f32::EPSILON {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Which side of a trigger boundary was crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Scrolled down past the boundary.
    Enter,
    /// Scrolled back up above the boundary.
    LeaveBack,
}

/// A single scroll boundary remembering which side of it the page is on.
///
/// An unmeasured boundary (`at == None`) never fires. A fresh trigger starts
/// "above" the boundary, so a page loaded past it reports `Enter` on the
/// first update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryTrigger {
    pub at: Option<f32>,
    passed: bool,
}

impl BoundaryTrigger {
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn update(&mut self, scroll_y: f32) -> Option<Crossing> {
        let at = self.at?;
        let is = scroll_y >= at;
        if is == self.passed {
            return None;
        }
        self.passed = is;
        Some(if is {
            Crossing::Enter
        } else {
            Crossing::LeaveBack
        })
    }
}

/// Exponential follower that lets a scrubbed value trail its target.
///
/// With `lag_sec` the follower closes about 95% of the gap in that time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    pub value: f32,
    pub target: f32,
}

impl Smoothed {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
        }
    }

    pub fn step(&mut self, dt_sec: f32, lag_sec: f32) {
        if lag_sec <= 0.0 {
            self.value = self.target;
            return;
        }
        let tau = lag_sec / 3.0;
        let alpha = 1.0 - (-dt_sec.max(0.0) / tau).exp();
        self.value += (self.target - self.value) * alpha;
        if (self.target - self.value).abs() < 1e-4 {
            self.value = self.target;
        }
    }
}
