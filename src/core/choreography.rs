use super::constants::{
    CONTACT_LIFT_Y, CONTACT_SCALE, MASCOT_MOBILE_SCALE, MASCOT_SIDE_OFFSET, MOBILE_BREAKPOINT_PX,
};
use super::easing::lerp;
use super::mascot::{MascotPose, TextureSlot};
use super::scroll::{Anchor, BoundaryTrigger, Crossing, ScrollRange, SectionBounds, Smoothed};
use fnv::FnvHashMap;
use smallvec::SmallVec;

// Scroll-sync driver: binds page sections to mascot pose scrubs and texture
// swap triggers. The web layer measures sections, feeds scroll offsets in and
// forwards the returned swap requests to the mascot.

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn is_narrow(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }

    /// Mascot base scale for this viewport.
    pub fn mascot_scale(&self) -> f32 {
        if self.is_narrow() {
            MASCOT_MOBILE_SCALE
        } else {
            1.0
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Which side of the page the mascot moves to for a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Side {
    /// Horizontal world offset; narrow viewports always stay centered.
    pub fn offset(self, viewport: Viewport) -> f32 {
        if viewport.is_narrow() {
            return 0.0;
        }
        match self {
            Side::Left => -MASCOT_SIDE_OFFSET,
            Side::Right => MASCOT_SIDE_OFFSET,
            Side::Center => 0.0,
        }
    }
}

/// Pose fields a scrub drives; `None` fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseTarget {
    pub side: Option<Side>,
    pub y: Option<f32>,
    pub z: Option<f32>,
    pub size: Option<f32>,
}

impl PoseTarget {
    fn apply(&self, from: MascotPose, viewport: Viewport) -> MascotPose {
        MascotPose {
            x: self.side.map_or(from.x, |s| s.offset(viewport)),
            y: self.y.unwrap_or(from.y),
            z: self.z.unwrap_or(from.z),
            size: self.size.unwrap_or(from.size),
        }
    }
}

/// A scrubbed pose change bound to a section's scroll range.
#[derive(Clone, Debug)]
pub struct ScrubStep {
    pub section: &'static str,
    pub start: Anchor,
    pub end: Anchor,
    pub target: PoseTarget,
}

/// A texture swap fired when a section boundary is crossed, with the
/// action to undo it when scrolling back up.
#[derive(Clone, Debug)]
pub struct SwapTrigger {
    pub section: &'static str,
    pub at: Anchor,
    pub on_enter: TextureSlot,
    pub on_leave_back: TextureSlot,
}

/// The page's section sequence: services (left), about (right), contact
/// (centered, lifted, enlarged).
pub fn default_scrubs() -> Vec<ScrubStep> {
    vec![
        ScrubStep {
            section: "services",
            start: Anchor::TOP_BOTTOM,
            end: Anchor::CENTER_CENTER,
            target: PoseTarget {
                side: Some(Side::Left),
                y: Some(0.0),
                z: Some(0.0),
                size: None,
            },
        },
        ScrubStep {
            section: "about",
            start: Anchor::TOP_BOTTOM,
            end: Anchor::CENTER_CENTER,
            target: PoseTarget {
                side: Some(Side::Right),
                ..Default::default()
            },
        },
        ScrubStep {
            section: "contact",
            start: Anchor::TOP_BOTTOM,
            end: Anchor::BOTTOM_BOTTOM,
            target: PoseTarget {
                side: Some(Side::Center),
                y: Some(CONTACT_LIFT_Y),
                z: None,
                size: Some(CONTACT_SCALE),
            },
        },
    ]
}

pub fn default_triggers() -> Vec<SwapTrigger> {
    vec![
        SwapTrigger {
            section: "about",
            at: Anchor::TOP_CENTER,
            on_enter: TextureSlot::Pose,
            on_leave_back: TextureSlot::Hero,
        },
        SwapTrigger {
            section: "contact",
            at: Anchor::TOP_BOTTOM,
            on_enter: TextureSlot::Thumbs,
            on_leave_back: TextureSlot::Pose,
        },
    ]
}

pub type SwapRequests = SmallVec<[TextureSlot; 4]>;

/// Maps scroll offsets onto the mascot pose and texture swap requests.
pub struct ScrollDriver {
    scrubs: Vec<ScrubStep>,
    triggers: Vec<SwapTrigger>,
    ranges: Vec<Option<ScrollRange>>,
    boundaries: Vec<BoundaryTrigger>,
    progress: Vec<Smoothed>,
    base: MascotPose,
    viewport: Viewport,
    scroll_y: f32,
    lag_sec: f32,
}

impl ScrollDriver {
    pub fn new(scrubs: Vec<ScrubStep>, triggers: Vec<SwapTrigger>, lag_sec: f32) -> Self {
        let n = scrubs.len();
        let t = triggers.len();
        Self {
            scrubs,
            triggers,
            ranges: vec![None; n],
            boundaries: vec![BoundaryTrigger::default(); t],
            progress: vec![Smoothed::new(0.0); n],
            base: MascotPose::default(),
            viewport: Viewport {
                width: 1.0,
                height: 1.0,
            },
            scroll_y: 0.0,
            lag_sec,
        }
    }

    pub fn with_defaults(lag_sec: f32) -> Self {
        Self::new(default_scrubs(), default_triggers(), lag_sec)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Section ids referenced by any scrub or trigger, deduplicated.
    pub fn section_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = Vec::new();
        let all = self
            .scrubs
            .iter()
            .map(|s| s.section)
            .chain(self.triggers.iter().map(|t| t.section));
        for id in all {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Resolve every range and boundary against fresh measurements.
    ///
    /// Safe to call any number of times. Returns the ids that were missing;
    /// their scrubs and triggers stay inert.
    pub fn measure(
        &mut self,
        viewport: Viewport,
        sections: &FnvHashMap<&'static str, SectionBounds>,
    ) -> Vec<&'static str> {
        self.viewport = viewport;
        let mut missing = Vec::new();
        for (i, step) in self.scrubs.iter().enumerate() {
            self.ranges[i] = sections
                .get(step.section)
                .map(|b| ScrollRange::resolve(*b, step.start, step.end, viewport.height));
            if self.ranges[i].is_none() && !missing.contains(&step.section) {
                missing.push(step.section);
            }
        }
        for (i, trig) in self.triggers.iter().enumerate() {
            self.boundaries[i].at = sections
                .get(trig.section)
                .map(|b| trig.at.offset(*b, viewport.height));
            if self.boundaries[i].at.is_none() && !missing.contains(&trig.section) {
                missing.push(trig.section);
            }
        }
        missing
    }

    /// Feed the current scroll offset. Updates scrub targets and returns the
    /// texture swaps triggered by crossed boundaries, in the order they
    /// should be applied.
    pub fn on_scroll(&mut self, scroll_y: f32) -> SwapRequests {
        self.scroll_y = scroll_y;
        for (i, range) in self.ranges.iter().enumerate() {
            self.progress[i].target = range.map_or(0.0, |r| r.progress(scroll_y));
        }

        let mut enters = SwapRequests::new();
        let mut leaves = SwapRequests::new();
        for (i, boundary) in self.boundaries.iter_mut().enumerate() {
            match boundary.update(scroll_y) {
                Some(Crossing::Enter) => enters.push(self.triggers[i].on_enter),
                Some(Crossing::LeaveBack) => leaves.push(self.triggers[i].on_leave_back),
                None => {}
            }
        }
        // Leaving back unwinds later sections first.
        leaves.reverse();
        leaves.extend(enters);
        leaves
    }

    /// Move smoothed progress toward the scroll-derived targets.
    pub fn advance(&mut self, dt_sec: f32) {
        for p in &mut self.progress {
            p.step(dt_sec, self.lag_sec);
        }
    }

    /// Jump smoothed progress straight to its targets.
    pub fn settle(&mut self) {
        for p in &mut self.progress {
            p.value = p.target;
        }
    }

    pub fn progress(&self, index: usize) -> Option<f32> {
        self.progress.get(index).map(|p| p.value)
    }

    /// Current (smoothed) pose.
    pub fn pose(&self) -> MascotPose {
        self.evaluate(|p| p.value)
    }

    /// Pose the smoothed value is heading to.
    pub fn target_pose(&self) -> MascotPose {
        self.evaluate(|p| p.target)
    }

    /// End-of-scrub x position per step that moves the mascot sideways.
    pub fn side_targets(&self) -> Vec<f32> {
        self.scrubs
            .iter()
            .filter_map(|s| s.target.side.map(|side| side.offset(self.viewport)))
            .collect()
    }

    // Each scrub starts from the pose the earlier scrubs produce at their
    // current progress, so overlapping ranges blend without a jump.
    fn evaluate(&self, pick: impl Fn(&Smoothed) -> f32) -> MascotPose {
        let mut out = self.base;
        for (i, step) in self.scrubs.iter().enumerate() {
            if self.ranges[i].is_none() {
                continue;
            }
            let t = pick(&self.progress[i]);
            if t <= 0.0 {
                continue;
            }
            let from = out;
            let to = step.target.apply(from, self.viewport);
            out = MascotPose {
                x: lerp(from.x, to.x, t),
                y: lerp(from.y, to.y, t),
                z: lerp(from.z, to.z, t),
                size: lerp(from.size, to.size, t),
            };
        }
        out
    }
}
