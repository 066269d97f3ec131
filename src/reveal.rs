use std::cell::RefCell;
use std::rc::Rc;

use crate::config::RevealRatio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// One report from an intersection watcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// One-way hidden -> visible switch.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(threshold: RevealRatio) -> Self {
        Self {
            threshold: threshold.get(),
            state: RevealState::Hidden,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Returns true only for the sample that flips the latch.
    pub fn sample(&mut self, sample: IntersectionSample) -> bool {
        if self.is_visible() {
            return false;
        }
        // absorbs float error only, e.g. 0.7 - 0.4 against 0.3
        if sample.is_intersecting && sample.ratio >= self.threshold - f64::EPSILON {
            self.state = RevealState::Visible;
            return true;
        }
        false
    }
}

/// Platform capability that reports how much of a target is on screen.
pub trait IntersectionWatcher {
    type Target: ?Sized;

    fn observe(
        &mut self,
        target: &Self::Target,
        threshold: RevealRatio,
        on_sample: Box<dyn FnMut(IntersectionSample)>,
    );

    fn disconnect(&mut self);
}

/// Owns the watcher for one section. Dropping it, or calling [`dispose`],
/// disconnects the watcher.
///
/// [`dispose`]: VisibilityObserver::dispose
pub struct VisibilityObserver<W: IntersectionWatcher> {
    watcher: Option<W>,
    latch: Rc<RefCell<RevealLatch>>,
}

impl<W: IntersectionWatcher> VisibilityObserver<W> {
    /// Starts watching `target`. `on_reveal` runs at most once. With no
    /// target nothing is registered and the latch stays hidden.
    pub fn attach(
        mut watcher: W,
        target: Option<&W::Target>,
        threshold: RevealRatio,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));
        let Some(target) = target else {
            log::debug!("reveal: no element to observe");
            return Self {
                watcher: None,
                latch,
            };
        };

        let mut on_reveal = Some(on_reveal);
        let shared = Rc::clone(&latch);
        watcher.observe(
            target,
            threshold,
            Box::new(move |sample| {
                let flipped = shared.borrow_mut().sample(sample);
                if flipped {
                    if let Some(cb) = on_reveal.take() {
                        cb();
                    }
                }
            }),
        );
        Self {
            watcher: Some(watcher),
            latch,
        }
    }

    pub fn state(&self) -> RevealState {
        self.latch.borrow().state()
    }

    pub fn is_attached(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.disconnect();
        }
    }
}

impl<W: IntersectionWatcher> Drop for VisibilityObserver<W> {
    fn drop(&mut self) {
        self.dispose();
    }
}
