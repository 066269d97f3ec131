use std::cell::Cell;
use std::rc::Rc;

use crate::config::ScrollThresholds;

/// Header flags derived from a single vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub is_compact_header: bool,
    pub is_back_to_top_visible: bool,
}

impl ScrollMetrics {
    pub fn from_offset(offset: f64, thresholds: &ScrollThresholds) -> Self {
        Self {
            is_compact_header: offset > thresholds.compact_header(),
            is_back_to_top_visible: offset > thresholds.back_to_top(),
        }
    }
}

/// Anything that can push vertical scroll offsets to a listener.
pub trait ScrollSource {
    fn subscribe(&mut self, on_sample: Box<dyn FnMut(f64)>);
    fn unsubscribe(&mut self);
}

pub struct ScrollMonitor<S: ScrollSource> {
    source: Option<S>,
    metrics: Rc<Cell<ScrollMetrics>>,
}

impl<S: ScrollSource> ScrollMonitor<S> {
    pub fn start(
        mut source: S,
        thresholds: ScrollThresholds,
        mut on_change: impl FnMut(ScrollMetrics) + 'static,
    ) -> Self {
        let metrics = Rc::new(Cell::new(ScrollMetrics::default()));
        let latest = Rc::clone(&metrics);
        source.subscribe(Box::new(move |offset| {
            let sample = ScrollMetrics::from_offset(offset, &thresholds);
            latest.set(sample);
            on_change(sample);
        }));
        Self {
            source: Some(source),
            metrics,
        }
    }

    /// Flags computed from the most recent sample.
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.unsubscribe();
        }
    }
}

impl<S: ScrollSource> Drop for ScrollMonitor<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    type Listener = Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>;

    #[derive(Default, Clone)]
    struct FakeViewport {
        listener: Listener,
        unsubscribes: Rc<Cell<usize>>,
    }

    impl FakeViewport {
        fn scroll_to(&self, offset: f64) {
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                listener(offset);
            }
        }
    }

    impl ScrollSource for FakeViewport {
        fn subscribe(&mut self, on_sample: Box<dyn FnMut(f64)>) {
            *self.listener.borrow_mut() = Some(on_sample);
        }

        fn unsubscribe(&mut self) {
            self.unsubscribes.set(self.unsubscribes.get() + 1);
            self.listener.borrow_mut().take();
        }
    }

    #[test]
    fn test_offset_sequence() {
        let viewport = FakeViewport::default();
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        let monitor = ScrollMonitor::start(
            viewport.clone(),
            ScrollThresholds::default(),
            move |m| sink.borrow_mut().push(m),
        );

        for offset in [0.0, 60.0, 310.0, 40.0] {
            viewport.scroll_to(offset);
        }

        let published = published.borrow();
        let compact: Vec<_> = published.iter().map(|m| m.is_compact_header).collect();
        let back_to_top: Vec<_> = published
            .iter()
            .map(|m| m.is_back_to_top_visible)
            .collect();
        assert_eq!(compact, vec![false, true, true, false]);
        assert_eq!(back_to_top, vec![false, false, true, false]);
        assert_eq!(monitor.metrics(), ScrollMetrics::default());
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let thresholds = ScrollThresholds::default();
        let at_compact = ScrollMetrics::from_offset(50.0, &thresholds);
        assert!(!at_compact.is_compact_header);
        let at_top = ScrollMetrics::from_offset(300.0, &thresholds);
        assert!(at_top.is_compact_header);
        assert!(!at_top.is_back_to_top_visible);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ScrollThresholds::new(10.0, 20.0).unwrap();
        let m = ScrollMetrics::from_offset(15.0, &thresholds);
        assert!(m.is_compact_header);
        assert!(!m.is_back_to_top_visible);
    }

    #[test]
    fn test_stop_unsubscribes_once() {
        let viewport = FakeViewport::default();
        let mut monitor =
            ScrollMonitor::start(viewport.clone(), ScrollThresholds::default(), |_| {});
        viewport.scroll_to(500.0);
        assert!(monitor.metrics().is_back_to_top_visible);
        monitor.stop();
        monitor.stop();
        drop(monitor);
        assert_eq!(viewport.unsubscribes.get(), 1);
        // listener is gone, nothing left to call
        viewport.scroll_to(0.0);
    }
}
