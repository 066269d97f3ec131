use leptos::{html, prelude::*};

use super::browser::{BrowserIntersectionWatcher, WindowScrollSource};
use crate::config::{RevealRatio, ScrollThresholds};
use crate::reveal::VisibilityObserver;
use crate::scroll::{ScrollMetrics, ScrollMonitor};

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

/// Latches to `true` once `target` is at least `ratio` on screen.
pub fn use_reveal(target: NodeRef<html::Section>, ratio: RevealRatio) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<VisibilityObserver<BrowserIntersectionWatcher>>);

    Effect::new(move |_| {
        let el = target.get();
        let attached = VisibilityObserver::attach(
            BrowserIntersectionWatcher::default(),
            el.as_deref(),
            ratio,
            move || set_revealed.set(true),
        );
        observer.update_value(|slot| {
            if let Some(mut previous) = slot.replace(attached) {
                previous.dispose();
            }
        });
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some(mut current) = slot.take() {
                current.dispose();
            }
        });
    });

    revealed
}

/// Header flags that follow the window's vertical scroll.
pub fn use_scroll_metrics(thresholds: ScrollThresholds) -> ReadSignal<ScrollMetrics> {
    let (metrics, set_metrics) = signal(ScrollMetrics::default());
    let monitor = ScrollMonitor::start(WindowScrollSource::new(), thresholds, move |sample| {
        if metrics.get_untracked() != sample {
            set_metrics.set(sample);
        }
    });
    let monitor = StoredValue::new_local(Some(monitor));

    on_cleanup(move || {
        monitor.try_update_value(|slot| {
            if let Some(mut current) = slot.take() {
                current.stop();
            }
        });
    });

    metrics
}
