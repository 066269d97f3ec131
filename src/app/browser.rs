use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlAnchorElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};

use crate::config::RevealRatio;
use crate::contact::{ExternalOpener, PlatformError, Scheduler, StorageError, SubmissionStore};
use crate::navigation::AnchorDocument;
use crate::reveal::{IntersectionSample, IntersectionWatcher};
use crate::scroll::ScrollSource;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Default)]
pub struct BrowserIntersectionWatcher {
    observer: Option<IntersectionObserver>,
    callback: Option<ObserverCallback>,
}

impl IntersectionWatcher for BrowserIntersectionWatcher {
    type Target = Element;

    fn observe(
        &mut self,
        target: &Element,
        threshold: RevealRatio,
        mut on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) {
        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_sample(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.get()));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(target);
                self.observer = Some(observer);
                self.callback = Some(callback);
            }
            Err(err) => log::warn!("reveal: intersection observer unavailable: {err:?}"),
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

/// Scroll offsets from `window.scrollY`, sampled through a reactive effect.
pub struct WindowScrollSource {
    y: Signal<f64>,
    effect: Option<Effect<LocalStorage>>,
}

impl WindowScrollSource {
    pub fn new() -> Self {
        let (_, y) = use_window_scroll();
        Self { y, effect: None }
    }
}

impl ScrollSource for WindowScrollSource {
    fn subscribe(&mut self, mut on_sample: Box<dyn FnMut(f64)>) {
        let y = self.y;
        self.effect = Some(Effect::new(move |_| on_sample(y.get())));
    }

    fn unsubscribe(&mut self) {
        if let Some(effect) = self.effect.take() {
            effect.stop();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl AnchorDocument for BrowserDocument {
    type Anchor = Element;

    fn find_anchor(&self, id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn scroll_into_view(&self, anchor: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Opens links through a synthetic `<a target="_blank">` click.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl ExternalOpener for BrowserOpener {
    fn open_external(&self, uri: &str) -> Result<(), PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PlatformError::NoWindow)?;
        let anchor = document
            .create_element("a")
            .map_err(|err| PlatformError::Open(js_error(err)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| PlatformError::Open("created element is not an anchor".to_string()))?;
        anchor.set_href(uri);
        anchor.set_target("_blank");
        anchor.set_rel("noopener noreferrer");
        anchor.click();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SubmissionStore for BrowserStorage {
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_error(err)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        set_timeout(task, delay);
    }
}
