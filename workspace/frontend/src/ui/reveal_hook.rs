use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use workflow::{Page, RevealSet, REVEAL_THRESHOLD};
use yew::prelude::*;

/// Observes every `.scroll-section` element on the active page and toggles
/// the `show` class as regions cross the reveal threshold.
///
/// One observer lives per page. When `page` changes or the layout unmounts,
/// the effect cleanup disconnects the observer before the next one is
/// installed, so a stale observer never watches removed nodes.
#[hook]
pub fn use_scroll_reveal(page: Page) {
    use_effect_with(page, |page| {
        log::trace!("Installing scroll-reveal observer for {:?}", page);

        let reveal = Rc::new(RefCell::new(RevealSet::default()));

        let callback = {
            let reveal = reveal.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let region = region_id(&target);
                    let visible = reveal
                        .borrow_mut()
                        .apply(&region, entry.intersection_ratio());

                    let class_list = target.class_list();
                    let result = if visible {
                        class_list.add_1("show")
                    } else {
                        class_list.remove_1("show")
                    };
                    if let Err(err) = result {
                        log::warn!("Failed to toggle reveal class on {}: {:?}", region, err);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| log::error!("Failed to create IntersectionObserver: {:?}", err))
                .ok();

        if let Some(observer) = observer.as_ref() {
            let document = web_sys::window().and_then(|w| w.document());
            let sections = document.and_then(|d| d.query_selector_all(".scroll-section").ok());
            if let Some(sections) = sections {
                log::trace!("Observing {} scroll sections", sections.length());
                for i in 0..sections.length() {
                    if let Some(element) =
                        sections.get(i).and_then(|node| node.dyn_into::<Element>().ok())
                    {
                        observer.observe(&element);
                    }
                }
            }
        }

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(callback);
        }
    });
}

fn region_id(element: &Element) -> String {
    if element.id().is_empty() {
        element.tag_name().to_lowercase()
    } else {
        element.id()
    }
}
