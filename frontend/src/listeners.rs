use std::{cell::RefCell, rc::Rc};

use page_enhancer_shared::{run, Applied, Dispatcher, ElementKey, EnhancerConfig, PageEvent};
use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MediaQueryListEvent, MouseEvent,
};

use crate::{dom::DomHost, warn};

/// Shared handle captured by every listener closure.
#[derive(Clone)]
pub struct Enhancer {
    host: Rc<RefCell<DomHost>>,
    dispatcher: Rc<Dispatcher>,
    config: Rc<EnhancerConfig>,
}

impl Enhancer {
    pub fn new(host: DomHost, config: EnhancerConfig) -> Self {
        Self {
            dispatcher: Rc::new(Dispatcher::with_defaults(&config)),
            host: Rc::new(RefCell::new(host)),
            config: Rc::new(config),
        }
    }

    fn emit(&self, event: &PageEvent) -> Applied {
        let Ok(mut host) = self.host.try_borrow_mut() else {
            warn(&format!("page enhancer busy, dropped {event:?}"));
            return Applied::default();
        };
        run(&self.dispatcher, &mut *host, event)
    }

    fn document(&self) -> Document {
        self.host.borrow().document().clone()
    }

    /// Applies the initial theme and wires the toggle control and the system
    /// scheme listener. Either one may be missing.
    pub fn install_theme(&self) {
        self.emit(&PageEvent::Loaded);

        if let Some(toggle) = self.document().get_element_by_id(&self.config.toggle_id) {
            let this = self.clone();
            listen(&toggle, "click", move |_: MouseEvent| {
                this.emit(&PageEvent::ToggleClicked);
            });
        }

        let query = self.host.borrow().dark_query().cloned();
        if let Some(query) = query {
            let this = self.clone();
            listen(&query, "change", move |event: MediaQueryListEvent| {
                this.emit(&PageEvent::ColorSchemeChanged {
                    prefers_dark: event.matches(),
                });
            });
        }
    }

    pub fn install_anchor_scrolling(&self) {
        for anchor in select_all(&self.document(), &self.config.anchor_selector) {
            let this = self.clone();
            let link = anchor.clone();
            listen(&anchor, "click", move |event: MouseEvent| {
                let href = link.get_attribute("href").unwrap_or_default();
                let target = match this.host.try_borrow_mut() {
                    Ok(mut host) => host.resolve_anchor(&href),
                    Err(_) => None,
                };
                let applied = this.emit(&PageEvent::AnchorClicked {
                    href,
                    target,
                });
                if applied.prevent_default {
                    event.prevent_default();
                }
            });
        }
    }

    /// Wires the inert section observer over the top fifth of the viewport.
    pub fn install_section_observer(&self) {
        let sections = select_all(&self.document(), &self.config.section_selector);
        if sections.is_empty() {
            return;
        }
        let options = IntersectionObserverInit::new();
        options.set_root_margin(&self.config.section_root_margin);
        options.set_threshold(&JsValue::from_f64(self.config.section_threshold));

        let observer = self.observer(&options, |section, is_intersecting| {
            PageEvent::SectionIntersected {
                section,
                is_intersecting,
            }
        });
        attach_all(observer, &sections, |observer, section| {
            self.host.borrow_mut().register(section.clone());
            observer.observe(section);
        });
    }

    /// Hides every card and reveals it once it crosses the visibility
    /// threshold. Without `IntersectionObserver` the cards are left as they
    /// are.
    pub fn install_card_animation(&self) {
        let cards = select_all(&self.document(), &self.config.card_selector_group());
        if cards.is_empty() {
            return;
        }
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.config.card_threshold));

        let observer = self.observer(&options, |card, is_intersecting| PageEvent::CardIntersected {
            card,
            is_intersecting,
        });
        attach_all(observer, &cards, |observer, element| {
            let card = self.host.borrow_mut().register(element.clone());
            self.emit(&PageEvent::CardRegistered {
                card,
            });
            observer.observe(element);
        });
    }

    /// Builds an observer whose entries are translated with `to_event`.
    /// Entries for elements the host does not know are dropped.
    fn observer(
        &self,
        options: &IntersectionObserverInit,
        to_event: fn(ElementKey, bool) -> PageEvent,
    ) -> Option<IntersectionObserver> {
        let this = self.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let key = this.host.borrow().key_of(&entry.target());
                    if let Some(key) = key {
                        this.emit(&to_event(key, entry.is_intersecting()));
                    }
                }
            },
        );

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options) {
            Ok(observer) => {
                callback.forget();
                Some(observer)
            },
            Err(err) => {
                warn(&format!("IntersectionObserver unavailable: {}", crate::dom::describe(&err)));
                None
            },
        }
    }
}

/// Runs `attach` for every element once the observer exists. Without one,
/// no element is touched. Returns how many elements were attached.
fn attach_all<O, T>(observer: Option<O>, elements: &[T], mut attach: impl FnMut(&O, &T)) -> usize {
    let Some(observer) = observer else {
        return 0;
    };
    for element in elements {
        attach(&observer, element);
    }
    elements.len()
}

/// Adds a listener that lives as long as the page.
fn listen<E, F>(target: &EventTarget, kind: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(err) => warn(&format!("cannot listen for `{kind}`: {}", crate::dom::describe(&err))),
    }
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            warn(&format!("invalid selector `{selector}`: {}", crate::dom::describe(&err)));
            return Vec::new();
        },
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::attach_all;

    #[test]
    fn missing_observer_leaves_elements_untouched() {
        let mut touched = Vec::new();
        let attached = attach_all(None::<()>, &["post", "project"], |_, el| touched.push(*el));
        assert_eq!(attached, 0);
        assert!(touched.is_empty());
    }

    #[test]
    fn elements_are_prepared_in_document_order() {
        let mut touched = Vec::new();
        let attached =
            attach_all(Some("observer"), &["post", "project", "paper"], |observer, el| {
                touched.push((*observer, *el));
            });
        assert_eq!(attached, 3);
        assert_eq!(touched, vec![
            ("observer", "post"),
            ("observer", "project"),
            ("observer", "paper")
        ]);
    }
}
