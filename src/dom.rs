use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    AddEventListenerOptions, Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, NodeList, Window,
};

use crate::boot::{self, Page};
use crate::clock::{BrowserClock, Clock};
use crate::config::{self, MotionPreference};
use crate::effects::hero::HeroParts;
use crate::effects::reveal::{Notice, RevealEngine};
use crate::effects::stagger::Scope;
use crate::effects::tilt::{Bounds, TiltCard};
use crate::error::MotionError;
use crate::surface::Surface;

impl Surface for HtmlElement {
    fn data(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_data(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn show_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }
}

/// Reads the motion preference and starts the effects once the document
/// has been parsed.
pub fn launch() -> Result<(), MotionError> {
    let window = web_sys::window().ok_or(MotionError::NoWindow)?;
    let document = window.document().ok_or(MotionError::NoDocument)?;
    let preference = motion_preference(&window);

    let ready = {
        let document = document.clone();
        move || {
            let page = DomPage::new(document);
            if let Err(e) = boot::start(&page, preference, BrowserClock) {
                warn!("Failed to start animations: {}", e);
            }
        }
    };

    if is_loading(&document) {
        debug!("Document still loading, waiting for DOMContentLoaded");
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let callback = Closure::once_into_js(ready);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                callback.unchecked_ref(),
                &options,
            )
            .map_err(|e| MotionError::js("DOMContentLoaded listener", e))?;
    } else {
        ready();
    }
    Ok(())
}

pub fn motion_preference(window: &Window) -> MotionPreference {
    let reduced = window
        .match_media(config::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map_or(false, |query| query.matches());
    MotionPreference::from_reduced(reduced)
}

fn is_loading(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map_or(false, |state| state == "loading")
}

/// The live document as seen by the effects.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn first(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            Err(_) => {
                debug!("Bad selector {}", selector);
                None
            }
        }
    }

    fn all(&self, selector: &str) -> Vec<HtmlElement> {
        match self.document.query_selector_all(selector) {
            Ok(list) => html_elements(&list),
            Err(_) => {
                debug!("Bad selector {}", selector);
                Vec::new()
            }
        }
    }
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn children_of(parent: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    parent
        .query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

impl Page for DomPage {
    type Node = HtmlElement;

    fn members(&self, scope: &Scope) -> Vec<Vec<HtmlElement>> {
        match *scope {
            Scope::Within { container, children } => match self.first(container) {
                Some(parent) => vec![children_of(&parent, children)],
                None => {
                    debug!("No {} on this page", container);
                    Vec::new()
                }
            },
            Scope::Each { selector } => vec![self.all(selector)],
            Scope::PerContainer { containers, children } => self
                .all(containers)
                .iter()
                .map(|parent| children_of(parent, children))
                .collect(),
        }
    }

    fn animatables(&self) -> Vec<HtmlElement> {
        self.all(config::ANIMATION_MARKER)
    }

    fn hero(&self) -> HeroParts<HtmlElement> {
        HeroParts {
            name: self.first(config::HERO_NAME),
            subtitle: self.first(config::HERO_SUBTITLE),
            description: self.first(config::HERO_DESCRIPTION),
            buttons: self.first(config::HERO_BUTTONS),
        }
    }

    fn cards(&self) -> Vec<HtmlElement> {
        self.all(config::PROJECT_CARD)
    }

    fn observe<C: Clock>(&self, engine: Rc<RevealEngine<HtmlElement, C>>) -> Result<(), MotionError> {
        let elements = engine.surfaces();
        let targets = elements.clone();

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let notices: Vec<Notice> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target: JsValue = entry.target().into();
                        targets
                            .iter()
                            .position(|el| AsRef::<JsValue>::as_ref(el) == &target)
                            .map(|index| Notice { index, is_intersecting: entry.is_intersecting() })
                    })
                    .collect();
                for index in engine.notify(notices) {
                    observer.unobserve(&targets[index]);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(&config::reveal_root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| MotionError::js("IntersectionObserver", e))?;
        callback.forget();

        for element in &elements {
            observer.observe(element);
        }
        Ok(())
    }

    fn track_pointer<C: Clock>(&self, card: TiltCard<HtmlElement, C>) -> Result<(), MotionError> {
        let element = card.surface().clone();

        let on_move = {
            let card = card.clone();
            let element = element.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let rect = element.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                card.pointer_moved(bounds, f64::from(event.client_x()), f64::from(event.client_y()));
            })
        };
        element
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .map_err(|e| MotionError::js("mousemove listener", e))?;
        on_move.forget();

        let on_leave = Closure::<dyn FnMut()>::new(move || card.pointer_left());
        element
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())
            .map_err(|e| MotionError::js("mouseleave listener", e))?;
        on_leave.forget();

        Ok(())
    }
}
