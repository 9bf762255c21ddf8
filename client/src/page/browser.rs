//! Browser implementation of the page seams and click bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with `hydrate`. [`bind_page`] runs once when the WASM module
//! starts: it restores the dark-mode preference, then attaches one click
//! listener per control. Recipe links are collected at bind time; links
//! inserted later are not bound.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use super::dom::PageDom;
use super::{RECIPE_LINK_SELECTOR, form, ids, ingredients, recipe_details};
use crate::net::api::HttpRecipeSource;
use crate::util::dark_mode;
use crate::util::storage::LocalStorage;

/// [`PageDom`] over the live document.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }
}

impl PageDom for BrowserDom {
    fn body_has_class(&self, class: &str) -> bool {
        self.document.body().is_some_and(|body| body.class_list().contains(class))
    }

    fn toggle_body_class(&self, class: &str) -> bool {
        let Some(body) = self.document.body() else {
            return false;
        };
        match body.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log::warn!("class toggle failed: {e:?}");
                false
            }
        }
    }

    fn add_body_class(&self, class: &str) {
        if let Some(body) = self.document.body() {
            if let Err(e) = body.class_list().add_1(class) {
                log::warn!("class add failed: {e:?}");
            }
        }
    }

    fn display(&self, id: &str) -> Option<String> {
        self.html_element(id)?.style().get_property_value("display").ok()
    }

    fn set_display(&self, id: &str, value: &str) {
        if let Some(el) = self.html_element(id) {
            if let Err(e) = el.style().set_property("display", value) {
                log::warn!("display update failed on #{id}: {e:?}");
            }
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.html_element(id) {
            el.set_inner_text(text);
        }
    }

    fn clear_children(&self, id: &str) {
        if let Some(el) = self.element(id) {
            el.set_inner_html("");
        }
    }

    fn append_list_item(&self, id: &str, text: &str) {
        let Some(list) = self.element(id) else {
            return;
        };
        let appended = self.document.create_element("li").and_then(|li| {
            li.set_text_content(Some(text));
            list.append_child(&li)
        });
        if let Err(e) = appended {
            log::warn!("list item append failed on #{id}: {e:?}");
        }
    }

    fn append_html(&self, id: &str, class: &str, inner_html: &str) {
        let Some(container) = self.element(id) else {
            return;
        };
        let appended = self.document.create_element("div").and_then(|div| {
            div.class_list().add_1(class)?;
            div.set_inner_html(inner_html);
            container.append_child(&div)
        });
        if let Err(e) = appended {
            log::warn!("row append failed on #{id}: {e:?}");
        }
    }
}

/// Restore dark mode and attach every page behavior to the live document.
///
/// Missing controls are logged and skipped; the remaining behaviors still bind.
///
/// # Errors
///
/// Returns an error if there is no window/document or a listener cannot be
/// registered.
pub fn bind_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let dom = Rc::new(BrowserDom::new(document.clone()));
    let store = Rc::new(LocalStorage::new(&window));

    dark_mode::restore(dom.as_ref(), store.as_ref());

    if let Some(button) = document.get_element_by_id(ids::DARK_MODE_TOGGLE) {
        let (dom, store) = (Rc::clone(&dom), Rc::clone(&store));
        on_click(&button, move |_| {
            dark_mode::toggle(dom.as_ref(), store.as_ref());
        })?;
    } else {
        log::warn!("#{} not found; dark mode toggle unbound", ids::DARK_MODE_TOGGLE);
    }

    if let Some(button) = document.get_element_by_id(ids::TOGGLE_FORM) {
        let dom = Rc::clone(&dom);
        on_click(&button, move |_| {
            form::toggle_form(dom.as_ref());
        })?;
    } else {
        log::warn!("#{} not found; form toggle unbound", ids::TOGGLE_FORM);
    }

    if let Some(button) = document.get_element_by_id(ids::ADD_INGREDIENT) {
        let dom = Rc::clone(&dom);
        on_click(&button, move |_| ingredients::add_ingredient_row(dom.as_ref()))?;
    } else {
        log::warn!("#{} not found; ingredient adder unbound", ids::ADD_INGREDIENT);
    }

    let links = document.query_selector_all(RECIPE_LINK_SELECTOR)?;
    let mut bound = 0_u32;
    for index in 0..links.length() {
        let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        bind_recipe_link(&link, Rc::clone(&dom))?;
        bound += 1;
    }
    log::info!("cookbook page bound ({bound} recipe links)");
    Ok(())
}

impl recipe_details::RecipeLink for Element {
    fn href(&self) -> Option<String> {
        self.get_attribute("href")
    }
}

fn bind_recipe_link(link: &Element, dom: Rc<BrowserDom>) -> Result<(), JsValue> {
    let target = link.clone();
    on_click(link, move |event| {
        event.prevent_default();
        let dom = Rc::clone(&dom);
        let link = target.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = recipe_details::follow_link(dom.as_ref(), &HttpRecipeSource, &link).await {
                log::warn!("recipe details not loaded: {e}");
            }
        });
    })
}

/// Register a click listener that lives as long as the page.
fn on_click(target: &EventTarget, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
