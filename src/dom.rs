use folio_core::AnchorRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve once the document has been parsed.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = document.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = JsFuture::from(promise).await;
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    } else {
        log::warn!("[dom] missing #{element_id}; click handler not wired");
    }
}

pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector}: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))
}

pub fn query_in(parent: &web::Element, selector: &str) -> anyhow::Result<web::Element> {
    parent
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector}: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector} under {}", parent.class_name()))
}

pub fn html(el: web::Element) -> anyhow::Result<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn element_rect(el: &web::Element) -> AnchorRect {
    let rect = el.get_bounding_client_rect();
    AnchorRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Option<(f32, f32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as f32, h as f32))
}

pub fn f32_attribute(el: &web::Element, name: &str) -> Option<f32> {
    el.get_attribute(name)?.trim().parse::<f32>().ok()
}
