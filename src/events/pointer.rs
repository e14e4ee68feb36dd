use crate::avatar::AvatarElements;
use crate::constants::INTERACTIVE_SELECTOR;
use crate::dom;
use folio_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Queue pointer samples for the next frame, refreshing the avatar rect
/// first so scrolling and layout shifts are picked up.
pub fn wire_pointer_move(scene: &Rc<RefCell<Scene>>, avatar: Option<AvatarElements>) {
    let scene = scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut scene = scene.borrow_mut();
        if let Some(a) = &avatar {
            scene.set_anchor(a.anchor());
        }
        scene.queue_pointer(ev.client_x() as f32, ev.client_y() as f32, instant::now());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Boost the smile while any interactive element is hovered, including
/// nested ones.
pub fn wire_hover_boost(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let nodes = match document.query_selector_all(INTERACTIVE_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[hover] selector failed: {:?}", e);
            return;
        }
    };
    let mut wired = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let enter = scene.clone();
        dom::add_listener(&el, "mouseenter", move || {
            enter.borrow_mut().hover_enter();
        });
        let leave = scene.clone();
        dom::add_listener(&el, "mouseleave", move || {
            leave.borrow_mut().hover_leave();
        });
        wired += 1;
    }
    log::info!("[hover] wired {} interactive elements", wired);
}
