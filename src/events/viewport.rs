use crate::dom;
use folio_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) {
    let Some((w, h)) = dom::viewport_size(window) else {
        return;
    };
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
    scene.borrow_mut().resize(w, h);
}

/// Size the particle canvas to the viewport now and on every resize.
pub fn wire_viewport_resize(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<Scene>>) {
    let Some(window) = web::window() else {
        return;
    };
    sync_canvas_to_viewport(&window, canvas, scene);

    let canvas = canvas.clone();
    let scene = scene.clone();
    let target = window.clone();
    dom::add_listener(&target, "resize", move || {
        sync_canvas_to_viewport(&window, &canvas, &scene);
    });
}
