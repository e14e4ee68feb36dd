use crate::avatar::AvatarElements;
use crate::canvas::CanvasSurface;
use folio_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub avatar: Option<AvatarElements>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        let params = self.scene.borrow_mut().frame(now, &mut self.surface);
        if let Some(avatar) = &self.avatar {
            avatar.apply(&params);
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that can be stopped and restarted.
///
/// Holds at most one pending frame request; `start` on a running loop is a
/// no-op so two competing loops can never exist.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self {
            handle: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }
}

impl AnimationLoop {
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn start(&self, frame_ctx: Rc<RefCell<FrameContext>>) {
        if self.is_running() {
            log::warn!("[frame] loop already running; ignoring start");
            return;
        }
        let handle = self.handle.clone();
        let tick_clone = self.tick.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().frame();
            // stop() may have run during this frame
            if handle.get().is_some() {
                handle.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));
        self.handle.set(request_frame(&self.tick));
        log::info!("[frame] loop started");
    }

    /// Cancel the pending frame and release the tick closure.
    ///
    /// Must be called from outside the frame callback.
    pub fn stop(&self) {
        let Some(id) = self.handle.take() else {
            return;
        };
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
