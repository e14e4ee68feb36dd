#![cfg(target_arch = "wasm32")]
use folio_core::{Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod avatar;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod style;

use constants::{DENSITY_ATTRIBUTE, PARTICLE_CANVAS_ID};

struct Runtime {
    scene: Rc<RefCell<Scene>>,
    animation: frame::AnimationLoop,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("folio-web already started; ignoring");
        return Ok(());
    }
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the render loop; state is kept for `resume`.
#[wasm_bindgen]
pub fn pause() {
    RUNTIME.with(|rt| {
        if let Some(rt) = rt.borrow().as_ref() {
            rt.animation.stop();
        }
    });
}

/// Restart the render loop. Calling it while running does nothing.
#[wasm_bindgen]
pub fn resume() {
    RUNTIME.with(|rt| {
        if let Some(rt) = rt.borrow().as_ref() {
            if !rt.scene.borrow().is_disposed() {
                rt.animation.start(rt.frame_ctx.clone());
            }
        }
    });
}

/// Tear everything down for good.
#[wasm_bindgen]
pub fn dispose() {
    RUNTIME.with(|rt| {
        if let Some(rt) = rt.borrow_mut().take() {
            rt.animation.stop();
            rt.scene.borrow_mut().dispose();
        }
    });
}

fn scene_config_from_dom(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    let mut config = SceneConfig::default();
    if let Some(area) = dom::f32_attribute(canvas, DENSITY_ATTRIBUTE) {
        config.field.density_area = area;
    }
    if let Err(e) = config.validate() {
        log::warn!("[config] {e}; using defaults");
        return SceneConfig::default();
    }
    config
}

fn wire_visibility(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move || {
        if doc.hidden() {
            pause();
        } else {
            resume();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PARTICLE_CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;

    // The background still runs on pages without the avatar.
    let avatar = match avatar::AvatarElements::query(&document) {
        Ok(a) => Some(a),
        Err(e) => {
            log::warn!("[avatar] disabled: {e}");
            None
        }
    };

    let theme = events::load_saved_theme(&window).unwrap_or_default();
    let seed: u64 = rand::random();
    let scene = Rc::new(RefCell::new(Scene::init(
        scene_config_from_dom(&canvas),
        theme,
        seed,
    )?));
    if let Some(a) = &avatar {
        scene.borrow_mut().set_anchor(a.anchor());
    }

    events::wire_viewport_resize(&canvas, &scene);
    events::wire_pointer_move(&scene, avatar.clone());
    events::wire_hover_boost(&document, &scene);
    events::wire_theme_toggle(&document, &scene, theme);
    wire_visibility(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        avatar,
        surface,
    }));
    log::info!(
        "[init] theme={} particles={}",
        theme.as_str(),
        scene.borrow().field().len()
    );
    let animation = frame::AnimationLoop::default();
    animation.start(frame_ctx.clone());
    RUNTIME.with(|rt| {
        *rt.borrow_mut() = Some(Runtime {
            scene,
            animation,
            frame_ctx,
        })
    });
    Ok(())
}
