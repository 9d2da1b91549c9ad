//! Browser driver
//!
//! Mounts the game onto a canvas and a start/stop button. Frames are driven by
//! `requestAnimationFrame`; keys come from a `keydown` listener on the window.
//! All callbacks share one `Rc<RefCell<_>>` and run on the UI thread, so a
//! frame and a key event never interleave.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::game_loop::{FrameToken, GameLoop, Transition};
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

/// Default element ids in `index.html`
pub const CANVAS_ID: &str = "canvas";
pub const BUTTON_ID: &str = "toggle-btn";

fn as_function<T: ?Sized>(closure: &Closure<T>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}

struct WebSession {
    game: GameLoop,
    surface: CanvasSurface,
    window: Window,
    button: Option<Element>,
    /// Pending requestAnimationFrame id and the frame it will run
    scheduled: Option<(i32, FrameToken)>,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    on_key: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    on_click: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl WebSession {
    fn schedule(&mut self, frame: FrameToken) -> Result<(), JsValue> {
        let callback = self
            .on_frame
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback already released"))?;
        let id = self.window.request_animation_frame(as_function(callback))?;
        self.scheduled = Some((id, frame));
        Ok(())
    }

    fn cancel_scheduled(&mut self) {
        if let Some((id, frame)) = self.scheduled.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame({}) failed: {:?}", id, e);
            }
            log::debug!("Cancelled {:?}", frame);
        }
    }

    fn attach_key_listener(&self) -> Result<(), JsValue> {
        if let Some(on_key) = self.on_key.as_ref() {
            self.window
                .add_event_listener_with_callback("keydown", as_function(on_key))?;
            log::info!("Key listener attached");
        }
        Ok(())
    }

    fn detach_key_listener(&self) {
        if let Some(on_key) = self.on_key.as_ref() {
            match self
                .window
                .remove_event_listener_with_callback("keydown", as_function(on_key))
            {
                Ok(()) => log::info!("Key listener removed"),
                Err(e) => log::warn!("Removing key listener failed: {:?}", e),
            }
        }
    }

    fn update_button(&self) {
        if let Some(button) = self.button.as_ref() {
            button.set_text_content(Some(self.game.button_label()));
        }
    }

    fn apply(&mut self, transition: Transition) -> Result<(), JsValue> {
        match transition {
            Transition::Started {
                frame,
                attach_listener,
            } => {
                if attach_listener {
                    if let Err(e) = self.attach_key_listener() {
                        return Err(self.abort_start(false, e));
                    }
                }
                if let Err(e) = self.schedule(frame) {
                    return Err(self.abort_start(true, e));
                }
            }
            Transition::Stopped { cancel } => {
                if cancel.is_some() {
                    self.cancel_scheduled();
                }
            }
            Transition::Unchanged => {}
        }
        self.update_button();
        Ok(())
    }

    /// Roll the loop back to stopped after the browser refused a start
    fn abort_start(&mut self, listener_attached: bool, error: JsValue) -> JsValue {
        log::error!("Could not start game: {:?}", error);
        self.game.abort_start(listener_attached);
        self.update_button();
        error
    }

    fn toggle(&mut self) -> Result<(), JsValue> {
        let transition = self.game.toggle();
        self.apply(transition)
    }

    fn run_scheduled_frame(&mut self) {
        let Some((_, frame)) = self.scheduled.take() else {
            return;
        };
        if let Some(next) = self.game.run_frame(frame, &mut self.surface) {
            if let Err(e) = self.schedule(next) {
                let listener_attached = self.game.listener_attached();
                self.abort_start(listener_attached, e);
            }
        }
    }

    fn unmount(&mut self) {
        let teardown = self.game.teardown();
        if teardown.cancel.is_some() {
            self.cancel_scheduled();
        }
        if teardown.detach_listener {
            self.detach_key_listener();
        }
        if let (Some(button), Some(on_click)) = (self.button.as_ref(), self.on_click.as_ref()) {
            if let Err(e) =
                button.remove_event_listener_with_callback("click", as_function(on_click))
            {
                log::warn!("Removing click listener failed: {:?}", e);
            }
        }
        self.on_frame = None;
        self.on_key = None;
        self.on_click = None;
    }
}

/// A mounted game; unmounts when dropped
#[wasm_bindgen]
pub struct PongHandle {
    session: Rc<RefCell<WebSession>>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Press the start/stop button
    pub fn toggle(&self) -> Result<(), JsValue> {
        self.session.borrow_mut().toggle()
    }

    pub fn is_running(&self) -> bool {
        self.session.borrow().game.is_running()
    }

    /// Cancel the pending frame and remove all listeners
    pub fn unmount(&self) {
        self.session.borrow_mut().unmount();
    }
}

impl Drop for PongHandle {
    fn drop(&mut self) {
        if let Ok(mut session) = self.session.try_borrow_mut() {
            session.unmount();
        }
    }
}

/// Mount the game onto `canvas_id`, wiring `button_id` as the start/stop
/// control. The loop starts stopped.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, button_id: &str) -> Result<PongHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
        .dyn_into()?;
    canvas.set_width(ARENA_WIDTH as u32);
    canvas.set_height(ARENA_HEIGHT as u32);
    let surface = CanvasSurface::new(&canvas)?;

    let button = document.get_element_by_id(button_id);
    if button.is_none() {
        log::warn!("No #{} element, game can only be toggled from JS", button_id);
    }

    let settings = Settings::load();
    let session = Rc::new(RefCell::new(WebSession {
        game: GameLoop::new(&settings),
        surface,
        window,
        button,
        scheduled: None,
        on_frame: None,
        on_key: None,
        on_click: None,
    }));

    let on_frame = {
        let weak: Weak<RefCell<WebSession>> = Rc::downgrade(&session);
        Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().run_scheduled_frame();
            }
        })
    };

    let on_key = {
        let weak = Rc::downgrade(&session);
        Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().game.handle_key(&event.key());
            }
        })
    };

    let on_click = {
        let weak = Rc::downgrade(&session);
        Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Some(session) = weak.upgrade() {
                if let Err(e) = session.borrow_mut().toggle() {
                    log::error!("Toggle failed: {:?}", e);
                }
            }
        })
    };

    {
        let mut s = session.borrow_mut();
        if let Some(button) = s.button.as_ref() {
            button.add_event_listener_with_callback("click", as_function(&on_click))?;
        }
        s.on_frame = Some(on_frame);
        s.on_key = Some(on_key);
        s.on_click = Some(on_click);
        s.update_button();
    }

    log::info!("Mounted on #{}", canvas_id);
    Ok(PongHandle { session })
}

thread_local! {
    static MOUNTED: RefCell<Option<PongHandle>> = const { RefCell::new(None) };
}

/// Page entry point: set up logging and mount onto the default elements
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Vaporwave Pong starting...");

    let handle = mount(CANVAS_ID, BUTTON_ID)?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(handle));
    Ok(())
}

/// Tear down the game mounted by [`run`]
#[wasm_bindgen(js_name = unmountDefault)]
pub fn unmount_default() {
    let handle = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if handle.is_none() {
        log::warn!("Nothing mounted");
    }
}
