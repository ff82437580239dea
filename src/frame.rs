use crate::constants::GEOMETRY_PX_PER_UNIT;
use crate::style;
use instant::Instant;
use portfolio_core::{scroll_progress, FloatingMotion, ProgressDisplay};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame decoration state: scroll progress bar and floating geometry.
pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub progress_bar: Option<web::HtmlElement>,
    pub geometry: Option<web::HtmlElement>,
    pub progress: ProgressDisplay,
    pub motion: FloatingMotion,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        document: web::Document,
        progress_bar: Option<web::HtmlElement>,
        geometry: Option<web::HtmlElement>,
    ) -> Self {
        let now = Instant::now();
        Self {
            window,
            document,
            progress_bar,
            geometry,
            progress: ProgressDisplay::default(),
            motion: FloatingMotion::default(),
            started: now,
            last_instant: now,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.progress_bar.is_none() && self.geometry.is_none()
    }

    fn document_progress(&self) -> f32 {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_h = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let scroll_h = self
            .document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        scroll_progress(scroll_y, scroll_h, viewport_h)
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if self.progress_bar.is_some() {
            let target = self.document_progress();
            if let (Some(value), Some(bar)) =
                (self.progress.update(target, dt_sec), &self.progress_bar)
            {
                let _ = bar
                    .style()
                    .set_property("transform", &style::progress_transform(value));
            }
        }

        if let Some(geometry) = &self.geometry {
            let elapsed = (now - self.started).as_secs_f32();
            let pose = self.motion.pose(elapsed);
            let _ = geometry.style().set_property(
                "transform",
                &style::geometry_transform(&pose, GEOMETRY_PX_PER_UNIT),
            );
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::debug!("[frame] loop stopped");
            // Release the closure's hold on itself.
            drop(tick_clone.borrow_mut().take());
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
