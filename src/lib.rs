#![cfg(target_arch = "wasm32")]
use portfolio_core::{SectionTracker, SiteConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod emailjs;
mod frame;
mod nav;
mod particles;
mod payload;
mod style;
mod theme;

/// Everything attached to the page. Dropping it detaches every listener,
/// clears the particles and stops the frame loop.
struct App {
    _listeners: Vec<dom::Listener>,
    particles: Option<particles::ParticleMount>,
    frame_running: Rc<Cell<bool>>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.frame_running.set(false);
        log::info!("portfolio-web unmounted");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    match mount() {
        Ok(app) => APP.with(|slot| {
            // Replacing an earlier mount drops (and detaches) it first.
            *slot.borrow_mut() = Some(app);
        }),
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Detach all listeners and stop animations.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

/// Regenerate the hero particles with a new count (no-op if unchanged).
#[wasm_bindgen]
pub fn set_particle_count(count: u32) {
    APP.with(|slot| {
        if let Some(p) = slot.borrow_mut().as_mut().and_then(|app| app.particles.as_mut()) {
            p.set_count(count as usize);
        }
    });
}

fn mount() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SiteConfig::for_variant(dom::read_variant(&document));
    let features = config.variant.features();
    log::info!("[config] variant={:?} features={:?}", config.variant, features);

    let tracker = SectionTracker::new(config.sections, config.header_offset)
        .map_err(|e| anyhow::anyhow!("section tracker: {e}"))?;
    let tracker = Rc::new(RefCell::new(tracker));

    let mut listeners = nav::mount(&window, &document, tracker, features.scroll_spy);
    if let Some(form) = contact::mount(&document, config.delivery.clone()) {
        listeners.extend(form);
    }
    if features.theme_toggle {
        listeners.extend(theme::mount(&window, &document));
    }

    let particles = if features.particles {
        particles::ParticleMount::mount(&document, config.particle_count)
    } else {
        None
    };

    let frame_running = Rc::new(Cell::new(false));
    let progress_bar = if features.progress_bar {
        dom::optional_element(&document, constants::PROGRESS_BAR_ID, "progress bar")
    } else {
        None
    };
    let geometry = if features.floating_geometry {
        dom::optional_element(&document, constants::GEOMETRY_ID, "floating geometry")
    } else {
        None
    };
    let frame_ctx =
        frame::FrameContext::new(window.clone(), document.clone(), progress_bar, geometry);
    if !frame_ctx.is_idle() {
        frame_running.set(true);
        frame::start_loop(Rc::new(RefCell::new(frame_ctx)), frame_running.clone());
    }

    Ok(App {
        _listeners: listeners,
        particles,
        frame_running,
    })
}
