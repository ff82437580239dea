use crate::constants::{PARTICLE_CLASS, PARTICLE_CONTAINER_ID, PARTICLE_COUNT_ATTR};
use crate::{dom, style};
use portfolio_core::{resolve_particle_count, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// The hero particle container plus the batch currently rendered into it.
pub struct ParticleMount {
    document: web::Document,
    container: web::HtmlElement,
    field: ParticleField,
    rng: StdRng,
}

impl ParticleMount {
    pub fn mount(document: &web::Document, configured: Option<usize>) -> Option<Self> {
        let container = dom::optional_element(document, PARTICLE_CONTAINER_ID, "particles")?;
        let attr = container.get_attribute(PARTICLE_COUNT_ATTR);
        let count = resolve_particle_count(attr.as_deref(), configured);
        let mut rng = StdRng::from_entropy();
        let mount = Self {
            document: document.clone(),
            container,
            field: ParticleField::with_count(count, &mut rng),
            rng,
        };
        mount.render();
        Some(mount)
    }

    /// Regenerate and re-render when the count changes.
    pub fn set_count(&mut self, count: usize) {
        if self.field.set_count(count, &mut self.rng) {
            self.render();
        }
    }

    fn render(&self) {
        self.container.set_inner_html("");
        for p in self.field.particles() {
            let Ok(el) = self.document.create_element("div") else {
                log::error!("[particles] createElement failed");
                return;
            };
            el.set_class_name(PARTICLE_CLASS);
            let _ = el.set_attribute("style", &style::particle_style(p));
            let _ = self.container.append_child(&el);
        }
        log::info!("[particles] rendered {}", self.field.count());
    }
}

impl Drop for ParticleMount {
    fn drop(&mut self) {
        self.container.set_inner_html("");
    }
}
