use crate::constants::DATA_ID_ATTR;
use crate::dom;
use crate::events::{self, ListenerSet, SharedController};
use crate::host::DomHost;
use crate::options::AttachOptions;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tilt_core::error::Result;
use tilt_core::{Attachment, Registry, TiltConfig, TiltController, TiltError, TiltOptions};
use web_sys as web;

/// Live tilt effect on one container.
pub struct Entry {
    container: web::Element,
    controller: SharedController,
    listeners: ListenerSet,
}

impl Attachment for Entry {
    fn configure(&mut self, options: &TiltOptions) {
        self.controller.borrow_mut().configure(options);
    }

    fn teardown(&mut self) {
        self.listeners.remove_all();
        self.controller.borrow_mut().teardown();
        _ = self.container.remove_attribute(DATA_ID_ATTR);
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry<u32, Entry>> = RefCell::new(Registry::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Attach the effect to `container`, or update its options if already attached.
///
/// Returns `true` when a new attachment was created.
pub fn attach(container: &web::Element, options: &AttachOptions) -> Result<bool> {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let key = match stored_id(container) {
            Some(id) if owned_by(&registry, id, container) => id,
            _ => NEXT_ID.with(|next| {
                let id = next.get();
                next.set(id.wrapping_add(1));
                id
            }),
        };
        registry.attach(key, &options.tilt, || create_entry(key, container, options))
    })
}

/// Remove the effect from `container`. Unattached elements are ignored.
pub fn detach(container: &web::Element) -> bool {
    let Some(id) = stored_id(container) else {
        return false;
    };
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if owned_by(&registry, id, container) {
            let removed = registry.detach(&id);
            log::debug!("[tilt] detached #{}", id);
            removed
        } else {
            // copied attribute (e.g. cloneNode) without a live attachment
            _ = container.remove_attribute(DATA_ID_ATTR);
            false
        }
    })
}

pub fn is_attached(container: &web::Element) -> bool {
    match stored_id(container) {
        Some(id) => REGISTRY.with(|registry| owned_by(&registry.borrow(), id, container)),
        None => false,
    }
}

fn create_entry(id: u32, container: &web::Element, options: &AttachOptions) -> Result<Entry> {
    let targets = dom::resolve_targets(container, &options.target)?;
    let target_count = targets.len();
    let host = DomHost::new(container.clone(), targets);
    let config = TiltConfig::from_options(&options.tilt);
    let controller = Rc::new(RefCell::new(TiltController::new(host, config)));

    events::wire_animation_frame(&controller);
    let listeners = events::wire_pointer_handlers(container, &controller)
        .map_err(|e| TiltError::Dom(e.to_string()))?;
    container
        .set_attribute(DATA_ID_ATTR, &id.to_string())
        .map_err(|e| TiltError::Dom(format!("{:?}", e)))?;

    controller.borrow_mut().reset(None);
    log::debug!(
        "[tilt] attached #{} ({} targets, {} listeners, base transform {:?})",
        id,
        target_count,
        listeners.len(),
        controller.borrow().base_transform()
    );
    Ok(Entry {
        container: container.clone(),
        controller,
        listeners,
    })
}

fn stored_id(container: &web::Element) -> Option<u32> {
    container
        .get_attribute(DATA_ID_ATTR)
        .and_then(|raw| raw.parse().ok())
}

fn owned_by(registry: &Registry<u32, Entry>, id: u32, container: &web::Element) -> bool {
    registry
        .get(&id)
        .is_some_and(|entry| &entry.container == container)
}

