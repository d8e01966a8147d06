use crate::constants::{EVENT_ENTER, EVENT_LEAVE, EVENT_MOVE};
use crate::host::DomHost;
use crate::input;
use anyhow::anyhow;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tilt_core::TiltController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<TiltController<DomHost>>>;

struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(web::MouseEvent)>,
}

/// Listeners added to one container, kept so they can be removed as a group.
pub struct ListenerSet {
    target: web::Element,
    listeners: SmallVec<[Listener; 3]>,
}

impl ListenerSet {
    pub fn new(target: web::Element) -> Self {
        Self {
            target,
            listeners: SmallVec::new(),
        }
    }

    pub fn add(
        &mut self,
        event: &'static str,
        handler: impl FnMut(web::MouseEvent) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        self.listeners.push(Listener { event, closure });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Remove exactly the listeners this set added.
    pub fn remove_all(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(e) = self.target.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("[tilt] remove {} listener: {:?}", listener.event, e);
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// Register enter/leave/move handlers on `container` that drive `controller`.
pub fn wire_pointer_handlers(
    container: &web::Element,
    controller: &SharedController,
) -> anyhow::Result<ListenerSet> {
    let mut set = ListenerSet::new(container.clone());

    let weak = Rc::downgrade(controller);
    let el = container.clone();
    set.add(EVENT_ENTER, move |ev| {
        let offset = input::pointer_offset(&ev, &el);
        with_controller(&weak, |c| c.on_enter(offset));
    })?;

    let weak = Rc::downgrade(controller);
    set.add(EVENT_LEAVE, move |_ev| {
        with_controller(&weak, |c| c.on_leave());
    })?;

    let weak = Rc::downgrade(controller);
    let el = container.clone();
    set.add(EVENT_MOVE, move |ev| {
        let offset = input::pointer_offset(&ev, &el);
        with_controller(&weak, |c| c.on_move(offset));
    })?;

    Ok(set)
}

/// Install the per-frame callback that advances `controller`'s animation.
pub fn wire_animation_frame(controller: &SharedController) {
    let weak = Rc::downgrade(controller);
    let closure = Closure::wrap(Box::new(move |timestamp: f64| {
        with_controller(&weak, |c| c.on_animation_frame(timestamp));
    }) as Box<dyn FnMut(f64)>);
    controller.borrow_mut().host_mut().frame.install(closure);
}

#[inline]
fn with_controller(
    weak: &Weak<RefCell<TiltController<DomHost>>>,
    f: impl FnOnce(&mut TiltController<DomHost>),
) {
    if let Some(controller) = weak.upgrade() {
        f(&mut controller.borrow_mut());
    }
}
