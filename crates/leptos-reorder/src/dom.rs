//! Browser Binding
//!
//! Wires [`DragReorder`] to a list container using native HTML5 drag events.
//! Tiles are the container's element children (rendered with
//! `draggable="true"`); a tile's index is its position among them.
//! Listeners are delegated on the container, so tiles re-rendered after a
//! commit need no rebinding.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, EventTarget, HtmlElement, Node};

use crate::animation::TransitionTicket;
use crate::config::ReorderConfig;
use crate::controller::DragReorder;
use crate::error::{ReorderError, ReorderResult};
use crate::geometry::Offset;
use crate::host::{OrderedList, ReorderHost, TileSurface, TransitionScheduler};
use crate::state::TileState;

type Shared<L> = Rc<RefCell<DragReorder<L, DomHost<L>>>>;

/// [`ReorderHost`] over the element children of a container
pub struct DomHost<L: 'static> {
    container: HtmlElement,
    raised_z_index: i32,
    on_commit: Box<dyn FnMut(usize, usize)>,
    controller: Weak<RefCell<DragReorder<L, DomHost<L>>>>,
}

impl<L: 'static> DomHost<L> {
    fn tile(&self, index: usize) -> Option<HtmlElement> {
        self.container
            .children()
            .item(index as u32)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn style(&self, index: usize, property: &str, value: Option<&str>) {
        let Some(tile) = self.tile(index) else {
            return;
        };
        let style = tile.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("[REORDER] Failed to set {} on tile {}: {:?}", property, index, e);
        }
    }
}

impl<L: 'static> TileSurface for DomHost<L> {
    fn tile_count(&self) -> usize {
        self.container.children().length() as usize
    }

    fn resting_offset(&self, index: usize) -> Offset {
        self.tile(index)
            .map(|tile| Offset::new(tile.offset_left() as f64, tile.offset_top() as f64))
            .unwrap_or_default()
    }

    fn set_state(&mut self, index: usize, state: TileState) {
        let Some(tile) = self.tile(index) else {
            return;
        };
        let classes = tile.class_list();
        let mut result = Ok(());
        for class in TileState::CLASSES {
            result = result.and(classes.remove_1(class));
        }
        if let Some(class) = state.css_class() {
            result = result.and(classes.add_1(class));
        }
        if let Err(e) = result {
            log::warn!("[REORDER] Failed to tag tile {} as {:?}: {:?}", index, state, e);
        }
    }

    fn set_transform(&mut self, index: usize, translate: Option<Offset>) {
        let value = translate.map(Offset::to_translate);
        self.style(index, "transform", value.as_deref());
    }

    fn set_transition(&mut self, index: usize, duration: Option<Duration>) {
        let value = duration.map(|d| format!("transform {}ms", d.as_millis()));
        self.style(index, "transition", value.as_deref());
    }

    fn set_raised(&mut self, index: usize, raised: bool) {
        let value = raised.then(|| self.raised_z_index.to_string());
        self.style(index, "z-index", value.as_deref());
    }

    fn set_opacity(&mut self, index: usize, opacity: Option<f64>) {
        let value = opacity.map(|o| o.to_string());
        self.style(index, "opacity", value.as_deref());
    }
}

impl<L: OrderedList + 'static> TransitionScheduler for DomHost<L> {
    fn schedule(&mut self, ticket: TransitionTicket, after: Duration) {
        let controller = self.controller.clone();
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(millis).await;
            let Some(controller) = controller.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.transition_finished(ticket),
                Err(_) => log::warn!("[REORDER] Controller busy, dropping completion for tile {}", ticket.index),
            };
        });
    }
}

impl<L: OrderedList + 'static> ReorderHost for DomHost<L> {
    fn commit_reorder(&mut self, from: usize, to: usize) {
        (self.on_commit)(from, to);
    }
}

/// Find the container child that contains `target`, with its index
fn find_tile(container: &HtmlElement, target: Option<EventTarget>) -> Option<(usize, HtmlElement)> {
    let container_node: &Node = container.as_ref();
    let mut node: Node = target?.dyn_into().ok()?;
    loop {
        let parent = node.parent_node()?;
        if &parent == container_node {
            break;
        }
        node = parent;
    }
    let tile: HtmlElement = node.dyn_into().ok()?;
    let children = container.children();
    (0..children.length())
        .find(|&i| children.item(i).as_ref() == Some(&*tile))
        .map(|i| (i as usize, tile))
}

struct Listeners {
    container: HtmlElement,
    handlers: Vec<(&'static str, Closure<dyn FnMut(DragEvent)>)>,
}

impl Listeners {
    fn add(&mut self, event: &'static str, handler: impl FnMut(DragEvent) + 'static) -> ReorderResult<()> {
        let closure = Closure::<dyn FnMut(DragEvent)>::new(handler);
        self.container
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| ReorderError::dom(event, e))?;
        self.handlers.push((event, closure));
        Ok(())
    }

    fn detach(self) {
        for (event, closure) in &self.handlers {
            if let Err(e) = self
                .container
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("[REORDER] Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

/// Borrow the controller for an event, skipping the event if it is already borrowed
fn with_controller<L: OrderedList + 'static>(shared: &Shared<L>, event: &str, f: impl FnOnce(&mut DragReorder<L, DomHost<L>>)) {
    match shared.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::warn!("[REORDER] Re-entrant {} ignored", event),
    }
}

/// Drag reordering bound to a DOM list container.
///
/// Cloning yields another handle to the same binding.
pub struct DomReorder<L: 'static> {
    shared: Shared<L>,
    listeners: Rc<RefCell<Option<Listeners>>>,
}

impl<L: 'static> Clone for DomReorder<L> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<L: OrderedList + 'static> DomReorder<L> {
    /// Bind to `container`. `on_commit(from, to)` runs after `list` has been reordered.
    pub fn initialize(
        container: HtmlElement,
        list: L,
        config: ReorderConfig,
        on_commit: impl FnMut(usize, usize) + 'static,
    ) -> ReorderResult<Self> {
        config.validate()?;
        let raised_z_index = config.raised_z_index;
        let host_container = container.clone();
        let shared: Shared<L> = Rc::new_cyclic(|weak| {
            let host = DomHost {
                container: host_container,
                raised_z_index,
                on_commit: Box::new(on_commit),
                controller: weak.clone(),
            };
            RefCell::new(DragReorder::initialize(list, host, config))
        });

        let mut listeners = Listeners {
            container: container.clone(),
            handlers: Vec::new(),
        };

        {
            let shared = shared.clone();
            let container = container.clone();
            listeners.add("dragstart", move |ev: DragEvent| {
                let Some((index, tile)) = find_tile(&container, ev.target()) else {
                    return;
                };
                let mut started = false;
                with_controller(&shared, "dragstart", |c| started = c.drag_start(index));
                if !started {
                    ev.prevent_default();
                    return;
                }
                // Drag the whole tile, held where the pointer grabbed it
                if let Some(transfer) = ev.data_transfer() {
                    let rect = tile.get_bounding_client_rect();
                    let x = ev.client_x() - rect.left() as i32;
                    let y = ev.client_y() - rect.top() as i32;
                    transfer.set_drag_image(&tile, x, y);
                }
            })?;
        }

        {
            let shared = shared.clone();
            let container = container.clone();
            listeners.add("dragenter", move |ev: DragEvent| {
                if let Some((index, _)) = find_tile(&container, ev.target()) {
                    with_controller(&shared, "dragenter", |c| c.drag_enter(index));
                }
            })?;
        }

        {
            let shared = shared.clone();
            let container = container.clone();
            listeners.add("dragover", move |ev: DragEvent| {
                // Allow dropping anywhere inside the list
                ev.prevent_default();
                if let Some((index, _)) = find_tile(&container, ev.target()) {
                    with_controller(&shared, "dragover", |c| c.drag_over(index));
                }
            })?;
        }

        {
            let shared = shared.clone();
            let container = container.clone();
            listeners.add("dragend", move |ev: DragEvent| {
                let Some((index, _)) = find_tile(&container, ev.target()) else {
                    log::warn!("[REORDER] dragend outside any tile");
                    return;
                };
                with_controller(&shared, "dragend", |c| {
                    c.drag_end(index);
                });
            })?;
        }

        log::debug!("[REORDER] Bound {} tiles", container.children().length());
        Ok(Self {
            shared,
            listeners: Rc::new(RefCell::new(Some(listeners))),
        })
    }

    pub fn toggle_drag(&self, enabled: bool) {
        with_controller(&self.shared, "toggle_drag", |c| c.toggle_drag(enabled));
    }

    pub fn is_dragging(&self) -> bool {
        self.shared
            .try_borrow()
            .map(|c| c.is_dragging())
            .unwrap_or(true)
    }

    pub fn drop_target(&self) -> Option<usize> {
        self.shared.try_borrow().ok().and_then(|c| c.drop_target())
    }

    /// Whether listeners are still attached
    pub fn is_bound(&self) -> bool {
        self.listeners.borrow().is_some()
    }

    /// Detach every listener and abandon any drag in progress. Safe to call repeatedly.
    pub fn clear_listeners(&self) {
        let Some(listeners) = self.listeners.borrow_mut().take() else {
            return;
        };
        listeners.detach();
        with_controller(&self.shared, "clear_listeners", |c| {
            c.cancel();
        });
        log::debug!("[REORDER] Listeners cleared");
    }
}
