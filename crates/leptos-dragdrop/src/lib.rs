//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reordering a flat Leptos list.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget<K> {
    /// Drop on another entry (take its place)
    Entry(K),
    /// Drop on the gap before list position `n` (`n == len` is the end)
    Slot(usize),
}

/// DnD state signals, keyed by the list's entry key
#[derive(Clone, Copy)]
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<K>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<K>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending entry (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Copy + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<K>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Translate a gap index into the index the dragged entry should take once
/// it has been removed from the list.
///
/// `from` is the dragged entry's current index; gaps at or after it shift
/// down by one.
pub fn resolve_slot(from: usize, slot: usize) -> usize {
    if slot > from {
        slot - 1
    } else {
        slot
    }
}

/// Whether the click that follows a mouseup should be swallowed.
///
/// Only a mouseup that ends a real drag suppresses the click; a plain click on
/// an entry must still reach its handler.
pub fn should_suppress_click<K>(dragging: Option<K>) -> bool {
    dragging.is_some()
}

/// Clear drag state on mouseup.
///
/// Returns the dragged entry, if a drag was underway, and where it was
/// dropped. Returns `None` once the signals have been disposed.
pub fn finish_drag<K>(dnd: &DndSignals<K>) -> Option<(Option<K>, Option<DropTarget<K>>)>
where
    K: Copy + Send + Sync + 'static,
{
    let dragging = dnd.dragging_read.try_get_untracked()?;
    let drop_target = dnd.drop_target_read.try_get_untracked()?;

    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(should_suppress_click(dragging));

    Some((dragging, drop_target))
}

/// Release the click suppression shortly after a drag
fn schedule_click_release<K>(dnd: &DndSignals<K>)
where
    K: Copy + Send + Sync + 'static,
{
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable entries
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Form controls keep their own mouse behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(key));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Copy + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.try_get_untracked() else {
            return;
        };

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for entries
pub fn make_on_entry_mouseenter<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != key {
                dnd.drop_target_write.set(Some(DropTarget::Entry(key)));
            }
        }
    }
}

/// Create mouseenter handler for gaps between entries
pub fn make_on_slot_mouseenter<K>(dnd: DndSignals<K>, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// The document listeners live for the rest of the page, so bind once, from a
/// component that is never unmounted.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: Copy + Send + Sync + 'static,
    F: Fn(K, DropTarget<K>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some((dragging, drop_target)) = finish_drag(&dnd) else {
            return;
        };
        if should_suppress_click(dragging) {
            schedule_click_release(&dnd);
        }

        // Only an actual drag produces a drop; a plain click falls through
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
