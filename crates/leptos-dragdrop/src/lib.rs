//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Rows are addressed by their index in the displayed list. Handlers read the
//! index through a getter, so a row keyed by identity stays correct after moves.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A finished drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEnd {
    /// Index the dragged row started at
    pub source: usize,
    /// Index of the row it was released over, `None` if released elsewhere
    pub destination: Option<usize>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<usize>>,
    pub drop_target_write: WriteSignal<Option<usize>>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    /// Whether a drag gesture is in progress (tracked)
    pub fn is_dragging(&self) -> bool {
        self.dragging_read.get().is_some()
    }

    pub fn is_dragged(&self, index: usize) -> bool {
        self.dragging_read.get() == Some(index)
    }

    pub fn is_drop_target(&self, index: usize) -> bool {
        self.dragging_read.get().is_some() && self.drop_target_read.get() == Some(index)
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer moved far enough from the mousedown point
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Gesture produced by a mouseup; `None` when no drag was active (a plain click)
pub fn resolve_drop(dragging: Option<usize>, drop_target: Option<usize>) -> Option<DragEnd> {
    dragging.map(|source| DragEnd {
        source,
        destination: drop_target,
    })
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<I>(dnd: DndSignals, index: I) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    I: Fn() -> usize + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Form controls inside a row keep their own behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(index()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = ev.client_x() - dnd.start_x_read.get_untracked();
            let dy = ev.client_y() - dnd.start_y_read.get_untracked();

            if exceeds_threshold(dx, dy) {
                log::debug!("[DND] Drag started at row {:?}", pending);
                dnd.dragging_write.set(pending);
                // The row under the pointer is its own initial target
                dnd.drop_target_write.set(pending);
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

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter<I>(dnd: DndSignals, index: I) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    I: Fn() -> usize + Copy + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(index()));
        }
    }
}

/// Create mouseleave handler for the list container.
/// Leaving the list clears the target, so releasing outside cancels the drag.
pub fn make_on_list_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragEnd) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let gesture = resolve_drop(
            dnd.dragging_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        end_drag(&dnd);

        // Only a real drag reports; a click fires naturally on the element
        if let Some(gesture) = gesture {
            log::debug!("[DND] Drag ended: {:?}", gesture);
            on_drop(gesture);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
