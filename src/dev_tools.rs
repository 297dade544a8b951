//! Developer Tools
//!
//! Console helpers installed on `window`:
//! - `fillLocalStorage(chunkChars?)` exhausts storage so the next save fails
//! - `clearLocalStorage()` removes the filler again
//! - `dispatchTodoAction(json)` dispatches a raw action, throwing on bad input

use log::info;
use todo_core::{clear_filler, fill_storage, TodoAction, DEFAULT_CHUNK_CHARS, MAX_CHUNK_CHARS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::context::TodoContext;

/// Chunk size for a `fillLocalStorage` argument; junk falls back to the default
fn chunk_chars(requested: Option<f64>) -> usize {
    match requested {
        Some(c) if c.is_finite() && c >= 1.0 => {
            if c >= MAX_CHUNK_CHARS as f64 {
                log::warn!("[DEV] Chunk of {} chars capped at {}", c, MAX_CHUNK_CHARS);
                MAX_CHUNK_CHARS
            } else {
                c as usize
            }
        }
        _ => DEFAULT_CHUNK_CHARS,
    }
}

pub fn install(ctx: TodoContext) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let fill = Closure::<dyn Fn(Option<f64>) -> u32>::new(move |chunk: Option<f64>| {
        let chunk = chunk_chars(chunk);
        ctx.with_storage(|storage| fill_storage(storage, chunk).keys_written as u32)
            .unwrap_or(0)
    });

    let clear = Closure::<dyn Fn() -> u32>::new(move || {
        ctx.with_storage(|storage| clear_filler(storage) as u32)
            .unwrap_or(0)
    });

    let dispatch = Closure::<dyn Fn(String) -> Result<(), JsValue>>::new(move |json: String| {
        let action = TodoAction::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        ctx.dispatch(action);
        Ok(())
    });

    let hooks: [(&str, &JsValue); 3] = [
        ("fillLocalStorage", fill.as_ref()),
        ("clearLocalStorage", clear.as_ref()),
        ("dispatchTodoAction", dispatch.as_ref()),
    ];
    for (name, hook) in hooks {
        if js_sys::Reflect::set(&window, &JsValue::from_str(name), hook).is_err() {
            log::warn!("[DEV] Could not install window.{}", name);
        }
    }
    fill.forget();
    clear.forget();
    dispatch.forget();

    info!("[DEV] Console helpers installed: fillLocalStorage, clearLocalStorage, dispatchTodoAction");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_argument() {
        assert_eq!(chunk_chars(None), DEFAULT_CHUNK_CHARS);
        assert_eq!(chunk_chars(Some(f64::NAN)), DEFAULT_CHUNK_CHARS);
        assert_eq!(chunk_chars(Some(f64::INFINITY)), DEFAULT_CHUNK_CHARS);
        assert_eq!(chunk_chars(Some(0.5)), DEFAULT_CHUNK_CHARS);
        assert_eq!(chunk_chars(Some(1e20)), MAX_CHUNK_CHARS);
        assert_eq!(chunk_chars(Some(2048.0)), 2048);
    }
}
