//! Datei-Zugriff über FileReader
//!
//! Liest eine ausgewählte Datei asynchron als Bytes und liefert das
//! Ergebnis per Callback. Fehler kommen als Meldung zurück; der
//! Aufrufer entscheidet, was dem Techniker angezeigt wird.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

const READ_ERROR: &str = "Datei konnte nicht gelesen werden";

pub fn read_file_bytes<F>(file: File, on_done: F)
where
    F: Fn(Result<Vec<u8>, String>) + 'static + Clone,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            on_done(Err(READ_ERROR.to_string()));
            return;
        }
    };

    let reader_clone = reader.clone();
    let on_done_load = on_done.clone();
    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        match reader_clone.result() {
            Ok(value) => {
                let array = Uint8Array::new(&value);
                on_done_load(Ok(array.to_vec()));
            }
            Err(_) => on_done_load(Err(READ_ERROR.to_string())),
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let on_done_error = on_done.clone();
    let onerror = Closure::wrap(Box::new(move |_: ProgressEvent| {
        on_done_error(Err(READ_ERROR.to_string()));
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    if reader.read_as_array_buffer(&file).is_err() {
        on_done(Err(READ_ERROR.to_string()));
    }
}
