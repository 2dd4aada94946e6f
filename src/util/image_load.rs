//! Reading a user-chosen picture into a data URL.

#[cfg(test)]
#[path = "image_load_test.rs"]
mod image_load_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageLoadError {
    #[error("no file selected")]
    NoFile,
    #[error("could not start reading the file: {0}")]
    Reader(String),
    #[error("the browser could not read the file")]
    Read,
    #[error("the file reader returned no data URL")]
    NotText,
}

impl ImageLoadError {
    /// Message for the page; `None` when the user simply cancelled the picker.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::NoFile => None,
            other => Some(format!("Could not load that picture: {other}.")),
        }
    }
}

#[cfg(feature = "csr")]
pub use browser::{first_file, read_data_url};

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{File, FileReader, HtmlInputElement};

    use super::ImageLoadError;

    /// First file currently selected in `input`.
    ///
    /// # Errors
    ///
    /// [`ImageLoadError::NoFile`] when the selection is empty.
    pub fn first_file(input: &HtmlInputElement) -> Result<File, ImageLoadError> {
        input.files().and_then(|list| list.get(0)).ok_or(ImageLoadError::NoFile)
    }

    /// Start reading `file`; `on_done` runs once with the data URL or the failure.
    ///
    /// # Errors
    ///
    /// Returns an error when the reader cannot be created or started, in which
    /// case `on_done` is never called.
    pub fn read_data_url(
        file: &File,
        on_done: impl FnOnce(Result<String, ImageLoadError>) + 'static,
    ) -> Result<(), ImageLoadError> {
        let reader = FileReader::new().map_err(|e| ImageLoadError::Reader(describe(&e)))?;
        let done = Rc::new(RefCell::new(Some(on_done)));

        let load_reader = reader.clone();
        let load_done = Rc::clone(&done);
        let onload = Closure::once_into_js(move || {
            let result = load_reader
                .result()
                .map_err(|_| ImageLoadError::Read)
                .and_then(|value| value.as_string().ok_or(ImageLoadError::NotText));
            let callback = load_done.borrow_mut().take();
            if let Some(callback) = callback {
                callback(result);
            }
        });

        let error_done = Rc::clone(&done);
        let onerror = Closure::once_into_js(move || {
            let callback = error_done.borrow_mut().take();
            if let Some(callback) = callback {
                callback(Err(ImageLoadError::Read));
            }
        });

        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
        reader.read_as_data_url(file).map_err(|e| ImageLoadError::Reader(describe(&e)))
    }

    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}
