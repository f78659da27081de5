//! Errors and the legacy failure reason slot

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::Mutex;

use thiserror::Error;

/// Errors produced by pixmap operations
#[derive(Error, Debug)]
pub enum Error {
    /// Format identifier outside of the known range
    #[error("unknown pixel format id {0}")]
    InvalidFormat(u32),
    /// Blend or scale mode identifier outside of the known range
    #[error("unknown mode id {0}")]
    InvalidMode(u32),
    /// Width or height of zero, or a size that cannot be allocated
    #[error("invalid pixmap dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// Decoder rejected the input
    #[error("failed to decode image: {0}")]
    Decode(String),
    /// Pixel coordinate outside of the pixmap
    #[error("pixel ({x},{y}) outside of {width}x{height} pixmap")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
    /// Operation aborted by a panic inside the library
    #[error("internal error in {0}")]
    Internal(String),
    /// File access for the load and save helpers
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Most recent failure, shared by the whole process
///
/// Last writer wins when failing calls race on different threads
static LAST_FAILURE: Mutex<Option<CString>> = Mutex::new(None);

/// Store the message of `err` as the most recent failure
pub fn record_failure(err: &Error) {
    log::warn!("pixmap failure: {}", err);
    let msg = CString::new(err.to_string().replace('\0', " ")).unwrap_or_default();
    match LAST_FAILURE.lock() {
        Ok(mut slot) => *slot = Some(msg),
        Err(poisoned) => *poisoned.into_inner() = Some(msg),
    }
}

/// Message of the most recent failure, if any failure has been recorded
pub fn last_failure() -> Option<String> {
    let slot = match LAST_FAILURE.lock() {
        Ok(slot) => slot,
        Err(poisoned) => poisoned.into_inner(),
    };
    slot.as_ref().map(|s| s.to_string_lossy().into_owned())
}

thread_local! {
    /// Copy of the failure message handed out to this thread
    static FAILURE_COPY: RefCell<Option<CString>> = RefCell::new(None);
}

/// Pointer to the most recent failure message, or null
///
/// The pointer refers to a copy owned by the calling thread and stays
/// valid until the next call on that thread, whatever other threads do
/// to the shared slot meanwhile
pub(crate) fn last_failure_ptr() -> *const c_char {
    let msg = match LAST_FAILURE.lock() {
        Ok(slot) => slot.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    FAILURE_COPY.with(|copy| {
        let mut copy = copy.borrow_mut();
        *copy = msg;
        copy.as_ref().map_or(std::ptr::null(), |s| s.as_ptr())
    })
}
