//! C ABI for the RSA operations, for loading the library dynamically.
//!
//! Every export returns `0` on success and `-1` on failure. The failure
//! message is kept per thread and can be taken with [`rsa_last_error`].
//! Nothing here exits or panics across the boundary, and no global log
//! subscriber is installed: events reach whatever subscriber the host has.

#![allow(clippy::missing_safety_doc)]

use std::cell::RefCell;
use std::ffi::{CStr, CString, c_char, c_int};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;
use std::ptr;

use tracing::error;

use crate::error::{Error, Result};
use crate::key::pem;
use crate::processor;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_last_error(message: String) {
    error!("ffi call failed: {message}");
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(message));
}

fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}

fn status(op: impl FnOnce() -> Result<()>) -> c_int {
    match catch_unwind(AssertUnwindSafe(op)) {
        Ok(Ok(())) => 0,
        Ok(Err(err)) => {
            set_last_error(err.to_string());
            -1
        }
        Err(_) => {
            set_last_error("internal panic".to_owned());
            -1
        }
    }
}

/// Borrows a NUL-terminated UTF-8 path argument.
unsafe fn path_arg<'a>(ptr: *const c_char, name: &str) -> Result<&'a Path> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument(format!("{name} is null")));
    }
    // SAFETY: caller guarantees `ptr` is a valid NUL-terminated string for `'a`.
    let text = unsafe { CStr::from_ptr(ptr) }.to_str().map_err(|_| Error::InvalidArgument(format!("{name} is not valid UTF-8")))?;
    Ok(Path::new(text))
}

/// Generates an RSA key pair of `bits` and writes it as PEM.
///
/// # Safety
/// Both paths must be valid NUL-terminated UTF-8 strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn generate_rsa_keys(bits: c_int, public_key_file: *const c_char, private_key_file: *const c_char) -> c_int {
    status(|| {
        let public_path = unsafe { path_arg(public_key_file, "public_key_file") }?;
        let private_path = unsafe { path_arg(private_key_file, "private_key_file") }?;
        let bits = usize::try_from(bits).map_err(|_| Error::InvalidArgument(format!("invalid key size: {bits}")))?;

        processor::generate_rsa_files(bits, public_path, private_path).map(|_| ())
    })
}

/// Encrypts `input_file` into `output_file` with the PEM public key.
///
/// # Safety
/// All paths must be valid NUL-terminated UTF-8 strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rsa_encrypt(public_key_file: *const c_char, input_file: *const c_char, output_file: *const c_char) -> c_int {
    status(|| {
        let key_path = unsafe { path_arg(public_key_file, "public_key_file") }?;
        let input = unsafe { path_arg(input_file, "input_file") }?;
        let output = unsafe { path_arg(output_file, "output_file") }?;

        let key = pem::read_public(key_path)?;
        processor::encrypt_rsa(&key, input, output).map(|_| ())
    })
}

/// Decrypts `input_file` into `output_file` with the PEM private key.
///
/// # Safety
/// All paths must be valid NUL-terminated UTF-8 strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rsa_decrypt(private_key_file: *const c_char, input_file: *const c_char, output_file: *const c_char) -> c_int {
    status(|| {
        let key_path = unsafe { path_arg(private_key_file, "private_key_file") }?;
        let input = unsafe { path_arg(input_file, "input_file") }?;
        let output = unsafe { path_arg(output_file, "output_file") }?;

        let key = pem::read_private(key_path)?;
        processor::decrypt_rsa(&key, input, output).map(|_| ())
    })
}

/// Takes the calling thread's last error message, or NULL if there is none.
/// Free the result with [`rsa_string_free`].
#[unsafe(no_mangle)]
pub extern "C" fn rsa_last_error() -> *mut c_char {
    take_last_error().and_then(|msg| CString::new(msg).ok()).map_or(ptr::null_mut(), CString::into_raw)
}

/// Frees a string returned by [`rsa_last_error`].
///
/// # Safety
/// `s` must come from [`rsa_last_error`] and must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rsa_string_free(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: `s` was produced by `CString::into_raw`.
        drop(unsafe { CString::from_raw(s) });
    }
}
