//! StarkWare crypto-cpp backend
//!
//! The shared library is opened on first use. Its path comes from the
//! `STARKEX_CRYPTO_CPP_LIB` environment variable, defaulting to the platform
//! file name of `crypto_c_exports`. All buffers are 32-byte little-endian; outputs
//! use a 1024-byte buffer that holds an error message on failure.
//!
//! Without the `crypto-cpp` feature, every call returns `BackendUnavailable`.

use super::curve::StarkSignature;
use crate::errors::{StarkExError, StarkExResult};
use starknet_types_core::felt::Felt;

/// Environment variable naming the crypto-cpp shared library
pub const CRYPTO_CPP_LIB_ENV: &str = "STARKEX_CRYPTO_CPP_LIB";

const BACKEND_NAME: &str = "crypto-cpp";

fn unavailable(message: impl Into<String>) -> StarkExError {
    StarkExError::BackendUnavailable {
        backend: BACKEND_NAME.to_string(),
        message: message.into(),
    }
}

#[cfg(feature = "crypto-cpp")]
mod ffi {
    use super::{unavailable, CRYPTO_CPP_LIB_ENV};
    use crate::crypto::curve::StarkSignature;
    use crate::errors::{StarkExError, StarkExResult};
    use libloading::Library;
    use once_cell::sync::OnceCell;
    use starknet_types_core::felt::Felt;
    use std::os::raw::c_int;

    const OUT_BUFFER_SIZE: usize = 1024;

    type HashFn = unsafe extern "C" fn(*const u8, *const u8, *mut u8) -> c_int;
    type SignFn = unsafe extern "C" fn(*const u8, *const u8, *const u8, *mut u8) -> c_int;
    type VerifyFn = unsafe extern "C" fn(*const u8, *const u8, *const u8, *const u8) -> bool;
    type GetPublicKeyFn = unsafe extern "C" fn(*const u8, *mut u8) -> c_int;

    static LIBRARY: OnceCell<Result<Library, String>> = OnceCell::new();

    fn library_path() -> std::ffi::OsString {
        std::env::var_os(CRYPTO_CPP_LIB_ENV)
            .unwrap_or_else(|| libloading::library_filename("crypto_c_exports"))
    }

    pub(super) fn library() -> StarkExResult<&'static Library> {
        LIBRARY
            .get_or_init(|| {
                let path = library_path();
                // SAFETY: crypto-cpp runs no initialisation code with preconditions on load.
                let result = unsafe { Library::new(&path) };
                match result {
                    Ok(library) => {
                        tracing::debug!(path = ?path, "loaded crypto-cpp library");
                        Ok(library)
                    },
                    Err(e) => {
                        tracing::warn!(path = ?path, error = %e, "crypto-cpp library not available");
                        Err(format!("{}: {e}", path.to_string_lossy()))
                    },
                }
            })
            .as_ref()
            .map_err(|message| unavailable(message.clone()))
    }

    fn to_le(felt: &Felt) -> [u8; 32] {
        felt.to_bytes_le()
    }

    fn from_le(bytes: &[u8]) -> Felt {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(&bytes[..32]);
        Felt::from_bytes_le(&buf)
    }

    fn call_failed(function: &str, out: &[u8]) -> StarkExError {
        let end = out.iter().position(|b| *b == 0).unwrap_or(out.len());
        StarkExError::InvalidSignature {
            message: format!("crypto-cpp {function}: {}", String::from_utf8_lossy(&out[..end])),
        }
    }

    pub(super) fn pedersen(a: &Felt, b: &Felt) -> StarkExResult<Felt> {
        let library = library()?;
        let (a, b) = (to_le(a), to_le(b));
        let mut out = [0u8; OUT_BUFFER_SIZE];
        // SAFETY: the symbol signature matches crypto_c_exports and all buffers are sized as required.
        let status = unsafe {
            let hash = library
                .get::<HashFn>(b"Hash\0")
                .map_err(|e| unavailable(e.to_string()))?;
            hash(a.as_ptr(), b.as_ptr(), out.as_mut_ptr())
        };
        if status != 0 {
            return Err(call_failed("Hash", &out));
        }
        Ok(from_le(&out))
    }

    pub(super) fn sign(private_key: &Felt, message_hash: &Felt, k: &Felt) -> StarkExResult<StarkSignature> {
        let library = library()?;
        let (private_key, message_hash, k) = (to_le(private_key), to_le(message_hash), to_le(k));
        let mut out = [0u8; OUT_BUFFER_SIZE];
        // SAFETY: see `pedersen`.
        let status = unsafe {
            let sign = library
                .get::<SignFn>(b"Sign\0")
                .map_err(|e| unavailable(e.to_string()))?;
            sign(private_key.as_ptr(), message_hash.as_ptr(), k.as_ptr(), out.as_mut_ptr())
        };
        if status != 0 {
            return Err(call_failed("Sign", &out));
        }
        // The library returns r ‖ w with w = s⁻¹
        StarkSignature::from_r_w(from_le(&out[..32]), from_le(&out[32..64]))
    }

    pub(super) fn verify(public_key: &Felt, message_hash: &Felt, signature: &StarkSignature) -> StarkExResult<bool> {
        let library = library()?;
        let w = match signature.w() {
            Ok(w) => w,
            Err(_) => return Ok(false),
        };
        let (public_key, message_hash) = (to_le(public_key), to_le(message_hash));
        let (r, w) = (to_le(&signature.r), to_le(&w));
        // SAFETY: see `pedersen`.
        let valid = unsafe {
            let verify = library
                .get::<VerifyFn>(b"Verify\0")
                .map_err(|e| unavailable(e.to_string()))?;
            verify(public_key.as_ptr(), message_hash.as_ptr(), r.as_ptr(), w.as_ptr())
        };
        Ok(valid)
    }

    pub(super) fn get_public_key(private_key: &Felt) -> StarkExResult<Felt> {
        let library = library()?;
        let private_key = to_le(private_key);
        let mut out = [0u8; OUT_BUFFER_SIZE];
        // SAFETY: see `pedersen`.
        let status = unsafe {
            let get_public_key = library
                .get::<GetPublicKeyFn>(b"GetPublicKey\0")
                .map_err(|e| unavailable(e.to_string()))?;
            get_public_key(private_key.as_ptr(), out.as_mut_ptr())
        };
        if status != 0 {
            return Err(StarkExError::InvalidPrivateKey {
                message: call_failed("GetPublicKey", &out).to_string(),
            });
        }
        Ok(from_le(&out))
    }
}

/// Opens the native library, or reports why it is unavailable
pub fn load() -> StarkExResult<()> {
    #[cfg(feature = "crypto-cpp")]
    {
        ffi::library().map(|_| ())
    }
    #[cfg(not(feature = "crypto-cpp"))]
    {
        Err(unavailable("built without the `crypto-cpp` feature"))
    }
}

pub(crate) fn pedersen(a: &Felt, b: &Felt) -> StarkExResult<Felt> {
    #[cfg(feature = "crypto-cpp")]
    {
        ffi::pedersen(a, b)
    }
    #[cfg(not(feature = "crypto-cpp"))]
    {
        let _ = (a, b);
        Err(unavailable("built without the `crypto-cpp` feature"))
    }
}

pub(crate) fn sign(private_key: &Felt, message_hash: &Felt, k: &Felt) -> StarkExResult<StarkSignature> {
    #[cfg(feature = "crypto-cpp")]
    {
        ffi::sign(private_key, message_hash, k)
    }
    #[cfg(not(feature = "crypto-cpp"))]
    {
        let _ = (private_key, message_hash, k);
        Err(unavailable("built without the `crypto-cpp` feature"))
    }
}

pub(crate) fn verify(public_key: &Felt, message_hash: &Felt, signature: &StarkSignature) -> StarkExResult<bool> {
    #[cfg(feature = "crypto-cpp")]
    {
        ffi::verify(public_key, message_hash, signature)
    }
    #[cfg(not(feature = "crypto-cpp"))]
    {
        let _ = (public_key, message_hash, signature);
        Err(unavailable("built without the `crypto-cpp` feature"))
    }
}

pub(crate) fn get_public_key(private_key: &Felt) -> StarkExResult<Felt> {
    #[cfg(feature = "crypto-cpp")]
    {
        ffi::get_public_key(private_key)
    }
    #[cfg(not(feature = "crypto-cpp"))]
    {
        let _ = private_key;
        Err(unavailable("built without the `crypto-cpp` feature"))
    }
}
