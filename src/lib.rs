#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![warn(missing_docs)]

//! # Modules
//!
//! The building blocks are public so they can be exercised directly:
//!
//! - [`arithmetic`] — overflow-safe modular add/sub/mul/pow on `u32`.
//! - [`numtheory`] — division without the native divide, gcd, extended
//!   Euclidean modular inverse.
//! - [`prime`] — Miller-Rabin probabilistic primality testing.
//! - [`cipher`] — the raw `data^key mod n` transform.
//!
//! Key generation draws randomness through [`rand_core::RngCore`]; the
//! crate never constructs a generator of its own.

#[cfg(feature = "std")]
extern crate std;

pub use rand_core;

pub mod arithmetic;
pub mod cipher;
pub mod errors;
pub mod numtheory;
pub mod prime;

mod key;

pub use crate::{
    errors::{Error, Result},
    key::{RsaPrivateKey, RsaPublicKey},
};
