//! # token62
//!
//! Reversible base62 tokens backed by a plain `u64`.
//!
//! A [`Token`] is stored, indexed, and compared as an ordinary integer, while
//! the outside world only ever sees its short base62 form (e.g. `"Mr1NSSu"`).
//! That makes it a good fit for short-URL slugs and API-facing primary keys.
//!
//! ```
//! use token62::{Token, decode, encode};
//!
//! assert_eq!(encode(2_751_173_559_858), "Mr1NSSu");
//! assert_eq!(decode("Mr1NSSu").unwrap(), 2_751_173_559_858);
//!
//! let token: Token = "Mr1NSSu".parse().unwrap();
//! assert_eq!(u64::from(token), 2_751_173_559_858);
//! assert_eq!(token.to_string(), "Mr1NSSu");
//! ```
//!
//! With the `std` feature (enabled by default), random tokens can be drawn
//! from a [`TokenGenerator`]:
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use token62::{DEFAULT_TOKEN_LENGTH, ThreadRandom, TokenGenerator};
//!
//! let generator = TokenGenerator::new(ThreadRandom);
//! let token = generator.next_token();
//! assert!(token.encode().len() <= DEFAULT_TOKEN_LENGTH);
//! # }
//! ```
//!
//! ⚠️ Random tokens are **not** guaranteed to be unique. Always check for
//! collisions (e.g. with a unique index) before persisting a generated token.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod alphabet;
mod codec;
mod error;
#[cfg(feature = "std")]
mod generator;
#[cfg(feature = "std")]
mod mutex;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
mod token;

pub use crate::codec::*;
pub use crate::error::*;
#[cfg(feature = "std")]
pub use crate::generator::*;
pub use crate::rand::*;
pub use crate::token::*;
