//! Kernel utilities shared across slices.
//! Keep this crate lightweight: ID generation, config loading and device capabilities.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous record IDs:
//! ```rust
//! # use edupath_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! Use `token_nanoid!` for upper-case correlation tokens:
//! ```rust
//! # use edupath_kernel::token_nanoid;
//! let token = token_nanoid!(10);
//! assert!(token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod haptics;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Upper-case base36, the shape of gateway correlation handles.
pub const TOKEN_ALPHABET: &[char; 36] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub use edupath_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}

/// Generates an upper-case base36 token.
#[macro_export]
macro_rules! token_nanoid {
    () => {
        $crate::nanoid!(10, $crate::TOKEN_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::TOKEN_ALPHABET)
    };
}
