//! Basics.
//!
//! This module provides the types and traits for extracting domain name
//! labels from wire-format DNS messages.
//!
//!
//! ## Parsing
//!
//! We use the term *parsing* for extracting data from a wire-format
//! representation. Parsing happens on buffers holding a complete DNS
//! message. This is necessary because of name compression: a label’s
//! position in a message can be taken by a pointer to an earlier label
//! anywhere in the message, so the whole message must be at hand.
//!
//! The free functions in [name] operate on a message and an offset into
//! it. For code that already walks a message with an
//! [`octseq::parse::Parser`], the [`Parse`] trait from [wire] provides the
//! same functionality driven by the parser’s position.
//!
//!
//! # Support for `no_std`
//!
//! Nothing in this module allocates. Decoded labels are kept in a fixed
//! size array on the stack, so the module is fully available without the
//! `std` crate.

pub use self::name::{
    decode, decode_label, decode_pointer, DecodeLabelError, HostLabel,
    LabelType,
};
pub use self::wire::{FormError, Parse, ParseError};

pub mod name;
pub mod wire;
