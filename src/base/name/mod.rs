//! Domain name labels.
//!
//! This module provides decoding of the individual labels a domain name in
//! a DNS message is made of.
//!
//! Main types: [`HostLabel`], [`LabelType`].<br/>
//! Main functions: [`decode_label`], [`decode_pointer`], [`decode`].
//!
//! In their wire-format representation labels are prefixed with an octet
//! containing the number of octets in the label, which is at most 63. The
//! top two bits of this octet select the label type. Only two types are in
//! use: `0b00` for normal labels and `0b11` for compression pointers.
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored earlier in the message. A pointer takes up two
//! octets. The remaining six bits of the first octet and all of the second
//! octet form the position of the label to continue with.
//!
//! The functions in this module decode exactly one label or resolve exactly
//! one pointer per call. Walking a complete name, including following a
//! chain of pointers, is up to the caller. [`LabelType::peek`] tells it
//! what comes next and [`decode`] performs the matching step.
//!
//! Labels are checked against the conservative hostname syntax of
//! [RFC 952] as amended by [RFC 1123]: only ASCII letters, digits and
//! hyphens, no hyphen at the start or end, and not all digits. This means
//! a decoded [`HostLabel`] can always be printed as is.
//!
//! [RFC 952]: https://tools.ietf.org/html/rfc952
//! [RFC 1123]: https://tools.ietf.org/html/rfc1123

pub use self::label::{
    check_hostname_label, decode_label, DecodeLabelError, HostLabel,
};
pub use self::pointer::{decode, decode_pointer, LabelType};

mod label;
mod pointer;
