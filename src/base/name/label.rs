//! Decoding of normal labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::str::FromStr;
use core::{borrow, cmp, fmt, hash, ops, str};
use octseq::parse::{Parser, ShortInput};
use tracing::trace;

//------------ decode_label --------------------------------------------------

/// Decodes the normal label starting at `offset` in `msg`.
///
/// The octet at `offset` is taken as the label’s length and is followed
/// by the label’s content. The content has to be a valid hostname label as
/// described for [`check_hostname_label`].
///
/// Returns the label and the number of octets it occupies in `msg`, which
/// is always its length plus one for the length octet.
///
/// The root label, i.e., a length octet of zero, is rejected with
/// [`DecodeLabelError::EmptyLabel`]. Recognising the end of a name is up
/// to the caller. Compression pointers and the reserved label types all
/// have a length octet above 63 and are rejected with
/// [`DecodeLabelError::LabelTooLong`]. Use
/// [`decode_pointer`][super::decode_pointer] for the former.
pub fn decode_label<Octs: AsRef<[u8]> + ?Sized>(
    msg: &Octs,
    offset: usize,
) -> Result<(HostLabel, usize), DecodeLabelError> {
    let mut parser = Parser::from_ref(msg);
    parser.seek(offset)?;
    let len = usize::from(parser.parse_u8()?);
    if len == 0 {
        trace!(offset, "empty label");
        return Err(DecodeLabelError::EmptyLabel);
    }
    if len > HostLabel::MAX_LEN {
        trace!(offset, len, "label length out of range");
        return Err(DecodeLabelError::LabelTooLong);
    }
    let content = parser.peek(len).map_err(|err| {
        trace!(offset, len, available = parser.remaining(), "short label");
        err
    })?;
    let label = HostLabel::from_slice(content).map_err(|err| {
        trace!(offset, len, "label is not a valid hostname label");
        err
    })?;
    Ok((label, len + 1))
}

//------------ check_hostname_label ------------------------------------------

/// Checks that an octets slice is valid content for a hostname label.
///
/// The slice must be between 1 and 63 octets long. It may only contain
/// ASCII letters, digits, and the hyphen. It must neither start nor end
/// with a hyphen and it must not consist of digits only.
pub fn check_hostname_label(slice: &[u8]) -> Result<(), DecodeLabelError> {
    let (first, last) = match (slice.first(), slice.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(DecodeLabelError::EmptyLabel),
    };
    if slice.len() > HostLabel::MAX_LEN {
        return Err(DecodeLabelError::LabelTooLong);
    }
    if !slice.iter().all(|&ch| ch.is_ascii_alphanumeric() || ch == b'-') {
        return Err(DecodeLabelError::InvalidLabelContent);
    }
    if first == b'-' || last == b'-' {
        return Err(DecodeLabelError::InvalidLabelContent);
    }
    if slice.iter().all(u8::is_ascii_digit) {
        return Err(DecodeLabelError::InvalidLabelContent);
    }
    Ok(())
}

//------------ HostLabel -----------------------------------------------------

/// A decoded label that is a valid hostname label.
///
/// The label contains between 1 and 63 ASCII letters, digits, or hyphens.
/// It doesn’t start or end with a hyphen and isn’t made up of digits only.
/// Because of this, the label can always be used as a string.
///
/// Since labels are relatively short, this type doesn’t actually allocate
/// any memory but is a 64 octet array.
///
/// Unlike in most other places in the DNS, comparison of host labels is
/// _not_ case-insensitive. Two labels are equal if their octets are.
//
//  This keeps the label in wire format, so the first octet is the length
//  octet, the remainder is the content. Octets beyond the content are
//  always zero.
#[derive(Clone, Copy)]
pub struct HostLabel([u8; 64]);

impl HostLabel {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a host label from the content of a label.
    ///
    /// This will fail if the slice isn’t a valid hostname label.
    pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeLabelError> {
        check_hostname_label(slice)?;
        let mut res = [0; 64];
        res[0] = slice.len() as u8;
        res[1..=slice.len()].copy_from_slice(slice);
        Ok(HostLabel(res))
    }

    /// Returns the content of the label.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0[1..=(self.0[0] as usize)]
    }

    /// Returns the content of the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // The content has been checked to be ASCII on creation.
        str::from_utf8(self.as_slice()).unwrap_or_default()
    }

    /// Returns a slice that is the wire-representation of the label.
    #[must_use]
    pub fn as_wire_slice(&self) -> &[u8] {
        let len = self.0[0] as usize;
        &self.0[..=len]
    }

    /// Returns the length of the label.
    ///
    /// This length is that of the label’s content only. It will _not_
    /// contain the initial label length octet present in the wire format.
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Never empty.
    pub fn len(&self) -> usize {
        usize::from(self.0[0])
    }

    /// Returns the length of the composed version of the label.
    ///
    /// This length is one more than the length of the label as there is a
    /// leading length octet.
    #[must_use]
    pub fn compose_len(&self) -> u16 {
        u16::from(self.0[0]) + 1
    }
}

//--- FromStr

impl FromStr for HostLabel {
    type Err = DecodeLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

//--- Deref, AsRef, and Borrow

impl ops::Deref for HostLabel {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for HostLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for HostLabel {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl borrow::Borrow<str> for HostLabel {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

//--- PartialEq and Eq

impl<T: AsRef<[u8]> + ?Sized> PartialEq<T> for HostLabel {
    fn eq(&self, other: &T) -> bool {
        self.as_slice().eq(other.as_ref())
    }
}

impl Eq for HostLabel {}

//--- PartialOrd and Ord

impl PartialOrd for HostLabel {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostLabel {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

//--- Hash

impl hash::Hash for HostLabel {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Same as for str so that Borrow<str> holds up.
        self.as_str().hash(state)
    }
}

//--- Display and Debug

impl fmt::Display for HostLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HostLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("HostLabel").field(&self.as_str()).finish()
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for HostLabel {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_newtype_struct("HostLabel", self.as_str())
        } else {
            serializer.serialize_newtype_struct(
                "HostLabel",
                &octseq::serde::SerializeOctets::as_serialized_octets(
                    self.as_slice(),
                ),
            )
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HostLabel {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = HostLabel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a hostname label")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                HostLabel::from_str(v).map_err(E::custom)
            }

            fn visit_bytes<E: Error>(
                self,
                value: &[u8],
            ) -> Result<Self::Value, E> {
                HostLabel::from_slice(value).map_err(E::custom)
            }
        }

        struct NewtypeVisitor;

        impl<'de> serde::de::Visitor<'de> for NewtypeVisitor {
            type Value = HostLabel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a hostname label")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(InnerVisitor)
                } else {
                    deserializer.deserialize_bytes(InnerVisitor)
                }
            }
        }

        deserializer.deserialize_newtype_struct("HostLabel", NewtypeVisitor)
    }
}

//============ Error Types ===================================================

//------------ DecodeLabelError ----------------------------------------------

/// Decoding a label or compression pointer failed.
///
/// All of these mean that the message is broken. A name containing such a
/// label can’t be decoded and neither can anything following it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeLabelError {
    /// A label of length zero was found where a normal label was expected.
    EmptyLabel,

    /// The length octet was larger than 63.
    LabelTooLong,

    /// The message ended before the label or pointer did.
    ShortBuffer,

    /// The label’s content is not a valid hostname label.
    InvalidLabelContent,

    /// A compression pointer wasn’t pointing back to a label before it.
    IllegalPointer,
}

//--- From

impl From<ShortInput> for DecodeLabelError {
    fn from(_: ShortInput) -> Self {
        DecodeLabelError::ShortBuffer
    }
}

//--- Display and Error

impl fmt::Display for DecodeLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DecodeLabelError::EmptyLabel => "empty label",
            DecodeLabelError::LabelTooLong => "long label",
            DecodeLabelError::ShortBuffer => "unexpected end of input",
            DecodeLabelError::InvalidLabelContent => "invalid label content",
            DecodeLabelError::IllegalPointer => "illegal compression pointer",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeLabelError {}

//============ Testing =======================================================
