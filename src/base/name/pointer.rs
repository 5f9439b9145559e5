//! Compression pointers and dispatching on the label type.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::wire::{Parse, ParseError};
use super::label::{decode_label, DecodeLabelError, HostLabel};
use octseq::parse::{Parser, ShortInput};
use tracing::trace;

//------------ decode_pointer ------------------------------------------------

/// Resolves the compression pointer at `offset` in `msg`.
///
/// The two octets at `offset` must be a compression pointer, i.e., the top
/// two bits of the first octet must be set. The remaining fourteen bits
/// are the position of the label the pointer refers to. That label is
/// decoded via [`decode_label`] and returned together with the number of
/// octets the pointer itself occupies, which is always two.
///
/// Only a single step is taken. If the target is a pointer again, it is
/// not followed but treated as a normal label and thus rejected.
///
/// The pointer has to point backwards and the whole label it points to
/// has to end at or before `offset`. Otherwise the pointer is rejected
/// with [`DecodeLabelError::IllegalPointer`]. This is checked before the
/// target label is decoded, so it takes precedence over any error the
/// label itself would produce. Together, the two rules guarantee that a
/// caller who repeatedly decodes labels and follows pointers will
/// eventually run out of message.
pub fn decode_pointer<Octs: AsRef<[u8]> + ?Sized>(
    msg: &Octs,
    offset: usize,
) -> Result<(HostLabel, usize), DecodeLabelError> {
    let mut parser = Parser::from_ref(msg);
    parser.seek(offset)?;
    let head = parser.parse_u8()?;
    let tail = parser.parse_u8()?;
    if head & 0xC0 != 0xC0 {
        trace!(offset, head, "not a compression pointer");
        return Err(DecodeLabelError::IllegalPointer);
    }
    let target = usize::from(u16::from_be_bytes([head & 0x3F, tail]));
    if target >= offset {
        trace!(offset, target, "compression pointer not pointing back");
        return Err(DecodeLabelError::IllegalPointer);
    }

    // The target is before the pointer, so its length octet is there.
    parser.seek(target)?;
    let end = target + usize::from(parser.parse_u8()?) + 1;
    if end > offset {
        trace!(offset, target, end, "compressed label overlaps pointer");
        return Err(DecodeLabelError::IllegalPointer);
    }

    let (label, _) = decode_label(msg, target)?;
    Ok((label, 2))
}

//------------ decode --------------------------------------------------------

/// Decodes whatever label is found at `offset` in `msg`.
///
/// If the top two bits of the octet at `offset` are set, this is the same
/// as [`decode_pointer`], otherwise it is [`decode_label`]. In either case
/// the returned length is the number of octets taken up at `offset`, so
/// it can be used to step over the label.
///
/// Just like the two functions, this only takes a single step. It does not
/// follow a chain of pointers and doesn’t recognise the end of a name.
pub fn decode<Octs: AsRef<[u8]> + ?Sized>(
    msg: &Octs,
    offset: usize,
) -> Result<(HostLabel, usize), DecodeLabelError> {
    match msg.as_ref().get(offset) {
        Some(&ltype) if ltype & 0xC0 == 0xC0 => decode_pointer(msg, offset),
        Some(_) => decode_label(msg, offset),
        None => Err(DecodeLabelError::ShortBuffer),
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
///
/// This is what a loop walking the labels of a name needs to look at in
/// order to decide what to do next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelType {
    /// The root label ending a name.
    Root,

    /// A normal label with its length in octets.
    Normal(u8),

    /// A compression pointer with the position it points to.
    Compressed(u16),

    /// A label of one of the types `0b01` or `0b10`.
    ///
    /// Neither is in use and both must be rejected. The value is the
    /// complete first octet.
    Reserved(u8),
}

impl LabelType {
    /// Returns the type of the label at `offset` in `msg`.
    ///
    /// This fails only if `msg` is too short. For a compression pointer,
    /// both its octets need to be present.
    pub fn peek<Octs: AsRef<[u8]> + ?Sized>(
        msg: &Octs,
        offset: usize,
    ) -> Result<Self, DecodeLabelError> {
        let mut parser = Parser::from_ref(msg);
        parser.seek(offset)?;
        Self::peek_parser(&parser).map_err(Into::into)
    }

    /// Returns the type of the label at the beginning of `parser`.
    fn peek_parser<Octs: AsRef<[u8]> + ?Sized>(
        parser: &Parser<Octs>,
    ) -> Result<Self, ShortInput> {
        let ltype = parser.peek(1)?[0];
        match ltype {
            0 => Ok(LabelType::Root),
            1..=0x3F => Ok(LabelType::Normal(ltype)),
            0xC0..=0xFF => {
                let res = u16::from(parser.peek(2)?[1]);
                let res = res | ((u16::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Ok(LabelType::Reserved(ltype)),
        }
    }
}

//------------ Parse for HostLabel -------------------------------------------

/// Parses the label at the parser’s current position.
///
/// Compression pointers are resolved against the data before the
/// position, which needs to be part of the parser’s underlying octets.
/// Afterwards the parser is positioned behind the label or pointer.
impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for HostLabel {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        let pos = parser.pos();
        let end = pos + parser.remaining();
        let msg = &parser.octets_ref().as_ref()[..end];
        let (label, len) = decode(msg, pos)?;
        parser.advance(len)?;
        Ok(label)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        Self::parse(parser).map(|_| ())
    }
}

//============ Testing =======================================================
