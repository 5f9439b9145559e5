//! Decoding labels and pointers through the public interface.

use domain_label::base::name::{
    decode, decode_label, decode_pointer, DecodeLabelError, LabelType,
};
use domain_label::base::wire::{Parse, ParseError};
use domain_label::base::HostLabel;
use octseq::parse::Parser;
use rstest::rstest;

//----------- Tests ----------------------------------------------------------

#[rstest]
#[case(b"\x00", 0, false, Err(DecodeLabelError::EmptyLabel))]
#[case(b"\x40", 0, false, Err(DecodeLabelError::LabelTooLong))]
#[case(b"\x01", 0, false, Err(DecodeLabelError::ShortBuffer))]
#[case(b"\x3f", 0, false, Err(DecodeLabelError::ShortBuffer))]
#[case(b"\x01.", 0, false, Err(DecodeLabelError::InvalidLabelContent))]
#[case(b"\x02..", 0, false, Err(DecodeLabelError::InvalidLabelContent))]
#[case(b"\x07.00000A", 0, false, Err(DecodeLabelError::InvalidLabelContent))]
#[case(b"\x03123", 0, false, Err(DecodeLabelError::InvalidLabelContent))]
#[case(
    b"\x0asome.email",
    0,
    false,
    Err(DecodeLabelError::InvalidLabelContent)
)]
#[case(b"\x01-", 0, false, Err(DecodeLabelError::InvalidLabelContent))]
#[case(b"\x01a", 0, false, Ok("a"))]
#[case(b"\x031-a", 0, false, Ok("1-a"))]
#[case(b"\xc0\x02", 0, true, Err(DecodeLabelError::IllegalPointer))]
#[case(b"\x01\xc0\x00", 1, true, Err(DecodeLabelError::IllegalPointer))]
#[case(b"\x06domain\xc0\x00", 7, true, Ok("domain"))]
fn unpack_label(
    #[case] input: &[u8],
    #[case] offset: usize,
    #[case] is_pointer: bool,
    #[case] expected: Result<&str, DecodeLabelError>,
) {
    let res = if is_pointer {
        decode_pointer(input, offset)
    } else {
        decode_label(input, offset)
    };
    // The dispatching function must agree in all cases.
    assert_eq!(decode(input, offset), res);

    match expected {
        Ok(expected) => {
            let (label, len) = res.unwrap();
            assert_eq!(label.as_str(), expected);
            if is_pointer {
                assert_eq!(len, 2);
            } else {
                assert_eq!(len, input.len());
            }
        }
        Err(err) => assert_eq!(res.unwrap_err(), err),
    }
}

#[test]
fn long_labels() {
    for len in 64..=255u8 {
        assert_eq!(
            decode_label(&[len, b'a'], 0),
            Err(DecodeLabelError::LabelTooLong)
        );
    }
}

#[test]
fn short_labels() {
    let content = [b'a'; 63];
    for len in 1..=63u8 {
        let mut msg = vec![len];
        msg.extend_from_slice(&content[..usize::from(len) - 1]);
        assert_eq!(
            decode_label(&msg, 0),
            Err(DecodeLabelError::ShortBuffer)
        );
        msg.push(b'a');
        let (label, consumed) = decode_label(&msg, 0).unwrap();
        assert_eq!(label.len(), usize::from(len));
        assert_eq!(consumed, usize::from(len) + 1);
    }
}

#[test]
fn invalid_octets() {
    for ch in 0..=255u8 {
        let msg = [3, b'a', ch, b'b'];
        let res = decode_label(&msg, 0);
        if ch.is_ascii_alphanumeric() || ch == b'-' {
            assert!(res.is_ok(), "octet {:#04x}", ch);
        } else {
            assert_eq!(
                res,
                Err(DecodeLabelError::InvalidLabelContent),
                "octet {:#04x}",
                ch
            );
        }
    }
}

/// Walks a complete name the way a message parser would.
///
/// Every pointer must point before the previous one, which bounds the
/// number of steps by the size of the message.
fn walk_name(
    msg: &[u8],
    mut pos: usize,
) -> Result<String, DecodeLabelError> {
    let mut res = String::new();
    let mut limit = pos;
    let mut in_pointer = false;
    loop {
        match LabelType::peek(msg, pos)? {
            LabelType::Root => return Ok(res),
            LabelType::Reserved(_) => {
                return Err(DecodeLabelError::LabelTooLong)
            }
            LabelType::Normal(_) => {
                let (label, len) = decode_label(msg, pos)?;
                res.push_str(&label);
                res.push('.');
                pos += len;
            }
            LabelType::Compressed(target) => {
                let target = usize::from(target);
                if in_pointer && target >= limit {
                    return Err(DecodeLabelError::IllegalPointer);
                }
                let (label, _) = decode_pointer(msg, pos)?;
                res.push_str(&label);
                res.push('.');
                limit = target;
                in_pointer = true;
                pos = target + label.len() + 1;
            }
        }
    }
}

#[test]
fn walk_compressed_names() {
    let msg = b"\x03com\x00\x07example\xc0\x00\x03www\xc0\x05";
    assert_eq!(walk_name(msg, 0).unwrap(), "com.");
    assert_eq!(walk_name(msg, 5).unwrap(), "example.com.");
    assert_eq!(walk_name(msg, 15).unwrap(), "www.example.com.");

    // A pointer to itself never gets anywhere.
    assert_eq!(
        walk_name(b"\x03www\xc0\x04", 0),
        Err(DecodeLabelError::IllegalPointer)
    );
}

#[test]
fn parse_trait() {
    let msg: &[u8] = b"\x06domain\xc0\x00\x03123";
    let mut parser = Parser::from_ref(msg);
    assert_eq!(HostLabel::parse(&mut parser).unwrap(), "domain");
    assert_eq!(HostLabel::parse(&mut parser).unwrap(), "domain");
    assert_eq!(parser.pos(), 9);
    assert_eq!(
        HostLabel::parse(&mut parser),
        Err(ParseError::form_error("invalid label content"))
    );
}
