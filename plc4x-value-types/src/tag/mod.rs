//! Value type tags
//!
//! Reads and writes the type tag that precedes a value inside a protocol
//! frame. Only the tag is handled here; the value bytes that follow it are
//! left to the protocol codec.
//!
//! # Example
//! ```rust
//! use plc4x_value_types::tag::{decode_tag, TagConfig};
//! use plc4x_value_types::PlcValueType;
//!
//! let frame = [0x23, 0x00, 0x00, 0x00, 0x2A];
//! let (value_type, body) = decode_tag(&frame, &TagConfig::default()).unwrap();
//! assert_eq!(value_type, PlcValueType::DINT);
//! assert_eq!(body.len(), 4);
//! ```

pub mod config;

use bytes::{BufMut, BytesMut};
use nom::number::complete::{be_u16, be_u8};
use nom::IResult;
use tracing::{debug, trace};

use crate::error::Error;
use crate::types::{PlcValueType, ValueTypeRegistry};

pub use config::{TagConfig, TagWidth};

/// Parses a single-octet value type tag
///
/// Unknown codes fail with [`nom::error::ErrorKind::Tag`] positioned at the
/// tag, so callers can treat them as a recoverable decode error.
pub fn parse_value_type(input: &[u8]) -> IResult<&[u8], PlcValueType> {
    parse_tag(input, TagWidth::U8)
}

/// Builds a tag parser for the configured tag width
pub fn parse_value_type_with(
    config: &TagConfig,
) -> impl Fn(&[u8]) -> IResult<&[u8], PlcValueType> {
    let width = config.width;
    move |input: &[u8]| parse_tag(input, width)
}

/// Decodes the tag at the start of `input`, returning the value type and the
/// bytes after the tag
pub fn decode_tag<'a>(
    input: &'a [u8],
    config: &TagConfig,
) -> Result<(PlcValueType, &'a [u8]), Error> {
    let (rest, code) = parse_code(input, config.width).map_err(|_| {
        Error::Parse(format!(
            "truncated value type tag: need {} bytes, got {}",
            config.width.size(),
            input.len()
        ))
    })?;

    let value_type = PlcValueType::try_from(code)?;
    trace!("Decoded value type tag {}", value_type);
    Ok((value_type, rest))
}

/// Appends the tag for `value_type` to `buf`
pub fn put_tag(
    buf: &mut BytesMut,
    value_type: PlcValueType,
    config: &TagConfig,
) -> Result<(), Error> {
    let code = value_type.code();
    match config.width {
        TagWidth::U8 => {
            let octet = u8::try_from(code).map_err(|_| Error::CodeOutOfRange(i32::from(code)))?;
            buf.put_u8(octet);
        }
        TagWidth::U16 => buf.put_u16(code),
    }
    trace!("Encoded value type tag {}", value_type);
    Ok(())
}

fn parse_code(input: &[u8], width: TagWidth) -> IResult<&[u8], u16> {
    match width {
        TagWidth::U8 => {
            let (rest, code) = be_u8(input)?;
            Ok((rest, u16::from(code)))
        }
        TagWidth::U16 => be_u16(input),
    }
}

fn parse_tag(input: &[u8], width: TagWidth) -> IResult<&[u8], PlcValueType> {
    let (rest, code) = parse_code(input, width)?;

    match ValueTypeRegistry::global().lookup(code) {
        Some(value_type) => Ok((rest, value_type)),
        None => {
            debug!("Unknown value type code {:#04x} in tag", code);
            Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Tag,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_type() {
        let input = &[
            0x71, // RAW_BYTE_ARRAY
            0xDE, 0xAD, // body
        ];

        let (remaining, value_type) = parse_value_type(input).unwrap();
        assert_eq!(value_type, PlcValueType::RAW_BYTE_ARRAY);
        assert_eq!(remaining, &[0xDE, 0xAD]);
    }

    #[test]
    fn test_parse_unknown_tag_is_recoverable() {
        let input = &[0x72, 0x00];

        match parse_value_type(input) {
            Err(nom::Err::Error(e)) => {
                assert_eq!(e.code, nom::error::ErrorKind::Tag);
                assert_eq!(e.input, input);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_value_type(&[]).is_err());
    }

    #[test]
    fn test_parse_wide_tag() {
        let config = TagConfig {
            width: TagWidth::U16,
        };
        let parser = parse_value_type_with(&config);

        let (remaining, value_type) = parser(&[0x00, 0x55, 0x01]).unwrap();
        assert_eq!(value_type, PlcValueType::TIME_OF_DAY);
        assert_eq!(remaining, &[0x01]);

        assert!(parser(&[0x01, 0x55]).is_err());
    }

    #[test]
    fn test_decode_tag() {
        let frame = [0x01, 0x01];
        let (value_type, body) = decode_tag(&frame, &TagConfig::default()).unwrap();
        assert_eq!(value_type, PlcValueType::BOOL);
        assert_eq!(body, &[0x01]);
    }

    #[test]
    fn test_decode_tag_errors() {
        let config = TagConfig::default();
        assert_eq!(decode_tag(&[0x06], &config), Err(Error::UnknownCode(0x06)));

        let wide = TagConfig {
            width: TagWidth::U16,
        };
        assert!(matches!(decode_tag(&[0x00], &wide), Err(Error::Parse(_))));
        assert_eq!(decode_tag(&[0x01, 0x00], &wide), Err(Error::UnknownCode(0x0100)));
    }

    #[test]
    fn test_put_tag() {
        let mut buf = BytesMut::new();
        put_tag(&mut buf, PlcValueType::LREAL, &TagConfig::default()).unwrap();
        put_tag(
            &mut buf,
            PlcValueType::STRUCT,
            &TagConfig {
                width: TagWidth::U16,
            },
        )
        .unwrap();
        assert_eq!(&buf[..], &[0x32, 0x00, 0x61]);
    }

    #[test]
    fn test_put_then_decode() {
        let config = TagConfig::default();
        let mut buf = BytesMut::new();
        put_tag(&mut buf, PlcValueType::WSTRING, &config).unwrap();

        let (value_type, rest) = decode_tag(&buf, &config).unwrap();
        assert_eq!(value_type, PlcValueType::WSTRING);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = TagConfig::default();
        assert_eq!(config.width, TagWidth::U8);
        assert_eq!(config.width.size(), 1);
        assert_eq!(TagWidth::U16.size(), 2);
    }
}
