// https://redis.io/docs/reference/protocol-spec

use std::io::Cursor;
use std::string::FromUtf8Error;

use bytes::Buf;
use bytes::Bytes;
use thiserror::Error as ThisError;

static CRLF: &[u8; 2] = b"\r\n";

// Bounds on wire-supplied lengths, checked before they size an allocation.
// Anything larger is corruption, not a frame.
const MAX_BULK_LENGTH: i64 = 512 * 1024 * 1024;
const MAX_ARRAY_LENGTH: i64 = 1024 * 1024;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("not enough data is available to parse an entire frame")]
    Incomplete,
    #[error("invalid frame data type: {0}")]
    InvalidDataType(u8),
    #[error("protocol error; invalid decimal")]
    InvalidDecimal,
    #[error("protocol error; invalid UTF-8 string")]
    InvalidUtf8,
    #[error("protocol error; length out of range: {0}")]
    LengthOutOfRange(i64),
}

/// A single RESP reply. Requests are decoded separately (see `codec`), since
/// the protocol only allows arrays of bulk strings on the request side.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Simple(String),
    Error(String),
    Integer(i64),
    Bulk(Bytes),
    Null,
    Array(Vec<Frame>),
}

impl Frame {
    pub fn parse(src: &mut Cursor<&[u8]>) -> Result<Self, Error> {
        // The first byte in a RESP-serialized payload always identifies its
        // type. Subsequent bytes constitute the type's contents.
        let first_byte = get_byte(src)?;

        match first_byte {
            b'+' => {
                let bytes = get_line(src)?.to_vec();
                let string = String::from_utf8(bytes)?;
                Ok(Frame::Simple(string))
            }
            b'-' => {
                let bytes = get_line(src)?.to_vec();
                let string = String::from_utf8(bytes)?;
                Ok(Frame::Error(string))
            }
            b':' => {
                let line = get_line(src)?;
                let integer = parse_decimal(line)?;
                Ok(Frame::Integer(integer))
            }
            // $<length>\r\n<data>\r\n
            b'$' => {
                let line = get_line(src)?;
                let length = parse_decimal(line)?;

                if length == -1 {
                    return Ok(Frame::Null);
                }
                if length < 0 {
                    return Err(Error::InvalidDecimal);
                }
                if length > MAX_BULK_LENGTH {
                    return Err(Error::LengthOutOfRange(length));
                }

                let data = get_data(src, length as usize)?;
                Ok(Frame::Bulk(data))
            }
            // *<number-of-elements>\r\n<element-1>...<element-n>
            b'*' => {
                let line = get_line(src)?;
                let length = parse_decimal(line)?;

                if length == -1 {
                    return Ok(Frame::Null);
                }
                if length < 0 {
                    return Err(Error::InvalidDecimal);
                }
                if length > MAX_ARRAY_LENGTH {
                    return Err(Error::LengthOutOfRange(length));
                }

                let mut frames = Vec::with_capacity(length as usize);
                for _ in 0..length {
                    frames.push(Self::parse(src)?);
                }
                Ok(Frame::Array(frames))
            }
            data_type => Err(Error::InvalidDataType(data_type)),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Frame::Simple(s) => {
                let mut bytes = Vec::with_capacity(1 + s.len() + CRLF.len());
                bytes.push(b'+');
                bytes.extend_from_slice(s.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Error(s) => {
                let mut bytes = Vec::with_capacity(1 + s.len() + CRLF.len());
                bytes.push(b'-');
                bytes.extend_from_slice(s.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Integer(i) => {
                let mut bytes = Vec::with_capacity(24);
                bytes.push(b':');
                push_decimal(&mut bytes, *i);
                bytes.extend_from_slice(CRLF);
                bytes
            }
            // Length is the number of bytes, not characters. Multi-byte
            // encoded text must be framed by byte count.
            Frame::Bulk(data) => {
                let mut bytes = Vec::with_capacity(1 + 20 + CRLF.len() * 2 + data.len());
                bytes.push(b'$');
                push_decimal(&mut bytes, data.len() as i64);
                bytes.extend_from_slice(CRLF);
                bytes.extend_from_slice(data);
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Frame::Null => b"$-1\r\n".to_vec(),
            Frame::Array(arr) => {
                let mut bytes = Vec::with_capacity(1 + 20 + CRLF.len());
                bytes.push(b'*');
                push_decimal(&mut bytes, arr.len() as i64);
                bytes.extend_from_slice(CRLF);
                for frame in arr {
                    bytes.extend(frame.serialize());
                }
                bytes
            }
        }
    }
}

impl From<Frame> for Vec<u8> {
    fn from(frame: Frame) -> Self {
        frame.serialize()
    }
}

impl From<FromUtf8Error> for Error {
    fn from(_src: FromUtf8Error) -> Error {
        Error::InvalidUtf8
    }
}

/// Parses a signed decimal from raw ASCII, digit by digit. Lengths and
/// integers on the wire are short, so this avoids a `String` round trip on
/// the hot path.
pub(crate) fn parse_decimal(bytes: &[u8]) -> Result<i64, Error> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    if digits.is_empty() {
        return Err(Error::InvalidDecimal);
    }

    let mut n: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return Err(Error::InvalidDecimal);
        }
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add((b - b'0') as i64))
            .ok_or(Error::InvalidDecimal)?;
    }

    Ok(if negative { -n } else { n })
}

/// The encoding counterpart of `parse_decimal`.
pub(crate) fn push_decimal(buf: &mut Vec<u8>, n: i64) {
    if n < 0 {
        buf.push(b'-');
    }
    // 20 digits cover the full i64 range.
    let mut digits = [0u8; 20];
    let mut m = n.unsigned_abs();
    let mut i = digits.len();
    loop {
        i -= 1;
        digits[i] = b'0' + (m % 10) as u8;
        m /= 10;
        if m == 0 {
            break;
        }
    }
    buf.extend_from_slice(&digits[i..]);
}

pub(crate) fn get_line<'a>(src: &mut Cursor<&'a [u8]>) -> Result<&'a [u8], Error> {
    let start = src.position() as usize;
    let end = src.get_ref().len();

    let line_end = src.get_ref()[start..end]
        .windows(2)
        .position(|window| window == CRLF)
        .map(|index| start + index)
        .ok_or(Error::Incomplete)?;

    src.set_position((line_end + CRLF.len()) as u64);

    Ok(&src.get_ref()[start..line_end])
}

pub(crate) fn get_data(src: &mut Cursor<&[u8]>, length: usize) -> Result<Bytes, Error> {
    let start = src.position() as usize;

    if src.get_ref().len() < start + length + CRLF.len() {
        return Err(Error::Incomplete);
    }
    if &src.get_ref()[start + length..start + length + CRLF.len()] != CRLF {
        return Err(Error::InvalidDecimal);
    }

    src.set_position((start + length + CRLF.len()) as u64);

    Ok(Bytes::copy_from_slice(&src.get_ref()[start..start + length]))
}

pub(crate) fn get_byte(src: &mut Cursor<&[u8]>) -> Result<u8, Error> {
    if !src.has_remaining() {
        return Err(Error::Incomplete);
    }
    Ok(src.get_u8())
}
