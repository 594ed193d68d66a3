use std::io::Cursor;

use bytes::{Buf, Bytes, BytesMut};
use thiserror::Error as ThisError;
use tokio_util::codec::{Decoder, Encoder};

use crate::frame::{self, Frame};

// Largest request we are willing to buffer before declaring the stream
// malformed, matching the Redis 512MB proto limit.
const MAX_REQUEST_SIZE: usize = 512 * 1024 * 1024;

// Most elements a single multibulk request may declare, the same bound
// Redis enforces. Checked before any allocation, so a wild count cannot
// reserve memory.
const MAX_MULTIBULK_LENGTH: i64 = 1024 * 1024;

#[derive(Debug, ThisError)]
pub enum Error {
    /// More bytes are needed before a full request can be decoded. Never
    /// surfaced by `decode`, which maps it to `Ok(None)`.
    #[error("not enough data is available to parse an entire request")]
    Incomplete,
    #[error("ERR Protocol error: {0}")]
    Protocol(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<frame::Error> for Error {
    fn from(err: frame::Error) -> Self {
        match err {
            frame::Error::Incomplete => Error::Incomplete,
            err => Error::Protocol(err.to_string()),
        }
    }
}

/// Decodes client requests into their argument list and encodes reply frames.
///
/// Requests come in two shapes: an array of bulk strings (the regular client
/// encoding) or a whitespace-separated inline command (telnet style). Replies
/// are plain `Frame`s.
pub struct RequestCodec;

impl Decoder for RequestCodec {
    type Item = Vec<Bytes>;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            let first_byte = match src.first() {
                Some(byte) => *byte,
                None => return Ok(None),
            };

            if first_byte == b'*' {
                let mut cursor = Cursor::new(&src[..]);
                cursor.advance(1);

                return match parse_multibulk(&mut cursor) {
                    Ok(parts) => {
                        let position = cursor.position() as usize;
                        src.advance(position);
                        Ok(Some(parts))
                    }
                    // Not enough data buffered yet, wait for the next read.
                    Err(Error::Incomplete) => {
                        guard_size(src)?;
                        Ok(None)
                    }
                    Err(err) => Err(err),
                };
            }

            // Inline command: everything up to a `\n`, tolerating an optional
            // preceding `\r`. Blank lines are skipped and scanning continues,
            // so this branch loops instead of returning `None` outright.
            let line_end = match src.iter().position(|&b| b == b'\n') {
                Some(index) => index,
                None => {
                    guard_size(src)?;
                    return Ok(None);
                }
            };

            let line = src.split_to(line_end + 1);
            let line = &line[..line_end];
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            let parts: Vec<Bytes> = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|part| !part.is_empty())
                .map(Bytes::copy_from_slice)
                .collect();

            if !parts.is_empty() {
                return Ok(Some(parts));
            }
        }
    }
}

impl Encoder<Frame> for RequestCodec {
    type Error = Error;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.extend_from_slice(&frame.serialize());
        Ok(())
    }
}

/// Parses `<count>\r\n` followed by exactly `count` bulk strings. The cursor
/// is positioned right after the leading `*`. Anything other than a
/// non-negative bulk string element is a protocol error.
fn parse_multibulk(cursor: &mut Cursor<&[u8]>) -> Result<Vec<Bytes>, Error> {
    let line = frame::get_line(cursor)?;
    let count = frame::parse_decimal(line)?;

    if count < 0 || count > MAX_MULTIBULK_LENGTH {
        return Err(Error::Protocol(format!(
            "invalid multibulk length {count}"
        )));
    }

    let mut parts = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let type_byte = frame::get_byte(cursor)?;
        if type_byte != b'$' {
            return Err(Error::Protocol(format!(
                "expected '$', got '{}'",
                type_byte as char
            )));
        }

        let line = frame::get_line(cursor)?;
        let length = frame::parse_decimal(line)?;
        if length < 0 {
            return Err(Error::Protocol(
                "request must not contain nil bulk strings".to_string(),
            ));
        }
        if length as usize > MAX_REQUEST_SIZE {
            return Err(Error::Protocol(format!("invalid bulk length {length}")));
        }

        parts.push(frame::get_data(cursor, length as usize)?);
    }

    Ok(parts)
}

fn guard_size(src: &BytesMut) -> Result<(), Error> {
    if src.len() > MAX_REQUEST_SIZE {
        return Err(Error::Protocol("request exceeds size limit".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &[u8]) -> Result<Option<Vec<Bytes>>, Error> {
        let mut buffer = BytesMut::from(data);
        RequestCodec.decode(&mut buffer)
    }

    #[test]
    fn decode_multibulk_request() {
        let parts = decode(b"*2\r\n$3\r\nGET\r\n$3\r\nfoo\r\n").unwrap().unwrap();
        assert_eq!(parts, vec![Bytes::from("GET"), Bytes::from("foo")]);
    }

    #[test]
    fn decode_multibulk_request_binary_safe() {
        let parts = decode(b"*2\r\n$3\r\nGET\r\n$7\r\nfoo\r\nba\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(parts[1], Bytes::from(&b"foo\r\nba"[..]));
    }

    #[test]
    fn decode_incomplete_returns_none() {
        assert!(matches!(decode(b"*2\r\n$3\r\nGET\r\n$3\r\nfo"), Ok(None)));
        assert!(matches!(decode(b"*2\r\n$3"), Ok(None)));
        assert!(matches!(decode(b""), Ok(None)));
    }

    #[test]
    fn decode_consumes_exactly_one_request() {
        let mut buffer = BytesMut::from(&b"*1\r\n$4\r\nPING\r\n*1\r\n$4\r\nPING\r\n"[..]);

        let first = RequestCodec.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(first, vec![Bytes::from("PING")]);
        assert_eq!(buffer.len(), 14);

        let second = RequestCodec.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(second, vec![Bytes::from("PING")]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn decode_rejects_nil_element() {
        let err = decode(b"*1\r\n$-1\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn decode_rejects_oversized_multibulk_count() {
        let err = decode(b"*9223372036854775807\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));

        let err = decode(b"*100000000000\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn decode_rejects_oversized_bulk_length() {
        let err = decode(b"*1\r\n$9223372036854775807\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn decode_rejects_non_bulk_element() {
        let err = decode(b"*1\r\n:42\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn decode_rejects_malformed_length() {
        let err = decode(b"*1\r\n$abc\r\nfoo\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn decode_inline_request() {
        let parts = decode(b"SET foo bar\r\n").unwrap().unwrap();
        assert_eq!(
            parts,
            vec![Bytes::from("SET"), Bytes::from("foo"), Bytes::from("bar")]
        );
    }

    #[test]
    fn decode_inline_request_bare_newline() {
        let parts = decode(b"PING\n").unwrap().unwrap();
        assert_eq!(parts, vec![Bytes::from("PING")]);
    }

    #[test]
    fn decode_inline_skips_blank_lines() {
        let parts = decode(b"\r\n\n   \r\nPING\r\n").unwrap().unwrap();
        assert_eq!(parts, vec![Bytes::from("PING")]);
    }

    #[test]
    fn decode_inline_without_newline_returns_none() {
        assert!(matches!(decode(b"PIN"), Ok(None)));
    }

    #[test]
    fn encode_frame() {
        let mut buffer = BytesMut::new();
        RequestCodec
            .encode(Frame::Simple("OK".to_string()), &mut buffer)
            .unwrap();
        assert_eq!(&buffer[..], b"+OK\r\n");
    }
}
