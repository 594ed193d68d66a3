use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members by rank range (inclusive, possibly-negative offsets), lowest
/// score first. With WITHSCORES each member is followed by its score.
///
/// Ref: <https://redis.io/docs/latest/commands/zrange/>
#[derive(Debug, PartialEq)]
pub struct Zrange {
    pub key: String,
    pub start: i64,
    pub stop: i64,
    pub with_scores: bool,
}

impl Executable for Zrange {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zrange(&self.key, self.start, self.stop) {
            Ok(entries) => Ok(entries_frame(entries, self.with_scores)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Zrange {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let start = parser.next_integer()?;
        let stop = parser.next_integer()?;
        let with_scores = parse_with_scores(parser)?;
        parser.finish()?;

        Ok(Self {
            key,
            start,
            stop,
            with_scores,
        })
    }
}

/// Consumes an optional trailing WITHSCORES flag (case-insensitive).
/// Anything else in that position is a syntax error.
pub(crate) fn parse_with_scores(parser: &mut CommandParser) -> Result<bool, CommandParserError> {
    if !parser.has_more() {
        return Ok(false);
    }
    if parser.next_string()?.eq_ignore_ascii_case("WITHSCORES") {
        return Ok(true);
    }
    Err(CommandParserError::Syntax)
}

/// Flattens range results into a reply, interleaving scores when asked.
pub(crate) fn entries_frame(entries: Vec<(String, f64)>, with_scores: bool) -> Frame {
    let mut frames = Vec::with_capacity(entries.len() * if with_scores { 2 } else { 1 });
    for (member, score) in entries {
        frames.push(Frame::Bulk(Bytes::from(member)));
        if with_scores {
            frames.push(Frame::Bulk(Bytes::from(score.to_string())));
        }
    }
    Frame::Array(frames)
}
