use crate::commands::executable::Executable;
use crate::commands::zrange::{entries_frame, parse_with_scores};
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Members with a score in an inclusive range, ascending, optionally with
/// their scores interleaved.
///
/// Ref: <https://redis.io/docs/latest/commands/zrangebyscore/>
#[derive(Debug, PartialEq)]
pub struct ZrangeByScore {
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub with_scores: bool,
}

impl Executable for ZrangeByScore {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zrange_by_score(&self.key, self.min, self.max) {
            Ok(entries) => Ok(entries_frame(entries, self.with_scores)),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for ZrangeByScore {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let min = parser.next_float()?;
        let max = parser.next_float()?;
        let with_scores = parse_with_scores(parser)?;
        parser.finish()?;

        Ok(Self {
            key,
            min,
            max,
            with_scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn inclusive_score_range() {
        let mut store = Store::new();
        store
            .zadd(
                "z",
                vec![(1.0, "a".to_string()), (2.0, "b".to_string()), (3.0, "c".to_string())],
            )
            .unwrap();

        let result = parse(&["ZRANGEBYSCORE", "z", "2", "3"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Array(vec![
                Frame::Bulk(Bytes::from("b")),
                Frame::Bulk(Bytes::from("c")),
            ])
        );
    }
}
