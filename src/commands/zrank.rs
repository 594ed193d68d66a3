use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Zero-based rank of a member, ordered by ascending score. Nil when the
/// member or key is missing.
///
/// Ref: <https://redis.io/docs/latest/commands/zrank/>
#[derive(Debug, PartialEq)]
pub struct Zrank {
    pub key: String,
    pub member: String,
}

impl Executable for Zrank {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.zrank(&self.key, &self.member) {
            Ok(Some(rank)) => Ok(Frame::Integer(rank as i64)),
            Ok(None) => Ok(Frame::Null),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Zrank {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let member = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, member })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn rank_follows_score_order() {
        let mut store = Store::new();
        store
            .zadd("z", vec![(9.0, "high".to_string()), (1.0, "low".to_string())])
            .unwrap();

        let result = parse(&["ZRANK", "z", "high"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));

        let result = parse(&["ZRANK", "z", "nope"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Null);
    }
}
