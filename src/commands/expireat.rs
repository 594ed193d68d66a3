use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Absolute-timestamp variant of EXPIRE.
///
/// Ref: <https://redis.io/docs/latest/commands/expireat/>
#[derive(Debug, PartialEq)]
pub struct ExpireAt {
    pub key: String,
    pub timestamp: i64,
}

impl Executable for ExpireAt {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        let set = store.expire_at(&self.key, self.timestamp);
        Ok(Frame::Integer(i64::from(set)))
    }
}

impl TryFrom<&mut CommandParser> for ExpireAt {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let timestamp = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, timestamp })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;
    use crate::store::now;

    #[test]
    fn past_timestamp_expires_immediately() {
        let mut store = Store::new();
        store.set("key", Bytes::from("value"));

        let at = (now() - 10).to_string();
        let result = parse(&["EXPIREAT", "key", &at])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Integer(1));
        assert!(!store.exists("key"));
    }
}
