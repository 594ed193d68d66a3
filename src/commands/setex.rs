use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// SET plus a relative expiration, in one step.
///
/// Ref: <https://redis.io/docs/latest/commands/setex/>
#[derive(Debug, PartialEq)]
pub struct SetEx {
    pub key: String,
    pub seconds: i64,
    pub value: Bytes,
}

impl Executable for SetEx {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.setex(&self.key, self.value, self.seconds) {
            Ok(()) => Ok(Frame::Simple("OK".to_string())),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for SetEx {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let seconds = parser.next_integer()?;
        let value = parser.next_bytes()?;
        parser.finish()?;

        Ok(Self {
            key,
            seconds,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn sets_value_and_ttl() {
        let mut store = Store::new();
        let result = parse(&["SETEX", "key", "100", "value"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Simple("OK".to_string()));
        assert_eq!(store.get("key"), Ok(Some(Bytes::from("value"))));
        assert!(store.ttl("key") > 0);
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let mut store = Store::new();
        let result = parse(&["SETEX", "key", "0", "value"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR invalid expire time in setex".to_string())
        );
        assert!(!store.exists("key"));
    }
}
