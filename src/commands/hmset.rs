use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Recognized but refused; HSET took over its multi-pair form.
///
/// Ref: <https://redis.io/docs/latest/commands/hmset/>
#[derive(Debug, PartialEq)]
pub struct Hmset;

impl Executable for Hmset {
    fn exec(self, _store: &mut Store) -> Result<Frame, Error> {
        Ok(Frame::Error(
            "ERR 'hmset' is considered deprecated, please use 'hset' instead".to_string(),
        ))
    }
}

impl TryFrom<&mut CommandParser> for Hmset {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        // Arguments are irrelevant; the reply is always the deprecation
        // error.
        while parser.has_more() {
            parser.next_bytes()?;
        }
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn always_refused() {
        let mut store = Store::new();
        let result = parse(&["HMSET", "h", "a", "1"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(
            result,
            Frame::Error("ERR 'hmset' is considered deprecated, please use 'hset' instead".to_string())
        );
        assert!(!store.exists("h"));
    }
}
