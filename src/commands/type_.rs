use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// The kind of value stored at a key: string, hash, list, set, zset, or
/// none.
///
/// Ref: <https://redis.io/docs/latest/commands/type/>
#[derive(Debug, PartialEq)]
pub struct Type {
    pub key: String,
}

impl Executable for Type {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        Ok(Frame::Simple(store.type_name(&self.key).to_string()))
    }
}

impl TryFrom<&mut CommandParser> for Type {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::commands::parse;

    #[test]
    fn reports_value_kinds() {
        let mut store = Store::new();
        store.set("s", Bytes::from("v"));

        let result = parse(&["TYPE", "s"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Simple("string".to_string()));

        let result = parse(&["TYPE", "nope"]).unwrap().exec(&mut store).unwrap();
        assert_eq!(result, Frame::Simple("none".to_string()));
    }
}
