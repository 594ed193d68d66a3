use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Float counterpart of HINCRBY. The new value comes back as a bulk string,
/// formatted the way it was stored.
///
/// Ref: <https://redis.io/docs/latest/commands/hincrbyfloat/>
#[derive(Debug, PartialEq)]
pub struct HincrByFloat {
    pub key: String,
    pub field: String,
    pub increment: f64,
}

impl Executable for HincrByFloat {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hincr_by_float(&self.key, &self.field, self.increment) {
            Ok(value) => Ok(Frame::Bulk(Bytes::from(value))),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for HincrByFloat {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        let increment = parser.next_float()?;
        parser.finish()?;

        Ok(Self {
            key,
            field,
            increment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;

    #[test]
    fn whole_results_drop_the_decimal_point() {
        let mut store = Store::new();
        store.hset("h", "f", "10.5").unwrap();

        let result = parse(&["HINCRBYFLOAT", "h", "f", "0.5"])
            .unwrap()
            .exec(&mut store)
            .unwrap();
        assert_eq!(result, Frame::Bulk(Bytes::from("11")));
    }

    #[test]
    fn rejects_non_float_increment() {
        let err = parse(&["HINCRBYFLOAT", "h", "f", "abc"]).unwrap_err();
        assert_eq!(err.to_string(), "ERR value is not a valid float");
    }
}
