use bytes::Bytes;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// Values for the requested hash fields, nil per missing field, in request
/// order.
///
/// Ref: <https://redis.io/docs/latest/commands/hmget/>
#[derive(Debug, PartialEq)]
pub struct Hmget {
    pub key: String,
    pub fields: Vec<String>,
}

impl Executable for Hmget {
    fn exec(self, store: &mut Store) -> Result<Frame, Error> {
        match store.hmget(&self.key, &self.fields) {
            Ok(values) => Ok(Frame::Array(
                values
                    .into_iter()
                    .map(|value| match value {
                        Some(value) => Frame::Bulk(Bytes::from(value)),
                        None => Frame::Null,
                    })
                    .collect(),
            )),
            Err(err) => Ok(Frame::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Hmget {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let first = parser.next_string()?;
        let mut fields = vec![first];
        fields.extend(parser.remaining_strings()?);

        Ok(Self { key, fields })
    }
}
