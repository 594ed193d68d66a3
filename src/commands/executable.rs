use crate::frame::Frame;
use crate::store::Store;
use crate::Error;

/// A parsed command ready to run against the keyspace. Commands execute on
/// the worker task that owns the `Store`, so they take it by plain mutable
/// reference.
///
/// Keyspace-level failures (wrong type, unparsable values) are replies, not
/// errors: they come back as `Frame::Error` in the `Ok` branch.
pub trait Executable {
    fn exec(self, store: &mut Store) -> Result<Frame, Error>;
}
