use std::io;

use crate::core::instance::Instance;
use crate::core::outcome::OutcomeType;

/// Serializes labeled instances into a backend's training-data file. The
/// writer holds its file handle from construction until `finish`.
pub trait DataWriter {
    fn outcome_type(&self) -> &'static OutcomeType;

    fn write(&mut self, instance: &Instance) -> io::Result<()>;

    /// Flushes and closes the training-data file. Call exactly once, after
    /// the last instance.
    fn finish(&mut self) -> io::Result<()>;
}
