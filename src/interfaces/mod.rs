//! Interface layer: CSV readers and writers bridging the engine to the
//! outside world.

pub mod csv;
