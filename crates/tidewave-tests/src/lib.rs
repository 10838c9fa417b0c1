//! Integration test crate for tidewave.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the views the way a host does, on a manual frame clock.

#[cfg(test)]
mod waveform;

#[cfg(test)]
mod bars;

#[cfg(test)]
mod raster;
