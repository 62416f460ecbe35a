//! Cross-module tests for the inventory pipeline.
//!
//! These tests run the walker, extractor and writer together against
//! synthetic containers and real HDF5 files.

mod hdf5_tests;
