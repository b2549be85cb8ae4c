//! Public library API for extracting typed data from 7 Days to Die server output.

/// Console transcript parsing, `.ttp` marker scanning, and player record assembly.
pub mod save;
