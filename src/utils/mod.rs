// file: src/utils/mod.rs
// description: shared utility module exports

pub mod logging;
