// reorient-cli/src/commands/mod.rs
//
// Command implementations.

pub mod correct;
