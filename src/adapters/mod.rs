// Adapters layer: concrete implementations for the domain ports (page
// tree, confirmation prompts, wall clock) plus the event-script player
// used by the demo binary.

pub mod confirmers;
pub mod memory;
pub mod script;
pub mod time;
