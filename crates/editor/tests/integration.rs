#![allow(unused_crate_dependencies)]

#[path = "integration/common/mod.rs"]
mod common;

#[path = "integration/settings_flow.rs"]
mod settings_flow;

#[path = "integration/training_flow.rs"]
mod training_flow;

#[path = "integration/wiki_flow.rs"]
mod wiki_flow;
