// Purpose: the glue a host needs to run the engine as a module instance.
// This layer sits above the sequencer core and owns knobs, jacks and lights.

pub mod config;
pub mod message;
pub mod module;

pub use config::{ConfigError, ModuleConfig, ParamConfig, PortConfig};
pub use message::{MessageReceiver, ParamMessage};
pub use module::SequencerModule;
