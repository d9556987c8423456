//! # Plasmapost Post-Processor
//!
//! This crate turns motion objects exported by a CAM model into a G-code
//! program for a plasma cutting table.
//!
//! ## Components
//!
//! - **Translator**: walks objects and commands, emits header, preamble,
//!   operations and postamble
//! - **Commands**: classifies command names (custom, special plasma, ignored,
//!   cutting, rapid)
//! - **Torch**: torch on/off state carried across the whole run
//! - **Format**: fixed precision numeric words
//! - **Output**: line buffer with optional `N` numbering

pub mod commands;
pub mod format;
pub mod output;
pub mod torch;
pub mod translator;

pub use commands::CommandKind;
pub use format::{format_parameter_list, format_value, format_word};
pub use output::ProgramOutput;
pub use torch::{EngineState, TorchTransition, TORCH_OFF, TORCH_ON};
pub use translator::{translate, PlasmaPostProcessor, EXPORT_BANNER, PREVIEW_SIZE_LIMIT};
