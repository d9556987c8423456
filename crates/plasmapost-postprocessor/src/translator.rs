//! Plasma G-code translation engine
//!
//! Walks the motion objects of a job in order and turns their commands into
//! program text. Torch handling follows three rules:
//! - a cutting move (`G1`/`G2`/`G3`) with the torch off fires the torch and
//!   dwells for the pierce delay before the move
//! - a rapid (`G0`) with the torch on shuts the torch off before the move
//! - a torch still burning after the last object is shut off once

use crate::commands::{CommandKind, FEED_PARAMETER, TRACKED_PARAMETERS};
use crate::format::{format_parameter_list, format_value, format_word};
use crate::output::ProgramOutput;
use crate::torch::{EngineState, TorchTransition, DWELL, TORCH_OFF, TORCH_ON};
use plasmapost_core::{Command, MotionObject, TranslateError};
use plasmapost_settings::PostConfig;

/// Text of the first header line
pub const EXPORT_BANNER: &str = "Exported by FreeCAD Plasma Postprocessor";

/// Outputs larger than this are never offered for preview
pub const PREVIEW_SIZE_LIMIT: usize = 100_000;

/// Trailing comment of special plasma directives
const SPECIAL_COMMAND_COMMENT: &str = "(Special plasma command)";

/// Translation engine bound to one resolved configuration
#[derive(Debug, Clone, Copy)]
pub struct PlasmaPostProcessor<'a> {
    config: &'a PostConfig,
}

impl<'a> PlasmaPostProcessor<'a> {
    /// Create a post-processor for the given configuration
    pub fn new(config: &'a PostConfig) -> Self {
        Self { config }
    }

    /// The configuration this post-processor emits for
    pub fn config(&self) -> &PostConfig {
        self.config
    }

    /// Translate motion objects into a complete program
    ///
    /// Fails with [`TranslateError::NotAPathObject`] before producing anything
    /// if any object, active or not, has no motion path.
    pub fn translate(&self, objects: &[MotionObject]) -> Result<String, TranslateError> {
        for obj in objects {
            if obj.commands().is_none() {
                tracing::error!(
                    "The object {} is not a path. Please select only path and Compounds.",
                    obj.name
                );
                return Err(TranslateError::NotAPathObject {
                    name: obj.name.clone(),
                });
            }
        }

        tracing::info!("Postprocessing {} objects...", objects.len());

        let config = self.config;
        let mut out = ProgramOutput::new();
        let mut state = EngineState::new();

        if config.emit_header() {
            self.emit_header(&mut out);
        }

        if config.emit_comments() {
            out.push_comment("begin preamble");
        }
        out.push_text(config.preamble());
        out.push_line(config.units_directive());

        for obj in objects {
            if !obj.is_active() {
                tracing::debug!("Skipping inactive object {}", obj.name);
                continue;
            }
            self.emit_object(obj, &mut state, &mut out);
        }

        if state.torch_engaged() {
            out.push_line(TORCH_OFF);
            state.apply(TorchTransition::Extinguish);
        }

        if config.emit_comments() {
            out.push_comment("begin postamble");
        }
        out.push_text(config.postamble());

        tracing::info!("Postprocessing complete: {} lines", out.len());
        Ok(out.render(config.emit_line_numbers()))
    }

    /// Whether the caller may offer `program` for interactive preview
    pub fn should_preview(&self, program: &str) -> bool {
        if !self.config.show_editor() {
            return false;
        }
        if program.len() > PREVIEW_SIZE_LIMIT {
            tracing::warn!("Skipping editor since output is greater than 100kb");
            return false;
        }
        true
    }

    fn emit_header(&self, out: &mut ProgramOutput) {
        let config = self.config;
        match config.timestamp() {
            Some(timestamp) => out.push_comment(format!(
                "{} - {}",
                EXPORT_BANNER,
                timestamp.format("%Y-%m-%d %H:%M:%S%.6f")
            )),
            None => out.push_comment(EXPORT_BANNER),
        }
        out.push_comment(format!(
            "Units: {}",
            config.measurement_system().header_name()
        ));
        out.push_comment(format!(
            "Pierce delay: {}s",
            format_value(config.pierce_delay(), config.precision())
        ));
    }

    fn emit_object(&self, obj: &MotionObject, state: &mut EngineState, out: &mut ProgramOutput) {
        let comments = self.config.emit_comments();
        if comments {
            out.push_comment(format!("begin operation: {}", obj.label));
            out.push_comment(format!("machine units: {}", self.config.feed_rate_units()));
        }

        for command in obj.commands().unwrap_or_default() {
            self.emit_command(command, state, out);
        }

        if comments {
            out.push_comment(format!("finish operation: {}", obj.label));
        }
    }

    fn emit_command(&self, command: &Command, state: &mut EngineState, out: &mut ProgramOutput) {
        let precision = self.config.precision();
        let kind = CommandKind::classify(&command.name);

        match kind {
            CommandKind::Custom => {
                let params = format_parameter_list(&command.parameters, precision);
                if params.is_empty() {
                    out.push_comment(format!("Custom: {}", command.name));
                } else {
                    out.push_comment(format!("Custom: {} {}", command.name, params));
                }
            }
            CommandKind::SpecialPlasma => {
                let mut line = command.name.clone();
                if command.has_params() {
                    line.push(' ');
                    line.push_str(&format_parameter_list(&command.parameters, precision));
                }
                line.push(' ');
                line.push_str(SPECIAL_COMMAND_COMMENT);
                out.push_line(line);
            }
            CommandKind::Ignored => {}
            CommandKind::Cutting | CommandKind::Rapid | CommandKind::Other => {
                let words = self.motion_words(command);

                if let Some(transition) = state.transition_for(kind) {
                    match transition {
                        TorchTransition::Ignite => {
                            out.push_line(TORCH_ON);
                            out.push_line(format!(
                                "{} P{} (Pierce delay)",
                                DWELL,
                                format_value(self.config.pierce_delay(), precision)
                            ));
                        }
                        TorchTransition::Extinguish => out.push_line(TORCH_OFF),
                    }
                    state.apply(transition);
                }

                if !words.is_empty() {
                    out.push_line(format!("{} {}", command.name, words.join(" ")));
                }

                state.record_position(command);
            }
        }
    }

    /// Address words for the tracked letters, converted to output units
    fn motion_words(&self, command: &Command) -> Vec<String> {
        let precision = self.config.precision();
        let system = self.config.measurement_system();
        let mut words = Vec::new();

        for letter in TRACKED_PARAMETERS {
            let Some(raw) = command.param(letter) else {
                continue;
            };
            if letter == FEED_PARAMETER {
                let speed = system.feed_rate_from_mm_per_sec(raw);
                if speed > 0.0 {
                    words.push(format_word(letter, speed, precision));
                }
            } else {
                words.push(format_word(letter, system.length_from_mm(raw), precision));
            }
        }

        words
    }
}

/// Translate motion objects with the given configuration
pub fn translate(config: &PostConfig, objects: &[MotionObject]) -> Result<String, TranslateError> {
    PlasmaPostProcessor::new(config).translate(objects)
}
