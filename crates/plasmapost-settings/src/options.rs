//! Option string parsing
//!
//! Post-processors receive their options as one flat string, for example
//! `--inches --precision=2 --preamble "G17 G90"`. The string is split
//! shell-style and the tokens are parsed with `clap`. Quoted values are kept
//! as written, so a multi-line preamble needs real line breaks inside the
//! quotes.

use crate::config::PostOption;
use clap::Parser;
use plasmapost_core::ConfigError;

#[derive(Parser, Debug)]
#[command(
    name = "plasma",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct PostArgs {
    /// suppress header output
    #[arg(long = "no-header", alias = "suppress-header")]
    no_header: bool,

    /// suppress comment output
    #[arg(long = "no-comments", alias = "suppress-comments")]
    no_comments: bool,

    /// prefix with line numbers
    #[arg(long)]
    line_numbers: bool,

    /// don't pop up editor before writing output
    #[arg(long)]
    no_show_editor: bool,

    /// number of digits of precision, default=3
    #[arg(long, allow_hyphen_values = true)]
    precision: Option<String>,

    /// set commands to be issued before the first command
    #[arg(long, allow_hyphen_values = true)]
    preamble: Option<String>,

    /// set commands to be issued after the last command
    #[arg(long, allow_hyphen_values = true)]
    postamble: Option<String>,

    /// Convert output for US imperial mode (G20)
    #[arg(long, alias = "imperial")]
    inches: bool,

    /// Pierce delay in seconds (default: 0.5)
    #[arg(long, allow_hyphen_values = true)]
    pierce_delay: Option<String>,
}

impl PostArgs {
    fn into_options(self) -> Vec<PostOption> {
        let mut options = Vec::new();
        if self.no_header {
            options.push(PostOption::SuppressHeader);
        }
        if self.no_comments {
            options.push(PostOption::SuppressComments);
        }
        if self.line_numbers {
            options.push(PostOption::LineNumbers);
        }
        if self.no_show_editor {
            options.push(PostOption::NoShowEditor);
        }
        if let Some(precision) = self.precision {
            options.push(PostOption::Precision(precision));
        }
        if let Some(preamble) = self.preamble {
            options.push(PostOption::Preamble(preamble));
        }
        if let Some(postamble) = self.postamble {
            options.push(PostOption::Postamble(postamble));
        }
        if self.inches {
            options.push(PostOption::Imperial);
        }
        if let Some(delay) = self.pierce_delay {
            options.push(PostOption::PierceDelay(delay));
        }
        options
    }
}

/// Parse a flat option string into recognized options
///
/// Unknown flags, stray words, missing values and unbalanced quotes are
/// reported as `InvalidArgument`.
pub fn parse_option_string(args: &str) -> Result<Vec<PostOption>, ConfigError> {
    let tokens = split_option_string(args)?;
    let parsed = PostArgs::try_parse_from(&tokens).map_err(|e| {
        let message = e.to_string();
        let reason = message
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        ConfigError::invalid_argument(args, reason)
    })?;
    Ok(parsed.into_options())
}

/// Split an option string into words, honoring shell quoting
///
/// Single quotes keep their content literally. Inside double quotes a
/// backslash only escapes `"` and `\`. Outside quotes a backslash escapes
/// any character.
pub fn split_option_string(args: &str) -> Result<Vec<String>, ConfigError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = args.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(unbalanced(args, '\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.peek() {
                            Some(&next @ ('"' | '\\')) => {
                                current.push(next);
                                chars.next();
                            }
                            _ => current.push('\\'),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(unbalanced(args, '"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn unbalanced(args: &str, quote: char) -> ConfigError {
    ConfigError::invalid_argument(args, format!("unbalanced {} quote", quote))
}
