use epl_parser::Command;

use crate::error::RenderError;

/// Typed access to a command's argument tokens after the arity gate.
///
/// Only count and basic parse checks happen here; range and enumeration
/// checks belong to the individual renderers.
#[derive(Debug)]
pub(crate) struct Args<'a> {
    command: &'a Command,
    renderer: &'static str,
}

impl<'a> Args<'a> {
    /// Arity gate: fewer than `required` tokens fails the whole command
    /// before anything is drawn.
    pub(crate) fn require(
        command: &'a Command,
        renderer: &'static str,
        required: usize,
    ) -> Result<Self, RenderError> {
        if command.args.len() < required {
            return Err(RenderError::Arity {
                renderer,
                required,
                line: command.line.clone(),
            });
        }
        Ok(Self { command, renderer })
    }

    pub(crate) fn int(&self, index: usize) -> Result<i32, RenderError> {
        let token = &self.command.args[index];
        token.trim().parse().map_err(|_| self.malformed(token))
    }

    /// First character of the token.
    pub(crate) fn flag(&self, index: usize) -> Result<char, RenderError> {
        let token = &self.command.args[index];
        token.chars().next().ok_or_else(|| self.malformed(token))
    }

    /// Token with any quote characters stripped.
    pub(crate) fn string(&self, index: usize) -> String {
        self.command.args[index].replace('"', "")
    }

    pub(crate) fn raw(&self, index: usize) -> &str {
        &self.command.args[index]
    }

    fn malformed(&self, token: &str) -> RenderError {
        RenderError::Malformed {
            renderer: self.renderer,
            token: token.to_string(),
            line: self.command.line.clone(),
        }
    }
}
