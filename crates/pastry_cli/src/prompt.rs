//! Interactive prompts.
//!
//! [`Prompt`] is the surface the init flow talks to. [`ClackPrompt`] renders
//! it on the terminal with `cliclack`.

use std::io;

/// Validation hook: returns an error message to reject the answer.
pub type Validator = fn(&str) -> Option<&'static str>;

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

impl PromptOutcome {
    /// The answer, or `None` if the user cancelled.
    pub fn submitted(self) -> Option<String> {
        match self {
            Self::Submitted(value) => Some(value),
            Self::Cancelled => None,
        }
    }
}

/// A free-text question.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    pub message: &'static str,
    /// Hint shown while the input is empty
    pub placeholder: Option<&'static str>,
    /// Answer used when the input is empty
    pub default: Option<&'static str>,
    pub validate: Option<Validator>,
}

impl TextPrompt {
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            placeholder: None,
            default: None,
            validate: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn validate(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// Session-level interaction: intro, questions, progress steps, outro.
pub trait Prompt {
    fn intro(&mut self, title: &str) -> io::Result<()>;

    /// Ask until an answer passes validation or the user cancels.
    fn text(&mut self, prompt: &TextPrompt) -> io::Result<PromptOutcome>;

    fn start_step(&mut self, message: &str) -> io::Result<()>;

    fn stop_step(&mut self, message: &str) -> io::Result<()>;

    fn fail_step(&mut self, message: &str) -> io::Result<()>;

    fn success(&mut self, message: &str) -> io::Result<()>;

    fn outro(&mut self, message: &str) -> io::Result<()>;

    fn cancel(&mut self, message: &str) -> io::Result<()>;
}

/// Map a prompt result to an outcome. Esc and Ctrl-C surface as
/// `Interrupted` and cancel the prompt.
pub fn cancel_on_interrupt(result: io::Result<String>) -> io::Result<PromptOutcome> {
    match result {
        Ok(value) => Ok(PromptOutcome::Submitted(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(PromptOutcome::Cancelled),
        Err(e) => Err(e),
    }
}

/// Terminal prompts in the `@clack/prompts` style.
#[derive(Default)]
pub struct ClackPrompt {
    spinner: Option<cliclack::ProgressBar>,
}

impl ClackPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for ClackPrompt {
    fn intro(&mut self, title: &str) -> io::Result<()> {
        cliclack::intro(title)
    }

    fn text(&mut self, prompt: &TextPrompt) -> io::Result<PromptOutcome> {
        let mut input = cliclack::input(prompt.message);
        if let Some(placeholder) = prompt.placeholder {
            input = input.placeholder(placeholder);
        }
        if let Some(default) = prompt.default {
            input = input.default_input(default);
        }
        if let Some(validate) = prompt.validate {
            input = input.validate(move |value: &String| match validate(value) {
                Some(message) => Err(message),
                None => Ok(()),
            });
        }
        cancel_on_interrupt(input.interact::<String>())
    }

    fn start_step(&mut self, message: &str) -> io::Result<()> {
        let mut spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
        Ok(())
    }

    fn stop_step(&mut self, message: &str) -> io::Result<()> {
        if let Some(mut spinner) = self.spinner.take() {
            spinner.stop(message);
        }
        Ok(())
    }

    fn fail_step(&mut self, message: &str) -> io::Result<()> {
        if let Some(mut spinner) = self.spinner.take() {
            spinner.error(message);
        }
        Ok(())
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::success(message)
    }

    fn outro(&mut self, message: &str) -> io::Result<()> {
        cliclack::outro(message)
    }

    fn cancel(&mut self, message: &str) -> io::Result<()> {
        cliclack::outro_cancel(message)
    }
}

/// Line-based prompt driven from a reader, recording everything it shows.
///
/// End of input cancels, as does a line starting with Ctrl-C (`\x03`).
#[cfg(test)]
pub struct ScriptedPrompt<R> {
    input: R,
    pub transcript: String,
}

#[cfg(test)]
impl<R: io::BufRead> ScriptedPrompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            transcript: String::new(),
        }
    }

    fn show(&mut self, line: std::fmt::Arguments<'_>) -> io::Result<()> {
        use std::fmt::Write;
        writeln!(self.transcript, "{}", line).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
impl<R: io::BufRead> Prompt for ScriptedPrompt<R> {
    fn intro(&mut self, title: &str) -> io::Result<()> {
        self.show(format_args!("intro: {}", title))
    }

    fn text(&mut self, prompt: &TextPrompt) -> io::Result<PromptOutcome> {
        loop {
            self.show(format_args!("ask: {}", prompt.message))?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(PromptOutcome::Cancelled);
            }
            if line.starts_with('\u{3}') {
                return cancel_on_interrupt(Err(io::ErrorKind::Interrupted.into()));
            }

            let mut answer = line.trim_end_matches(['\r', '\n']).to_string();
            if answer.is_empty() {
                if let Some(default) = prompt.default {
                    answer = default.to_string();
                }
            }

            if let Some(message) = prompt.validate.and_then(|validate| validate(&answer)) {
                self.show(format_args!("invalid: {}", message))?;
                continue;
            }

            return cancel_on_interrupt(Ok(answer));
        }
    }

    fn start_step(&mut self, message: &str) -> io::Result<()> {
        self.show(format_args!("start: {}", message))
    }

    fn stop_step(&mut self, message: &str) -> io::Result<()> {
        self.show(format_args!("stop: {}", message))
    }

    fn fail_step(&mut self, message: &str) -> io::Result<()> {
        self.show(format_args!("fail: {}", message))
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        self.show(format_args!("success: {}", message))
    }

    fn outro(&mut self, message: &str) -> io::Result<()> {
        self.show(format_args!("outro: {}", message))
    }

    fn cancel(&mut self, message: &str) -> io::Result<()> {
        self.show(format_args!("cancel: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn required(value: &str) -> Option<&'static str> {
        value.is_empty().then_some("Value is required")
    }

    fn scripted(input: &str) -> ScriptedPrompt<Cursor<Vec<u8>>> {
        ScriptedPrompt::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_interrupt_cancels() {
        let outcome = cancel_on_interrupt(Err(io::ErrorKind::Interrupted.into())).unwrap();
        assert_eq!(outcome, PromptOutcome::Cancelled);
    }

    #[test]
    fn test_other_errors_propagate() {
        let err = cancel_on_interrupt(Err(io::ErrorKind::BrokenPipe.into())).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_answer_submitted() {
        let outcome = cancel_on_interrupt(Ok("croissant".to_string())).unwrap();
        assert_eq!(outcome.submitted().as_deref(), Some("croissant"));
    }

    #[test]
    fn test_scripted_default_and_validation() {
        let mut p = scripted("\n\nbrioche\n\n");

        let name = TextPrompt::new("Name?").validate(required);
        assert_eq!(
            p.text(&name).unwrap(),
            PromptOutcome::Submitted("brioche".to_string())
        );
        assert_eq!(p.transcript.matches("invalid: Value is required").count(), 2);

        let author = TextPrompt::new("Author?").default_value("Someone");
        assert_eq!(
            p.text(&author).unwrap(),
            PromptOutcome::Submitted("Someone".to_string())
        );
    }

    #[test]
    fn test_scripted_ctrl_c_cancels() {
        let mut p = scripted("\u{3}\n");
        assert_eq!(
            p.text(&TextPrompt::new("Name?")).unwrap(),
            PromptOutcome::Cancelled
        );
    }
}
