//! In-memory [`IoHost`] for driving the REPL loop in tests.

use std::collections::VecDeque;

use super::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Scripted host: queued lines and signals go in, outputs and prompts are
/// recorded.
///
/// A queued signal is delivered before any queued line. When both queues are
/// empty the host reports Ctrl+D, so a script without `exit` still ends.
#[derive(Debug, Default)]
pub struct TestHost {
    inputs: VecDeque<String>,
    signals: VecDeque<Signal>,
    outputs: Vec<Output>,
    prompts: Vec<PromptConfig>,
    flushes: usize,
    pending_input: Option<InputLine>,
    pending_signal: Option<Signal>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that will type `lines` in order.
    pub fn with_inputs<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new();
        host.inputs.extend(lines.into_iter().map(Into::into));
        host
    }

    pub fn queue_signal(&mut self, signal: Signal) {
        self.signals.push_back(signal);
    }

    pub fn output(&self) -> &[Output] {
        &self.outputs
    }

    /// Every output text, one per line.
    pub fn output_text(&self) -> String {
        self.outputs
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn with_style(&self, style: OutputStyle) -> Vec<&str> {
        self.outputs
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.with_style(OutputStyle::Error)
    }

    /// The prompt most recently set by the core.
    pub fn last_prompt(&self) -> Option<&PromptConfig> {
        self.prompts.last()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl IoHost for TestHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        if let Some(signal) = self.signals.pop_front() {
            self.pending_signal = Some(signal);
        } else if let Some(line) = self.inputs.pop_front() {
            self.pending_input = Some(InputLine { line });
        } else {
            self.pending_signal = Some(Signal::Eof);
        }
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.pending_input.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.outputs.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_delivered_in_order() {
        let mut host = TestHost::with_inputs(["first", "second"]);

        host.wait_for_input().unwrap();
        assert_eq!(host.read_input().unwrap().unwrap().line, "first");
        assert!(host.read_input().unwrap().is_none());

        host.wait_for_input().unwrap();
        assert_eq!(host.read_input().unwrap().unwrap().line, "second");
    }

    #[test]
    fn signals_come_before_lines() {
        let mut host = TestHost::with_inputs(["ls"]);
        host.queue_signal(Signal::Interrupt);

        host.wait_for_input().unwrap();
        assert_eq!(host.read_signal().unwrap(), Some(Signal::Interrupt));
        assert!(host.read_input().unwrap().is_none());

        host.wait_for_input().unwrap();
        assert_eq!(host.read_input().unwrap().unwrap().line, "ls");
    }

    #[test]
    fn exhausted_script_reports_eof() {
        let mut host = TestHost::new();
        host.wait_for_input().unwrap();
        assert_eq!(host.read_signal().unwrap(), Some(Signal::Eof));
    }

    #[test]
    fn outputs_are_recorded_by_style() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("a")).unwrap();
        host.write_output(Output::error("b")).unwrap();
        host.write_output(Output::error("c")).unwrap();
        host.flush().unwrap();

        assert_eq!(host.output_text(), "a\nb\nc");
        assert_eq!(host.errors(), vec!["b", "c"]);
        assert_eq!(host.flush_count(), 1);
    }

    #[test]
    fn last_prompt_wins() {
        let mut host = TestHost::new();
        assert!(host.last_prompt().is_none());
        for path in ["/", "/users"] {
            host.write_prompt(PromptConfig {
                current_path: path.to_string(),
                skip: 0,
                limit: 100,
            })
            .unwrap();
        }
        assert_eq!(host.last_prompt().unwrap().current_path, "/users");
    }
}
