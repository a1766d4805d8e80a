use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use crate::enums::app_state::AppState;
use crate::enums::language::Language;
use crate::enums::session_command::SessionCommand;
use crate::errors::{ErrorHandler, InsightFlowResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::input_collector::InputCollector;
use crate::services::report_renderer::ReportRenderer;
use crate::services::survey_analyzer::SurveyAnalyzer;
use crate::workers::app_state_machine::AppStateMachine;

const IDLE_HELP: &str = "\
Type or paste survey responses line by line, then:
  :file <path>   load a .csv or .txt file (replaces the text)
  :clear         discard the collected text
  :go            analyze the collected text
  :help          show this help
  :quit          exit";

const REPORT_HELP: &str = "[l] switch language   [r] new analysis   [q] quit";
const ERROR_HELP: &str = "[r] try again   [q] quit";

/// Terminal session driving the state machine from line-based input.
pub struct InteractiveSession<W: Write> {
    machine: AppStateMachine,
    collector: InputCollector,
    analyzer: SurveyAnalyzer,
    language: Language,
    width: usize,
    spinner: bool,
    out: W,
}

impl<W: Write> InteractiveSession<W> {
    pub fn new(analyzer: SurveyAnalyzer, language: Language, width: usize, out: W) -> Self {
        Self {
            machine: AppStateMachine::new(),
            collector: InputCollector::new(),
            analyzer,
            language,
            width,
            spinner: false,
            out,
        }
    }

    /// Animate a spinner on stderr while an analysis is pending.
    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn state(&self) -> &AppState {
        self.machine.state()
    }

    pub fn collector(&self) -> &InputCollector {
        &self.collector
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run<R>(&mut self, input: R) -> InsightFlowResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "🧠 InsightFlow: turn survey responses into actionable insights")?;
        writeln!(self.out, "{}", IDLE_HELP)?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle_line(&line).await? {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Applies one line of input. Returns `false` when the session should end.
    pub async fn handle_line(&mut self, line: &str) -> InsightFlowResult<bool> {
        let command = SessionCommand::parse(line, self.machine.state());

        if self.machine.is_analyzing() {
            return Ok(true);
        }
        if self.machine.result().is_some() {
            return self.handle_report(command);
        }
        if self.machine.error_message().is_some() {
            return self.handle_error(command);
        }
        self.handle_idle(command).await
    }

    async fn handle_idle(&mut self, command: SessionCommand) -> InsightFlowResult<bool> {
        match command {
            SessionCommand::Text(text) => self.collector.append_line(&text),
            SessionCommand::LoadFile(path) => match self.collector.load_file(&path).await {
                Ok(()) => {
                    writeln!(
                        self.out,
                        "📄 {} loaded ({} characters)",
                        self.collector.file_name().unwrap_or_default(),
                        self.collector.text().chars().count()
                    )?;
                }
                Err(e) => ErrorHandler::handle_error(&e),
            },
            SessionCommand::Clear => {
                self.collector.clear();
                writeln!(self.out, "🧹 Input cleared")?;
            }
            SessionCommand::Submit => {
                if !self.collector.can_submit(self.machine.is_analyzing()) {
                    writeln!(self.out, "⚠️ Nothing to analyze yet")?;
                    return Ok(true);
                }
                self.analyze().await?;
            }
            SessionCommand::Help | SessionCommand::ToggleLanguage | SessionCommand::Reset => {
                writeln!(self.out, "{}", IDLE_HELP)?;
            }
            SessionCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    async fn analyze(&mut self) -> InsightFlowResult<()> {
        let mut spinner = AnimatedLogger::new(self.language.progress_message());
        if self.spinner {
            spinner.start();
        }

        let text = self.collector.text().to_string();
        let state = self.machine.run_analysis(&text, &self.analyzer).await.cloned();

        match state {
            Some(AppState::Success(_)) => {
                spinner.stop("Analysis complete").await;
                self.print_report()?;
            }
            Some(AppState::Error(message)) => {
                spinner.error("Analysis failed").await;
                writeln!(self.out, "❌ {}", message)?;
                writeln!(self.out, "{}", ERROR_HELP)?;
            }
            _ => spinner.stop("Nothing to analyze").await,
        }

        Ok(())
    }

    fn handle_report(&mut self, command: SessionCommand) -> InsightFlowResult<bool> {
        match command {
            SessionCommand::ToggleLanguage => {
                self.language = self.language.toggle();
                self.print_report()?;
            }
            SessionCommand::Reset => self.start_over()?,
            SessionCommand::Quit => return Ok(false),
            _ => writeln!(self.out, "{}", REPORT_HELP)?,
        }
        Ok(true)
    }

    fn handle_error(&mut self, command: SessionCommand) -> InsightFlowResult<bool> {
        match command {
            SessionCommand::Reset => self.start_over()?,
            SessionCommand::Quit => return Ok(false),
            _ => writeln!(self.out, "{}", ERROR_HELP)?,
        }
        Ok(true)
    }

    fn start_over(&mut self) -> InsightFlowResult<()> {
        self.machine.reset();
        self.collector.clear();
        writeln!(self.out, "\n{}", IDLE_HELP)?;
        Ok(())
    }

    fn print_report(&mut self) -> InsightFlowResult<()> {
        if let Some(result) = self.machine.result() {
            let report = ReportRenderer::render(result, self.language);
            write!(self.out, "{}", ReportRenderer::to_text(&report, self.width))?;
            writeln!(self.out, "\n{}", REPORT_HELP)?;
        }
        Ok(())
    }
}
