use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::BufReader;
use crate::config::config_manager::ConfigManager;
use crate::enums::app_state::AppState;
use crate::enums::commands::Commands;
use crate::enums::language::Language;
use crate::errors::{InsightFlowError, InsightFlowResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::input_collector::InputCollector;
use crate::services::report_renderer::ReportRenderer;
use crate::services::survey_analyzer::SurveyAnalyzer;
use crate::structs::config::config::Config;
use crate::structs::report::analysis_result::AnalysisResult;
use crate::structs::saved_report::SavedReport;
use crate::workers::app_state_machine::AppStateMachine;
use crate::workers::interactive_session::InteractiveSession;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> InsightFlowResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { file, text, lang, json, save } => {
                self.analyze_command(file, text, lang, json, save).await
            }
            Commands::Render { path, lang, json } => self.render_command(&path, lang, json),
            Commands::Interactive => self.interactive_command().await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> InsightFlowResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("   - {}", error);
            }
            return Err(InsightFlowError::config_error(
                &format!("{} invalid setting(s)", errors.len()),
                None,
                Some("Run 'insightflow validate' for details"),
            ));
        }

        Ok(config)
    }

    fn init_command(&self) -> InsightFlowResult<()> {
        log::info!("🚀 Initializing insightflow configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to choose your model and language.", path.display());
        log::info!("🔧 Run 'insightflow validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> InsightFlowResult<()> {
        log::info!("🔍 Validating insightflow configuration...");

        let config = ConfigManager::load(self.config_path.as_deref())?;
        log::info!("✅ Configuration file loaded successfully");

        match ConfigManager::validate_config(&config) {
            Ok(()) => log::info!("✅ Configuration is valid"),
            Err(errors) => {
                log::info!("❌ Issues found:");
                for error in &errors {
                    log::info!("   - {}", error);
                }
                return Err(InsightFlowError::config_error(
                    &format!("{} invalid setting(s)", errors.len()),
                    None,
                    None,
                ));
            }
        }

        log::info!("🤖 Provider: {} ({})", config.ai.provider, config.ai.model);
        if ConfigManager::resolve_api_key(&config.ai).is_some() {
            log::info!("🔑 API key found");
        } else {
            log::warn!("⚠️ No API key found: set ${} before analyzing", config.ai.api_key_env);
        }

        Ok(())
    }

    async fn collect_input(file: Option<PathBuf>, text: Option<String>) -> InsightFlowResult<InputCollector> {
        let mut collector = InputCollector::new();

        match (file, text) {
            (Some(path), _) => collector.load_file(&path).await?,
            (None, Some(text)) => collector.set_text(text),
            (None, None) => {
                log::info!("⌨️  Reading survey data from stdin...");
                collector.load_reader(BufReader::new(tokio::io::stdin())).await?;
            }
        }

        Ok(collector)
    }

    async fn analyze_command(
        &self,
        file: Option<PathBuf>,
        text: Option<String>,
        lang: Option<Language>,
        json: bool,
        save: Option<PathBuf>,
    ) -> InsightFlowResult<()> {
        log::info!("🔍 Starting survey analysis...");

        let config = self.load_config()?;
        let collector = Self::collect_input(file, text).await?;

        let mut machine = AppStateMachine::new();
        if !collector.can_submit(machine.is_analyzing()) {
            return Err(InsightFlowError::EmptyInput);
        }

        let language = lang.unwrap_or(config.output.default_language);
        let analyzer = SurveyAnalyzer::from_config(&config.ai);
        log::info!("🤖 Analyzing with {} ({})", analyzer.provider_name(), config.ai.model);

        let mut spinner = AnimatedLogger::new(language.progress_message());
        spinner.start();

        let state = machine.run_analysis(collector.text(), &analyzer).await.cloned();

        let result = match state {
            Some(AppState::Success(result)) => {
                spinner.stop("Analysis complete").await;
                result
            }
            Some(AppState::Error(message)) => {
                spinner.error("Analysis failed").await;
                return Err(InsightFlowError::AnalysisFailed(message));
            }
            _ => {
                spinner.stop("Nothing to analyze").await;
                return Err(InsightFlowError::EmptyInput);
            }
        };

        if let Some(path) = save {
            let saved = SavedReport::new(&config.ai.model, collector.file_name(), result.clone());
            Self::save_report(&path, &saved)?;
        }

        Self::print_result(&result, language, json, config.output.width)
    }

    fn save_report(path: &Path, saved: &SavedReport) -> InsightFlowResult<()> {
        let content = serde_json::to_string_pretty(saved)?;
        std::fs::write(path, content)
            .map_err(|e| InsightFlowError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("💾 Report saved to {}", path.display());
        Ok(())
    }

    /// Reads either a saved report or a bare result written by `analyze --json`.
    pub fn load_saved_result(path: &Path) -> InsightFlowResult<AnalysisResult> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| InsightFlowError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        if value.get("result").is_some() {
            let saved: SavedReport = serde_json::from_value(value)?;
            log::info!("📋 Report generated {} with {}", saved.generated_at.format("%Y-%m-%d %H:%M UTC"), saved.model);
            Ok(saved.result)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    fn render_command(&self, path: &Path, lang: Option<Language>, json: bool) -> InsightFlowResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        let result = Self::load_saved_result(path)?;

        let language = lang.unwrap_or(config.output.default_language);
        Self::print_result(&result, language, json, config.output.width)
    }

    fn print_result(result: &AnalysisResult, language: Language, json: bool, width: usize) -> InsightFlowResult<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        let report = ReportRenderer::render(result, language);
        print!("{}", ReportRenderer::to_text(&report, ReportRenderer::effective_width(width)));
        Ok(())
    }

    async fn interactive_command(&self) -> InsightFlowResult<()> {
        let config = self.load_config()?;
        let analyzer = SurveyAnalyzer::from_config(&config.ai);

        if !analyzer.has_credential() {
            log::warn!("⚠️ No API key found in ${}; analyses will fail until it is set", config.ai.api_key_env);
        }

        let mut session = InteractiveSession::new(
            analyzer,
            config.output.default_language,
            ReportRenderer::effective_width(config.output.width),
            std::io::stdout(),
        )
        .with_spinner(true);

        session.run(BufReader::new(tokio::io::stdin())).await
    }
}
