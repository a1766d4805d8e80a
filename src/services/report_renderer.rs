use std::fmt::Write;
use crate::config::constants::{FALLBACK_REPORT_WIDTH, MAX_REPORT_WIDTH, MIN_REPORT_WIDTH};
use crate::enums::language::Language;
use crate::enums::section_body::SectionBody;
use crate::enums::section_kind::SectionKind;
use crate::structs::rendered_report::{RenderedReport, ReportSection};
use crate::structs::report::analysis_result::AnalysisResult;
use crate::structs::report::user_persona::UserPersona;

pub struct ReportRenderer;

impl ReportRenderer {
    /// Projects the section for `language` into the fixed display order.
    /// The result is only borrowed; switching languages is another call.
    pub fn render(result: &AnalysisResult, language: Language) -> RenderedReport {
        let section = result.section(language);

        let sections = SectionKind::ORDER
            .iter()
            .map(|kind| {
                let body = match kind {
                    SectionKind::Summary => SectionBody::Summary(section.survey_summary.clone()),
                    SectionKind::TopInsights => SectionBody::TopInsights(section.top_insights.clone()),
                    SectionKind::PainPoints => SectionBody::PainPoints(section.pain_points.clone()),
                    SectionKind::Needs => SectionBody::Needs(section.user_needs.clone()),
                    SectionKind::Personas => SectionBody::Personas(section.personas.clone()),
                    SectionKind::ServiceDesign => SectionBody::ServiceDesign(section.service_design.clone()),
                    SectionKind::SlideSummary => SectionBody::SlideSummary(section.ppt_summary.clone()),
                };

                ReportSection {
                    kind: *kind,
                    heading: kind.heading(language),
                    body,
                }
            })
            .collect();

        RenderedReport { language, sections }
    }

    /// Resolves a configured width; 0 means "ask the terminal".
    pub fn effective_width(configured: usize) -> usize {
        let width = if configured == 0 {
            terminal_size::terminal_size()
                .map(|(terminal_size::Width(w), _)| usize::from(w))
                .unwrap_or(FALLBACK_REPORT_WIDTH)
        } else {
            configured
        };

        width.clamp(MIN_REPORT_WIDTH, MAX_REPORT_WIDTH)
    }

    pub fn to_text(report: &RenderedReport, width: usize) -> String {
        let language = report.language;
        let mut out = String::new();

        let title = match language {
            Language::English => "Analysis Report",
            Language::Korean => "분석 결과 보고서",
        };
        let _ = writeln!(out, "{}", "═".repeat(width));
        let _ = writeln!(out, "📊 {}  [{}]", title, language.display_name());
        let _ = writeln!(out, "{}", "═".repeat(width));

        for section in &report.sections {
            let _ = writeln!(out, "\n{}", section.heading);
            let _ = writeln!(out, "{}", "─".repeat(width));
            Self::write_body(&mut out, &section.body, language, width);
        }

        out
    }

    fn write_body(out: &mut String, body: &SectionBody, language: Language, width: usize) {
        match body {
            SectionBody::Summary(summary) => {
                let _ = writeln!(out, "{}", summary.overview);
                if !summary.themes.is_empty() {
                    let tags: Vec<String> = summary.themes.iter().map(|theme| format!("#{}", theme)).collect();
                    let _ = writeln!(out, "\n{}", tags.join("  "));
                }
            }
            SectionBody::TopInsights(insights) => {
                for (i, insight) in insights.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}", i + 1, insight);
                }
            }
            SectionBody::PainPoints(groups) => {
                for group in groups {
                    let _ = writeln!(out, "  ▸ {}", group.category);
                    for point in &group.points {
                        let _ = writeln!(out, "      • {}", point);
                    }
                }
            }
            SectionBody::Needs(needs) => {
                for need in needs {
                    let _ = writeln!(out, "  ✓ {}", need);
                }
            }
            SectionBody::Personas(personas) => {
                for (i, persona) in personas.iter().enumerate() {
                    if i > 0 {
                        let _ = writeln!(out, "  {}", "·".repeat(width.saturating_sub(4)));
                    }
                    Self::write_persona(out, persona, language);
                }
            }
            SectionBody::ServiceDesign(items) => {
                for item in items {
                    let _ = writeln!(out, "  [{}] {}", item.priority.badge(language), item.feature);
                    let _ = writeln!(out, "      {}", item.description);
                }
            }
            SectionBody::SlideSummary(slide) => {
                let _ = writeln!(out, "  ┌ {}", slide.title);
                for bullet in &slide.bullets {
                    let _ = writeln!(out, "  │ • {}", bullet);
                }
                let _ = writeln!(out, "  └ InsightFlow Analysis");
            }
        }
    }

    fn write_persona(out: &mut String, persona: &UserPersona, language: Language) {
        let labels = match language {
            Language::English => ["Goals", "Behavior", "Pain Points", "Needs"],
            Language::Korean => [
                "목표 및 동기 (Goals)",
                "행동 패턴 (Behavior)",
                "주요 불편 사항 (Pain Points)",
                "핵심 니즈 (Needs)",
            ],
        };

        let _ = writeln!(out, "  👤 {}", persona.name);
        for (label, value) in labels
            .iter()
            .zip([&persona.goals, &persona.behavior, &persona.pain_points, &persona.needs])
        {
            let _ = writeln!(out, "     {}: {}", label, value);
        }
    }
}
