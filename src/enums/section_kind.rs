use crate::enums::language::Language;

/// The seven fixed report sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    TopInsights,
    PainPoints,
    Needs,
    Personas,
    ServiceDesign,
    SlideSummary,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 7] = [
        SectionKind::Summary,
        SectionKind::TopInsights,
        SectionKind::PainPoints,
        SectionKind::Needs,
        SectionKind::Personas,
        SectionKind::ServiceDesign,
        SectionKind::SlideSummary,
    ];

    pub fn number(&self) -> usize {
        match self {
            SectionKind::Summary => 1,
            SectionKind::TopInsights => 2,
            SectionKind::PainPoints => 3,
            SectionKind::Needs => 4,
            SectionKind::Personas => 5,
            SectionKind::ServiceDesign => 6,
            SectionKind::SlideSummary => 7,
        }
    }

    pub fn title(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, SectionKind::Summary) => "Survey Summary",
            (Language::English, SectionKind::TopInsights) => "Top 5 Key Insights",
            (Language::English, SectionKind::PainPoints) => "Pain Points",
            (Language::English, SectionKind::Needs) => "User Needs",
            (Language::English, SectionKind::Personas) => "User Personas",
            (Language::English, SectionKind::ServiceDesign) => "Service Design Proposals",
            (Language::English, SectionKind::SlideSummary) => "Slide Summary (PPT)",
            (Language::Korean, SectionKind::Summary) => "설문 요약 (Summary)",
            (Language::Korean, SectionKind::TopInsights) => "핵심 인사이트 Top 5",
            (Language::Korean, SectionKind::PainPoints) => "사용자 불편 사항 (Pain Points)",
            (Language::Korean, SectionKind::Needs) => "사용자 니즈 (Needs)",
            (Language::Korean, SectionKind::Personas) => "사용자 페르소나 (Personas)",
            (Language::Korean, SectionKind::ServiceDesign) => "서비스 디자인 제안",
            (Language::Korean, SectionKind::SlideSummary) => "발표용 요약 (PPT)",
        }
    }

    pub fn heading(&self, language: Language) -> String {
        format!("{}. {}", self.number(), self.title(language))
    }
}
