use crate::enums::language::Language;
use crate::enums::section_body::SectionBody;
use crate::enums::section_kind::SectionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub heading: String,
    pub body: SectionBody,
}

/// One language's view of an analysis, split into the seven display sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub language: Language,
    pub sections: Vec<ReportSection>,
}

impl RenderedReport {
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}
