use crate::structs::report::pain_point_category::PainPointCategory;
use crate::structs::report::ppt_summary::PptSummary;
use crate::structs::report::service_design_insight::ServiceDesignInsight;
use crate::structs::report::survey_summary::SurveySummary;
use crate::structs::report::user_persona::UserPersona;

/// Payload of a rendered section, copied verbatim from the analyzed section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Summary(SurveySummary),
    TopInsights(Vec<String>),
    PainPoints(Vec<PainPointCategory>),
    Needs(Vec<String>),
    Personas(Vec<UserPersona>),
    ServiceDesign(Vec<ServiceDesignInsight>),
    SlideSummary(PptSummary),
}
