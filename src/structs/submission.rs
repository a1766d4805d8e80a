use uuid::Uuid;

/// An accepted submit: the text to analyze and the id its outcome must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request_id: Uuid,
    pub text: String,
}
