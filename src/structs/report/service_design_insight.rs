use serde::{Deserialize, Serialize};
use crate::enums::priority::Priority;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceDesignInsight {
    pub feature: String,
    pub description: String,
    pub priority: Priority,
}
