use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::services::validation::{http_url, optional_http_url};

/// Status of a look generation job.
///
/// Jobs are always created `Queued`. Nothing in this service moves them
/// forward; the other states exist for whatever generation backend picks
/// the documents up.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Queued,
    Processing,
    Completed,
    Failed,
}

/// User selection for a composite look. Validated, then repackaged into a
/// [`LookJob`]; never persisted as is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LookRequest {
    #[garde(custom(http_url))]
    pub user_image_url: String,

    #[garde(skip)]
    #[serde(default)]
    pub top_id: Option<String>,

    #[garde(skip)]
    #[serde(default)]
    pub bottom_id: Option<String>,

    #[garde(skip)]
    #[serde(default)]
    pub shoes_id: Option<String>,

    #[garde(skip)]
    #[serde(default)]
    pub accessory_ids: Option<Vec<String>>,

    #[garde(skip)]
    #[serde(default)]
    pub background_id: Option<String>,

    #[garde(skip)]
    #[serde(default)]
    pub animate: bool,
}

/// Item ids chosen for each slot of a look.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes_id: Option<String>,

    #[serde(default)]
    pub accessory_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_id: Option<String>,

    #[serde(default)]
    pub animate: bool,
}

/// Generation job and its eventual outputs. Stored in the `lookjob` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LookJob {
    #[garde(skip)]
    #[serde(default)]
    pub status: JobStatus,

    #[garde(custom(http_url))]
    pub user_image_url: String,

    #[garde(skip)]
    #[serde(default)]
    pub selections: Selections,

    #[garde(custom(optional_http_url))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_image_url: Option<String>,

    #[garde(custom(optional_http_url))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_video_url: Option<String>,

    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookJob {
    pub const COLLECTION: &'static str = "lookjob";
}

impl From<LookRequest> for LookJob {
    fn from(req: LookRequest) -> Self {
        Self {
            status: JobStatus::Queued,
            user_image_url: req.user_image_url,
            selections: Selections {
                top_id: req.top_id,
                bottom_id: req.bottom_id,
                shoes_id: req.shoes_id,
                accessory_ids: req.accessory_ids.unwrap_or_default(),
                background_id: req.background_id,
                animate: req.animate,
            },
            output_image_url: None,
            output_video_url: None,
            error: None,
        }
    }
}

/// Response after starting a look generation job.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookStartResponse {
    pub job_id: String,
    pub status: JobStatus,
}
