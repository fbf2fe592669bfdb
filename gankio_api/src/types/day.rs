use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// One day's entries grouped by category. Keys are the server's own
/// category spellings; a category with nothing published that day is
/// simply absent from the payload.
#[derive(Serialize, Deserialize, Default)]
pub struct DayDigest {
    #[serde(rename = "Android", default)]
    pub android: Vec<Entry>,

    #[serde(rename = "iOS", default)]
    pub ios: Vec<Entry>,

    #[serde(rename = "App", default)]
    pub app: Vec<Entry>,

    #[serde(rename = "休息视频", default)]
    pub video: Vec<Entry>,

    #[serde(rename = "福利", default)]
    pub images: Vec<Entry>,

    #[serde(rename = "拓展资源", default)]
    pub resources: Vec<Entry>,

    #[serde(rename = "前端", default)]
    pub front_end: Vec<Entry>,

    #[serde(rename = "瞎推荐", default)]
    pub recommended: Vec<Entry>,
}
