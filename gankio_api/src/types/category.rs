use std::str::FromStr;

/// Server-defined content buckets. The wire spellings are partly Chinese;
/// `Display` renders the exact path segment the API expects.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Category {
    #[default]
    All,
    Android,
    Ios,
    App,
    Video,
    Images,
    Resources,
    FrontEnd,
    Recommended,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::All => "all",
                Category::Android => "Android",
                Category::Ios => "iOS",
                Category::App => "App",
                Category::Video => "休息视频",
                Category::Images => "福利",
                Category::Resources => "拓展资源",
                Category::FrontEnd => "前端",
                Category::Recommended => "瞎推荐",
            }
        )
    }
}

impl FromStr for Category {
    type Err = ();

    /// Accepts both ASCII aliases (CLI-friendly) and the wire spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Category::All),
            "android" | "Android" => Ok(Category::Android),
            "ios" | "iOS" => Ok(Category::Ios),
            "app" | "App" => Ok(Category::App),
            "video" | "休息视频" => Ok(Category::Video),
            "images" | "福利" => Ok(Category::Images),
            "resources" | "拓展资源" => Ok(Category::Resources),
            "frontend" | "前端" => Ok(Category::FrontEnd),
            "recommended" | "瞎推荐" => Ok(Category::Recommended),
            _ => Err(()),
        }
    }
}
