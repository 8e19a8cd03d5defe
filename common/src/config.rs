use std::collections::BTreeMap;
use std::time::Duration;

/// Region key property used when none is configured (`st_nm` is the other common variant).
pub const DEFAULT_KEY_PROPERTY: &str = "NAME_1";

/// Pause between the confirmation message and the actual navigation.
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_secs(1);

/// How a region identifier turns into a destination URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkMode {
    /// Every region opens the same URL.
    Fixed { url: String },
    /// `{region}` inside the template is replaced by the (percent-encoded) region id.
    Templated { template: String },
    /// Explicit id -> url lookup. Ids missing from the table use `fallback` if there is one.
    Table {
        entries: BTreeMap<String, String>,
        fallback: Option<String>,
    },
}

pub struct Config {
    /// Name of the feature property holding the region identifier.
    pub key_property: String,
    /// Optional numeric feature property used as the display value.
    ///
    /// Regions without it are colored with the uniform value `1`.
    pub value_property: Option<String>,
    /// `None` until one of the link flags is given; only commands that navigate need it.
    pub link_mode: Option<LinkMode>,
    pub delay: Duration,
    /// Log only, never open a browser.
    pub dry_run: bool,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_property: DEFAULT_KEY_PROPERTY.to_string(),
            value_property: None,
            link_mode: None,
            delay: DEFAULT_NAVIGATION_DELAY,
            dry_run: false,
            no_banner: false,
            quiet: 0,
        }
    }
}
