use derive_builder::Builder;

/// How the directory walk behind a glob expansion treats the file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct WalkOptions {
    /// Let wildcards match entries whose name starts with `.`.
    pub hidden: bool,
    pub follow_links: bool,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct CheckConfig {
    pub pattern: String,
    /// Longest accepted line, in bytes. Lines strictly longer are violations.
    pub max_len: usize,
    #[builder(default)]
    pub walk: WalkOptions,
    /// Abort on the first unreadable file instead of skipping it.
    #[builder(default)]
    pub strict: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }
}
