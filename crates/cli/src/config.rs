// crates/cli/src/config.rs
use crate::args::Args;
use line_length_engine::config::{CheckConfig, WalkOptions};
use line_length_engine::error::EngineError;

impl TryFrom<&Args> for CheckConfig {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let walk = WalkOptions {
            hidden: args.hidden,
            follow_links: args.follow_links,
            case_insensitive: args.ignore_case,
        };

        CheckConfig::builder()
            .pattern(args.pattern.as_str())
            .max_len(args.max_len)
            .walk(walk)
            .strict(args.strict)
            .build()
            .map_err(EngineError::from)
    }
}
