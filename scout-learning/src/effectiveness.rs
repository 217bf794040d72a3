//! Query effectiveness scoring.

use scout_core::config::LearningConfig;
use scout_core::models::{ChannelStats, Platform, QueryStats};

fn channel_score(channel: &ChannelStats, config: &LearningConfig) -> f64 {
    config.match_rate_weight * channel.match_rate()
        + config.avg_confidence_weight * channel.avg_confidence()
}

/// Score a query for (platform, sport): a weighted blend of its sport-level
/// and platform-level effectiveness, with a multiplier for queries proven
/// over repeated use.
pub(crate) fn score(
    stats: &QueryStats,
    platform: Platform,
    sport: &str,
    config: &LearningConfig,
) -> f64 {
    let platform_score = stats
        .by_platform
        .get(&platform)
        .map(|c| channel_score(c, config))
        .unwrap_or(0.0);
    let sport_score = stats
        .by_sport
        .get(sport)
        .map(|c| channel_score(c, config))
        .unwrap_or(0.0);

    let mut combined =
        config.sport_score_weight * sport_score + config.platform_score_weight * platform_score;
    if stats.total_uses > config.proven_query_min_uses
        && stats.overall_match_rate() > config.proven_query_min_match_rate
    {
        combined *= config.proven_query_bonus;
    }
    combined
}
