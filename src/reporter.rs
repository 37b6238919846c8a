use crate::model::structures::performance::{AggregateStats, PerformanceResult};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use owo_colors::OwoColorize;

/// Renders the computed profile. Kept behind a trait so aggregation stays
/// decoupled from presentation.
pub trait Reporter {
    fn report(&self, stats: &AggregateStats, rank_estimate: Option<f64>);
}

/// Prints the top rows to stdout, color coded by recency, followed by the
/// summary line and the rank estimate when one is available.
pub struct ConsoleReporter {
    display_limit: usize
}

impl ConsoleReporter {
    pub fn new(display_limit: usize) -> Self {
        ConsoleReporter { display_limit }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, stats: &AggregateStats, rank_estimate: Option<f64>) {
        let now = Utc::now().fixed_offset();

        for (index, result) in stats.ranked_results.iter().take(self.display_limit).enumerate() {
            print_row(index, result, now);
        }

        println!(
            "{} filtered scores, {:.2} avg pp, {:.2} total pp, {:.2}% avg acc",
            stats.eligible_count,
            stats.weighted_performance_total,
            stats.total_performance(),
            stats.weighted_accuracy_average * 100.0
        );

        if let Some(rank) = rank_estimate {
            println!("Estimated rank: #{rank:.0}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recency {
    LastHour,
    LastDay,
    LastWeek,
    LastMonth,
    Older
}

fn recency(now: DateTime<FixedOffset>, played_at: DateTime<FixedOffset>) -> Recency {
    let span = now.signed_duration_since(played_at);

    if span.num_hours() < 1 {
        Recency::LastHour
    } else if span.num_days() < 1 {
        Recency::LastDay
    } else if span.num_days() < 7 {
        Recency::LastWeek
    } else if span.num_days() < 30 {
        Recency::LastMonth
    } else {
        Recency::Older
    }
}

fn print_row(index: usize, result: &PerformanceResult, now: DateTime<FixedOffset>) {
    let attempt = &result.attempt;
    let mod_string = if attempt.mod_set.is_empty() {
        String::new()
    } else {
        format!(" +{}", attempt.mod_set.acronym_string())
    };

    let row = format!(
        "{:>5} | {:>6}, {:>7} | {:>10} | {:.1}* | {}{}",
        index + 1,
        format!("{:.0}pp", result.performance_value),
        format!("{:.2}%", attempt.accuracy * 100.0),
        time_ago(now, attempt.played_at),
        attempt.chart_star_rating,
        attempt.chart_title,
        mod_string
    );

    match recency(now, attempt.played_at) {
        Recency::LastHour => println!("{}", row.magenta()),
        Recency::LastDay => println!("{}", row.red()),
        Recency::LastWeek => println!("{}", row.yellow()),
        Recency::LastMonth => println!("{}", row.green()),
        Recency::Older => println!("{row}")
    }
}

/// Human readable age of an attempt, bucketed the way the score screen
/// presents it.
pub fn time_ago(now: DateTime<FixedOffset>, played_at: DateTime<FixedOffset>) -> String {
    let span = now.signed_duration_since(played_at);
    if span < Duration::zero() {
        return "time traveler".to_string();
    }

    let days = span.num_days();
    if days < 1 {
        let hours = span.num_hours();
        if hours < 1 {
            "just now".to_string()
        } else {
            format!("{hours}h ago")
        }
    } else if days < 7 {
        format!("{days}d ago")
    } else if days < 30 {
        format!("{}w ago", days / 7)
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(now: DateTime<FixedOffset>, span: Duration) -> DateTime<FixedOffset> {
        now - span
    }

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();

        assert_eq!(time_ago(now, at(now, Duration::minutes(5))), "just now");
        assert_eq!(time_ago(now, at(now, Duration::hours(3))), "3h ago");
        assert_eq!(time_ago(now, at(now, Duration::days(2))), "2d ago");
        assert_eq!(time_ago(now, at(now, Duration::days(13))), "1w ago");
        assert_eq!(time_ago(now, at(now, Duration::days(45))), "1mo ago");
        assert_eq!(time_ago(now, at(now, Duration::days(800))), "2y ago");
    }

    #[test]
    fn test_future_attempt() {
        let now = now();

        assert_eq!(time_ago(now, at(now, Duration::hours(-1))), "time traveler");
    }

    #[test]
    fn test_recency_buckets() {
        let now = now();

        assert_eq!(recency(now, at(now, Duration::minutes(30))), Recency::LastHour);
        assert_eq!(recency(now, at(now, Duration::hours(5))), Recency::LastDay);
        assert_eq!(recency(now, at(now, Duration::days(3))), Recency::LastWeek);
        assert_eq!(recency(now, at(now, Duration::days(20))), Recency::LastMonth);
        assert_eq!(recency(now, at(now, Duration::days(100))), Recency::Older);
    }

    #[test]
    fn test_bucket_boundaries() {
        let now = now();

        assert_eq!(time_ago(now, at(now, Duration::days(7))), "1w ago");
        assert_eq!(time_ago(now, at(now, Duration::days(30))), "1mo ago");
        assert_eq!(time_ago(now, at(now, Duration::days(365))), "1y ago");
    }
}
