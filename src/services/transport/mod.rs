pub mod strategy;

use crate::cache::{comparison_cache_key, CacheStats, ComparisonCache};
use crate::constants::*;
use crate::models::{
    ComparisonSummary, Coordinates, ModeRecommendation, ModeReport, TransportComparison,
    TransportMode,
};
use crate::services::directions::DirectionsProvider;
use futures::future::join_all;
use std::sync::Arc;

use strategy::{resolve_route, HeuristicStrategy, ProviderStrategy, RouteStrategy};

/// Multi-criterion transport mode advisor. Queries all requested modes
/// concurrently, isolates per-mode failures, and recommends the mode with
/// the best combined time/cost/eco score.
pub struct TransportAdvisor {
    strategies: Vec<Box<dyn RouteStrategy>>,
    cache: ComparisonCache,
}

impl TransportAdvisor {
    /// Advisor backed by the Directions Provider only: a mode with no
    /// provider route is reported unavailable.
    pub fn new(provider: Arc<dyn DirectionsProvider>, cache: ComparisonCache) -> Self {
        TransportAdvisor {
            strategies: vec![Box::new(ProviderStrategy::new(provider))],
            cache,
        }
    }

    /// Append the straight-line heuristic estimator to the fallback chain,
    /// so a provider outage degrades to estimates instead of unavailability.
    pub fn with_heuristic_fallback(mut self) -> Self {
        self.strategies.push(Box::new(HeuristicStrategy));
        self
    }

    /// Advisor over an explicit strategy chain, tried in order per mode.
    pub fn from_strategies(strategies: Vec<Box<dyn RouteStrategy>>, cache: ComparisonCache) -> Self {
        TransportAdvisor { strategies, cache }
    }

    pub async fn compare(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        modes: &[TransportMode],
    ) -> Arc<TransportComparison> {
        let key = comparison_cache_key(origin, destination, modes);
        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }

        // All modes queried concurrently; join_all waits for every one to
        // settle, so a failing mode never aborts the others.
        let outcomes = join_all(
            modes
                .iter()
                .map(|&mode| resolve_route(&self.strategies, origin, destination, mode)),
        )
        .await;

        let reports: Vec<ModeReport> = modes
            .iter()
            .zip(outcomes)
            .map(|(&mode, outcome)| {
                let estimated_cost = outcome
                    .as_success()
                    .map(|route| mode.estimated_cost(route.distance_km(), route.fare));
                ModeReport {
                    mode,
                    outcome,
                    estimated_cost,
                    eco_score: mode.eco_score(),
                }
            })
            .collect();

        let comparison = build_comparison(reports);

        if comparison.successful_modes() == 0 {
            tracing::warn!(
                modes = modes.len(),
                "No transport mode available for this origin/destination pair"
            );
        }

        self.cache.insert(&key, comparison).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

fn build_comparison(reports: Vec<ModeReport>) -> TransportComparison {
    let successes: Vec<&ModeReport> = reports
        .iter()
        .filter(|r| r.outcome.as_success().is_some())
        .collect();

    if successes.is_empty() {
        return TransportComparison {
            modes: reports,
            summary: None,
            recommendation: None,
        };
    }

    let summary = summarize(&successes);
    let recommendation = recommend(&successes);

    TransportComparison {
        modes: reports,
        summary: Some(summary),
        recommendation: Some(recommendation),
    }
}

/// Single-criterion winners among successful modes. Ties keep the first
/// mode in requested order.
fn summarize(successes: &[&ModeReport]) -> ComparisonSummary {
    let pick = |better: &dyn Fn(&ModeReport, &ModeReport) -> bool| -> TransportMode {
        successes
            .iter()
            .skip(1)
            .fold(successes[0], |best, candidate| {
                if better(candidate, best) {
                    candidate
                } else {
                    best
                }
            })
            .mode
    };

    ComparisonSummary {
        fastest: pick(&|a, b| {
            route_of(a).duration_seconds < route_of(b).duration_seconds
        }),
        shortest: pick(&|a, b| {
            route_of(a).distance_meters < route_of(b).distance_meters
        }),
        cheapest: pick(&|a, b| {
            a.estimated_cost.unwrap_or(f64::MAX) < b.estimated_cost.unwrap_or(f64::MAX)
        }),
        most_eco: pick(&|a, b| a.eco_score > b.eco_score),
    }
}

fn route_of(report: &ModeReport) -> &crate::models::RouteResult {
    report
        .outcome
        .as_success()
        .expect("summarize only sees successful modes")
}

fn recommend(successes: &[&ModeReport]) -> ModeRecommendation {
    let mut scored: Vec<(f64, &ModeReport)> = successes
        .iter()
        .map(|report| (combined_score(report), *report))
        .collect();
    // Stable sort keeps requested order between equal scores.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let (best_score, best) = scored[0];
    let gap = scored
        .get(1)
        .map(|(runner_up, _)| best_score - runner_up)
        .unwrap_or(best_score);

    let confidence = (RECOMMENDATION_CONFIDENCE_BASE + gap / RECOMMENDATION_SCORE_GAP_DIVISOR)
        .min(CONFIDENCE_CAP);

    let route = route_of(best);
    ModeRecommendation {
        mode: best.mode,
        reason: reason_for(best.mode, route.distance_km(), route.duration_minutes()),
        confidence,
    }
}

/// Combined recommendation score: distance band, duration band, inverse
/// cost, and half the eco score.
fn combined_score(report: &ModeReport) -> f64 {
    let route = route_of(report);
    let km = route.distance_km();
    let minutes = route.duration_minutes();
    let cost = report.estimated_cost.unwrap_or(0.0);

    distance_band_score(report.mode, km)
        + duration_band_score(minutes)
        + inverse_cost_score(cost)
        + report.eco_score * 0.5
}

/// Favors walking under 1 km, cycling under 5 km, transit/driving beyond.
fn distance_band_score(mode: TransportMode, km: f64) -> f64 {
    match mode {
        TransportMode::Walking => {
            if km < 1.0 {
                10.0
            } else if km < 2.0 {
                5.0
            } else {
                1.0
            }
        }
        TransportMode::Bicycling => {
            if km < 5.0 {
                8.0
            } else if km < 10.0 {
                5.0
            } else {
                2.0
            }
        }
        TransportMode::Transit => {
            if km >= 2.0 {
                7.0
            } else {
                3.0
            }
        }
        TransportMode::Driving => {
            if km >= 5.0 {
                7.0
            } else {
                3.0
            }
        }
    }
}

fn duration_band_score(minutes: f64) -> f64 {
    if minutes < 15.0 {
        9.0
    } else if minutes < 30.0 {
        6.0
    } else if minutes < 60.0 {
        3.0
    } else {
        1.0
    }
}

fn inverse_cost_score(cost: f64) -> f64 {
    10.0 / (1.0 + cost)
}

fn reason_for(mode: TransportMode, km: f64, minutes: f64) -> String {
    match mode {
        TransportMode::Walking => format!(
            "Short distance ({:.1} km) makes walking the most practical choice",
            km
        ),
        TransportMode::Bicycling => format!(
            "Cycling covers {:.1} km in about {:.0} minutes without parking or fares",
            km, minutes
        ),
        TransportMode::Transit => format!(
            "Transit is the best balance of time and cost over {:.1} km",
            km
        ),
        TransportMode::Driving => format!(
            "Driving is the fastest option for this {:.1} km trip (about {:.0} minutes)",
            km, minutes
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModeOutcome, RouteResult};

    fn report(mode: TransportMode, distance_m: f64, duration_s: f64) -> ModeReport {
        let route = RouteResult {
            duration_seconds: duration_s,
            distance_meters: distance_m,
            steps: vec![],
            fare: None,
        };
        let estimated_cost = Some(mode.estimated_cost(route.distance_km(), route.fare));
        ModeReport {
            mode,
            outcome: ModeOutcome::Success(route),
            estimated_cost,
            eco_score: mode.eco_score(),
        }
    }

    fn unavailable(mode: TransportMode) -> ModeReport {
        ModeReport {
            mode,
            outcome: ModeOutcome::Unavailable {
                reason: "provider down".to_string(),
            },
            estimated_cost: None,
            eco_score: mode.eco_score(),
        }
    }

    #[test]
    fn short_hop_recommends_walking_citing_distance() {
        // 500m apart, walking and driving both available.
        let comparison = build_comparison(vec![
            report(TransportMode::Walking, 500.0, 360.0),
            report(TransportMode::Driving, 500.0, 120.0),
        ]);

        let recommendation = comparison.recommendation.unwrap();
        assert_eq!(recommendation.mode, TransportMode::Walking);
        assert!(recommendation.reason.contains("Short distance"));
        assert!(recommendation.confidence > 0.0 && recommendation.confidence <= 0.95);
    }

    #[test]
    fn long_trip_does_not_recommend_walking() {
        let comparison = build_comparison(vec![
            report(TransportMode::Walking, 12_000.0, 9_000.0),
            report(TransportMode::Transit, 12_000.0, 1_800.0),
            report(TransportMode::Driving, 12_000.0, 1_200.0),
        ]);

        let recommendation = comparison.recommendation.unwrap();
        assert_ne!(recommendation.mode, TransportMode::Walking);
    }

    #[test]
    fn failed_mode_is_excluded_but_reported() {
        let comparison = build_comparison(vec![
            unavailable(TransportMode::Transit),
            report(TransportMode::Walking, 800.0, 600.0),
        ]);

        assert_eq!(comparison.modes.len(), 2);
        assert_eq!(comparison.successful_modes(), 1);
        let summary = comparison.summary.unwrap();
        assert_eq!(summary.fastest, TransportMode::Walking);
        assert_eq!(
            comparison.recommendation.unwrap().mode,
            TransportMode::Walking
        );
    }

    #[test]
    fn zero_successes_yield_no_recommendation() {
        let comparison = build_comparison(vec![
            unavailable(TransportMode::Walking),
            unavailable(TransportMode::Driving),
        ]);

        assert!(comparison.summary.is_none());
        assert!(comparison.recommendation.is_none());
        assert_eq!(comparison.successful_modes(), 0);
    }

    #[test]
    fn summary_picks_per_criterion_winners() {
        let comparison = build_comparison(vec![
            report(TransportMode::Walking, 3_000.0, 2_400.0),
            report(TransportMode::Transit, 3_600.0, 900.0),
            report(TransportMode::Driving, 3_200.0, 600.0),
        ]);

        let summary = comparison.summary.unwrap();
        assert_eq!(summary.fastest, TransportMode::Driving);
        assert_eq!(summary.shortest, TransportMode::Walking);
        assert_eq!(summary.cheapest, TransportMode::Walking); // zero cost
        assert_eq!(summary.most_eco, TransportMode::Walking);
    }

    #[test]
    fn confidence_respects_cap() {
        // Lone successful mode: gap equals its own score, cap applies.
        let comparison = build_comparison(vec![report(TransportMode::Walking, 400.0, 300.0)]);
        assert_eq!(comparison.recommendation.unwrap().confidence, 0.95);
    }
}
