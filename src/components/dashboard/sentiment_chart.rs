use leptos::prelude::*;

use crate::types::WorkstreamSentiment;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 160.0;

/// SVG polyline points for a sentiment trend.
///
/// Readings spread evenly along the x axis in input order; scores are
/// clamped to [-1, 1] and mapped so +1 is the top edge and -1 the bottom.
fn polyline_points(scores: &[f64], width: f64, height: f64) -> String {
	let n = scores.len();
	scores
		.iter()
		.enumerate()
		.map(|(i, score)| {
			let x = if n == 1 {
				width / 2.0
			} else {
				width * i as f64 / (n - 1) as f64
			};
			let y = height / 2.0 * (1.0 - score.clamp(-1.0, 1.0));
			format!("{x:.1},{y:.1}")
		})
		.collect::<Vec<_>>()
		.join(" ")
}

fn score_class(score: f64) -> &'static str {
	if score >= 0.3 {
		"badge badge-green"
	} else if score <= -0.3 {
		"badge badge-red"
	} else {
		"badge badge-amber"
	}
}

/// Sentiment trend panel: a line over time plus the underlying readings.
#[component]
pub fn SentimentChart(sentiment: Vec<WorkstreamSentiment>) -> impl IntoView {
	let points = polyline_points(
		&sentiment.iter().map(|r| r.score).collect::<Vec<_>>(),
		CHART_WIDTH,
		CHART_HEIGHT,
	);

	view! {
		<div class="panel sentiment-panel">
			<svg
				class="sentiment-chart"
				viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
				preserveAspectRatio="none"
			>
				<line
					x1="0"
					y1=format!("{}", CHART_HEIGHT / 2.0)
					x2=format!("{CHART_WIDTH}")
					y2=format!("{}", CHART_HEIGHT / 2.0)
					class="sentiment-midline"
				/>
				<polyline points=points class="sentiment-line" />
			</svg>
			<ul class="sentiment-readings">
				{sentiment
					.into_iter()
					.map(|reading| {
						view! {
							<li>
								<span class=score_class(reading.score)>
									{format!("{:+.1}", reading.score)}
								</span>
								<span class="sentiment-date">
									{reading.date.chars().take(10).collect::<String>()}
								</span>
								<span class="sentiment-summary">{reading.summary}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn polyline_spreads_readings_and_flips_the_axis() {
		let points = polyline_points(&[-1.0, 0.0, 1.0], 100.0, 100.0);
		assert_eq!(points, "0.0,100.0 50.0,50.0 100.0,0.0");
	}

	#[test]
	fn polyline_centers_a_single_reading() {
		assert_eq!(polyline_points(&[0.5], 100.0, 100.0), "50.0,25.0");
	}

	#[test]
	fn polyline_is_empty_for_no_readings() {
		assert_eq!(polyline_points(&[], 100.0, 100.0), "");
	}

	#[test]
	fn out_of_range_scores_clamp_to_the_edges() {
		let points = polyline_points(&[2.0, -3.0], 100.0, 100.0);
		assert_eq!(points, "0.0,0.0 100.0,100.0");
	}

	#[test]
	fn score_class_by_band() {
		assert_eq!(score_class(0.6), "badge badge-green");
		assert_eq!(score_class(0.1), "badge badge-amber");
		assert_eq!(score_class(-0.3), "badge badge-red");
	}
}
