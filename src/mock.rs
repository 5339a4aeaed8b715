//! Built-in sample data used whenever the REST backend is unreachable.
//!
//! Mirrors the shape the backend serves so every page renders meaningfully
//! offline. The dependency set only references workstreams present in
//! [`workstreams`]; the graph engine drops dangling references regardless.

use crate::types::{Dependency, Issue, Milestone, Risk, Workstream, WorkstreamSentiment};

fn ws(
	id: &str,
	name: &str,
	description: &str,
	status: &str,
	lead: &str,
	updated: &str,
) -> Workstream {
	Workstream {
		id: id.into(),
		name: name.into(),
		description: description.into(),
		status: status.into(),
		lead: lead.into(),
		last_updated: updated.into(),
	}
}

/// Sample workstreams.
pub fn workstreams() -> Vec<Workstream> {
	vec![
		ws(
			"ws-1",
			"Core Banking Platform Migration",
			"Migrate legacy systems to the new cloud-based banking platform",
			"amber",
			"John Smith",
			"2025-05-10T14:30:00Z",
		),
		ws(
			"ws-2",
			"Client Onboarding Redesign",
			"Streamline and digitize the client onboarding process",
			"green",
			"Anna Johnson",
			"2025-05-11T09:15:00Z",
		),
		ws(
			"ws-3",
			"Regulatory Compliance Framework",
			"Implement new regulatory compliance framework",
			"red",
			"Robert Chen",
			"2025-05-09T16:45:00Z",
		),
		ws(
			"ws-4",
			"Mobile App Enhancement",
			"Enhance mobile app with new features and improved UX",
			"green",
			"Sarah Williams",
			"2025-05-12T11:20:00Z",
		),
		ws(
			"ws-5",
			"Data Lake Implementation",
			"Build enterprise data lake for analytics and reporting",
			"amber",
			"Michael Brown",
			"2025-05-08T13:10:00Z",
		),
	]
}

fn milestone(
	id: &str,
	ws_id: &str,
	title: &str,
	description: &str,
	due: &str,
	status: &str,
) -> Milestone {
	Milestone {
		id: id.into(),
		workstream_id: ws_id.into(),
		title: title.into(),
		description: description.into(),
		due_date: due.into(),
		status: status.into(),
	}
}

/// Sample milestones.
pub fn milestones() -> Vec<Milestone> {
	vec![
		milestone(
			"ms-1",
			"ws-1",
			"Platform Architecture Design",
			"Complete the architecture design for the new banking platform",
			"2025-06-15T00:00:00Z",
			"completed",
		),
		milestone(
			"ms-2",
			"ws-1",
			"Data Migration Strategy",
			"Develop strategy for migrating data to the new platform",
			"2025-07-01T00:00:00Z",
			"at_risk",
		),
		milestone(
			"ms-3",
			"ws-2",
			"Digital Onboarding Prototype",
			"Develop and test digital onboarding prototype",
			"2025-06-20T00:00:00Z",
			"pending",
		),
		milestone(
			"ms-4",
			"ws-3",
			"Regulatory Gap Analysis",
			"Complete gap analysis against new regulatory requirements",
			"2025-06-10T00:00:00Z",
			"delayed",
		),
		milestone(
			"ms-5",
			"ws-4",
			"App UI Redesign",
			"Complete UI redesign for mobile app",
			"2025-06-25T00:00:00Z",
			"completed",
		),
		milestone(
			"ms-6",
			"ws-5",
			"Data Model Design",
			"Design data model for the enterprise data lake",
			"2025-06-05T00:00:00Z",
			"pending",
		),
	]
}

fn risk(
	id: &str,
	ws_id: &str,
	title: &str,
	description: &str,
	impact: &str,
	likelihood: &str,
	plan: &str,
	status: &str,
) -> Risk {
	Risk {
		id: id.into(),
		workstream_id: ws_id.into(),
		title: title.into(),
		description: description.into(),
		impact: impact.into(),
		likelihood: likelihood.into(),
		mitigation_plan: plan.into(),
		status: status.into(),
	}
}

/// Sample risks.
pub fn risks() -> Vec<Risk> {
	vec![
		risk(
			"risk-1",
			"ws-1",
			"System Integration Complexity",
			"Integration with legacy systems more complex than anticipated",
			"high",
			"medium",
			"Engage additional integration specialists and extend timeline",
			"open",
		),
		risk(
			"risk-2",
			"ws-2",
			"Regulatory Approval Delay",
			"Delay in getting regulatory approval for digital signatures",
			"high",
			"low",
			"Early engagement with regulatory bodies and preparation of alternative options",
			"mitigated",
		),
		risk(
			"risk-3",
			"ws-3",
			"Resource Constraints",
			"Insufficient compliance expertise within the team",
			"medium",
			"high",
			"Hire external compliance consultants and train existing staff",
			"open",
		),
		risk(
			"risk-4",
			"ws-4",
			"App Performance Issues",
			"New features may degrade app performance",
			"medium",
			"medium",
			"Implement performance testing at each development stage",
			"mitigated",
		),
		risk(
			"risk-5",
			"ws-5",
			"Data Quality Issues",
			"Poor data quality affecting analysis capabilities",
			"high",
			"high",
			"Implement data cleansing and validation procedures",
			"open",
		),
	]
}

fn issue(
	id: &str,
	ws_id: &str,
	title: &str,
	description: &str,
	severity: &str,
	status: &str,
	assignee: &str,
) -> Issue {
	Issue {
		id: id.into(),
		workstream_id: ws_id.into(),
		title: title.into(),
		description: description.into(),
		severity: severity.into(),
		status: status.into(),
		assigned_to: assignee.into(),
	}
}

/// Sample issues.
pub fn issues() -> Vec<Issue> {
	vec![
		issue(
			"issue-1",
			"ws-1",
			"API Documentation Incomplete",
			"Third-party API documentation is incomplete, blocking integration",
			"high",
			"open",
			"David Wilson",
		),
		issue(
			"issue-2",
			"ws-2",
			"User Testing Feedback",
			"Negative feedback from users on the new onboarding flow",
			"medium",
			"in_progress",
			"Emily Parker",
		),
		issue(
			"issue-3",
			"ws-3",
			"Missing Compliance Documentation",
			"Required compliance documentation not provided by business unit",
			"high",
			"open",
			"Robert Chen",
		),
		issue(
			"issue-4",
			"ws-4",
			"iOS Build Failure",
			"Continuous integration build failing for iOS version",
			"medium",
			"in_progress",
			"James Lee",
		),
		issue(
			"issue-5",
			"ws-5",
			"Data Pipeline Timeout",
			"ETL pipeline timing out for large data sets",
			"high",
			"resolved",
			"Michael Brown",
		),
	]
}

fn dep(id: &str, source: &str, target: &str, description: &str, status: &str) -> Dependency {
	Dependency {
		id: id.into(),
		source_workstream_id: source.into(),
		target_workstream_id: target.into(),
		description: description.into(),
		status: status.into(),
	}
}

/// Sample dependencies between the sample workstreams.
pub fn dependencies() -> Vec<Dependency> {
	vec![
		dep(
			"dep-1",
			"ws-1",
			"ws-2",
			"Core banking platform needs to be ready before new onboarding can go live",
			"pending",
		),
		dep(
			"dep-2",
			"ws-1",
			"ws-5",
			"Data lake needs core banking data model",
			"met",
		),
		dep(
			"dep-3",
			"ws-3",
			"ws-2",
			"Compliance framework needed for new onboarding process",
			"at_risk",
		),
		dep(
			"dep-4",
			"ws-4",
			"ws-1",
			"Mobile app needs core banking APIs",
			"pending",
		),
		dep(
			"dep-5",
			"ws-5",
			"ws-3",
			"Data lake needs to implement compliance reporting requirements",
			"met",
		),
	]
}

/// Sample sentiment trend for the lead workstream.
pub fn sentiment() -> Vec<WorkstreamSentiment> {
	let reading = |id: &str, date: &str, score: f64, keywords: &[&str], summary: &str| {
		WorkstreamSentiment {
			id: id.into(),
			workstream_id: "ws-1".into(),
			date: date.into(),
			score,
			keywords: keywords.iter().map(|k| (*k).into()).collect(),
			summary: summary.into(),
		}
	};
	vec![
		reading(
			"1",
			"2025-04-29T00:00:00Z",
			-0.3,
			&["delayed", "risk", "issues", "vendor"],
			"The team is facing challenges with vendor integration.",
		),
		reading(
			"2",
			"2025-05-01T00:00:00Z",
			0.1,
			&["progress", "issues", "pending", "mitigation"],
			"Some progress made but issues remain with the API integration.",
		),
		reading(
			"3",
			"2025-05-11T00:00:00Z",
			0.6,
			&["resolved", "completed", "delivery", "milestone"],
			"Key issues resolved and the team completed the first milestone.",
		),
	]
}

/// Canned assistant reply keyed on keywords in the user's message.
///
/// Stands in for the backend's `/chat` endpoint when it is unreachable.
pub fn chat_reply(message: &str) -> String {
	let lower = message.to_lowercase();
	if lower.contains("status") && lower.contains("data migration") {
		"The Data Migration workstream is currently in AMBER status. There's a risk of data \
		 corruption that's being mitigated with a backup strategy."
			.into()
	} else if lower.contains("api") && lower.contains("issue") {
		"The API Development workstream has a critical issue with performance. Response times \
		 are exceeding the SLA, and this is currently assigned to Robert Johnson."
			.into()
	} else if lower.contains("dependency") {
		"There are three key dependencies in the project: 1) Data migration must complete \
		 before UI connection, 2) APIs must be developed before testing can begin, 3) UI must \
		 be complete before end-to-end testing."
			.into()
	} else if lower.contains("sentiment") {
		"The overall sentiment for the project has been improving over the last two weeks. The \
		 most recent sentiment analysis shows a positive trend with key issues being resolved."
			.into()
	} else {
		"I understand you're asking about project information. Could you please specify which \
		 workstream, milestone, risk, or issue you're interested in?"
			.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dependencies_reference_existing_workstreams() {
		let ids: Vec<String> = workstreams().into_iter().map(|w| w.id).collect();
		for dep in dependencies() {
			assert!(ids.contains(&dep.source_workstream_id), "{}", dep.id);
			assert!(ids.contains(&dep.target_workstream_id), "{}", dep.id);
		}
	}

	#[test]
	fn milestones_reference_existing_workstreams() {
		let ids: Vec<String> = workstreams().into_iter().map(|w| w.id).collect();
		for ms in milestones() {
			assert!(ids.contains(&ms.workstream_id), "{}", ms.id);
		}
	}

	#[test]
	fn sentiment_references_existing_workstream_and_stays_in_range() {
		let ids: Vec<String> = workstreams().into_iter().map(|w| w.id).collect();
		for reading in sentiment() {
			assert!(ids.contains(&reading.workstream_id), "{}", reading.id);
			assert!((-1.0..=1.0).contains(&reading.score), "{}", reading.id);
		}
	}

	#[test]
	fn chat_reply_matches_keywords() {
		assert!(chat_reply("What is the STATUS of the data migration?").contains("AMBER"));
		assert!(chat_reply("any api issue?").contains("SLA"));
		assert!(chat_reply("show me a dependency list").contains("three key dependencies"));
		assert!(chat_reply("how is sentiment trending").contains("positive trend"));
	}

	#[test]
	fn chat_reply_falls_back_to_clarification() {
		assert!(chat_reply("hello").contains("please specify"));
	}
}
