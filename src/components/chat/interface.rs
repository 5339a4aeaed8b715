use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::api;
use crate::mock;
use crate::types::ChatMessage;

const GREETING: &str = "Hello! I'm your Project Management Assistant. Ask me about project \
	status, workstream details, or any other project information.";

fn now_iso() -> String {
	js_sys::Date::new_0()
		.to_iso_string()
		.as_string()
		.unwrap_or_default()
}

// "2025-05-12T11:20:00.000Z" -> "11:20:00"
fn clock_time(timestamp: &str) -> &str {
	timestamp.get(11..19).unwrap_or(timestamp)
}

fn bubble_class(role: &str) -> &'static str {
	match role {
		"user" => "chat-bubble user",
		"system" => "chat-bubble system",
		_ => "chat-bubble assistant",
	}
}

/// Message list plus input form. Sends to `POST /chat`; if the backend is
/// unreachable the reply comes from the canned keyword matcher instead.
#[component]
pub fn ChatInterface() -> impl IntoView {
	let (messages, set_messages) = signal(vec![ChatMessage {
		id: "1".into(),
		role: "system".into(),
		content: GREETING.into(),
		timestamp: now_iso(),
	}]);
	let (input, set_input) = signal(String::new());
	let (busy, set_busy) = signal(false);

	let send = move || {
		let content = input.get();
		if content.trim().is_empty() || busy.get() {
			return;
		}

		set_messages.update(|msgs| {
			msgs.push(ChatMessage {
				id: format!("user-{}", js_sys::Date::now()),
				role: "user".into(),
				content: content.clone(),
				timestamp: now_iso(),
			})
		});
		set_input.set(String::new());
		set_busy.set(true);

		spawn_local(async move {
			let reply = match api::send_chat_message(&content).await {
				Ok(reply) => reply,
				Err(e) => {
					warn!("chat backend unavailable, using canned reply: {e}");
					ChatMessage {
						id: format!("assistant-{}", js_sys::Date::now()),
						role: "assistant".into(),
						content: mock::chat_reply(&content),
						timestamp: now_iso(),
					}
				}
			};
			set_messages.update(|msgs| msgs.push(reply));
			set_busy.set(false);
		});
	};

	view! {
		<div class="panel chat-panel">
			<div class="chat-header">"Project Management Assistant"</div>
			<div class="chat-messages">
				{move || {
					messages
						.get()
						.into_iter()
						.map(|msg| {
							view! {
								<div class=bubble_class(&msg.role)>
									<p>{msg.content}</p>
									<p class="chat-time">
										{clock_time(&msg.timestamp).to_string()}
									</p>
								</div>
							}
						})
						.collect_view()
				}}
				<Show when=move || busy.get()>
					<div class="chat-bubble assistant typing">"..."</div>
				</Show>
			</div>
			<form
				class="chat-input-row"
				on:submit=move |ev| {
					ev.prevent_default();
					send();
				}
			>
				<input
					type="text"
					placeholder="Ask about project status, risks, issues..."
					prop:value=move || input.get()
					on:input=move |ev| set_input.set(event_target_value(&ev))
				/>
				<button type="submit" disabled=move || busy.get()>
					"Send"
				</button>
			</form>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clock_time_extracts_hms() {
		assert_eq!(clock_time("2025-05-12T11:20:03.000Z"), "11:20:03");
	}

	#[test]
	fn clock_time_passes_short_strings_through() {
		assert_eq!(clock_time("now"), "now");
	}

	#[test]
	fn bubble_class_by_role() {
		assert_eq!(bubble_class("user"), "chat-bubble user");
		assert_eq!(bubble_class("system"), "chat-bubble system");
		assert_eq!(bubble_class("assistant"), "chat-bubble assistant");
		assert_eq!(bubble_class("other"), "chat-bubble assistant");
	}
}
