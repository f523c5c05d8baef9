use super::model::ask;
use super::view_model::ChatWidgetVm;
use crate::shared::icons::icon;
use contracts::domain::a030_chat::ChatMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Toggle button in the corner plus the chat panel
#[component]
pub fn ChatWidget() -> impl IntoView {
    let vm = ChatWidgetVm::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let send = Callback::new(move |_: ()| {
        let text = vm.input.get_untracked();
        let Some(request) = vm.transcript.try_update(|t| t.submit(&text)).flatten() else {
            return;
        };
        vm.input.set(String::new());
        scroll_to_bottom();

        spawn_local(async move {
            let result = ask(&request).await;
            if let Err(e) = &result {
                log::error!("Chat request failed: {}", e);
            }
            let applied = vm
                .transcript
                .try_update(|t| t.resolve(request.id, result))
                .unwrap_or(false);
            if applied {
                scroll_to_bottom();
            }
        });
    });

    let message_view = |msg: ChatMessage| {
        let class = format!("chat-message chat-message--{}", msg.role.as_str());
        view! {
            <div class=class>
                <div class="chat-message__bubble">{msg.content}</div>
            </div>
        }
    };

    view! {
        <div class="chat-widget">
            <Show when=move || vm.is_open.get()>
                <div class="chat-panel">
                    <div class="chat-panel__header">
                        <span class="chat-panel__title">
                            {icon("message")}
                            " AI Business Analyst"
                        </span>
                        <button class="chat-panel__close" on:click=move |_| vm.is_open.set(false)>
                            {icon("close")}
                        </button>
                    </div>

                    <div class="chat-panel__messages" node_ref=messages_ref>
                        <For
                            each=move || vm.transcript.with(|t| t.messages().to_vec())
                            key=|msg| msg.id
                            children=message_view
                        />
                        <Show when=move || vm.is_waiting()>
                            <div class="chat-message chat-message--ai">
                                <div class="chat-message__bubble chat-message__bubble--typing">
                                    "Thinking..."
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="chat-panel__input">
                        <Input
                            value=vm.input
                            placeholder="Ask about sales, profit..."
                            disabled=Signal::derive(move || vm.is_waiting())
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    send.run(());
                                }
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.is_waiting())
                            on_click=move |_| send.run(())
                        >
                            {icon("send")}
                        </Button>
                    </div>
                </div>
            </Show>

            <button
                class="chat-widget__toggle"
                title="AI Business Analyst"
                on:click=move |_| vm.is_open.update(|open| *open = !*open)
            >
                {move || if vm.is_open.get() { icon("close") } else { icon("message") }}
            </button>
        </div>
    }
}
