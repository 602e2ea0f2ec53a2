use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::chat::transcript::{Sender, Transcript};

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub on_close: Callback<()>,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let transcript = use_state(Transcript::default);
    let input_text = use_state(String::new);

    let send = {
        let transcript = transcript.clone();
        let input_text = input_text.clone();
        Callback::from(move |_: ()| {
            let mut next = (*transcript).clone();
            if next.send(&input_text) {
                transcript.set(next);
                input_text.set(String::new());
            }
        })
    };

    let oninput = {
        let input_text = input_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_text.set(input.value());
        })
    };

    let onkeypress = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="chat-widget">
            <div class="chat-header">
                <div class="chat-title">
                    <span class="chat-avatar">{"AI"}</span>
                    <span>{"X-Web Labs Assistant"}</span>
                </div>
                <button class="chat-close" onclick={on_close} aria-label="Close chat">{"✕"}</button>
            </div>

            <div class="chat-messages">
                { for transcript.messages().iter().map(|message| {
                    let class = match message.sender {
                        Sender::User => "chat-message user",
                        Sender::Bot => "chat-message bot",
                    };
                    html! {
                        <div class={class}>
                            <span>{ message.text.clone() }</span>
                        </div>
                    }
                }) }
            </div>

            <div class="chat-input">
                <input
                    type="text"
                    value={(*input_text).clone()}
                    oninput={oninput}
                    onkeypress={onkeypress}
                    placeholder="Type your message..."
                />
                <button class="chat-send" onclick={Callback::from(move |_: MouseEvent| send.emit(()))}>
                    {"➤"}
                </button>
            </div>
        </div>
    }
}

/// Floating button that opens and closes the chat widget. Closing drops the
/// widget and with it the transcript.
#[function_component(ChatLauncher)]
pub fn chat_launcher() -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("chat {}", if *open { "closed" } else { "opened" });
            open.set(!*open);
        })
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_| {
            log::info!("chat closed");
            open.set(false);
        })
    };

    html! {
        <>
            {
                if *open {
                    html! { <ChatWidget on_close={on_close} /> }
                } else {
                    html! {}
                }
            }
            <button class="chat-toggle" onclick={toggle} aria-label="Chat with us">{"💬"}</button>
        </>
    }
}
