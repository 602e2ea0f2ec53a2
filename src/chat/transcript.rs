use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn bot(text: &str) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.to_string(),
        }
    }

    fn user(text: &str) -> Self {
        Self {
            sender: Sender::User,
            text: text.to_string(),
        }
    }
}

pub fn greeting() -> String {
    "Hello! I'm your X-Web Labs AI assistant. How can I help you build the future with AI automation today?".to_string()
}

pub fn canned_reply() -> String {
    format!(
        "Thank you for your interest in our AI solutions! Our team will analyze your needs and provide personalized recommendations. Contact us at {} or call {}.",
        config::get_contact_email(),
        config::get_contact_phone()
    )
}

/// Append-only chat log with one scripted reply per user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    reply: String,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(&greeting(), &canned_reply())
    }
}

impl Transcript {
    pub fn new(greeting: &str, reply: &str) -> Self {
        Self {
            messages: vec![ChatMessage::bot(greeting)],
            reply: reply.to_string(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends `input` and the scripted reply. Blank input is ignored.
    /// Returns whether anything was appended.
    pub fn send(&mut self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::bot(&self.reply));
        true
    }
}
