use std::time::Duration;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Delay before the assistant answers, so replies don't feel instant.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

pub const GREETING: &str = "Hi! 👋 I'm Rahul's assistant. How can I help you today?";

pub const QUICK_REPLIES: [&str; 4] = [
    "View Projects",
    "Download Resume",
    "Contact Info",
    "Tech Stack",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
}

impl ChatMessage {
    fn new<Tz: TimeZone>(text: impl Into<String>, sender: Sender, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            text: text.into(),
            sender,
            timestamp: now.format("%H:%M").to_string(),
        }
    }
}

/// In-memory chat transcript, oldest message first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            messages: vec![ChatMessage::new(GREETING, Sender::Bot, now)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the visitor's message. Blank input is ignored.
    pub fn send<Tz: TimeZone>(&mut self, text: &str, now: &DateTime<Tz>) -> Option<&ChatMessage>
    where
        Tz::Offset: std::fmt::Display,
    {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(text, Sender::User, now));
        self.messages.last()
    }

    pub fn receive<Tz: TimeZone>(&mut self, reply: &str, now: &DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.messages.push(ChatMessage::new(reply, Sender::Bot, now));
    }
}

/// Picks a canned answer by keyword.
pub fn bot_reply(input: &str) -> &'static str {
    let input = input.to_lowercase();
    if input.contains("project") {
        "Check out my featured projects section! I've built Cloud Guard, 3D Butterfly Animation, and Green Quest. 🚀"
    } else if input.contains("resume") || input.contains("cv") {
        "You can download my resume from the 'Download CV' button in the hero section! 📄"
    } else if input.contains("contact") {
        "Use the contact form below and I'll get back to you soon! 📧"
    } else if input.contains("tech") || input.contains("skill") {
        "I specialize in React, Node.js, MongoDB, and modern web technologies. Check out the Services section for more details! 💻"
    } else {
        "Thanks for your message! Feel free to explore my portfolio or use the contact form to get in touch. 😊"
    }
}
