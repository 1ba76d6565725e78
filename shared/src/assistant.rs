use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantScript {
    pub greeting: String,
    pub replies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub time_label: String,
}

/// Conversation with the canned assistant. At most one reply is pending at
/// a time; new input is refused while the assistant is "typing".
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    typing: bool,
    next_id: u64,
}

impl ChatTranscript {
    pub fn new(script: &AssistantScript, time_label: impl Into<String>) -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            typing: false,
            next_id: 0,
        };
        transcript.append(script.greeting.clone(), Sender::Assistant, time_label.into());
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.typing
    }

    /// Records the user's message and marks a reply as pending.
    pub fn submit(&mut self, text: &str, time_label: impl Into<String>) -> bool {
        if !self.can_submit(text) {
            return false;
        }
        self.append(text.trim().to_string(), Sender::User, time_label.into());
        self.typing = true;
        true
    }

    /// Resolves the pending reply with a random canned answer.
    pub fn reply<R: Rng + ?Sized>(
        &mut self,
        script: &AssistantScript,
        rng: &mut R,
        time_label: impl Into<String>,
    ) -> Option<&ChatMessage> {
        if !self.typing {
            return None;
        }
        self.typing = false;
        let text = script.replies.choose(rng)?.clone();
        self.append(text, Sender::Assistant, time_label.into());
        self.messages.last()
    }

    fn append(&mut self, text: String, sender: Sender, time_label: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            time_label,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn script() -> AssistantScript {
        AssistantScript {
            greeting: "Hi there!".to_string(),
            replies: vec!["Rinse it.".to_string(), "Compost it.".to_string()],
        }
    }

    #[test]
    fn starts_with_greeting() {
        let transcript = ChatTranscript::new(&script(), "09:00");
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Assistant);
        assert_eq!(transcript.messages()[0].text, "Hi there!");
    }

    #[test]
    fn blank_input_is_refused() {
        let mut transcript = ChatTranscript::new(&script(), "09:00");
        assert!(!transcript.submit("   ", "09:01"));
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn input_refused_while_typing() {
        let mut transcript = ChatTranscript::new(&script(), "09:00");
        assert!(transcript.submit("Can I recycle cups?", "09:01"));
        assert!(transcript.is_typing());
        assert!(!transcript.submit("Hello?", "09:01"));
    }

    #[test]
    fn reply_comes_from_script_and_clears_typing() {
        let script = script();
        let mut rng = StdRng::seed_from_u64(7);
        let mut transcript = ChatTranscript::new(&script, "09:00");
        transcript.submit("Where do batteries go?", "09:01");

        let reply = transcript.reply(&script, &mut rng, "09:02").cloned().unwrap();

        assert_eq!(reply.sender, Sender::Assistant);
        assert!(script.replies.contains(&reply.text));
        assert!(!transcript.is_typing());
        assert_eq!(transcript.messages().len(), 3);
    }

    #[test]
    fn reply_without_pending_question_is_ignored() {
        let script = script();
        let mut rng = StdRng::seed_from_u64(1);
        let mut transcript = ChatTranscript::new(&script, "09:00");
        assert!(transcript.reply(&script, &mut rng, "09:01").is_none());
    }
}
