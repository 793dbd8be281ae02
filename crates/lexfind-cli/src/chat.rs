//! Interactive chat loop: questions to the QA service, streamed answers,
//! sources table, and the once-per-session feedback command.

use std::io::Write;
use std::time::Duration;

use lexfind_client::{FeedbackClient, MetadataClient, QaClient, SourceMeta};
use lexfind_core::{Annotator, ChatSession, SourceRef, dedup_sources, is_fallback_answer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::display;

const FEEDBACK_SUBJECT: &str = "RAG Feedback - Tax bot";

/// One parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Feedback(&'a str),
    Question(&'a str),
    Empty,
}

/// Parse a raw input line. Leading/trailing whitespace is ignored;
/// `/quit` and `/feedback <text>` are commands, everything else is a
/// question for the QA service.
pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if line == "/quit" || line == "/exit" {
        return Command::Quit;
    }
    if let Some(rest) = line.strip_prefix("/feedback") {
        return Command::Feedback(rest.trim());
    }
    Command::Question(line)
}

pub struct ChatLoop {
    qa: QaClient,
    metadata: MetadataClient,
    feedback: FeedbackClient,
    annotator: Annotator,
    feedback_to: String,
    stream_delay: Duration,
    session: ChatSession,
}

impl ChatLoop {
    pub fn new(
        qa: QaClient,
        metadata: MetadataClient,
        feedback: FeedbackClient,
        annotator: Annotator,
        feedback_to: String,
        stream_delay_ms: u64,
    ) -> Self {
        Self {
            qa,
            metadata,
            feedback,
            annotator,
            feedback_to,
            stream_delay: Duration::from_millis(stream_delay_ms),
            session: ChatSession::new(),
        }
    }

    /// Run the chat loop until `/quit` or end of input.
    pub async fn run(mut self) -> anyhow::Result<()> {
        display::print_welcome();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("\n> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            match parse_command(&line) {
                Command::Quit => break,
                Command::Empty => {}
                Command::Feedback(text) => self.handle_feedback(text).await,
                Command::Question(question) => self.handle_question(question).await,
            }
        }
        Ok(())
    }

    async fn handle_question(&mut self, question: &str) {
        self.session.push_user(question);

        println!("Ricerca delle fonti per il tuo caso in corso...");
        let answer = match self.qa.ask(question, self.session.id()).await {
            Ok(answer) => answer,
            Err(e) => {
                println!("Ci dispiace, qualcosa non ha funzionato: {e}");
                return;
            }
        };

        display::stream_words(&answer.answer, self.stream_delay).await;

        // Citation links detected in the answer body.
        let document = self.annotator.annotate(&answer.answer);
        for fragment in document.annotations() {
            println!("{fragment}");
        }

        if !is_fallback_answer(&answer.answer) {
            let sources = dedup_sources(&answer.sources);
            if !sources.is_empty() {
                let mut rows = Vec::with_capacity(sources.len());
                for source in sources {
                    let meta = self.lookup_meta(&source).await;
                    rows.push((source, meta));
                }
                display::print_sources(&rows);
            }
        }

        self.session.push_assistant(answer.answer);
    }

    /// Metadata lookup with failure demoted to "no metadata": the answer is
    /// already on screen, a broken sources table should not disturb it.
    async fn lookup_meta(&self, source: &SourceRef) -> Option<SourceMeta> {
        match self.metadata.lookup(source).await {
            Ok(meta) => meta,
            Err(e) => {
                warn!(document_id = %source.document_id, error = %e, "metadata lookup failed");
                None
            }
        }
    }

    async fn handle_feedback(&mut self, text: &str) {
        if self.session.feedback_sent() {
            println!("Il tuo feedback è stato già inviato. Grazie!");
            return;
        }
        if text.is_empty() {
            println!("Per favore, scrivi qualcosa dopo /feedback.");
            return;
        }

        let body = format!(
            "User Feedback:\n{}\n\nConversation History:\n{}",
            text,
            self.session.transcript()
        );
        match self
            .feedback
            .send(FEEDBACK_SUBJECT, &body, &self.feedback_to)
            .await
        {
            Ok(()) => {
                self.session.mark_feedback_sent();
                println!("Il tuo feedback è stato inviato. Grazie!");
            }
            Err(e) => println!("Invio del feedback non riuscito: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_and_exit() {
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("  /exit  "), Command::Quit);
    }

    #[test]
    fn parse_blank_line_is_empty() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn parse_feedback_with_and_without_text() {
        assert_eq!(
            parse_command("/feedback ottimo strumento"),
            Command::Feedback("ottimo strumento")
        );
        assert_eq!(parse_command("/feedback"), Command::Feedback(""));
    }

    #[test]
    fn parse_anything_else_is_a_question() {
        assert_eq!(
            parse_command("Qual è l'aliquota IVA ordinaria?"),
            Command::Question("Qual è l'aliquota IVA ordinaria?")
        );
    }
}
