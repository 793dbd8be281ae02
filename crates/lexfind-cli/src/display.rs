//! Terminal rendering: welcome banner, simulated answer stream, and the
//! sources table.

use std::io::Write;
use std::time::Duration;

use lexfind_client::SourceMeta;
use lexfind_core::SourceRef;

/// Placeholders shown when the metadata service has no row for a source.
const PLACEHOLDER_URL: &str = "#";
const PLACEHOLDER_SUMMARY: &str = "Non disponibile";

pub fn print_welcome() {
    println!("=== Lex Find it ===");
    println!("Riduci i tempi di ricerca grazie all'Intelligenza Artificiale.");
    println!();
    println!(
        "Questo assistente basa le proprie risposte su Circolari, Provvedimenti, \
         Risoluzioni e Risposte del ministero per gli anni 2023 e 2024."
    );
    println!("Nota: è un prototipo, verifica sempre la correttezza delle risposte.");
    println!();
    println!("Comandi: /feedback <testo>   /quit");
}

/// Print the answer word by word with a fixed inter-word delay, simulating
/// a streamed response. A trailing newline is always emitted.
pub async fn stream_words(text: &str, delay: Duration) {
    for word in text.split_whitespace() {
        print!("{word} ");
        let _ = std::io::stdout().flush();
        tokio::time::sleep(delay).await;
    }
    println!();
}

/// Print the deduplicated sources as a card list: document id, link, and
/// summary, with placeholders where metadata is missing.
pub fn print_sources(rows: &[(SourceRef, Option<SourceMeta>)]) {
    println!("\nFonti:");
    for (source, meta) in rows {
        let (url, summary) = match meta {
            Some(m) => (m.url.as_str(), m.summary.as_str()),
            None => (PLACEHOLDER_URL, PLACEHOLDER_SUMMARY),
        };
        println!("  - {}", source.document_id);
        println!("      link:        {url}");
        println!("      descrizione: {summary}");
    }
}
