//! Prompt construction for the transcription provider.

/// Characters of document text sent to the provider; content beyond this
/// boundary is silently excluded.
pub const DEFAULT_CHAR_BUDGET: usize = 8_000;

/// Builds the transcription prompt from extracted document text, truncated
/// to `char_budget` characters.
pub fn build_prompt(document_text: &str, char_budget: usize) -> String {
    let text = truncate_chars(document_text, char_budget);

    format!(
        "You are given the text of a bank statement. Transcribe it into a single JSON object \
with exactly these fields:\n\
- \"name\": account holder name (string or null)\n\
- \"address\": account holder address (string or null)\n\
- \"date\": statement date (string or null)\n\
- \"startingBalance\": opening balance (number or null)\n\
- \"endingBalance\": closing balance (number or null)\n\
- \"currency\": currency symbol or code (string or null)\n\
- \"transactions\": array of objects, one per transaction, in statement order, each with \
\"date\" (string), \"description\" (string), \"moneyIn\" (number, 0 if none), \
\"moneyOut\" (number, 0 if none), and optionally \"currency\" (string)\n\
Respond with the JSON object only.\n\n\
Statement text:\n{}",
        text
    )
}

fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
