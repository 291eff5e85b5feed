/// Phrases that start a spin when heard anywhere in a final transcript.
pub const TRIGGER_PHRASES: [&str; 9] = [
    "start the game",
    "start game",
    "let's start the game",
    "let's start",
    "select the lucky winner",
    "select lucky winner",
    "pick the winner",
    "pick winner",
    "begin",
];

/// Accepted only when it is the whole transcript.
pub const EXACT_TRIGGER: &str = "start";

/// One recognition result as reported by the speech capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub is_final: bool,
}

/// Text shown to the user plus whether any of it was final.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Heard {
    pub text: String,
    pub has_final: bool,
}

/// Final pieces win over interim ones; the result is lower-cased and trimmed.
pub fn collect_transcript(results: &[RecognitionResult]) -> Heard {
    let mut final_text = String::new();
    let mut interim_text = String::new();
    for result in results {
        if result.is_final {
            final_text.push_str(&result.transcript);
            final_text.push(' ');
        } else {
            interim_text.push_str(&result.transcript);
        }
    }

    let has_final = !final_text.trim().is_empty();
    let chosen = if has_final { final_text } else { interim_text };
    Heard { text: chosen.trim().to_lowercase(), has_final }
}

pub fn is_trigger(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    text == EXACT_TRIGGER || TRIGGER_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Interim guesses never start a spin.
pub fn should_trigger(heard: &Heard) -> bool {
    heard.has_final && is_trigger(&heard.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str, is_final: bool) -> RecognitionResult {
        RecognitionResult { transcript: text.to_string(), is_final }
    }

    #[test]
    fn test_trigger_phrases() {
        assert!(is_trigger("OK let's Start The Game now"));
        assert!(is_trigger("please pick the winner"));
        assert!(is_trigger("  start "));
        assert!(is_trigger("we can begin"));
        assert!(!is_trigger("restart the music"));
        assert!(!is_trigger("stop"));
    }

    #[test]
    fn test_final_results_preferred() {
        let heard = collect_transcript(&[result("Pick", false), result("Pick the winner", true)]);
        assert_eq!(heard, Heard { text: "pick the winner".into(), has_final: true });
        assert!(should_trigger(&heard));
    }

    #[test]
    fn test_interim_never_triggers() {
        let heard = collect_transcript(&[result("start the game", false)]);
        assert_eq!(heard.text, "start the game");
        assert!(!should_trigger(&heard));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(collect_transcript(&[]), Heard::default());
        assert!(!should_trigger(&Heard::default()));
    }
}
