use kindeck_core::{Highlighter, KindeckError};
use kindeck_types::{Card, CardOrientation, Definition, LookupWord, ParsedDefinition};

use crate::deck::Deck;
use crate::template::CardTemplate;

/// Collects one card per defined word, in the order words arrive.
///
/// Words without a definition are dropped here for good. Finishing with no
/// cards at all is an error, never an empty deck.
pub struct DeckAssembler {
    name: String,
    template: CardTemplate,
    highlighter: Highlighter,
    cards: Vec<Card>,
    words: usize,
}

impl DeckAssembler {
    pub fn new(name: impl Into<String>, highlighter: Highlighter, orientation: CardOrientation) -> Self {
        Self {
            name: name.into(),
            template: CardTemplate::new(orientation),
            highlighter,
            cards: Vec::new(),
            words: 0,
        }
    }

    /// Returns whether a card was added
    pub fn add(&mut self, entry: &LookupWord, parsed: &ParsedDefinition) -> bool {
        self.words += 1;

        let Definition::Found(text) = &parsed.definition else {
            return false;
        };

        let orientation = self.template.orientation;
        let definition = self.highlighter.highlight(text, &entry.word, orientation);
        let passage = self
            .highlighter
            .highlight(&entry.usage_passage, &entry.word, CardOrientation::A);

        self.cards
            .push(self.template.render(&parsed.title, &passage, &definition));
        true
    }

    /// A word that never reached a parser
    pub fn skip(&mut self) {
        self.words += 1;
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn finish(self) -> Result<Deck, KindeckError> {
        if self.cards.is_empty() {
            return Err(KindeckError::EmptyDeck { words: self.words });
        }

        Ok(Deck::new(self.name, self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindeck_config::highlight::HighlightConfig;
    use kindeck_types::Language;
    use pretty_assertions::assert_eq;

    fn assembler(orientation: CardOrientation) -> DeckAssembler {
        let highlighter = Highlighter::for_language(&HighlightConfig::default(), Language::En);
        DeckAssembler::new("Test", highlighter, orientation)
    }

    fn parsed(word: &str, definition: Definition) -> ParsedDefinition {
        ParsedDefinition {
            word: word.to_string(),
            title: word.to_string(),
            definition,
        }
    }

    #[test]
    fn test_not_found_words_are_skipped_in_order() {
        let mut assembler = assembler(CardOrientation::A);
        let words = [
            LookupWord::from_raw_usage("house", "a big house"),
            LookupWord::from_raw_usage("xyzzy", "say xyzzy"),
            LookupWord::from_raw_usage("tree", "an old tree"),
        ];

        assert!(assembler.add(&words[0], &parsed("house", Definition::from_text("a building"))));
        assert!(!assembler.add(&words[1], &parsed("xyzzy", Definition::NotFound)));
        assert!(assembler.add(&words[2], &parsed("tree", Definition::from_text("a plant"))));

        let deck = assembler.finish().unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards[0].front_html, "<b>house</b><br><br>a big <b>house</b>");
        assert_eq!(deck.cards[1].front_html, "<b>tree</b><br><br>an old <b>tree</b>");
        assert_eq!(deck.cards[1].back_html, "a plant");
    }

    #[test]
    fn test_definition_is_highlighted_before_line_breaks() {
        let mut assembler = assembler(CardOrientation::A);
        let word = LookupWord::from_raw_usage("running", "She was running.");

        assembler.add(
            &word,
            &parsed("running", Definition::from_text("running: to run quickly\n2. a race")),
        );

        let deck = assembler.finish().unwrap();
        assert_eq!(
            deck.cards[0].back_html,
            "<b>running</b>: to run quickly<br>2. a race"
        );
    }

    #[test]
    fn test_orientation_b_redacts_the_front() {
        let mut assembler = assembler(CardOrientation::B);
        let word = LookupWord::from_raw_usage("walk", "We walk home.");

        assembler.add(&word, &parsed("walk", Definition::from_text("to walk on foot")));

        let deck = assembler.finish().unwrap();
        assert_eq!(deck.cards[0].front_html, "to <b>(...)</b> on foot");
        assert_eq!(deck.cards[0].back_html, "<b>walk</b><br><br>We <b>walk</b> home.");
    }

    #[test]
    fn test_redirect_title_heads_the_word_side() {
        let mut assembler = assembler(CardOrientation::A);
        let word = LookupWord::from_raw_usage("houses", "two houses");
        let definition = ParsedDefinition {
            word: "houses".to_string(),
            title: "house".to_string(),
            definition: Definition::from_text("a building"),
        };

        assembler.add(&word, &definition);

        assert!(
            assembler.finish().unwrap().cards[0]
                .front_html
                .starts_with("<b>house</b><br><br>")
        );
    }

    #[test]
    fn test_no_cards_is_an_error() {
        let mut assembler = assembler(CardOrientation::A);
        assembler.skip();
        assembler.add(
            &LookupWord::new("xyzzy", "<b>xyzzy</b>"),
            &parsed("xyzzy", Definition::NotFound),
        );

        assert_eq!(assembler.card_count(), 0);
        assert!(matches!(
            assembler.finish(),
            Err(KindeckError::EmptyDeck { words: 2 })
        ));
    }
}
