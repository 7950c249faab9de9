use kindeck_core::htmlify;
use kindeck_types::{Card, CardOrientation};

/// Lays out the two sides of a card for one orientation
#[derive(Debug, Clone, Copy)]
pub struct CardTemplate {
    pub orientation: CardOrientation,
}

impl CardTemplate {
    pub fn new(orientation: CardOrientation) -> Self {
        Self { orientation }
    }

    /// Headword over the usage passage
    pub fn format_word_side(&self, title: &str, passage: &str) -> String {
        format!("<b>{title}</b><br><br>{passage}")
    }

    /// Plain definition text to HTML
    pub fn format_definition_side(&self, definition: &str) -> String {
        htmlify(definition)
    }

    pub fn render(&self, title: &str, passage: &str, definition: &str) -> Card {
        let word_side = self.format_word_side(title, passage);
        let definition_side = self.format_definition_side(definition);

        match self.orientation {
            CardOrientation::A => Card {
                front_html: word_side,
                back_html: definition_side,
            },
            CardOrientation::B => Card {
                front_html: definition_side,
                back_html: word_side,
            },
        }
    }
}
