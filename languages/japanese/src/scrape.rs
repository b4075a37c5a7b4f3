//! Parsers for the HTML returned by the nihongodera convert tool.
//!
//! Results live in a `.tool__results` container. In analyzer mode every
//! recognised word is an `a` element whose text is the surface form and
//! whose `data-tooltip` attribute reads `<kana><br><type><br><meaning>`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use kanji_core::script::{is_latin1, starts_with_kanji};
use kanji_types::WordInfo;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static RESULTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".tool__results").expect("valid results selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid anchor selector"));
static TOOLTIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)<br>([a-zA-Z]+)<br>(.*)$").expect("valid tooltip pattern")
});

/// Tooltip fragments that mark grammar noise rather than vocabulary
const EXCLUDED_ANNOTATIONS: [&str; 2] = ["postposition", "symbol"];

/// Words recovered from one analyzer page
#[derive(Debug, Default)]
pub struct ScrapedWords {
    pub words: BTreeMap<String, WordInfo>,
    /// `surface:annotation` per accepted word, in document order
    pub listing: Vec<String>,
    /// Annotations of kanji words that did not have the expected shape
    pub unmatched: Vec<String>,
}

impl ScrapedWords {
    pub fn listing_text(&self) -> String {
        self.listing.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Add another page's words, later pages win on duplicate keys
    pub fn extend(&mut self, other: ScrapedWords) {
        self.words.extend(other.words);
        self.listing.extend(other.listing);
        self.unmatched.extend(other.unmatched);
    }
}

/// Extract vocabulary words from analyzer markup
pub fn parse_words(markup: &str) -> ScrapedWords {
    let document = Html::parse_document(markup);
    let mut scraped = ScrapedWords::default();

    for container in document.select(&RESULTS) {
        for anchor in container.select(&ANCHOR) {
            scrape_anchor(anchor, &mut scraped);
        }
    }

    tracing::debug!(
        "Scraped {} words ({} unmatched annotations)",
        scraped.words.len(),
        scraped.unmatched.len()
    );
    scraped
}

fn scrape_anchor(anchor: ElementRef<'_>, scraped: &mut ScrapedWords) {
    let surface: String = anchor.text().collect();
    let surface = surface.trim();

    if surface.is_empty() || surface.chars().any(is_latin1) {
        return;
    }

    let Some(annotation) = anchor.value().attr("data-tooltip") else {
        return;
    };
    if annotation.trim().is_empty() {
        return;
    }
    if EXCLUDED_ANNOTATIONS.iter().any(|word| annotation.contains(word)) {
        return;
    }

    if !starts_with_kanji(surface) {
        return;
    }

    let Some(captures) = TOOLTIP.captures(annotation) else {
        tracing::warn!("Unexpected annotation for {}: {:?}", surface, annotation);
        scraped.unmatched.push(format!("{surface}:{annotation}"));
        return;
    };

    let word = WordInfo::new(surface, &captures[1], &captures[2], &captures[3]);
    scraped
        .listing
        .push(format!("{}:{}", surface, annotation.replace("<br>", " | ")));
    scraped.words.insert(surface.to_string(), word);
}

/// Plain text of the results container in kana mode
pub fn parse_kana(markup: &str) -> String {
    let document = Html::parse_document(markup);

    document
        .select(&RESULTS)
        .map(|container| container.text().collect::<String>().trim().to_string())
        .collect()
}
