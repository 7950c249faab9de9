use kindeck_anki::{DeckAssembler, DeckPackager, PackageReceipt};
use kindeck_core::Highlighter;
use kindeck_dictionary::DefinitionParser;
use kindeck_fetch::Retriever;
use kindeck_types::{CardOrientation, LookupWord, ParsedDefinition};
use tokio_util::sync::CancellationToken;

/// Per-word tally of one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub words: usize,
    pub found: usize,
    pub not_found: usize,
    /// Fetch errors and pages that were not HTML
    pub failed: usize,
    pub cancelled: bool,
}

impl RunReport {
    pub fn without_definition(&self) -> usize {
        self.not_found + self.failed
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    pub receipt: PackageReceipt,
}

/// Everything fixed for the length of a run
pub struct Pipeline<'a> {
    pub parser: &'a dyn DefinitionParser,
    pub highlighter: Highlighter,
    pub orientation: CardOrientation,
    pub probe: bool,
}

impl Pipeline<'_> {
    /// Looks up every word in order, one request at a time, then packages
    /// the cards. The retriever is closed before packaging, whatever happened.
    pub async fn run(
        self,
        deck_name: &str,
        words: &[LookupWord],
        mut retriever: Box<dyn Retriever>,
        packager: &dyn DeckPackager,
        cancel: &CancellationToken,
    ) -> anyhow::Result<RunOutcome> {
        let mut assembler = DeckAssembler::new(deck_name, self.highlighter, self.orientation);

        if self.probe {
            retriever.probe().await;
        }

        let report = lookup_all(
            self.parser,
            &mut assembler,
            retriever.as_mut(),
            words,
            cancel,
        )
        .await;
        retriever.close();

        tracing::info!(
            "{} of {} words had no definition in {}",
            report.without_definition(),
            report.words,
            self.parser.name()
        );

        let deck = assembler.finish()?;
        tracing::info!("Built {} cards for deck '{}'", deck.len(), deck.name);

        let receipt = packager.package(&deck).await?;
        Ok(RunOutcome { report, receipt })
    }
}

async fn lookup_all(
    parser: &dyn DefinitionParser,
    assembler: &mut DeckAssembler,
    retriever: &mut dyn Retriever,
    words: &[LookupWord],
    cancel: &CancellationToken,
) -> RunReport {
    let mut report = RunReport::default();

    for entry in words {
        if cancel.is_cancelled() {
            tracing::warn!(
                "Cancelled after {} of {} words",
                report.words,
                words.len()
            );
            report.cancelled = true;
            break;
        }
        report.words += 1;

        let result = retriever.fetch(&entry.word).await;
        let html = match result.html {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("'{}': fetch failed: {}", entry.word, e);
                assembler.skip();
                report.failed += 1;
                continue;
            }
        };

        let definition = match parser.parse(&html, &entry.word) {
            Ok(definition) => definition,
            Err(e) => {
                tracing::warn!("'{}': unreadable page: {}", entry.word, e);
                assembler.skip();
                report.failed += 1;
                continue;
            }
        };

        let parsed = ParsedDefinition {
            word: entry.word.clone(),
            title: result.title,
            definition,
        };
        if assembler.add(entry, &parsed) {
            tracing::info!("'{}': definition found", entry.word);
            report.found += 1;
        } else {
            tracing::info!("'{}': no definition found", entry.word);
            report.not_found += 1;
        }
    }

    report
}
