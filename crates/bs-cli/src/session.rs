//! Interactive exploration loop.
//!
//! Each round walks the stages below in order and is discarded at
//! [`Stage::AskRestart`]; nothing carries over to the next round.
//!
//! ```text
//! CollectingFilters -> Loading -> Enriching -> Filtering -> ComputingStats
//!     -> ViewingRows -> AskRestart -> (CollectingFilters | Done)
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bs_core::vocab::{Choice, choose};
use bs_core::{
    EnrichedTrip, LoadError, Pager, RecordSet, Selection, StatsReport, Vocabulary, enrich,
    filter_trips, load_city,
};

use crate::Config;
use crate::render::{format_filters, format_report, format_rows};

/// Where the current round is.
#[derive(Debug)]
enum Stage {
    CollectingFilters,
    Loading(Selection),
    Enriching(Selection, RecordSet),
    Filtering(Selection, RecordSet<EnrichedTrip>),
    ComputingStats(RecordSet<EnrichedTrip>),
    ViewingRows(RecordSet<EnrichedTrip>),
    AskRestart,
    Done,
}

/// One interactive user exploring the datasets over `input`/`output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    data_dir: PathBuf,
    page_size: usize,
    vocabulary: Vocabulary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self {
            input,
            output,
            data_dir: config.data_dir.clone(),
            page_size: config.page_size,
            vocabulary: Vocabulary::standard(),
        }
    }

    /// Runs rounds until the user declines to continue or input ends.
    ///
    /// Returns an error only for a missing dataset or broken terminal I/O.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let mut stage = Stage::CollectingFilters;
        loop {
            stage = match stage {
                Stage::Done => break,
                other => self.step(other)?,
            };
        }

        self.output.flush()?;
        Ok(())
    }

    fn step(&mut self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::CollectingFilters => match self.collect_filters()? {
                Some(selection) => {
                    writeln!(self.output, "{}", format_filters(&selection))?;
                    writeln!(self.output)?;
                    Stage::Loading(selection)
                }
                None => Stage::Done,
            },
            Stage::Loading(selection) => match load_city(&self.data_dir, selection.city) {
                Ok(set) => Stage::Enriching(selection, set),
                Err(err @ LoadError::MissingDataset { .. }) => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(error = %err, city = %selection.city, "dataset unreadable");
                    writeln!(self.output, "Could not read the {} dataset: {err}", selection.city)?;
                    Stage::AskRestart
                }
            },
            Stage::Enriching(selection, set) => match enrich(set) {
                Ok(enriched) => Stage::Filtering(selection, enriched),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        city = %selection.city,
                        "dataset has bad timestamps"
                    );
                    writeln!(self.output, "Could not read the {} dataset: {err}", selection.city)?;
                    Stage::AskRestart
                }
            },
            Stage::Filtering(selection, set) => {
                Stage::ComputingStats(filter_trips(set, selection.month, selection.day))
            }
            Stage::ComputingStats(set) => {
                let report = StatsReport::compute(&set);
                write!(self.output, "{}", format_report(&report))?;
                writeln!(self.output)?;
                Stage::ViewingRows(set)
            }
            Stage::ViewingRows(set) => {
                self.view_rows(&set)?;
                Stage::AskRestart
            }
            Stage::AskRestart => {
                if self.ask_yes("Would you like to explore the data again? Enter yes or no.")? {
                    Stage::CollectingFilters
                } else {
                    Stage::Done
                }
            }
            Stage::Done => Stage::Done,
        };
        Ok(next)
    }

    /// Prompts for city, month and day. `None` when input ends.
    fn collect_filters(&mut self) -> Result<Option<Selection>> {
        let vocabulary = self.vocabulary;
        let city_names = vocabulary
            .cities
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        let Some(city) = self.prompt_choice(
            &format!("Which city are you interested in? {city_names}?"),
            vocabulary.cities,
            &format!("Sorry, you can only get information about {city_names}. Try again"),
        )?
        else {
            return Ok(None);
        };
        let Some(month) = self.prompt_choice(
            "Which month are you interested in? January to June, or type all for all months",
            vocabulary.months,
            "Sorry, you can only get information from January to June. Try again",
        )?
        else {
            return Ok(None);
        };
        let Some(day) = self.prompt_choice(
            "Which day of the week are you interested in? Type all for all days",
            vocabulary.days,
            "Sorry, we only accept the full name of the day (for example: Monday). Try again",
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Selection { city, month, day }))
    }

    /// Shows the filtered rows a window at a time while the user keeps answering yes.
    fn view_rows(&mut self, set: &RecordSet<EnrichedTrip>) -> Result<()> {
        let mut pager = Pager::new(self.page_size);
        let question = format!(
            "Would you like to see {} rows of trip data? Enter yes or no.",
            self.page_size.max(1)
        );
        if !self.ask_yes(&question)? {
            return Ok(());
        }

        loop {
            let window = pager.window(set.records());
            if window.is_empty() {
                writeln!(self.output, "There is no data to show.")?;
                return Ok(());
            }
            write!(self.output, "{}", format_rows(set, window))?;

            if !self.ask_yes("Would you like to see the next rows? Enter yes or no.")? {
                return Ok(());
            }
            pager.advance();
        }
    }

    /// Re-prompts until the answer is one of `options`.
    fn prompt_choice<T: Choice>(
        &mut self,
        question: &str,
        options: &[T],
        hint: &str,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match choose(&answer, options) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => {
                    tracing::debug!(error = %err, "rejected selector");
                    writeln!(self.output, "{hint}")?;
                }
            }
        }
    }

    /// Whether the user answered "yes"; end of input counts as no.
    fn ask_yes(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .ask(question)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    /// Prints `question` and reads one line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read answer")?;
        if read == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
