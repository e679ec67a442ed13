mod command;

pub use command::{MenuCommand, Selection, SelectionError};

use std::io::{self, BufRead, Write};

use crate::browser::{open_article, UrlOpener};
use crate::output::{format_open_outcome, format_results, format_search_error};
use crate::wikipedia::{SearchResponse, SearchResult, SearchService};

const MENU: &str = "1. Search for an article\n2. Exit";
const QUERY_PROMPT: &str = "Enter article title: ";
const INVALID_MENU_CHOICE: &str = "Invalid choice. Enter 1 or 2.";
const EMPTY_QUERY: &str = "Query must not be empty. Please try again.";
const NOTHING_FOUND: &str = "Nothing found for your query.";
const GOODBYE: &str = "Program finished.";

/// Where the loop currently is
#[derive(Debug)]
enum State {
    Menu,
    AwaitingQuery,
    ShowingResults(SearchResponse),
    AwaitingSelection(Vec<SearchResult>),
    Exit,
}

/// Display settings for a session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Article view endpoint used to build links
    pub page_url: String,
    pub use_colors: bool,
    /// Terminal width for snippet truncation; None means no truncation
    pub width: Option<usize>,
}

/// Menu-driven search loop over a line-oriented terminal.
///
/// Every search or browser failure is reported and control returns to the
/// menu; only I/O errors on the terminal itself end the loop early.
pub struct Session<'a, R, W> {
    input: R,
    out: W,
    search: &'a dyn SearchService,
    opener: &'a dyn UrlOpener,
    options: SessionOptions,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        out: W,
        search: &'a dyn SearchService,
        opener: &'a dyn UrlOpener,
        options: SessionOptions,
    ) -> Self {
        Self {
            input,
            out,
            search,
            opener,
            options,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::Menu;
        loop {
            state = match state {
                State::Menu => self.menu()?,
                State::AwaitingQuery => self.query()?,
                State::ShowingResults(response) => self.show_results(response)?,
                State::AwaitingSelection(results) => self.select(results)?,
                State::Exit => {
                    writeln!(self.out, "{}", GOODBYE)?;
                    self.out.flush()?;
                    return Ok(());
                }
            };
        }
    }

    /// Read one trimmed line; None at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        self.read_line()
    }

    fn menu(&mut self) -> io::Result<State> {
        writeln!(self.out, "{}", MENU)?;
        let Some(line) = self.prompt("> ")? else {
            return Ok(State::Exit);
        };

        Ok(match MenuCommand::parse(&line) {
            Some(MenuCommand::Search) => State::AwaitingQuery,
            Some(MenuCommand::Exit) => State::Exit,
            None => {
                writeln!(self.out, "{}", INVALID_MENU_CHOICE)?;
                State::Menu
            }
        })
    }

    fn query(&mut self) -> io::Result<State> {
        let Some(query) = self.prompt(QUERY_PROMPT)? else {
            return Ok(State::Exit);
        };

        if query.is_empty() {
            writeln!(self.out, "{}", EMPTY_QUERY)?;
            return Ok(State::Menu);
        }

        log::debug!("Searching for {:?}", query);
        match self.search.search(&query) {
            Ok(response) if response.is_empty() => {
                writeln!(self.out, "{}", NOTHING_FOUND)?;
                if let Some(suggestion) = &response.suggestion {
                    writeln!(self.out, "Did you mean: {}?", suggestion)?;
                }
                Ok(State::Menu)
            }
            Ok(response) => Ok(State::ShowingResults(response)),
            Err(e) => {
                log::debug!("Search failed: {:?}", e);
                writeln!(self.out, "{}", format_search_error(&e))?;
                Ok(State::Menu)
            }
        }
    }

    fn show_results(&mut self, response: SearchResponse) -> io::Result<State> {
        writeln!(self.out, "Search results:\n")?;
        writeln!(
            self.out,
            "{}",
            format_results(&response, self.options.use_colors, self.options.width)
        )?;
        Ok(State::AwaitingSelection(response.results))
    }

    fn select(&mut self, results: Vec<SearchResult>) -> io::Result<State> {
        let message = format!(
            "\nEnter article number to open (1-{}, 0 to go back): ",
            results.len()
        );
        let Some(line) = self.prompt(&message)? else {
            return Ok(State::Exit);
        };

        match Selection::parse(&line, results.len()) {
            Ok(Selection::Back) => Ok(State::Menu),
            Ok(Selection::Open(position)) => {
                let chosen = &results[position - 1];
                let (url, outcome) =
                    open_article(self.opener, &self.options.page_url, chosen.page_id);
                writeln!(self.out, "{}", format_open_outcome(&chosen.title, &url, &outcome))?;
                Ok(State::Menu)
            }
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(State::AwaitingSelection(results))
            }
        }
    }
}
