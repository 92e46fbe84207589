// crates/vidcat-cli/src/session.rs - Interactive menu loop
//
// STATE MACHINE:
// A single state, "awaiting choice". List, add, update and delete each run
// one store operation, render the outcome and come back to it. Exit (or the
// end of input) leaves the loop.
//
// ERROR HANDLING:
// - Unknown menu input: "Invalid choice", loop again
// - Position that is not a number, zero, or past the end: "Invalid index
//   selected", catalog untouched, loop again
// - Save failure: reported and logged, the store already rolled the catalog
//   back, loop again
// - Failure to read stdin or write stdout: propagated, the session ends

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};
use vidcat_core::{Catalog, CatalogError, CatalogStore, Position, Record};

use crate::menu::MenuChoice;
use crate::render;
use crate::stdin::prompt_line;

const INVALID_INDEX: &str = "Invalid index selected";
const INVALID_CHOICE: &str = "Invalid choice";

/// Whether the loop keeps going after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive run over a loaded catalog
///
/// Holds the store, a mutable borrow of the catalog and the two streams.
/// Nothing here is process-global, so tests drive it from byte buffers.
pub struct Session<'a, R, W> {
    store: &'a CatalogStore,
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a CatalogStore, catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            store,
            catalog,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        loop {
            render::menu(&mut self.output)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                debug!("Input closed, leaving session");
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "Menu choice");
                    self.dispatch(choice)?
                }
                Err(err) => {
                    warn!("{err}");
                    render::failure(&mut self.output, INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::List => {
                self.list()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Add => self.add(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => {
                render::farewell(&mut self.output)?;
                Ok(Flow::Quit)
            }
        }
    }

    fn list(&mut self) -> Result<()> {
        let entries = self.store.list(self.catalog);
        render::listing(&mut self.output, &entries)?;
        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(record) = self.prompt_record("Enter video name: ", "Enter video time: ")? else {
            return Ok(Flow::Quit);
        };

        match self.store.add(self.catalog, record) {
            Ok(_) => render::success(&mut self.output, "Video added successfully")?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(answer) = self.prompt("Enter the video number to update: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(position) = self.in_range(&answer)? else {
            return Ok(Flow::Continue);
        };

        let Some(record) =
            self.prompt_record("Enter the new video name: ", "Enter the new video time: ")?
        else {
            return Ok(Flow::Quit);
        };

        match self.store.update(self.catalog, position, record) {
            Ok(_) => render::success(&mut self.output, "Video updated successfully")?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(answer) = self.prompt("Enter the video number to be deleted: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(position) = self.in_range(&answer)? else {
            return Ok(Flow::Continue);
        };

        match self.store.delete(self.catalog, position) {
            Ok(removed) => render::success(
                &mut self.output,
                &format!("Video deleted successfully: {}", removed.name),
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    /// Parse a typed position and check it against the current catalog
    ///
    /// Renders the invalid-index message and returns `None` when unusable.
    fn in_range(&mut self, answer: &str) -> Result<Option<Position>> {
        match answer.parse::<Position>() {
            Ok(position) if self.catalog.get(position).is_some() => Ok(Some(position)),
            Ok(position) => {
                self.report(CatalogError::InvalidPosition {
                    position: position.get(),
                    len: self.catalog.len(),
                })?;
                Ok(None)
            }
            Err(err) => {
                warn!("{err}");
                render::failure(&mut self.output, INVALID_INDEX)?;
                Ok(None)
            }
        }
    }

    fn prompt_record(&mut self, name_prompt: &str, time_prompt: &str) -> Result<Option<Record>> {
        let Some(name) = self.prompt(name_prompt)? else {
            return Ok(None);
        };
        let Some(duration) = self.prompt(time_prompt)? else {
            return Ok(None);
        };
        Ok(Some(Record::new(name, duration)))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }

    /// Render a store failure; validation failures are expected input
    fn report(&mut self, err: CatalogError) -> Result<()> {
        if err.is_validation() {
            warn!("{err}");
            render::failure(&mut self.output, INVALID_INDEX)?;
        } else {
            error!("{err}");
            render::failure(&mut self.output, &format!("Failed to save catalog: {err}"))?;
        }
        Ok(())
    }
}
