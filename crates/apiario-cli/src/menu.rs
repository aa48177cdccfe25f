//! Interactive menu.
//!
//! The controller reads choices line by line from any [`BufRead`], runs them
//! against the open session and writes rendered markdown to any [`Write`].
//! Failed actions are reported and the loop continues; only an explicit exit,
//! end of input or a broken terminal ends it.

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use anyhow::Context;
use apiario_core::{
    ApiarioError, BarChart, CreateResult, Database, DeleteResult, Listing, OperationStatus,
    QueryResults, Record, ShareChart, TOP_SPECIES_LIMIT,
    params::{NewAnalysis, NewAnalyst, NewApiary, NewBeekeeper, NewDrum, NewSample, NewSpecies},
};
use jiff::civil::Date;
use log::{info, warn};
use thiserror::Error;

use crate::renderer::TerminalRenderer;

const MAIN_MENU: &str = "\
## Apiario

1. Run a custom query
2. View dashboards
3. Manage data
4. Exit
";

const DATA_MENU: &str = "\
## Manage Data

1. Add beekeeper
2. Add apiary
3. Add species
4. Add analyst
5. Add sample
6. Add analysis
7. Add drum
8. List beekeepers
9. Delete beekeeper
10. List apiaries of a beekeeper
11. Back
";

const BACK: &str = "back";

/// What the caller should do after a menu step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Failure of a single menu action.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Stdin was closed
    #[error("End of input")]
    EndOfInput,
    /// Reading stdin or writing stdout failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
    /// A typed answer could not be parsed
    #[error("'{value}' is not a valid {expected}")]
    InvalidInput {
        value: String,
        expected: &'static str,
    },
    #[error(transparent)]
    Database(#[from] ApiarioError),
}

type Result<T> = std::result::Result<T, MenuError>;

/// Menu controller bound to one session.
pub struct Menu<'a, R, W> {
    db: &'a mut Database,
    renderer: &'a TerminalRenderer,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(db: &'a mut Database, renderer: &'a TerminalRenderer, input: R, output: W) -> Self {
        Self {
            db,
            renderer,
            input,
            output,
        }
    }

    /// Shows the main menu until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Exiting on user request");
                    break;
                }
                Err(MenuError::EndOfInput) => {
                    info!("Input closed, exiting");
                    break;
                }
                Err(MenuError::Io(e)) => {
                    return Err(e).context("Failed to talk to the terminal");
                }
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    /// Shows the main menu once and dispatches the chosen option.
    pub fn step(&mut self) -> Result<Flow> {
        self.render(MAIN_MENU)?;
        let choice = self.ask("Select an option: ")?;
        match choice.as_str() {
            "1" => self.custom_query(),
            "2" => self.dashboards(),
            "3" => self.manage_data(),
            "4" => Ok(Flow::Exit),
            other => {
                warn!("Invalid menu option: {other}");
                self.status(OperationStatus::failure(format!(
                    "Invalid option '{other}'. Choose 1-4."
                )))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn custom_query(&mut self) -> Result<Flow> {
        loop {
            let sql = self.ask(&format!("SQL query ('{BACK}' to return): "))?;
            if sql.eq_ignore_ascii_case(BACK) {
                return Ok(Flow::Continue);
            }
            if sql.is_empty() {
                continue;
            }
            match self.db.execute_query(&sql, &[]) {
                Ok(rows) => self.render(&QueryResults(&rows).to_string())?,
                Err(e) => self.status(OperationStatus::failure(e.to_string()))?,
            }
        }
    }

    fn dashboards(&mut self) -> Result<Flow> {
        let hives = self.db.hive_summary()?;
        let species = self.db.top_species(TOP_SPECIES_LIMIT)?;
        let pending = self.db.pending_samples()?;

        let output = format!(
            "{}\n{}\n## Pending Samples\n\n{}",
            BarChart::hives(&hives),
            ShareChart::species(&species),
            Listing(&pending)
        );
        self.render(&output)?;
        Ok(Flow::Continue)
    }

    fn manage_data(&mut self) -> Result<Flow> {
        loop {
            self.render(DATA_MENU)?;
            let choice = self.ask("Select an option: ")?;
            let outcome = match choice.as_str() {
                "1" => self.add_beekeeper(),
                "2" => self.add_apiary(),
                "3" => self.add_species(),
                "4" => self.add_analyst(),
                "5" => self.add_sample(),
                "6" => self.add_analysis(),
                "7" => self.add_drum(),
                "8" => self.list_beekeepers(),
                "9" => self.delete_beekeeper(),
                "10" => self.list_beekeeper_apiaries(),
                "11" => return Ok(Flow::Continue),
                other => {
                    warn!("Invalid data menu option: {other}");
                    self.status(OperationStatus::failure(format!(
                        "Invalid option '{other}'. Choose 1-11."
                    )))
                }
            };
            match outcome {
                Ok(()) => {}
                Err(e @ (MenuError::EndOfInput | MenuError::Io(_))) => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn add_beekeeper(&mut self) -> Result<()> {
        let new = NewBeekeeper {
            first_name: self.ask_required("First name: ")?,
            last_name: self.ask_required("Last name: ")?,
        };
        let id = self.db.insert_beekeeper(&new)?;
        let stored = self.db.get_beekeeper(id)?;
        self.show_created(id, stored)
    }

    fn add_apiary(&mut self) -> Result<()> {
        let new = NewApiary {
            beekeeper_id: self.ask_parsed("Beekeeper ID: ", "beekeeper ID")?,
            name: self.ask_required("Apiary name: ")?,
            hive_count: self.ask_parsed("Number of hives: ", "hive count")?,
            locality: self.ask_required("Locality: ")?,
            latitude: self.ask_optional("Latitude (optional): ", "latitude")?,
            longitude: self.ask_optional("Longitude (optional): ", "longitude")?,
        };
        let id = self.db.insert_apiary(&new)?;
        let stored = self.db.get_apiary(id)?;
        self.show_created(id, stored)
    }

    fn add_species(&mut self) -> Result<()> {
        let new = NewSpecies {
            scientific_name: self.ask_required("Scientific name: ")?,
            common_name: self.ask_required("Common name: ")?,
            family: self.ask_required("Family: ")?,
        };
        let id = self.db.insert_species(&new)?;
        let stored = self.db.get_species(id)?;
        self.show_created(id, stored)
    }

    fn add_analyst(&mut self) -> Result<()> {
        let new = NewAnalyst {
            first_names: self.ask_required("First names: ")?,
            last_names: self.ask_required("Last names: ")?,
            contact: self.ask_optional("Contact (optional): ", "contact")?,
        };
        let id = self.db.insert_analyst(&new)?;
        let stored = self.db.get_analyst(id)?;
        self.show_created(id, stored)
    }

    fn add_sample(&mut self) -> Result<()> {
        let new = NewSample {
            analyst_id: self.ask_parsed("Analyst ID: ", "analyst ID")?,
            extracted_on: self.ask_parsed::<Date>("Extraction date (YYYY-MM-DD): ", "date")?,
            analyzed_on: self
                .ask_optional::<Date>("Analysis date (YYYY-MM-DD, empty if pending): ", "date")?,
            registration_number: self.ask_optional("Registration number (optional): ", "text")?,
            observations: self.ask_optional("Observations (optional): ", "text")?,
        };
        let id = self.db.insert_sample(&new)?;
        let stored = self.db.get_sample(id)?;
        self.show_created(id, stored)
    }

    fn add_analysis(&mut self) -> Result<()> {
        let new = NewAnalysis {
            sample_id: self.ask_parsed("Sample ID: ", "sample ID")?,
            species_id: self.ask_parsed("Species ID: ", "species ID")?,
            grain_count: self.ask_parsed("Grain count: ", "grain count")?,
            mark: self.ask_optional("Special mark (optional): ", "text")?,
            percentage: self.ask_optional("Percentage (optional): ", "percentage")?,
        };
        let key = self.db.insert_analysis(&new)?;
        let stored = self.db.get_analysis(key)?;
        self.show_created(key, stored)
    }

    fn add_drum(&mut self) -> Result<()> {
        let new = NewDrum {
            registration_number: self.ask_required("Registration number: ")?,
        };
        let id = self.db.insert_drum(&new)?;
        let stored = self.db.get_drum(id)?;
        self.show_created(id, stored)
    }

    fn list_beekeepers(&mut self) -> Result<()> {
        let beekeepers = self.db.list_beekeepers()?;
        self.render(&format!("## Beekeepers\n\n{}", Listing(&beekeepers)))
    }

    /// Shows the apiaries of one beekeeper with their total hive count.
    fn list_beekeeper_apiaries(&mut self) -> Result<()> {
        let id: i64 = self.ask_parsed("Beekeeper ID: ", "beekeeper ID")?;
        let Some(beekeeper) = self.db.get_beekeeper(id)? else {
            return self.status(OperationStatus::failure(format!(
                "Beekeeper with ID {id} not found"
            )));
        };

        let apiaries = self.db.list_apiaries_for_beekeeper(id)?;
        let hives: i64 = apiaries.iter().map(|a| a.hive_count).sum();
        self.render(&format!(
            "## Apiaries of {}

{}
**Total hives:** {hives}
",
            beekeeper.full_name(),
            Listing(&apiaries)
        ))
    }

    fn delete_beekeeper(&mut self) -> Result<()> {
        let id: i64 = self.ask_parsed("Beekeeper ID to delete: ", "beekeeper ID")?;
        let Some(beekeeper) = self.db.get_beekeeper(id)? else {
            return self.status(OperationStatus::failure(format!(
                "Beekeeper with ID {id} not found"
            )));
        };

        self.render(&beekeeper.to_string())?;
        if !self.confirm("Delete this beekeeper? [y/N] ")? {
            return self.status(OperationStatus::failure("Aborted."));
        }

        match self.db.delete_beekeeper(id) {
            Ok(()) => self.render(&DeleteResult::new(beekeeper).to_string()),
            Err(e) if e.is_constraint_violation() => {
                self.status(OperationStatus::failure(format!(
                    "Beekeeper {id} still has apiaries; remove them first."
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn show_created<T>(&mut self, id: impl fmt::Display, stored: Option<T>) -> Result<()>
    where
        T: Record + fmt::Display,
    {
        let record = stored.ok_or_else(|| ApiarioError::not_found(T::ENTITY, id))?;
        self.render(&CreateResult::new(record).to_string())
    }

    fn report(&mut self, err: &MenuError) -> Result<()> {
        self.status(OperationStatus::failure(err.to_string()))
    }

    fn status(&mut self, status: OperationStatus) -> Result<()> {
        self.render(&status.to_string())
    }

    fn render(&mut self, markdown: &str) -> Result<()> {
        self.renderer.render_to(&mut self.output, markdown)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompts and returns the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn ask_required(&mut self, prompt: &str) -> Result<String> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            return Err(MenuError::InvalidInput {
                value: answer,
                expected: "non-empty value",
            });
        }
        Ok(answer)
    }

    fn ask_parsed<T: FromStr>(&mut self, prompt: &str, expected: &'static str) -> Result<T> {
        let answer = self.ask(prompt)?;
        answer
            .parse()
            .map_err(|_| MenuError::InvalidInput {
                value: answer,
                expected,
            })
    }

    /// Like [`Menu::ask_parsed`], but an empty answer means "not given".
    fn ask_optional<T: FromStr>(
        &mut self,
        prompt: &str,
        expected: &'static str,
    ) -> Result<Option<T>> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            return Ok(None);
        }
        answer
            .parse()
            .map(Some)
            .map_err(|_| MenuError::InvalidInput {
                value: answer,
                expected,
            })
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
