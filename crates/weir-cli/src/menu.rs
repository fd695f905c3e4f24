//! Token-driven menu loop over a list of squares.
//!
//! Input is consumed as whitespace-separated tokens, so a whole session can
//! be typed on one line or scripted from a file. Command map:
//!
//! | Key | Action | Sub-choices |
//! |-----|--------|-------------|
//! | 0 | quit | |
//! | 1 | add (reads 8 coordinates first) | 1 push front, 2 insert by index, 3 push back |
//! | 2 | delete | 1 erase by index, 2 erase by cursor walk, 3 pop front, 4 pop back |
//! | 3 | print every square with its center and area | |
//! | 4 | count squares with area below a threshold | |
//! | 5 | print the square at an index | |

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{debug, warn};
use weir_arena::PoolConfig;
use weir_list::{List, ListError};

use crate::error::CliError;
use crate::shape::Square;

const MENU: &str = "\
0 - Quit
1 - Add element (push front / insert by index / push back)
2 - Delete element (erase by index / erase by cursor / pop front / pop back)
3 - Print all elements
4 - Count squares with area below a threshold
5 - Print element by index";

/// One interactive session: an input stream, an output sink, and the list.
pub struct Session<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    list: List<Square>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session whose list draws nodes from a pool of `config`.
    ///
    /// Fails when the pool's arena cannot be reserved.
    pub fn new(input: R, output: W, config: PoolConfig) -> Result<Self, ListError> {
        Ok(Self {
            input,
            output,
            pending: VecDeque::new(),
            list: List::try_new(config)?,
        })
    }

    /// The list as the session left it.
    pub fn list(&self) -> &List<Square> {
        &self.list
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run commands until quit or end of input.
    ///
    /// Recoverable errors are written to the output and the loop goes on.
    /// Returns `Err` only when the underlying reader or writer fails.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            match self.step() {
                Ok(true) => continue,
                Ok(false) | Err(CliError::EndOfInput) => return Ok(()),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Execute one top-level command. `Ok(false)` means quit.
    fn step(&mut self) -> Result<bool, CliError> {
        let command = self.read_int()?;
        debug!(command, len = self.list.len(), "menu command");
        match command {
            0 => return Ok(false),
            1 => self.add()?,
            2 => self.delete()?,
            3 => self.print_all()?,
            4 => self.count_below()?,
            5 => self.print_at()?,
            other => return Err(CliError::UnknownCommand(other)),
        }
        Ok(true)
    }

    fn add(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Enter coordinates")?;
        let square = self.read_square()?;
        writeln!(self.output, "1 - Push front")?;
        writeln!(self.output, "2 - Insert by index")?;
        writeln!(self.output, "3 - Push back")?;
        match self.read_int()? {
            1 => self.list.push_front(square)?,
            2 => {
                let index = self.read_index()?;
                self.list.insert_at(index, square)?;
            }
            3 => self.list.push_back(square)?,
            other => return Err(CliError::UnknownCommand(other)),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "1 - Erase by index")?;
        writeln!(self.output, "2 - Erase by cursor")?;
        writeln!(self.output, "3 - Pop front")?;
        writeln!(self.output, "4 - Pop back")?;
        match self.read_int()? {
            1 => {
                let index = self.read_index()?;
                self.list.erase_at(index)?;
            }
            2 => {
                let steps = self.read_index()?;
                let cursor = self.list.cursor_at(steps)?;
                self.list.erase(cursor)?;
            }
            3 => {
                self.list.pop_front()?;
            }
            4 => {
                self.list.pop_back()?;
            }
            other => return Err(CliError::UnknownCommand(other)),
        }
        Ok(())
    }

    fn print_all(&mut self) -> Result<(), CliError> {
        for square in &self.list {
            write_square(&mut self.output, square)?;
        }
        Ok(())
    }

    fn count_below(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Enter required area")?;
        let limit = self.read_float()?;
        let count = self.list.iter().filter(|s| s.area() < limit).count();
        writeln!(
            self.output,
            "Number of squares with area less than {limit} equals {count}"
        )?;
        Ok(())
    }

    fn print_at(&mut self) -> Result<(), CliError> {
        let index = self.read_index()?;
        let square = *self.list.get(index)?;
        write_square(&mut self.output, &square)?;
        Ok(())
    }

    fn read_square(&mut self) -> Result<Square, CliError> {
        let mut text = String::new();
        for _ in 0..8 {
            text.push_str(&self.next_token()?);
            text.push(' ');
        }
        Ok(text.parse::<Square>()?)
    }

    fn read_index(&mut self) -> Result<usize, CliError> {
        writeln!(self.output, "Enter index")?;
        let index = self.read_int()?;
        usize::try_from(index).map_err(|_| CliError::NegativeIndex {
            index,
            len: self.list.len(),
        })
    }

    fn read_int(&mut self) -> Result<i64, CliError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| CliError::InvalidNumber { token })
    }

    fn read_float(&mut self) -> Result<f64, CliError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| CliError::InvalidNumber { token })
    }

    fn next_token(&mut self) -> Result<String, CliError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(CliError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn write_square<W: Write>(out: &mut W, square: &Square) -> Result<(), CliError> {
    writeln!(out, "{square}")?;
    writeln!(out, "Center: [{}]", square.center())?;
    writeln!(out, "Area: {}", square.area())?;
    Ok(())
}
