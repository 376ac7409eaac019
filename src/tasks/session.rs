/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The eliminator: a line-driven session that applies row operations to a matrix.

use crate::FailResult;
use crate::config::ValidatedSettings;
use crate::io::format_matrix;

use matkit_kernel::{elim, Matrix, Number};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
commands (rows are numbered from 1):
  swap I J         exchange rows I and J
  scale I C        multiply row I by C
  combine I J C    add C times row I into row J
  reduce           replace the matrix with its row-echelon form
  print            show the matrix
  reset            restore the starting matrix
  help             show this message
  quit             end the session
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Swap(usize, usize),
    Scale(usize, Number),
    Combine(usize, usize, Number),
    Reduce,
    Print,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum CommandError {
    #[fail(display = "unknown command '{}' (try 'help')", _0)]
    Unknown(String),

    #[fail(display = "'{}' takes {} argument(s), got {}", command, expected, found)]
    Arity { command: &'static str, expected: usize, found: usize },

    #[fail(display = "bad argument '{}': {}", arg, message)]
    BadArg { arg: String, message: String },
}

fn parse_arg<T: FromStr>(arg: &str) -> Result<T, CommandError>
where T::Err: ::std::fmt::Display,
{
    arg.parse().map_err(|e: T::Err| CommandError::BadArg {
        arg: arg.to_string(),
        message: e.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Command, CommandError> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let (name, args) = match words.split_first() {
            Some((&name, args)) => (name, args),
            None => return Err(CommandError::Unknown(String::new())),
        };

        let (command, expected) = match name {
            "swap" => ("swap", 2),
            "scale" => ("scale", 2),
            "combine" => ("combine", 3),
            "reduce" => ("reduce", 0),
            "print" => ("print", 0),
            "reset" => ("reset", 0),
            "help" => ("help", 0),
            "quit" | "exit" => ("quit", 0),
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        if args.len() != expected {
            return Err(CommandError::Arity { command, expected, found: args.len() });
        }

        Ok(match command {
            "swap" => Command::Swap(parse_arg(args[0])?, parse_arg(args[1])?),
            "scale" => Command::Scale(parse_arg(args[0])?, parse_arg(args[1])?),
            "combine" => Command::Combine(parse_arg(args[0])?, parse_arg(args[1])?, parse_arg(args[2])?),
            "reduce" => Command::Reduce,
            "print" => Command::Print,
            "reset" => Command::Reset,
            "help" => Command::Help,
            _ => Command::Quit,
        })
    }
}

/// What the session should do after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The matrix may have changed.
    Modified,
    /// Nothing changed; there may be something to show.
    Unchanged,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    matrix: Matrix,
    initial: Matrix,
    settings: ValidatedSettings,
}

impl Session {
    pub fn new(matrix: Matrix, settings: ValidatedSettings) -> Session {
        Session { initial: matrix.clone(), matrix, settings }
    }

    pub fn matrix(&self) -> &Matrix { &self.matrix }

    /// Apply one command.  On failure the matrix is left as it was.
    pub fn execute(&mut self, command: &Command) -> matkit_kernel::Result<Outcome> {
        trace!("executing {:?}", command);
        match *command {
            Command::Swap(i, j) => elim::swap(&mut self.matrix, i, j)?,
            Command::Scale(i, c) => elim::scale(&mut self.matrix, i, c)?,
            Command::Combine(i, j, c) => elim::combine(&mut self.matrix, i, j, c)?,
            Command::Reduce => self.matrix = elim::reduce(&self.matrix)?,
            Command::Reset => self.matrix = self.initial.clone(),
            Command::Print | Command::Help => return Ok(Outcome::Unchanged),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Modified)
    }

    fn show<W: Write>(&self, out: &mut W) -> FailResult<()> {
        write!(out, "{}", format_matrix(&self.matrix, self.settings.display.style))?;
        Ok(())
    }

    /// Drive the session from a script (or stdin), one command per line.
    ///
    /// Bad commands are reported to `out` and skipped.
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> FailResult<()> {
        if self.settings.display.echo {
            self.show(&mut out)?;
        }

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let text = match line.find('#') {
                Some(start) => &line[..start],
                None => &line[..],
            }.trim();
            if text.is_empty() {
                continue;
            }

            let command = match text.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    debug!("line {}: {}", index + 1, e);
                    writeln!(out, "error: {}", e)?;
                    continue;
                },
            };

            match self.execute(&command) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Modified) => {
                    if self.settings.display.echo {
                        self.show(&mut out)?;
                    }
                },
                Ok(Outcome::Unchanged) => match command {
                    Command::Help => write!(out, "{}", HELP)?,
                    _ => self.show(&mut out)?,
                },
                Err(e) => {
                    debug!("line {}: {}", index + 1, e);
                    writeln!(out, "error: {}", e)?;
                },
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn quiet() -> ValidatedSettings {
        let mut settings = Settings::default();
        settings.display.echo = false;
        settings.validate().unwrap()
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = vec![];
        session.run_script(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("swap 1 2".parse(), Ok(Command::Swap(1, 2)));
        assert_eq!("  scale 2   1/2 ".parse(), Ok(Command::Scale(2, Number::Float(0.5))));
        assert_eq!("combine 1 3 -2".parse(), Ok(Command::Combine(1, 3, Number::Int(-2))));
        assert_eq!("exit".parse(), Ok(Command::Quit));
        assert_eq!("frobnicate".parse::<Command>(), Err(CommandError::Unknown("frobnicate".into())));
        assert_eq!(
            "swap 1".parse::<Command>(),
            Err(CommandError::Arity { command: "swap", expected: 2, found: 1 }),
        );
        match "swap 1 -2".parse::<Command>() {
            Err(CommandError::BadArg { ref arg, .. }) if arg == "-2" => {},
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn script_applies_row_ops() {
        let mut session = Session::new(matrix![[0, 2], [1, 1]], quiet());
        let out = run(&mut session, "
            # get a pivot in the first row
            swap 1 2
            combine 2 1 -1/2
            scale 2 1/2
        ");
        assert_eq!(out, "");
        assert_eq!(session.matrix(), &matrix![[1, 0], [0, 1]]);
    }

    #[test]
    fn errors_are_reported_and_skipped() {
        let mut session = Session::new(matrix![[1, 2], [3, 4]], quiet());
        let out = run(&mut session, "swap 1 1\nscale 3 2\nscale 1 0\nbogus\nswap 1 2\n");
        assert_eq!(out, "\
error: cannot exchange row 1 with itself
error: invalid row: 3. rows must be between 1 and 2
error: scalar must not equal 0
error: unknown command 'bogus' (try 'help')
");
        assert_eq!(session.matrix(), &matrix![[3, 4], [1, 2]]);
    }

    #[test]
    fn quit_stops_and_reset_restores() {
        let mut session = Session::new(matrix![[2, 4], [1, 3]], quiet());
        let out = run(&mut session, "reduce\nprint\nreset\nprint\nquit\nswap 1 2\n");
        assert_eq!(out, "1\t2\n0\t1\n2\t4\n1\t3\n");
        assert_eq!(session.matrix(), &matrix![[2, 4], [1, 3]]);
    }

    #[test]
    fn echo() {
        let settings = Settings::default().validate().unwrap();
        let mut session = Session::new(matrix![[1, 2]], settings);
        let out = run(&mut session, "scale 1 3\n");
        assert_eq!(out, "1\t2\n3\t6\n");
    }

    #[test]
    fn help() {
        let mut session = Session::new(matrix![[1]], quiet());
        assert_eq!(run(&mut session, "help"), HELP);
    }
}
