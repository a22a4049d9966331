/*!
Tools for building a context.

# Basic methods

The library has three basic methods for building a context:
- [atom](crate::context::Context::atom), to obtain the formula of a (named) atom.
- [set_conclusion](crate::context::Context::set_conclusion), to set the conclusion of a search.
- [add_premise](crate::context::Context::add_premise), to add a premise.

Norms are built from formulas, and formulas from atoms with the constructors of [Formula](crate::structures::formula::Formula).
Alternatively, formulas and norms may be [read from strings](crate::builder::parse), or a complete problem may be read.

# Problems

A problem is read line by line:
- Empty lines, and lines beginning with `#`, are ignored.
- A line `conclusion (…)` sets the conclusion, and a problem has exactly one conclusion.
- A line `premise (…)` adds a premise.

```rust
# use otter_norms::context::Context;
# use otter_norms::config::Config;
# use otter_norms::reports::Report;
let mut the_context = Context::from_config(Config::default());

let problem = "
## The worked example.
conclusion (Or(a, b), And(x, y))
premise (Or(a, b), x)
premise (a, y)
premise (b, y)
";

assert!(the_context.read_problem(problem.as_bytes()).is_ok());
assert_eq!(the_context.premises().len(), 3);
assert_eq!(the_context.search(), Ok(Report::Proved));
```
*/

pub mod parse;

use std::io::BufRead;

use crate::{
    context::Context,
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Reads a problem into the context.
    ///
    /// ```rust,ignore
    /// context.read_problem(BufReader::new(&file))?;
    /// ```
    pub fn read_problem(&mut self, mut reader: impl BufRead) -> Result<(), ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut conclusion_line = None;
        let mut premise_count = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(norm) = line.strip_prefix("conclusion") {
                if conclusion_line.is_some() {
                    return Err(ErrorKind::from(err::ParseError::DuplicateConclusion(
                        line_counter,
                    )));
                }
                let norm = parse::read_norm(&mut self.atom_db, norm, Some(line_counter))?;
                self.set_conclusion(norm);
                conclusion_line = Some(line_counter);
            } else if let Some(norm) = line.strip_prefix("premise") {
                let norm = parse::read_norm(&mut self.atom_db, norm, Some(line_counter))?;
                self.add_premise(norm);
                premise_count += 1;
            } else {
                return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
            }
        }

        match conclusion_line {
            Some(_) => {
                log::info!(target: targets::PARSE, "Read a conclusion and {premise_count} premises");
                Ok(())
            }
            None => Err(ErrorKind::from(err::ParseError::Empty)),
        }
    }
}
