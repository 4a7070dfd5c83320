use std::process;

use console::{style, Key, Term};
use rustyline::{error::ReadlineError, Editor};

use super::args::InterfaceArgs;

pub struct Interface {
    args: InterfaceArgs,
    rl: Editor<()>,
}

impl Interface {
    const PROMPT: &'static str = "> ";

    pub fn info<M: AsRef<str>>(&self, message: M) {
        if self.args.quiet < 1 {
            println!("{}", message.as_ref());
        }
    }

    pub fn error<M: AsRef<str>>(&self, message: M) {
        if self.args.quiet < 2 {
            eprintln!("{}", style(message.as_ref()).red());
        }
    }

    pub fn prompt<M: AsRef<str>>(&self, message: M) {
        if self.args.quiet < 3 {
            println!("{}", style(message.as_ref()).blue());
        }
    }

    pub fn bail<M: AsRef<str>>(&self, message: M) -> ! {
        self.error(message);
        process::exit(1);
    }

    pub fn banner(&self) {
        if self.args.quiet < 1 {
            println!(
                "{}",
                style("Discord Bot With NestJS CLI").magenta().bold()
            );
            println!("{}", style("Welcome! Let's start 🚀").cyan());
        }
    }

    pub fn read_line(&mut self, mut initial_value: Option<&str>) -> String {
        if self.args.defaults {
            if let Some(initial) = initial_value {
                return initial.to_string();
            }
        }

        loop {
            let rl = match initial_value.take() {
                Some(initial) => self.rl.readline_with_initial(Self::PROMPT, (initial, "")),
                None => self.rl.readline(Self::PROMPT),
            };

            match rl {
                Ok(line) => return line,
                Err(ReadlineError::Interrupted) => {
                    self.bail("CTRL-C");
                }
                Err(ReadlineError::Eof) => {
                    self.bail("CTRL-D");
                }
                Err(err) => {
                    self.error(format!("error reading line: {}", err));
                }
            }
        }
    }

    pub fn read_confirmation(&self) {
        if self.args.force {
            return;
        }

        match Term::stdout().read_key() {
            Ok(Key::Char('y')) | Ok(Key::Char('Y')) => (),
            Ok(_) => self.bail("Operation aborted"),
            Err(e) => self.bail(format!("error reading char: {}", e)),
        }
    }

    pub fn line_or_read(&mut self, initial_value: Option<&str>, line: Option<String>) -> String {
        if let Some(l) = line {
            return l;
        }

        self.read_line(initial_value)
    }
}

impl TryFrom<InterfaceArgs> for Interface {
    type Error = anyhow::Error;

    fn try_from(args: InterfaceArgs) -> anyhow::Result<Self> {
        let rl = Editor::new()?;

        Ok(Self { args, rl })
    }
}
