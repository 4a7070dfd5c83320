use spinoff::{spinners, Color, Spinner};

/// Status line shown while the pipeline works; `None` when output is silenced
/// or the process has no terminal worth animating.
pub struct Reporter {
    spinner: Option<Spinner>,
}

impl Reporter {
    pub fn start(text: &str) -> Self {
        Self {
            spinner: Some(Spinner::new(spinners::Dots, text.to_string(), Color::Blue)),
        }
    }

    pub fn silent() -> Self {
        Self { spinner: None }
    }

    pub fn update<T: Into<String>>(&mut self, text: T) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.update_text(text.into());
        }
    }

    pub fn success(&mut self, text: &str) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.success(text);
        }
    }

    pub fn fail(&mut self, text: &str) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.fail(text);
        }
    }
}
