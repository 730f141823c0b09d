//! Interactive preference form: prompts for each field on a line-based reader.
//!
//! Used when `-i/--interactive` is passed. Enter keeps the value shown in
//! brackets; enumerations accept a menu number or a name. `quit`/`exit` or EOF
//! at any prompt ends the session.

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use advisor::{InvestmentHorizon, PaymentMode, PreferenceForm, PropertyType};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Returns true if the line is a quit command (exit REPL).
pub fn is_quit_command(line: &str) -> bool {
    let t = line.trim();
    t.eq_ignore_ascii_case("quit") || t.eq_ignore_ascii_case("exit") || t == "/quit"
}

/// What a menu answer resolved to.
#[derive(Debug, PartialEq, Eq)]
enum Choice<T> {
    Keep,
    Pick(T),
    Invalid(String),
}

/// Resolves a menu answer: empty keeps, `1..=n` picks by position, otherwise `FromStr`.
fn parse_choice<T>(input: &str, options: &[T]) -> Choice<T>
where
    T: Copy + FromStr<Err = String>,
{
    let input = input.trim();
    if input.is_empty() {
        return Choice::Keep;
    }
    if let Ok(n) = input.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| options.get(i)) {
            Some(v) => Choice::Pick(*v),
            None => Choice::Invalid(format!("choose a number between 1 and {}", options.len())),
        };
    }
    match input.parse::<T>() {
        Ok(v) => Choice::Pick(v),
        Err(e) => Choice::Invalid(e),
    }
}

/// Line-based prompter over any async reader; prompts go to `out`.
pub struct FormPrompter<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> FormPrompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
        }
    }

    /// Prints `label` and reads one line; `None` on EOF or a quit command.
    async fn ask(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        match self.lines.next_line().await? {
            None => Ok(None),
            Some(line) if is_quit_command(&line) => Ok(None),
            Some(line) => Ok(Some(line)),
        }
    }

    /// Required free-text field; re-asks until non-empty unless a current value can be kept.
    async fn ask_text(&mut self, label: &str, current: &str) -> std::io::Result<Option<String>> {
        let prompt = if current.trim().is_empty() {
            label.to_string()
        } else {
            format!("{} [{}]", label, current)
        };
        loop {
            let Some(line) = self.ask(&prompt).await? else {
                return Ok(None);
            };
            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
            if !current.trim().is_empty() {
                return Ok(Some(current.to_string()));
            }
            writeln!(self.out, "{} is required.", label)?;
        }
    }

    /// Numbered menu over `options`; re-asks on invalid input.
    async fn ask_choice<T>(
        &mut self,
        label: &str,
        options: &[T],
        current: T,
    ) -> std::io::Result<Option<T>>
    where
        T: Copy + Display + FromStr<Err = String>,
    {
        for (i, opt) in options.iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, opt)?;
        }
        let prompt = format!("{} [{}]", label, current);
        loop {
            let Some(line) = self.ask(&prompt).await? else {
                return Ok(None);
            };
            match parse_choice(&line, options) {
                Choice::Keep => return Ok(Some(current)),
                Choice::Pick(v) => return Ok(Some(v)),
                Choice::Invalid(msg) => writeln!(self.out, "{}", msg)?,
            }
        }
    }

    /// Walks every field starting from `form`'s values. `None` when the user quits.
    pub async fn fill(
        &mut self,
        mut form: PreferenceForm,
    ) -> std::io::Result<Option<PreferenceForm>> {
        let budget = self
            .ask_text("Budget (PKR, e.g. 50 Lac, 2 Crore)", form.budget())
            .await?;
        let Some(budget) = budget else {
            return Ok(None);
        };
        form.set_budget(budget);

        let location = self
            .ask_text("Target location (e.g. DHA Lahore)", form.location())
            .await?;
        let Some(location) = location else {
            return Ok(None);
        };
        form.set_location(location);

        let current = form.property_type();
        let property_type = self
            .ask_choice("Property type", &PropertyType::ALL, current)
            .await?;
        let Some(property_type) = property_type else {
            return Ok(None);
        };
        form.set_property_type(property_type);

        let current = form.payment_mode();
        let payment_mode = self
            .ask_choice("Payment mode", &PaymentMode::ALL, current)
            .await?;
        let Some(payment_mode) = payment_mode else {
            return Ok(None);
        };
        form.set_payment_mode(payment_mode);

        let current = form.horizon();
        let horizon = self
            .ask_choice("Investment horizon", &InvestmentHorizon::ALL, current)
            .await?;
        let Some(horizon) = horizon else {
            return Ok(None);
        };
        form.set_horizon(horizon);

        Ok(Some(form))
    }
}
