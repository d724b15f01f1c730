//! Line-oriented console transport.
//!
//! Renders screens as text and reads the player's answers one line at a
//! time. Buttons are chosen by number. For input forms each field is prompted
//! in order; an empty answer keeps the default.
//!
//! | Input           | Outcome                    |
//! |-----------------|----------------------------|
//! | `<n>`           | `Selected(n)`              |
//! | empty line      | `Closed` (button screens)  |
//! | `/close`        | `Closed` (any prompt)      |
//! | anything else   | `Invalid`                  |
//! | end of input    | player left                |

use std::{fmt::Write as _, io};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use waypoint_core::{Icon, ServerEntry};
use waypoint_menu::{FieldValue, FormField, Outcome, Screen, ScreenKind, Transport};

/// Typed at any prompt to dismiss the screen.
pub const CLOSE_COMMAND: &str = "/close";

/// Console session over any async line reader and writer.
pub struct ConsoleTransport<R, W> {
    reader: R,
    writer: W,
}

/// What one prompt produced.
enum Answer {
    Line(String),
    Close,
    Eof,
}

impl<R, W> ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Create a transport reading answers from `reader` and drawing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the transport, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    async fn prompt(&mut self, prompt: &str) -> io::Result<Answer> {
        self.write(prompt).await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(Answer::Eof);
        }
        let line = line.trim();
        if line == CLOSE_COMMAND {
            return Ok(Answer::Close);
        }
        Ok(Answer::Line(line.to_string()))
    }

    async fn choose(&mut self) -> io::Result<Option<Outcome>> {
        let outcome = match self.prompt("> ").await? {
            Answer::Eof => return Ok(None),
            Answer::Close => Outcome::Closed,
            Answer::Line(line) if line.is_empty() => Outcome::Closed,
            Answer::Line(line) => line.parse::<usize>().map_or(Outcome::Invalid, Outcome::Selected),
        };
        Ok(Some(outcome))
    }

    async fn fill(&mut self, fields: &[FormField]) -> io::Result<Option<Outcome>> {
        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            let value = match field {
                FormField::Label { text } => {
                    self.write(&format!("  {text}\n")).await?;
                    FieldValue::Empty
                },
                FormField::Input { label, placeholder, default } => {
                    let shown = if default.is_empty() { placeholder } else { default };
                    match self.prompt(&format!("  {label} [{shown}]: ")).await? {
                        Answer::Eof => return Ok(None),
                        Answer::Close => return Ok(Some(Outcome::Closed)),
                        Answer::Line(line) if line.is_empty() => FieldValue::Text(default.clone()),
                        Answer::Line(line) => FieldValue::Text(line),
                    }
                },
                FormField::Toggle { label, default } => {
                    let shown = if *default { "Y/n" } else { "y/N" };
                    match self.prompt(&format!("  {label} [{shown}]: ")).await? {
                        Answer::Eof => return Ok(None),
                        Answer::Close => return Ok(Some(Outcome::Closed)),
                        Answer::Line(line) => match parse_toggle(&line, *default) {
                            Some(on) => FieldValue::Toggle(on),
                            None => return Ok(Some(Outcome::Invalid)),
                        },
                    }
                },
            };
            values.push(value);
        }
        Ok(Some(Outcome::Submitted(values)))
    }
}

impl<R, W> Transport for ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    type Error = io::Error;

    async fn send_screen(&mut self, screen: Screen) -> Result<Option<Outcome>, Self::Error> {
        self.write(&render(&screen)).await?;
        match &screen.kind {
            ScreenKind::Simple { .. } | ScreenKind::Modal { .. } => self.choose().await,
            ScreenKind::Custom { fields } => self.fill(fields).await,
        }
    }

    async fn connect(&mut self, server: &ServerEntry) -> Result<(), Self::Error> {
        self.write(&format!("Connecting to {}:{} ...\n", server.address(), server.port())).await
    }

    async fn terminate(&mut self, reason: &str) -> Result<(), Self::Error> {
        self.write(&format!("Disconnected: {reason}\n")).await
    }
}

/// Text drawn before the screen's prompts.
pub fn render(screen: &Screen) -> String {
    let mut out = format!("\n== {} ==\n", screen.title);
    if let Some(body) = &screen.body {
        let _ = writeln!(out, "{body}");
    }
    match &screen.kind {
        ScreenKind::Simple { buttons } => {
            for (index, button) in buttons.iter().enumerate() {
                match &button.icon {
                    Some(Icon::Url(url)) => {
                        let _ = writeln!(out, "  [{index}] {} <{url}>", button.label);
                    },
                    Some(Icon::Path(_)) | None => {
                        let _ = writeln!(out, "  [{index}] {}", button.label);
                    },
                }
            }
        },
        ScreenKind::Modal { confirm, cancel } => {
            let _ = writeln!(out, "  [0] {confirm}\n  [1] {cancel}");
        },
        ScreenKind::Custom { .. } => {},
    }
    out
}

fn parse_toggle(answer: &str, default: bool) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "on" | "true" => Some(true),
        "n" | "no" | "off" | "false" => Some(false),
        _ => None,
    }
}
